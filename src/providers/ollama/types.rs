use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::Message;
use super::OllamaOptions;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub stream: bool,
    #[serde(flatten)]
    pub options: OllamaOptions,
}

impl ChatRequest {
    /// Single-turn, non-streaming request carrying only `message`.
    pub fn single(model: impl Into<String>, message: Message, options: OllamaOptions) -> Self {
        Self {
            model: model.into(),
            messages: vec![message],
            stream: false,
            options,
        }
    }
}

/// Reply from `/api/chat`. Durations are nanoseconds.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ChatResponse {
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub message: Message,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub total_duration: i64,
    #[serde(default)]
    pub load_duration: i64,
    #[serde(default)]
    pub prompt_eval_count: i64,
    #[serde(default)]
    pub prompt_eval_duration: i64,
    #[serde(default)]
    pub eval_count: i64,
    #[serde(default)]
    pub eval_duration: i64,
}

impl ChatResponse {
    pub fn content(&self) -> &str {
        &self.message.content
    }

    pub fn tokens_per_second(&self) -> Option<f64> {
        if self.eval_duration <= 0 {
            return None;
        }
        Some(self.eval_count as f64 / (self.eval_duration as f64 / 1_000_000_000.0))
    }
}
