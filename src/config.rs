use std::path::PathBuf;

use crate::providers::OllamaOptions;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "llama3.2-vision";
pub const CONVERSATION_FILE: &str = "conversation.txt";
pub const EXIT_KEYWORD: &str = "exit";

/// Everything a chat session needs, passed in rather than read from globals.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub endpoint: String,
    pub model: String,
    pub options: OllamaOptions,
    pub transcript_path: PathBuf,
    pub show_progress: bool,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            options: OllamaOptions::default()
                .with_gpu_layers(50)
                .with_threads(8)
                .with_temperature(0.7)
                .with_top_p(0.9),
            transcript_path: PathBuf::from(CONVERSATION_FILE),
            show_progress: true,
        }
    }
}
