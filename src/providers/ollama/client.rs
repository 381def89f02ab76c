use log::{debug, trace, warn};
use reqwest::{Client, StatusCode};

use crate::core::{ChatError, Message};
use super::{ChatRequest, ChatResponse, OllamaOptions};

pub struct OllamaClient {
    client: Client,
    pub endpoint: String,
    pub model: String,
    pub options: OllamaOptions,
}

impl OllamaClient {
    pub fn new(endpoint: String, model: String) -> Self {
        Self::with_options(endpoint, model, OllamaOptions::default())
    }

    pub fn with_options(endpoint: String, model: String, options: OllamaOptions) -> Self {
        // The server is local; system proxy settings would only get in the way.
        let client = Client::builder()
            .no_proxy()
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            endpoint,
            model,
            options,
        }
    }

    pub fn chat_url(&self) -> String {
        format!("{}/api/chat", self.endpoint.trim_end_matches('/'))
    }

    /// Builds the request this client would send for a single user message.
    pub fn request_for(&self, content: &str) -> ChatRequest {
        ChatRequest::single(self.model.clone(), Message::user(content), self.options)
    }

    pub async fn chat(&self, content: &str) -> Result<ChatResponse, ChatError> {
        let request = self.request_for(content);
        self.send(&request).await
    }

    /// POSTs `request` to `/api/chat` and buffers the whole reply.
    pub async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError> {
        if log::log_enabled!(log::Level::Trace) {
            trace!("POST {}: {}", self.chat_url(), serde_json::to_string(request)?);
        }

        let response = self
            .client
            .post(self.chat_url())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::Server { status, body });
        }

        let body = response.text().await?;
        let chat_response: ChatResponse = serde_json::from_str(&body)?;

        if !chat_response.done {
            warn!("server reply for model {} is not marked done", chat_response.model);
        }
        match chat_response.tokens_per_second() {
            Some(rate) => debug!(
                "{} generated {} tokens ({:.1} tok/s)",
                chat_response.model, chat_response.eval_count, rate
            ),
            None => debug!("{} replied without eval telemetry", chat_response.model),
        }

        Ok(chat_response)
    }
}
