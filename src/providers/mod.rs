pub mod ollama;

pub use ollama::{OllamaClient, OllamaOptions, ChatRequest, ChatResponse};
