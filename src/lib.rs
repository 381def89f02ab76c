pub mod core;
pub mod providers;
pub mod progress;
pub mod transcript;
pub mod config;
pub mod session;

// Re-export core types
pub use crate::core::{Message, Role, ChatError};
pub use providers::{OllamaClient, OllamaOptions, ChatRequest, ChatResponse};
pub use progress::Spinner;
pub use transcript::Transcript;
pub use config::ChatConfig;

// Main interface
pub use session::ChatSession;
