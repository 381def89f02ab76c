use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("failed to send request: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("error response from server: {status} - {body}")]
    Server { status: StatusCode, body: String },
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
