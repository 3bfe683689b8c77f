#[derive(Debug, thiserror::Error)]
pub enum NudgeError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid server response: {0}")]
    InvalidResponse(String),

    #[error("Server error: {method} {url} returned {status} (expected {expected})")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
        expected: u16,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Background task failed: {0}")]
    Task(String),
}

pub type Result<T> = std::result::Result<T, NudgeError>;
