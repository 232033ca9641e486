//! Error types for Promptgate

use thiserror::Error;

use crate::llm::UpstreamError;

/// Result type alias for Promptgate operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Promptgate
///
/// Every variant is request-scoped; none of them is treated as fatal for the
/// process. Display messages are safe to surface to HTTP clients.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Rate limit exceeded. Please try again in a few moments.")]
    RateLimited,

    #[error("Invalid API key. Please check your configuration.")]
    Unauthorized,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Failed to get response from Gemini: {0}")]
    Upstream(String),

    #[error("Empty or malformed response from Gemini")]
    EmptyResponse,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<UpstreamError> for Error {
    /// Classify a raw upstream failure into the stable error taxonomy.
    ///
    /// Callers above the invoker never see raw upstream error shapes.
    fn from(err: UpstreamError) -> Self {
        match err.status {
            Some(429) => Error::RateLimited,
            Some(401) | Some(403) => Error::Unauthorized,
            Some(400) => {
                let message = if err.message.is_empty() {
                    "Invalid input".to_string()
                } else {
                    err.message
                };
                Error::BadRequest(message)
            }
            _ => Error::Upstream(err.message),
        }
    }
}
