//! Generation client abstraction layer.
//!
//! This module provides:
//! - [`GenerationClient`] trait for the upstream text-generation seam
//! - [`UpstreamError`], the raw failure shape before classification
//! - Concrete implementation: [`GeminiClient`] (API key auth)

use async_trait::async_trait;

pub mod gemini;

pub use gemini::GeminiClient;

/// Raw payload from a successful upstream call.
///
/// `text` is whatever the provider returned, unvalidated; the service layer
/// rejects blank or missing payloads as an empty-response failure.
#[derive(Debug, Clone, Default)]
pub struct GenerationResponse {
    pub text: Option<String>,
}

/// Raw upstream failure, before classification into the error taxonomy.
#[derive(Debug, Clone)]
pub struct UpstreamError {
    /// HTTP status reported by the provider, if the request got that far.
    pub status: Option<u16>,
    pub message: String,
    pub details: Option<String>,
}

impl UpstreamError {
    /// A failure below the HTTP layer (DNS, connect, body read).
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
            details: None,
        }
    }

    /// Whether this failure signals a retryable rate-limit condition.
    pub fn is_rate_limit(&self) -> bool {
        self.status == Some(429)
    }
}

/// Upstream generation client - the single seam to the external API.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Send one combined prompt and return the raw response payload.
    async fn generate(&self, prompt: &str)
        -> std::result::Result<GenerationResponse, UpstreamError>;

    /// Model identifier this client targets.
    fn model(&self) -> &str;
}
