//! Gemini service - the resilient invocation pipeline.
//!
//! Ties the pieces together for one request: tool dispatch, optional prior
//! context, the retry-wrapped upstream call, and payload validation.

use std::sync::Arc;
use std::time::Duration;

use crate::error::Error;
use crate::llm::{GenerationClient, GenerationResponse, UpstreamError};
use crate::persona::Persona;
use crate::tools::{Tool, ToolOptions};
use crate::Result;

/// Bounded exponential-backoff retry policy.
///
/// The delay before retry attempt `i` (0-indexed) is `initial_delay * 2^i`;
/// there is no delay after the final attempt.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_delay: Duration,
}

impl RetryPolicy {
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.initial_delay * 2u32.saturating_pow(attempt)
    }
}

impl Default for RetryPolicy {
    /// Delay sequence 1s, 2s across three total attempts.
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(1000),
        }
    }
}

/// Service holding the upstream client handle and retry constants.
///
/// Constructed once at startup and shared by reference with every request
/// handler; the client is injected so tests can substitute a scripted one.
pub struct GeminiService {
    client: Arc<dyn GenerationClient>,
    policy: RetryPolicy,
    persona: Persona,
}

impl GeminiService {
    pub fn new(client: Arc<dyn GenerationClient>, policy: RetryPolicy, persona: Persona) -> Self {
        Self {
            client,
            policy,
            persona,
        }
    }

    /// Handle to the shared system persona.
    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    /// Run one message through the full pipeline: apply the tool, prepend
    /// prior context, call Gemini with backoff, validate the payload.
    pub async fn generate_response(
        &self,
        message: &str,
        context: Option<&str>,
        tool: Option<&str>,
        options: &ToolOptions,
    ) -> Result<String> {
        let tool = Tool::parse(tool);
        let transformed = tool.apply(message, options, &self.persona);

        let full_prompt = match context {
            Some(prior) if !prior.is_empty() => format!("{prior}\n{transformed}"),
            _ => transformed,
        };

        let response = self.call_with_backoff(&full_prompt).await.map_err(|err| {
            tracing::error!(
                message = %err.message,
                status = ?err.status,
                details = ?err.details,
                "Gemini API error"
            );
            Error::from(err)
        })?;

        match response.text.filter(|text| !text.trim().is_empty()) {
            Some(text) => {
                tracing::info!(tool = ?tool, model = self.client.model(), "Gemini request succeeded");
                Ok(text)
            }
            None => {
                tracing::error!(tool = ?tool, "Gemini returned an empty or malformed payload");
                Err(Error::EmptyResponse)
            }
        }
    }

    /// Invoke the client, retrying sequentially on 429 until the policy is
    /// exhausted. Any other failure propagates after the first attempt.
    async fn call_with_backoff(
        &self,
        prompt: &str,
    ) -> std::result::Result<GenerationResponse, UpstreamError> {
        let mut attempt = 0;
        loop {
            match self.client.generate(prompt).await {
                Ok(response) => return Ok(response),
                Err(err) => {
                    let is_last = attempt + 1 >= self.policy.max_attempts;
                    if is_last || !err.is_rate_limit() {
                        return Err(err);
                    }

                    let delay = self.policy.delay_for(attempt);
                    tracing::warn!(
                        delay_ms = delay.as_millis() as u64,
                        attempt = attempt + 1,
                        max_attempts = self.policy.max_attempts,
                        "rate limit hit (429), backing off"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}
