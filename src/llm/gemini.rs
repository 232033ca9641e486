//! Gemini generation client implementation (API key authentication).

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use super::{GenerationClient, GenerationResponse, UpstreamError};

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini API client using API key authentication.
#[derive(Clone)]
pub struct GeminiClient {
    api_key: String,
    model: String,
    client: Client,
}

impl GeminiClient {
    /// Create a new Gemini client with API key.
    pub fn new(api_key: &str, model: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            model: model.to_string(),
            client: Client::new(),
        }
    }

    fn build_url(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            GEMINI_API_URL, self.model, self.api_key
        )
    }

    fn parse_error(status: u16, body: &str) -> UpstreamError {
        // Google wraps failures as {"error": {"code", "message", "status"}}.
        // Fall back to the raw body when the envelope is absent.
        match serde_json::from_str::<GeminiErrorEnvelope>(body) {
            Ok(envelope) => UpstreamError {
                status: Some(status),
                message: envelope.error.message,
                details: envelope.error.status,
            },
            Err(_) => UpstreamError {
                status: Some(status),
                message: body.to_string(),
                details: None,
            },
        }
    }
}

#[async_trait]
impl GenerationClient for GeminiClient {
    async fn generate(
        &self,
        prompt: &str,
    ) -> std::result::Result<GenerationResponse, UpstreamError> {
        let request = json!({
            "contents": [{
                "parts": [{"text": prompt}]
            }]
        });

        let response = self
            .client
            .post(self.build_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| UpstreamError::network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| UpstreamError::network(e.to_string()))?;

        if !status.is_success() {
            return Err(Self::parse_error(status.as_u16(), &body));
        }

        // A 2xx body that does not parse is reported as a missing payload,
        // not an upstream error; the service surfaces it as empty/malformed.
        match serde_json::from_str::<GeminiResponse>(&body) {
            Ok(parsed) => Ok(GenerationResponse {
                text: parsed.first_text(),
            }),
            Err(e) => {
                tracing::debug!(err = %e, "unparseable success body from Gemini");
                Ok(GenerationResponse { text: None })
            }
        }
    }

    fn model(&self) -> &str {
        &self.model
    }
}

// Gemini API response types
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GeminiResponse {
    fn first_text(&self) -> Option<String> {
        self.candidates
            .first()?
            .content
            .parts
            .iter()
            .find_map(|part| part.text.clone())
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

#[derive(Debug, Default, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorEnvelope {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    #[serde(default)]
    message: String,
    status: Option<String>,
}
