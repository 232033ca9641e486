//! Configuration management
//!
//! All settings come from the environment (a `.env` file is honored when
//! present). The only required variable is `GEMINI_API_KEY`; everything else
//! has a sensible default.

use crate::error::Error;
use crate::Result;

/// Main configuration structure
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP server binds to
    pub port: u16,

    /// Gemini API key
    pub gemini_api_key: String,

    /// Model to use
    pub model: String,

    /// Inbound requests allowed per client IP per minute
    pub rate_limit_per_minute: u32,
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_RATE_LIMIT: u32 = 15;

/// Load configuration from the environment.
///
/// Fails with [`Error::Config`] when `GEMINI_API_KEY` is missing or a
/// numeric variable does not parse.
pub fn from_env() -> Result<Config> {
    // Best-effort .env load; a missing file is not an error.
    dotenvy::dotenv().ok();

    let gemini_api_key = std::env::var("GEMINI_API_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| Error::Config("Missing environment variable: GEMINI_API_KEY".to_string()))?;

    let port = match std::env::var("PORT") {
        Ok(raw) => raw
            .parse::<u16>()
            .map_err(|_| Error::Config(format!("Invalid PORT value: {raw}")))?,
        Err(_) => DEFAULT_PORT,
    };

    let rate_limit_per_minute = match std::env::var("RATE_LIMIT_PER_MINUTE") {
        Ok(raw) => raw
            .parse::<u32>()
            .map_err(|_| Error::Config(format!("Invalid RATE_LIMIT_PER_MINUTE value: {raw}")))?,
        Err(_) => DEFAULT_RATE_LIMIT,
    };

    let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| default_model());

    Ok(Config {
        port,
        gemini_api_key,
        model,
        rate_limit_per_minute,
    })
}
