//! HTTP layer - thin plumbing around the service.
//!
//! Routes, CORS, inbound rate limiting, and the mapping from the error
//! taxonomy to HTTP statuses. All nontrivial logic lives in [`service`].
//!
//! [`service`]: crate::service

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use axum::extract::{ConnectInfo, Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post, put};
use axum::Router;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::CorsLayer;

use crate::config::Config;
use crate::error::Error;
use crate::service::GeminiService;
use crate::tools::ToolOptions;
use crate::Result;

/// State shared across all routes.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<GeminiService>,
    pub limiter: Arc<RateLimiter>,
}

/// Fixed-window inbound rate limiter, counted per client IP.
pub struct RateLimiter {
    max_per_window: u32,
    window: Duration,
    hits: Mutex<HashMap<IpAddr, (Instant, u32)>>,
}

impl RateLimiter {
    pub fn new(max_per_window: u32, window: Duration) -> Self {
        Self {
            max_per_window,
            window,
            hits: Mutex::new(HashMap::new()),
        }
    }

    pub fn allow(&self, ip: IpAddr) -> bool {
        self.allow_at(ip, Instant::now())
    }

    fn allow_at(&self, ip: IpAddr, now: Instant) -> bool {
        let mut hits = self.hits.lock().unwrap_or_else(PoisonError::into_inner);
        let entry = hits.entry(ip).or_insert((now, 0));
        if now.duration_since(entry.0) >= self.window {
            *entry = (now, 0);
        }
        entry.1 += 1;
        entry.1 <= self.max_per_window
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub context: Option<String>,
    pub tool: Option<String>,
    pub tone: Option<String>,
    #[serde(default)]
    pub options: ToolOptions,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct PersonaRequest {
    pub context: String,
}

/// Error shape returned to HTTP clients.
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.to_string(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let status = match err {
            Error::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::Unauthorized | Error::Upstream(_) | Error::EmptyResponse => {
                StatusCode::BAD_GATEWAY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(json!({"success": false, "error": self.message})),
        )
            .into_response()
    }
}

/// Build the application router with rate limiting and CORS applied.
pub fn build(service: Arc<GeminiService>, config: &Config) -> Router {
    let state = AppState {
        service,
        limiter: Arc::new(RateLimiter::new(
            config.rate_limit_per_minute,
            Duration::from_secs(60),
        )),
    };

    Router::new()
        .route("/health", get(health))
        .route("/chat", post(handle_chat))
        .route("/persona", put(set_persona))
        .layer(middleware::from_fn_with_state(state.clone(), rate_limit))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: &Config, service: Arc<GeminiService>) -> Result<()> {
    let app = build(service, config);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::Config(format!("failed to bind {addr}: {e}")))?;

    tracing::info!(port = config.port, "server listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

async fn rate_limit(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Response {
    if !state.limiter.allow(addr.ip()) {
        tracing::warn!(ip = %addr.ip(), "inbound rate limit exceeded");
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({"success": false, "error": "Too many requests, slow down."})),
        )
            .into_response();
    }
    next.run(request).await
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({"success": true, "message": "Server healthy"}))
}

async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> std::result::Result<Json<ChatResponse>, ApiError> {
    if request.message.trim().is_empty() {
        return Err(ApiError::bad_request("Message is required"));
    }

    tracing::info!(
        tool = request.tool.as_deref().unwrap_or("none"),
        "incoming chat message"
    );

    // A top-level `tone` field wins over the one inside the options bag.
    let mut options = request.options;
    if request.tone.is_some() {
        options.tone = request.tone;
    }

    let response = state
        .service
        .generate_response(
            &request.message,
            request.context.as_deref(),
            request.tool.as_deref(),
            &options,
        )
        .await?;

    Ok(Json(ChatResponse {
        success: true,
        response,
        timestamp: Utc::now(),
    }))
}

async fn set_persona(
    State(state): State<AppState>,
    Json(request): Json<PersonaRequest>,
) -> std::result::Result<Json<serde_json::Value>, ApiError> {
    if request.context.trim().is_empty() {
        return Err(ApiError::bad_request("Persona context is required"));
    }

    state.service.persona().set(request.context);
    tracing::info!("system persona replaced");

    Ok(Json(json!({"success": true, "message": "Persona updated"})))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limiter_blocks_after_window_budget() {
        let limiter = RateLimiter::new(2, Duration::from_secs(60));
        let ip: IpAddr = "10.0.0.1".parse().unwrap();
        let start = Instant::now();

        assert!(limiter.allow_at(ip, start));
        assert!(limiter.allow_at(ip, start));
        assert!(!limiter.allow_at(ip, start));

        // A fresh window resets the count.
        assert!(limiter.allow_at(ip, start + Duration::from_secs(61)));
    }

    #[test]
    fn test_rate_limiter_tracks_ips_independently() {
        let limiter = RateLimiter::new(1, Duration::from_secs(60));
        let now = Instant::now();

        assert!(limiter.allow_at("10.0.0.1".parse().unwrap(), now));
        assert!(limiter.allow_at("10.0.0.2".parse().unwrap(), now));
        assert!(!limiter.allow_at("10.0.0.1".parse().unwrap(), now));
    }

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(
            ApiError::from(Error::RateLimited).status,
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            ApiError::from(Error::BadRequest("x".into())).status,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(Error::EmptyResponse).status,
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::from(Error::Unauthorized).status,
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::from(Error::Config("x".into())).status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_chat_request_deserializes_options_bag() {
        let request: ChatRequest = serde_json::from_str(
            r#"{
                "message": "hi",
                "tool": "tone",
                "tone": "diplomatic",
                "options": {"intensity": "strong"}
            }"#,
        )
        .unwrap();

        assert_eq!(request.tool.as_deref(), Some("tone"));
        assert_eq!(request.tone.as_deref(), Some("diplomatic"));
        assert_eq!(request.options.intensity.as_deref(), Some("strong"));
    }
}
