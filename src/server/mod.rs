//! HTTP API surface
//!
//! Axum server exposing the single generation endpoint plus a liveness
//! probe:
//!
//!   POST /api/generate
//!   GET  /api/health
//!
//! CORS is permissive: the caller is a browser-based UI served from a
//! different origin, and the API holds no server-side session state.

pub mod error;
pub mod routes;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::config::AppConfig;
use crate::generator::GeminiClient;
use crate::github::GitHubClient;

/// Shared, read-only per-process state
///
/// Both clients pool connections and are shared across requests; all
/// per-request data stays on the handler's stack.
pub struct AppState {
    /// Service configuration
    pub config: AppConfig,

    /// GitHub API / raw-content client
    pub github: GitHubClient,

    /// Gemini client; `None` when no API key is configured
    pub gemini: Option<GeminiClient>,
}

impl AppState {
    /// Builds the state, constructing clients from the configuration
    pub fn from_config(config: AppConfig) -> Self {
        let github = GitHubClient::new(config.github_token.clone(), config.request_timeout());
        let gemini = config
            .gemini_api_key
            .clone()
            .map(|key| GeminiClient::new(key, config.generation_timeout()));

        Self {
            config,
            github,
            gemini,
        }
    }
}

/// Builds the API router
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(routes::health))
        .route("/api/generate", post(routes::generate))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds and serves the API until the process exits
pub async fn start_server(state: Arc<AppState>, port: u16) -> Result<()> {
    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    let router = build_router(state);

    info!("readmegen API listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
