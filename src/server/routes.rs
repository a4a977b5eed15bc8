//! Request handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

use crate::context;
use crate::generator::{self, GenerationError};
use crate::github::parse_github_url;
use crate::server::error::ApiError;
use crate::server::AppState;
use crate::stack::{self, Technology};

/// Inbound payload for `POST /api/generate`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub repo_url: Option<String>,
}

/// Successful response for `POST /api/generate`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    /// Generated README markdown
    pub readme: String,

    /// Detected technologies, in catalog order
    pub tech_stack: Vec<&'static Technology>,

    /// Languages as reported by the hosting API
    pub languages: Vec<String>,
}

/// Generates a README for the repository named in the request
///
/// A body that fails JSON extraction (malformed JSON, wrong or missing
/// `Content-Type`) is treated as an empty one, so the caller always gets the
/// missing-field 400 in the JSON error shape rather than a plain-text
/// rejection. Scraping and stack detection run concurrently; their combined
/// context is handed to the generator's model-fallback loop.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let body = payload
        .map(|Json(body)| body)
        .unwrap_or(GenerateRequest { repo_url: None });
    let repo_url = body.repo_url.as_deref().map(str::trim).unwrap_or_default();

    if repo_url.is_empty() {
        return Err(ApiError::bad_request(
            "Missing 'repoUrl' field in the request body.",
        ));
    }

    let repo = parse_github_url(repo_url).ok_or_else(|| {
        ApiError::bad_request("The provided URL does not look like a valid GitHub repository.")
    })?;

    info!(repo = %repo, "generating README");

    let (scrape, detected) = tokio::join!(
        context::scrape_repository(&state.github, &repo),
        stack::detect_project_stack(&state.github, &repo),
    );

    let summary = context::stack_summary(&detected);
    let full_context = context::merge_context(scrape, &summary);

    let gemini = state
        .gemini
        .as_ref()
        .ok_or(GenerationError::MissingApiKey)?;
    let models = generator::candidate_models(state.config.model_override.as_deref());

    let readme = generator::generate_readme(gemini, &models, &full_context).await?;

    Ok(Json(GenerateResponse {
        readme,
        tech_stack: detected.technologies,
        languages: detected.languages,
    }))
}

/// Liveness probe
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "name": crate::NAME,
        "version": crate::VERSION,
    }))
}
