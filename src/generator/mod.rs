//! README generation with model fallback
//!
//! Sends the assembled repository context to the Gemini `generateContent`
//! endpoint, trying an ordered list of candidate models until one produces a
//! non-empty completion. Each attempt resolves to a [`CompletionAttempt`] and
//! the fallback loop sorts attempts into three exit classes: skip to the next
//! candidate (network failure, unknown model), fail the whole operation
//! (any other API error, empty completion), or succeed and stop.
//!
//! The HTTP specifics live in [`GeminiClient`]; the fallback protocol itself
//! is written against the [`CompletionBackend`] trait so it can be exercised
//! without a network.

pub mod prompt;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Default Gemini API base URL
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1";

/// Default candidate models, in descending preference order
///
/// Used when no `GEMINI_MODEL` override is configured. Older entries stay in
/// the list so keys scoped to deprecated model families keep working.
pub const DEFAULT_MODELS: &[&str] = &[
    "gemini-2.5-flash",
    "gemini-2.5-pro",
    "gemini-1.5-flash-latest",
    "gemini-1.5-pro-latest",
    "gemini-pro",
];

/// Resolves the candidate model list from an optional operator override
pub fn candidate_models(override_model: Option<&str>) -> Vec<String> {
    match override_model.map(str::trim) {
        Some(model) if !model.is_empty() => vec![model.to_string()],
        _ => DEFAULT_MODELS.iter().map(|model| model.to_string()).collect(),
    }
}

/// Errors that end a generation request
#[derive(Debug, Error)]
pub enum GenerationError {
    /// No API key configured; checked before any network call
    #[error("GEMINI_API_KEY is not configured in the environment")]
    MissingApiKey,

    /// The API rejected a request for a reason other than an unknown model
    #[error("Gemini request with model '{model}' failed: {status} {body}")]
    Api {
        model: String,
        status: u16,
        body: String,
    },

    /// The API answered successfully but produced no text
    #[error("Gemini returned no text content using model '{model}'")]
    EmptyCompletion { model: String },

    /// Every candidate model was tried without producing a completion
    #[error("no candidate Gemini model produced a completion (tried: {tried}); check which models your API key supports and set GEMINI_MODEL accordingly")]
    ModelsExhausted { tried: String },
}

/// Outcome of one completion attempt against a single model
#[derive(Debug, Clone)]
pub enum CompletionAttempt {
    /// Transport-level failure; the next candidate may still work
    NetworkError(String),

    /// HTTP 404: the endpoint does not serve this model
    ModelNotFound,

    /// Any other non-success status; not recoverable by switching models
    Failed { status: u16, body: String },

    /// Successful response with the extracted text (possibly empty)
    Text(String),
}

/// A completion endpoint that can be asked for text with a specific model
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Issues one completion request; never errors, always classifies
    async fn complete(&self, model: &str, prompt: &str) -> CompletionAttempt;
}

/// Generates a README by scanning the candidate models in order
///
/// Network failures and unknown models advance to the next candidate; any
/// other API failure or an empty completion fails immediately; the first
/// non-empty completion wins and no further candidate is tried. When the
/// list is exhausted the error names every model attempted.
pub async fn generate_readme(
    backend: &dyn CompletionBackend,
    models: &[String],
    context: &str,
) -> Result<String, GenerationError> {
    let prompt = prompt::build_readme_prompt(context);
    let mut tried: Vec<&str> = Vec::new();

    for model in models {
        tried.push(model.as_str());

        match backend.complete(model, &prompt).await {
            CompletionAttempt::NetworkError(message) => {
                warn!(model, %message, "network failure calling Gemini, trying next candidate");
            }
            CompletionAttempt::ModelNotFound => {
                debug!(model, "model not available, trying next candidate");
            }
            CompletionAttempt::Failed { status, body } => {
                return Err(GenerationError::Api {
                    model: model.clone(),
                    status,
                    body,
                });
            }
            CompletionAttempt::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Err(GenerationError::EmptyCompletion {
                        model: model.clone(),
                    });
                }

                info!(model, chars = text.len(), "README generated");
                return Ok(text.to_string());
            }
        }
    }

    Err(GenerationError::ModelsExhausted {
        tried: tried.join(", "),
    })
}

/// Request body for `models/{model}:generateContent`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

/// Success envelope from `models/{model}:generateContent`
#[derive(Debug, Clone, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateContentResponse {
    /// Extracts the generated text: first candidate's parts joined and trimmed
    fn text(&self) -> String {
        let parts = self
            .candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| content.parts.as_slice())
            .unwrap_or_default();

        parts
            .iter()
            .map(|part| part.text.as_deref().unwrap_or(""))
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string()
    }
}

/// HTTP client for the Gemini `generateContent` endpoint
///
/// Thread-safe; the underlying `reqwest::Client` pools connections. The API
/// key travels as a query parameter, matching the endpoint's contract.
pub struct GeminiClient {
    /// Shared HTTP client with connection pooling
    http: Client,

    /// API key, sent as the `key` query parameter
    api_key: String,

    /// API base URL; overridable for proxies
    base_url: String,
}

impl GeminiClient {
    /// Creates a client against the public Gemini endpoint
    pub fn new(api_key: String, timeout: Duration) -> Self {
        Self::with_base_url(api_key, GEMINI_API_BASE.to_string(), timeout)
    }

    /// Creates a client against a custom base URL
    pub fn with_base_url(api_key: String, base_url: String, timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            api_key,
            base_url,
        }
    }
}

impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // api_key deliberately omitted
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl CompletionBackend for GeminiClient {
    async fn complete(&self, model: &str, prompt: &str) -> CompletionAttempt {
        let url = format!("{}/models/{}:generateContent", self.base_url, model);

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
            generation_config: GenerationConfig { temperature: 0.7 },
        };

        debug!(model, prompt_chars = prompt.len(), "sending generation request");
        let started = Instant::now();

        let response = match self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return CompletionAttempt::NetworkError(e.to_string()),
        };

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return CompletionAttempt::ModelNotFound;
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(model, %status, "Gemini API returned an error");
            return CompletionAttempt::Failed {
                status: status.as_u16(),
                body,
            };
        }

        let envelope: GenerateContentResponse = match response.json().await {
            Ok(envelope) => envelope,
            Err(e) => {
                error!(model, error = %e, "failed to parse Gemini response");
                return CompletionAttempt::Failed {
                    status: status.as_u16(),
                    body: format!("invalid response body: {e}"),
                };
            }
        };

        info!(
            model,
            elapsed_secs = started.elapsed().as_secs_f64(),
            "Gemini generation completed"
        );

        CompletionAttempt::Text(envelope.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Backend returning a scripted sequence of attempts, recording the
    /// models it was asked for
    struct ScriptedBackend {
        attempts: Mutex<VecDeque<CompletionAttempt>>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedBackend {
        fn new(attempts: Vec<CompletionAttempt>) -> Self {
            Self {
                attempts: Mutex::new(attempts.into()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CompletionBackend for ScriptedBackend {
        async fn complete(&self, model: &str, _prompt: &str) -> CompletionAttempt {
            self.calls.lock().unwrap().push(model.to_string());
            self.attempts
                .lock()
                .unwrap()
                .pop_front()
                .expect("scripted backend called more times than scripted")
        }
    }

    fn models(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[tokio::test]
    async fn test_404_advances_to_next_candidate() {
        let backend = ScriptedBackend::new(vec![
            CompletionAttempt::ModelNotFound,
            CompletionAttempt::Text("# Generated".to_string()),
        ]);

        let result = generate_readme(&backend, &models(&["a", "b", "c"]), "ctx")
            .await
            .unwrap();

        assert_eq!(result, "# Generated");
        // c is never invoked once b succeeds
        assert_eq!(backend.calls(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_network_error_advances_to_next_candidate() {
        let backend = ScriptedBackend::new(vec![
            CompletionAttempt::NetworkError("connection refused".to_string()),
            CompletionAttempt::Text("ok".to_string()),
        ]);

        let result = generate_readme(&backend, &models(&["a", "b"]), "ctx")
            .await
            .unwrap();
        assert_eq!(result, "ok");
    }

    #[tokio::test]
    async fn test_server_error_fails_immediately() {
        let backend = ScriptedBackend::new(vec![CompletionAttempt::Failed {
            status: 500,
            body: "internal".to_string(),
        }]);

        let err = generate_readme(&backend, &models(&["a"]), "ctx")
            .await
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("500"), "message: {message}");
        assert!(message.contains("'a'"), "message: {message}");
        assert!(!message.contains("tried"), "message: {message}");
    }

    #[tokio::test]
    async fn test_server_error_stops_before_later_candidates() {
        let backend = ScriptedBackend::new(vec![CompletionAttempt::Failed {
            status: 403,
            body: "forbidden".to_string(),
        }]);

        let err = generate_readme(&backend, &models(&["a", "b", "c"]), "ctx")
            .await
            .unwrap_err();

        assert!(matches!(err, GenerationError::Api { status: 403, .. }));
        assert_eq!(backend.calls(), vec!["a"]);
    }

    #[tokio::test]
    async fn test_empty_completion_is_fatal() {
        let backend = ScriptedBackend::new(vec![CompletionAttempt::Text(String::new())]);

        let err = generate_readme(&backend, &models(&["a", "b"]), "ctx")
            .await
            .unwrap_err();

        assert!(matches!(err, GenerationError::EmptyCompletion { .. }));
        assert_eq!(backend.calls(), vec!["a"]);
    }

    #[tokio::test]
    async fn test_whitespace_only_completion_is_fatal() {
        let backend = ScriptedBackend::new(vec![CompletionAttempt::Text("  \n\t ".to_string())]);

        let err = generate_readme(&backend, &models(&["a"]), "ctx")
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::EmptyCompletion { .. }));
    }

    #[tokio::test]
    async fn test_exhausted_error_names_every_model() {
        let backend = ScriptedBackend::new(vec![
            CompletionAttempt::ModelNotFound,
            CompletionAttempt::NetworkError("timeout".to_string()),
            CompletionAttempt::ModelNotFound,
        ]);

        let err = generate_readme(&backend, &models(&["a", "b", "c"]), "ctx")
            .await
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("a, b, c"), "message: {message}");
    }

    #[tokio::test]
    async fn test_generated_text_is_trimmed() {
        let backend =
            ScriptedBackend::new(vec![CompletionAttempt::Text("\n# Title\n\n".to_string())]);

        let result = generate_readme(&backend, &models(&["a"]), "ctx")
            .await
            .unwrap();
        assert_eq!(result, "# Title");
    }

    #[test]
    fn test_candidate_models_default_list() {
        let list = candidate_models(None);
        assert_eq!(list.len(), DEFAULT_MODELS.len());
        assert_eq!(list[0], "gemini-2.5-flash");
    }

    #[test]
    fn test_candidate_models_override() {
        assert_eq!(candidate_models(Some("gemini-exp")), vec!["gemini-exp"]);
        assert_eq!(candidate_models(Some("  gemini-exp  ")), vec!["gemini-exp"]);
    }

    #[test]
    fn test_candidate_models_blank_override_falls_back() {
        assert_eq!(candidate_models(Some("   ")).len(), DEFAULT_MODELS.len());
    }

    #[test]
    fn test_request_serialization() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some("hello".to_string()),
                }],
            }],
            generation_config: GenerationConfig { temperature: 0.7 },
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"contents\""));
        assert!(json.contains("\"parts\""));
        assert!(json.contains("\"text\":\"hello\""));
        assert!(json.contains("\"generationConfig\""));
        assert!(json.contains("\"temperature\":0.7"));
    }

    #[test]
    fn test_response_text_extraction() {
        let json = r##"{
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "# Title" },
                        { "text": "Body" }
                    ]
                },
                "finishReason": "STOP"
            }]
        }"##;

        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text(), "# Title\nBody");
    }

    #[test]
    fn test_response_text_missing_pieces() {
        let empty: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.text(), "");

        let no_content: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": [{}]}"#).unwrap();
        assert_eq!(no_content.text(), "");

        let no_text: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": [{"content": {"parts": [{}]}}]}"#).unwrap();
        assert_eq!(no_text.text(), "");
    }

    #[test]
    fn test_gemini_client_debug_hides_key() {
        let client = GeminiClient::new("secret-key".to_string(), Duration::from_secs(5));
        let debug = format!("{client:?}");
        assert!(!debug.contains("secret-key"));
    }
}
