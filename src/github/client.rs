//! HTTP client for the GitHub REST API and raw-content host
//!
//! Fetches the well-known manifest files through the contents API (base64
//! envelope), the per-language byte counts, and raw file contents from
//! `raw.githubusercontent.com`. Requests carry the v3 JSON `Accept` header, a
//! `User-Agent`, and an optional bearer token.
//!
//! Every operation here is a recoverable fetch: network errors, non-success
//! statuses, and malformed envelopes all resolve to `None` (or an empty list)
//! with a log line, never to an error the caller has to handle.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::{header, Client, RequestBuilder};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::github::url::RepoRef;

const API_BASE: &str = "https://api.github.com";
const RAW_BASE: &str = "https://raw.githubusercontent.com";
const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

fn user_agent() -> String {
    format!("{}/{}", crate::NAME, crate::VERSION)
}

/// Content envelope returned by `GET /repos/{owner}/{repo}/contents/{path}`
#[derive(Debug, Clone, Deserialize)]
struct ContentsEnvelope {
    /// File content, base64-encoded (may contain line breaks)
    content: Option<String>,

    /// Content encoding; the API reports "base64" for file reads
    encoding: Option<String>,
}

/// Client for GitHub reads with graceful degradation
///
/// Thread-safe; the underlying `reqwest::Client` pools connections and can be
/// shared across requests.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    /// Shared HTTP client with connection pooling
    http: Client,

    /// Optional API token for authenticated (higher rate limit) reads
    token: Option<String>,
}

impl GitHubClient {
    /// Creates a client with the given optional token and per-request timeout
    pub fn new(token: Option<String>, timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self { http, token }
    }

    fn api_get(&self, url: &str) -> RequestBuilder {
        let mut request = self
            .http
            .get(url)
            .header(header::ACCEPT, GITHUB_ACCEPT)
            .header(header::USER_AGENT, user_agent());

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        request
    }

    /// Fetches one file through the contents API and decodes its envelope
    ///
    /// Returns `None` on network failure, non-success status, missing or
    /// non-base64 envelope, or undecodable content.
    pub async fn fetch_file_content(&self, repo: &RepoRef, path: &str) -> Option<String> {
        let url = format!("{API_BASE}/repos/{}/{}/contents/{path}", repo.owner, repo.repo);

        let response = match self.api_get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(repo = %repo, path, error = %e, "contents fetch failed");
                return None;
            }
        };

        if !response.status().is_success() {
            debug!(repo = %repo, path, status = %response.status(), "contents fetch non-success");
            return None;
        }

        let envelope: ContentsEnvelope = match response.json().await {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!(repo = %repo, path, error = %e, "contents envelope parse failed");
                return None;
            }
        };

        decode_contents_envelope(&envelope)
    }

    /// Fetches the language byte-count map and returns its keys
    ///
    /// Keys keep the order of the API response. Returns an empty list on any
    /// failure.
    pub async fn fetch_languages(&self, repo: &RepoRef) -> Vec<String> {
        let url = format!("{API_BASE}/repos/{}/{}/languages", repo.owner, repo.repo);

        let response = match self.api_get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(repo = %repo, error = %e, "languages fetch failed");
                return Vec::new();
            }
        };

        if !response.status().is_success() {
            debug!(repo = %repo, status = %response.status(), "languages fetch non-success");
            return Vec::new();
        }

        let map: serde_json::Map<String, serde_json::Value> = match response.json().await {
            Ok(map) => map,
            Err(e) => {
                warn!(repo = %repo, error = %e, "languages response parse failed");
                return Vec::new();
            }
        };

        map.keys().cloned().collect()
    }

    /// Fetches a file directly from the raw-content host for one branch
    pub async fn fetch_raw(&self, repo: &RepoRef, branch: &str, path: &str) -> Option<String> {
        let url = format!("{RAW_BASE}/{}/{}/{branch}/{path}", repo.owner, repo.repo);

        let response = match self
            .http
            .get(&url)
            .header(header::USER_AGENT, user_agent())
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                debug!(repo = %repo, branch, path, error = %e, "raw fetch failed");
                return None;
            }
        };

        if !response.status().is_success() {
            debug!(repo = %repo, branch, path, status = %response.status(), "raw fetch non-success");
            return None;
        }

        response.text().await.ok()
    }
}

/// Decodes the base64 content envelope into UTF-8 text
///
/// The API wraps base64 content with line breaks, so whitespace is stripped
/// before decoding. Invalid UTF-8 sequences are replaced rather than treated
/// as failures.
fn decode_contents_envelope(envelope: &ContentsEnvelope) -> Option<String> {
    let content = envelope.content.as_deref()?;

    if envelope.encoding.as_deref().unwrap_or("base64") != "base64" {
        return None;
    }

    let compact: String = content.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = BASE64.decode(compact.as_bytes()).ok()?;

    Some(String::from_utf8_lossy(&bytes).into_owned())
}
