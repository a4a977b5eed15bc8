//! Configuration management
//!
//! Loads settings from environment variables with sensible defaults.
//!
//! # Environment Variables
//!
//! ## Credentials and model selection
//! - `GITHUB_TOKEN`: GitHub API token (optional; raises the rate limit and
//!   allows token-accessible private repositories)
//! - `GEMINI_API_KEY`: Gemini API key, required for generation; its absence
//!   fails generation requests, not startup
//! - `GEMINI_MODEL`: single model override; when unset, the default fallback
//!   list is used
//!
//! ## Service configuration
//! - `READMEGEN_PORT`: HTTP listen port - default: "8080"
//! - `READMEGEN_REQUEST_TIMEOUT`: GitHub fetch timeout in seconds - default: "30"
//! - `READMEGEN_GENERATION_TIMEOUT`: Gemini request timeout in seconds - default: "120"
//! - `READMEGEN_LOG_LEVEL`: Logging level - default: "info"

use std::env;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 120;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Service configuration
///
/// Constructed via `Default::default()`, which reads the environment with
/// fallback defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Optional GitHub API token
    pub github_token: Option<String>,

    /// Gemini API key; `None` fails generation requests with a 500
    pub gemini_api_key: Option<String>,

    /// Optional single-model override for the fallback list
    pub model_override: Option<String>,

    /// HTTP listen port
    pub port: u16,

    /// Timeout for GitHub fetches, in seconds
    pub request_timeout_secs: u64,

    /// Timeout for Gemini generation requests, in seconds
    pub generation_timeout_secs: u64,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl Default for AppConfig {
    fn default() -> Self {
        let port = env::var("READMEGEN_PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let request_timeout_secs = env::var("READMEGEN_REQUEST_TIMEOUT")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        let generation_timeout_secs = env::var("READMEGEN_GENERATION_TIMEOUT")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(DEFAULT_GENERATION_TIMEOUT_SECS);

        let log_level = env::var("READMEGEN_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        Self {
            github_token: non_empty_env("GITHUB_TOKEN"),
            gemini_api_key: non_empty_env("GEMINI_API_KEY"),
            model_override: non_empty_env("GEMINI_MODEL"),
            port,
            request_timeout_secs,
            generation_timeout_secs,
            log_level,
        }
    }
}

impl AppConfig {
    /// Validates the configuration
    ///
    /// Checks that timeouts are in a reasonable range and the log level is
    /// known. Credential checks happen at request time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, secs) in [
            ("Request timeout", self.request_timeout_secs),
            ("Generation timeout", self.generation_timeout_secs),
        ] {
            if secs == 0 {
                return Err(ConfigError::ValidationFailed(format!(
                    "{name} must be at least 1 second"
                )));
            }
            if secs > 600 {
                return Err(ConfigError::ValidationFailed(format!(
                    "{name} cannot exceed 10 minutes"
                )));
            }
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }

    /// Timeout for GitHub fetches
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Timeout for Gemini generation requests
    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.generation_timeout_secs)
    }
}

impl fmt::Display for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Readmegen Configuration:")?;
        writeln!(f, "  Port: {}", self.port)?;
        writeln!(f, "  GitHub Token: {}", if self.github_token.is_some() { "set" } else { "unset" })?;
        writeln!(f, "  Gemini API Key: {}", if self.gemini_api_key.is_some() { "set" } else { "unset" })?;
        writeln!(
            f,
            "  Model: {}",
            self.model_override.as_deref().unwrap_or("(default fallback list)")
        )?;
        writeln!(f, "  Request Timeout: {}s", self.request_timeout_secs)?;
        writeln!(f, "  Generation Timeout: {}s", self.generation_timeout_secs)?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        Ok(())
    }
}
