//! readmegen - AI-generated READMEs for GitHub repositories
//!
//! This library takes a GitHub repository URL and produces a generated
//! README.md plus a detected technology stack. It fetches the repository's
//! well-known manifest files and language map, infers technologies via a
//! curated alias catalog, assembles a bounded prompt context, and asks the
//! Gemini API for a README, falling back through an ordered list of candidate
//! models.
//!
//! # Core Concepts
//!
//! - **Stack detection**: inferring a project's technologies from its
//!   dependency manifests (`package.json`, `requirements.txt`, `go.mod`) and
//!   the languages reported by the hosting API
//! - **Context assembly**: building a size-bounded text payload describing
//!   the repository, used to ground the model's output
//! - **Model fallback**: trying successive model identifiers until one
//!   produces usable output
//!
//! # Project Structure
//!
//! - [`github`]: repository URL parsing and GitHub fetchers
//! - [`stack`]: dependency extractors, technology catalog, and matcher
//! - [`context`]: prompt-context assembly
//! - [`generator`]: Gemini client and the model-fallback protocol
//! - [`server`]: the axum HTTP surface

// Public modules
pub mod cli;
pub mod config;
pub mod context;
pub mod generator;
pub mod github;
pub mod server;
pub mod stack;
pub mod util;

// Re-export key types for convenient access
pub use config::{AppConfig, ConfigError};
pub use generator::{
    candidate_models, generate_readme, CompletionAttempt, CompletionBackend, GeminiClient,
    GenerationError,
};
pub use github::{parse_github_url, GitHubClient, RepoRef};
pub use server::{build_router, start_server, AppState};
pub use stack::{detect_project_stack, DetectedStack, Technology};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
