//! Stack detection pipeline
//!
//! Infers a repository's technologies from its dependency manifests and the
//! languages reported by the hosting API: fetch the three well-known manifest
//! files and the language map concurrently, extract normalized dependency
//! names per ecosystem, then match the combined token set against the
//! technology catalog.

pub mod catalog;
pub mod extractors;
pub mod matcher;

use serde::Serialize;
use tracing::debug;

pub use catalog::{Technology, TECHNOLOGIES};

use crate::github::{GitHubClient, RepoRef};

/// Technologies and languages detected for one repository
///
/// Built fresh per request and never mutated after construction.
#[derive(Debug, Serialize)]
pub struct DetectedStack {
    /// Matched catalog entries, in catalog order
    pub technologies: Vec<&'static Technology>,

    /// Normalized dependency names, in first-seen order
    pub raw_dependencies: Vec<String>,

    /// Languages as reported by the hosting API, in response order
    pub languages: Vec<String>,
}

impl DetectedStack {
    /// True when neither technologies nor languages were detected
    pub fn is_empty(&self) -> bool {
        self.technologies.is_empty() && self.languages.is_empty()
    }
}

fn push_unique(names: &mut Vec<String>, name: String) {
    if !names.contains(&name) {
        names.push(name);
    }
}

/// Detects the technology stack of a repository
///
/// The four fetches run concurrently; each degrades independently to
/// `None`/empty, so a repository without a `go.mod` still gets its JavaScript
/// dependencies matched.
pub async fn detect_project_stack(client: &GitHubClient, repo: &RepoRef) -> DetectedStack {
    let (package_json, requirements, go_mod, languages) = tokio::join!(
        client.fetch_file_content(repo, "package.json"),
        client.fetch_file_content(repo, "requirements.txt"),
        client.fetch_file_content(repo, "go.mod"),
        client.fetch_languages(repo),
    );

    let mut raw_dependencies: Vec<String> = Vec::new();

    if let Some(content) = package_json.as_deref() {
        for name in extractors::package_json_dependencies(content) {
            push_unique(&mut raw_dependencies, name);
        }
    }

    if let Some(content) = requirements.as_deref() {
        for name in extractors::requirements_dependencies(content) {
            push_unique(&mut raw_dependencies, name);
        }
    }

    if let Some(content) = go_mod.as_deref() {
        for name in extractors::go_mod_dependencies(content) {
            push_unique(&mut raw_dependencies, name);
        }
    }

    let mut tokens = raw_dependencies.clone();
    for language in &languages {
        if let Some(normalized) = extractors::normalize(language) {
            push_unique(&mut tokens, normalized);
        }
    }

    let technologies = matcher::match_technologies(&tokens);

    debug!(
        repo = %repo,
        dependencies = raw_dependencies.len(),
        languages = languages.len(),
        technologies = technologies.len(),
        "stack detection completed"
    );

    DetectedStack {
        technologies,
        raw_dependencies,
        languages,
    }
}
