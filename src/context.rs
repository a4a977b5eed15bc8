//! Prompt-context assembly
//!
//! Builds the bounded text payload sent to the generative model: repository
//! identity, the raw `package.json` truncated to 6000 characters, the existing
//! `README.md` truncated to 8000 characters, and a rendered summary of the
//! detected stack. Assembly order is fixed so identical inputs produce
//! identical prompts.

use crate::github::{GitHubClient, RepoRef};
use crate::stack::DetectedStack;

/// Maximum characters of manifest content included in the context
pub const MANIFEST_CONTEXT_LIMIT: usize = 6000;

/// Maximum characters of existing README content included in the context
pub const README_CONTEXT_LIMIT: usize = 8000;

/// Truncates a string to at most `max_chars` characters
///
/// Operates on character counts, never splitting a multi-byte sequence.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Fetches raw README/manifest content and assembles the base context
///
/// The four raw fetches (each file on the `main` and `master` branches) run
/// concurrently; per file, the `main` result wins when both branches resolve.
pub async fn scrape_repository(client: &GitHubClient, repo: &RepoRef) -> String {
    let (readme_main, readme_master, manifest_main, manifest_master) = tokio::join!(
        client.fetch_raw(repo, "main", "README.md"),
        client.fetch_raw(repo, "master", "README.md"),
        client.fetch_raw(repo, "main", "package.json"),
        client.fetch_raw(repo, "master", "package.json"),
    );

    let readme = readme_main.or(readme_master);
    let manifest = manifest_main.or(manifest_master);

    build_scrape_context(repo, manifest.as_deref(), readme.as_deref())
}

/// Assembles the base context from already-fetched content
pub fn build_scrape_context(repo: &RepoRef, manifest: Option<&str>, readme: Option<&str>) -> String {
    let mut parts = vec![
        "# Basic repository information".to_string(),
        format!("Owner: {}", repo.owner),
        format!("Repo: {}", repo.repo),
    ];

    if let Some(manifest) = manifest.filter(|content| !content.is_empty()) {
        parts.push("\n## package.json (raw content)\n".to_string());
        parts.push(truncate_chars(manifest, MANIFEST_CONTEXT_LIMIT).to_string());
    }

    if let Some(readme) = readme.filter(|content| !content.is_empty()) {
        parts.push("\n## Existing README (if any)\n".to_string());
        parts.push(truncate_chars(readme, README_CONTEXT_LIMIT).to_string());
    }

    parts.join("\n\n")
}

/// Renders the detected stack as a human-readable context section
///
/// Returns an empty string when nothing was detected.
pub fn stack_summary(stack: &DetectedStack) -> String {
    if stack.is_empty() {
        return String::new();
    }

    let mut lines: Vec<String> = Vec::new();

    if !stack.technologies.is_empty() {
        lines.push("## Detected technologies (from dependencies and languages)".to_string());
        for tech in &stack.technologies {
            lines.push(format!("- {}", tech.name));
        }
    }

    if !stack.languages.is_empty() {
        lines.push("\n## Detected languages (GitHub Languages API)".to_string());
        for language in &stack.languages {
            lines.push(format!("- {language}"));
        }
    }

    lines.join("\n")
}

/// Appends the stack summary to the scraped context when present
pub fn merge_context(scrape: String, summary: &str) -> String {
    if summary.is_empty() {
        scrape
    } else {
        format!("{scrape}\n\n{summary}")
    }
}
