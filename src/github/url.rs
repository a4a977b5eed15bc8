//! GitHub repository URL parsing
//!
//! Extracts the owner and repository name from a free-form URL string of the
//! shape `http(s)://github.com/<owner>/<repo>[/...]`. Scheme and host are
//! matched case-insensitively, anything after the repository segment is
//! ignored, and a trailing `.git` suffix is stripped. No network access.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

static REPO_URL_RE: OnceLock<Regex> = OnceLock::new();

fn repo_url_re() -> &'static Regex {
    REPO_URL_RE.get_or_init(|| {
        Regex::new(r"(?i)^https?://github\.com/([^/]+)/([^/]+)(?:/.*)?$")
            .expect("repository URL regex is valid")
    })
}

/// Owner/repository pair derived from a GitHub URL
///
/// Built once per request and discarded when the request completes; nothing
/// is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    /// Repository owner (user or organization)
    pub owner: String,

    /// Repository name, without any `.git` suffix
    pub repo: String,
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Parses a GitHub repository URL into a [`RepoRef`]
///
/// Returns `None` when the string is not a GitHub repository URL.
///
/// # Example
///
/// ```
/// use readmegen::github::parse_github_url;
///
/// let repo = parse_github_url("https://github.com/acme/widget.git/tree/main").unwrap();
/// assert_eq!(repo.owner, "acme");
/// assert_eq!(repo.repo, "widget");
/// ```
pub fn parse_github_url(url: &str) -> Option<RepoRef> {
    let captures = repo_url_re().captures(url)?;

    let owner = captures.get(1)?.as_str().to_string();
    let raw_repo = captures.get(2)?.as_str();
    let repo = raw_repo.strip_suffix(".git").unwrap_or(raw_repo).to_string();

    Some(RepoRef { owner, repo })
}
