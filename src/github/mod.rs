//! GitHub data access
//!
//! This module covers everything the pipeline needs from GitHub: parsing a
//! repository URL into an owner/repo pair, reading well-known files through
//! the REST contents API, reading the per-language byte counts, and fetching
//! raw file contents from the raw-content host.
//!
//! All fetch operations degrade gracefully: a failed fetch resolves to `None`
//! (or an empty list) instead of failing the request, so a repository without
//! a `package.json` or with a private default branch still produces a
//! (smaller) context.

pub mod client;
pub mod url;

pub use client::GitHubClient;
pub use url::{parse_github_url, RepoRef};
