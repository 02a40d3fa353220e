//! GitHub issues API client library
//!
//! This library lists and creates issues on a single GitHub repository using a
//! token read from the environment.
//!
//! ## Modules
//!
//! - [`auth`]: Token resolution and authorization headers
//! - [`client`]: Core GitHub client implementation
//! - [`error`]: Error taxonomy
//! - [`types`]: The [`Issue`] record
//! - `issues`: List and create operations
//! - `util`: Repository identifier validation

pub mod auth;
pub mod client;
pub mod error;
mod issues;
pub mod types;
mod util;

// Re-export public API
pub use auth::{GitHubAuth, TOKEN_ENV_VAR, resolve_token};
pub use client::{ClientConfig, DEFAULT_API_BASE, DEFAULT_TIMEOUT_SECS, GitHubClient};
pub use error::{GitHubError, Result};
pub use types::{Issue, MappingError};
pub use util::validate_repository;

pub use reqwest::StatusCode;

/// List the issues of `owner/repo` with the token from the environment
///
/// Validates the identifiers, resolves the token and performs one request
/// with the default [`ClientConfig`].
pub async fn list_issues(owner: &str, repo: &str) -> Result<Vec<Issue>> {
    validate_repository(owner, repo)?;
    GitHubClient::from_env(&ClientConfig::default())?
        .list_issues(owner, repo)
        .await
}

/// Create an issue in `owner/repo` with the token from the environment
pub async fn create_issue(owner: &str, repo: &str, title: &str, body: &str) -> Result<Issue> {
    validate_repository(owner, repo)?;
    GitHubClient::from_env(&ClientConfig::default())?
        .create_issue(owner, repo, title, body)
        .await
}
