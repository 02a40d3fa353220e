//! Validation of repository identifiers

use crate::error::{GitHubError, Result};

/// Check that `owner` and `repo` can be used as path segments
///
/// Both must be non-empty and must not contain `/`.
///
/// # Example
/// ```rust
/// use ghcli_github::validate_repository;
///
/// assert!(validate_repository("mlambda", "tp-ghcli").is_ok());
/// assert!(validate_repository("a/b", "tp-ghcli").is_err());
/// assert!(validate_repository("mlambda", "").is_err());
/// ```
pub fn validate_repository(owner: &str, repo: &str) -> Result<()> {
    validate_identifier("owner", owner)?;
    validate_identifier("repository", repo)
}

fn validate_identifier(field: &'static str, value: &str) -> Result<()> {
    let reason = if value.is_empty() {
        "must not be empty"
    } else if value.contains('/') {
        "must not contain '/'"
    } else {
        return Ok(());
    };

    Err(GitHubError::InvalidRepository {
        field,
        value: value.to_string(),
        reason,
    })
}
