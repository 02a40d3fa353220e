//! Credential resolution and authorization headers
//!
//! The token is read from a single environment variable. Resolution never
//! terminates the process: a missing variable is reported as
//! [`GitHubError::MissingToken`] and the entry point decides what to do.

use crate::error::{GitHubError, Result};
use std::fmt;

/// Environment variable holding the GitHub token
pub const TOKEN_ENV_VAR: &str = "GHCLI_TOKEN";

/// Read the token from [`TOKEN_ENV_VAR`]
///
/// An empty value counts as present. A missing or non-unicode value yields
/// [`GitHubError::MissingToken`].
pub fn resolve_token() -> Result<String> {
    resolve_token_with(|var| std::env::var(var).ok())
}

/// Read the token through `lookup` instead of the process environment
///
/// # Example
/// ```rust
/// use ghcli_github::auth::resolve_token_with;
///
/// let token = resolve_token_with(|_| Some("ghp_example".to_string())).unwrap();
/// assert_eq!(token, "ghp_example");
///
/// assert!(resolve_token_with(|_| None).is_err());
/// ```
pub fn resolve_token_with<F>(lookup: F) -> Result<String>
where
    F: FnOnce(&str) -> Option<String>,
{
    lookup(TOKEN_ENV_VAR).ok_or_else(|| GitHubError::MissingToken {
        var: TOKEN_ENV_VAR.to_string(),
    })
}

/// Token authentication for GitHub API requests
#[derive(Clone)]
pub struct GitHubAuth {
    token: String,
}

impl GitHubAuth {
    pub fn new(token: String) -> Self {
        Self { token }
    }

    /// Build authentication from the environment
    pub fn from_env() -> Result<Self> {
        resolve_token().map(Self::new)
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Value of the `Authorization` header
    pub fn get_auth_header(&self) -> String {
        format!("token {}", self.token)
    }
}

impl fmt::Debug for GitHubAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubAuth")
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_resolve_token_with_present_value() {
        let token = resolve_token_with(|var| {
            assert_eq!(var, TOKEN_ENV_VAR);
            Some("ghp_test_token".to_string())
        })
        .unwrap();
        assert_eq!(token, "ghp_test_token");
    }

    #[test]
    fn test_resolve_token_with_empty_value_is_present() {
        let token = resolve_token_with(|_| Some(String::new())).unwrap();
        assert_eq!(token, "");
    }

    #[test]
    fn test_resolve_token_with_absent_value() {
        let error = resolve_token_with(|_| None).unwrap_err();
        assert!(error.is_missing_token());
        assert!(error.to_string().contains(TOKEN_ENV_VAR));
    }

    #[test]
    #[serial]
    fn test_resolve_token_from_environment() {
        let original = std::env::var(TOKEN_ENV_VAR).ok();

        unsafe {
            std::env::set_var(TOKEN_ENV_VAR, "env_token");
        }
        let present = resolve_token();

        unsafe {
            std::env::remove_var(TOKEN_ENV_VAR);
        }
        let absent = resolve_token();

        unsafe {
            if let Some(value) = original {
                std::env::set_var(TOKEN_ENV_VAR, value);
            }
        }

        assert_eq!(present.unwrap(), "env_token");
        assert!(absent.unwrap_err().is_missing_token());
    }

    #[test]
    fn test_auth_header_uses_token_scheme() {
        let auth = GitHubAuth::new("ghp_abc".to_string());
        assert_eq!(auth.get_auth_header(), "token ghp_abc");
        assert_eq!(auth.token(), "ghp_abc");
    }

    #[test]
    fn test_debug_output_hides_token() {
        let auth = GitHubAuth::new("ghp_secret".to_string());
        let debug = format!("{:?}", auth);
        assert!(!debug.contains("ghp_secret"));
        assert!(debug.contains("redacted"));
    }
}
