//! Error types for GitHub issue operations

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by the credential resolver and the issue client
#[derive(Error, Debug)]
pub enum GitHubError {
    /// The token environment variable is not set
    #[error(
        "Unable to retrieve the GitHub token from the environment variable {var}. \
         Define this variable and restart the program."
    )]
    MissingToken { var: String },

    /// An owner or repository identifier failed validation
    #[error("Invalid {field} '{value}': {reason}")]
    InvalidRepository {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    /// GitHub answered with a non-2xx status
    #[error("GitHub API error ({status}) for {endpoint}: {body}")]
    Http {
        status: StatusCode,
        endpoint: String,
        body: String,
    },

    /// The request could not be sent or the response could not be read
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not have the expected shape
    #[error("Unexpected response from {endpoint}: {reason}")]
    MalformedResponse { endpoint: String, reason: String },

    /// The underlying HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl GitHubError {
    /// HTTP status carried by an [`GitHubError::Http`] error
    ///
    /// # Examples
    ///
    /// ```
    /// use ghcli_github::GitHubError;
    /// use reqwest::StatusCode;
    ///
    /// let error = GitHubError::Http {
    ///     status: StatusCode::NOT_FOUND,
    ///     endpoint: "https://api.github.com/repos/o/r/issues".to_string(),
    ///     body: String::new(),
    /// };
    /// assert_eq!(error.status(), Some(StatusCode::NOT_FOUND));
    /// ```
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            GitHubError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true for non-2xx responses
    pub fn is_http(&self) -> bool {
        matches!(self, GitHubError::Http { .. })
    }

    pub fn is_missing_token(&self) -> bool {
        matches!(self, GitHubError::MissingToken { .. })
    }

    pub(crate) fn malformed(endpoint: &str, reason: impl Into<String>) -> Self {
        GitHubError::MalformedResponse {
            endpoint: endpoint.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GitHubError>;
