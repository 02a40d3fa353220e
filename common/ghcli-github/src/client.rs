//! GitHub client implementation
//!
//! The client owns the HTTP connection state, the API base URL and the token.
//! Issue operations live in `issues.rs` as a separate `impl` block.

use crate::auth::{GitHubAuth, resolve_token};
use crate::error::{GitHubError, Result};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, Method, RequestBuilder};
use std::time::Duration;

/// GitHub REST API base URL
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Versioned JSON media type sent in the `Accept` header
pub const GITHUB_V3_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

/// Total timeout applied to every request
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent header for API requests
pub const DEFAULT_USER_AGENT: &str = concat!("ghcli/", env!("CARGO_PKG_VERSION"));

/// Connection settings for [`GitHubClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL without trailing slash
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// GitHub API client for issue operations
///
/// ## Example
///
/// ```rust,no_run
/// use ghcli_github::{ClientConfig, GitHubClient};
///
/// # async fn example() -> Result<(), ghcli_github::GitHubError> {
/// let client = GitHubClient::from_env(&ClientConfig::default())?;
/// for issue in client.list_issues("mlambda", "tp-ghcli").await? {
///     println!("{issue}");
/// }
/// # Ok(())
/// # }
/// ```
pub struct GitHubClient {
    pub(crate) client: Client,
    pub(crate) auth: GitHubAuth,
    pub(crate) base_url: String,
}

impl GitHubClient {
    /// Create a client with an explicit token
    ///
    /// # Errors
    /// Returns [`GitHubError::Client`] if the HTTP client cannot be built
    pub fn new(token: String, config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(GitHubError::Client)?;

        Ok(Self {
            client,
            auth: GitHubAuth::new(token),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client whose token comes from the environment
    ///
    /// # Errors
    /// Returns [`GitHubError::MissingToken`] if the token variable is unset
    pub fn from_env(config: &ClientConfig) -> Result<Self> {
        let token = resolve_token()?;
        Self::new(token, config)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the issues collection of `owner/repo`
    pub(crate) fn issues_endpoint(&self, owner: &str, repo: &str) -> String {
        format!("{}/repos/{}/{}/issues", self.base_url, owner, repo)
    }

    /// Start a request carrying the media type and authorization headers
    pub(crate) fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .header(ACCEPT, GITHUB_V3_MEDIA_TYPE)
            .header(AUTHORIZATION, self.auth.get_auth_header())
    }
}
