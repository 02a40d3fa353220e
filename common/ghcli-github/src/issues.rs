//! Issue operations
//!
//! Both operations validate `owner` and `repo` before touching the network,
//! send a single request and never retry.

use crate::client::GitHubClient;
use crate::error::{GitHubError, Result};
use crate::types::Issue;
use crate::util::validate_repository;
use reqwest::{Method, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

#[derive(Serialize)]
struct CreateIssuePayload<'a> {
    title: &'a str,
    body: &'a str,
}

impl GitHubClient {
    /// List the issues of a repository
    ///
    /// Returns the single page GitHub sends back; no pagination is performed.
    ///
    /// # Errors
    /// - [`GitHubError::InvalidRepository`] if `owner` or `repo` is empty or contains `/`
    /// - [`GitHubError::Http`] on a non-2xx status
    /// - [`GitHubError::MalformedResponse`] if the body is not an array of issue objects
    /// - [`GitHubError::Transport`] if the request fails
    pub async fn list_issues(&self, owner: &str, repo: &str) -> Result<Vec<Issue>> {
        validate_repository(owner, repo)?;

        let url = self.issues_endpoint(owner, repo);
        debug!(%url, "Listing issues");

        let response = self.request(Method::GET, &url).send().await?;
        let payload = read_json(response, &url).await?;

        let items = payload
            .as_array()
            .ok_or_else(|| GitHubError::malformed(&url, "expected a JSON array of issues"))?;
        let issues = items
            .iter()
            .map(|item| map_issue(item, &url))
            .collect::<Result<Vec<_>>>()?;

        debug!(count = issues.len(), "Listed issues");
        Ok(issues)
    }

    /// Create an issue in a repository
    ///
    /// `body` may be empty. Calling this twice creates two issues.
    ///
    /// # Errors
    /// Same as [`GitHubClient::list_issues`], with the response expected to be
    /// a single issue object
    pub async fn create_issue(
        &self,
        owner: &str,
        repo: &str,
        title: &str,
        body: &str,
    ) -> Result<Issue> {
        validate_repository(owner, repo)?;

        let url = self.issues_endpoint(owner, repo);
        debug!(%url, title, "Creating issue");

        let response = self
            .request(Method::POST, &url)
            .json(&CreateIssuePayload { title, body })
            .send()
            .await?;
        let payload = read_json(response, &url).await?;

        let issue = map_issue(&payload, &url)?;
        debug!(url = issue.url(), "Created issue");
        Ok(issue)
    }
}

/// Check the status and parse the body as JSON
async fn read_json(response: Response, endpoint: &str) -> Result<Value> {
    let status = response.status();

    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        warn!(%status, endpoint, "GitHub API request failed");
        return Err(GitHubError::Http {
            status,
            endpoint: endpoint.to_string(),
            body,
        });
    }

    let text = response.text().await?;
    serde_json::from_str(&text)
        .map_err(|e| GitHubError::malformed(endpoint, format!("invalid JSON: {e}")))
}

fn map_issue(value: &Value, endpoint: &str) -> Result<Issue> {
    let issue = Issue::from_value(value).map_err(|e| GitHubError::malformed(endpoint, e.to_string()))?;

    if !issue.has_web_url() {
        return Err(GitHubError::malformed(
            endpoint,
            format!("issue URL '{}' is not an HTTP URL", issue.url()),
        ));
    }

    Ok(issue)
}
