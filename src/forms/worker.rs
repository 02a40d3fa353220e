//! Background execution of form submissions
//!
//! Form loops run on a plain thread and never perform network or file I/O
//! themselves. Each submission is spawned onto the tokio runtime and its
//! [`FormOutcome`] is sent back over a oneshot channel.

use crate::storage::save_issues_to_file;
use anyhow::{Result, anyhow};
use ghcli_github::{GitHubClient, GitHubError, Issue};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tracing::debug;

/// Work requested by a submitted form
#[derive(Debug, Clone, PartialEq)]
pub enum FormRequest {
    /// Retrieve issues and write them to `output`
    ListIssues {
        owner: String,
        repo: String,
        output: PathBuf,
    },
    CreateIssue {
        owner: String,
        repo: String,
        title: String,
        body: String,
    },
}

/// Result of a [`FormRequest`], delivered back to the form
#[derive(Debug)]
pub enum FormOutcome {
    IssuesSaved { path: PathBuf, count: usize },
    /// The repository has no issues; nothing was written
    NoIssues { owner: String, repo: String },
    IssueCreated(Issue),
    Failed(anyhow::Error),
}

impl FormRequest {
    /// Perform the request against GitHub
    pub async fn run(self, client: &GitHubClient) -> FormOutcome {
        let result = match self {
            FormRequest::ListIssues {
                owner,
                repo,
                output,
            } => list_and_save(client, owner, repo, output).await,
            FormRequest::CreateIssue {
                owner,
                repo,
                title,
                body,
            } => client
                .create_issue(&owner, &repo, &title, &body)
                .await
                .map(FormOutcome::IssueCreated)
                .map_err(anyhow::Error::from),
        };

        result.unwrap_or_else(FormOutcome::Failed)
    }
}

async fn list_and_save(
    client: &GitHubClient,
    owner: String,
    repo: String,
    output: PathBuf,
) -> Result<FormOutcome> {
    let issues = client.list_issues(&owner, &repo).await?;
    if issues.is_empty() {
        return Ok(FormOutcome::NoIssues { owner, repo });
    }

    let path = output.clone();
    let count = issues.len();
    tokio::task::spawn_blocking(move || save_issues_to_file(&issues, &path)).await??;

    Ok(FormOutcome::IssuesSaved {
        path: output,
        count,
    })
}

/// Whether `error` is a non-2xx answer from GitHub
pub fn is_http_failure(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<GitHubError>()
        .is_some_and(GitHubError::is_http)
}

/// Dispatches form requests onto a tokio runtime
pub struct Worker {
    handle: Handle,
    client: Arc<GitHubClient>,
}

/// A submitted request whose outcome has not been received yet
pub struct PendingOutcome {
    receiver: oneshot::Receiver<FormOutcome>,
}

impl Worker {
    pub fn new(handle: Handle, client: Arc<GitHubClient>) -> Self {
        Self { handle, client }
    }

    /// Spawn `request` and return a handle to its outcome
    pub fn submit(&self, request: FormRequest) -> PendingOutcome {
        let (sender, receiver) = oneshot::channel();
        let client = Arc::clone(&self.client);

        debug!(?request, "Dispatching form request");
        self.handle.spawn(async move {
            let outcome = request.run(&client).await;
            let _ = sender.send(outcome);
        });

        PendingOutcome { receiver }
    }
}

impl PendingOutcome {
    /// Block the calling thread until the outcome arrives
    ///
    /// Must not be called from inside an async task.
    pub fn wait(self) -> FormOutcome {
        self.receiver
            .blocking_recv()
            .unwrap_or_else(|_| FormOutcome::Failed(anyhow!("Background task ended without a result")))
    }
}
