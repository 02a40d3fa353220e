//! Base types and traits for the command pattern

use anyhow::Result;
use ghcli_github::GitHubClient;
use std::sync::Arc;

/// Context passed to all commands
#[derive(Clone)]
pub struct CommandContext {
    /// Authenticated issue client
    pub client: Arc<GitHubClient>,
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
}

/// Trait that all commands must implement
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command with the given context
    async fn execute(&self, context: &CommandContext) -> Result<()>;
}
