//! List command implementation

use super::{Command, CommandContext};
use anyhow::{Context, Result};
use async_trait::async_trait;
use ghcli_github::Issue;
use tracing::info;

/// List command printing the issues of a repository
pub struct ListCommand {
    /// Output in JSON format
    pub json: bool,
}

impl ListCommand {
    /// Render issues as `{url} - {title} - {body}` lines, or as a JSON array
    pub fn render(&self, issues: &[Issue]) -> Result<String> {
        if self.json {
            return serde_json::to_string_pretty(issues).context("Failed to serialize issues");
        }

        Ok(issues
            .iter()
            .map(|issue| issue.to_string())
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

#[async_trait]
impl Command for ListCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let issues = context
            .client
            .list_issues(&context.owner, &context.repo)
            .await?;
        info!(
            count = issues.len(),
            "Retrieved issues from {}/{}", context.owner, context.repo
        );

        let output = self.render(&issues)?;
        if !output.is_empty() {
            println!("{}", output);
        }

        Ok(())
    }
}
