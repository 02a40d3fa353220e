//! Create command implementation

use super::{Command, CommandContext};
use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

/// Create command submitting a new issue
pub struct CreateCommand {
    pub title: String,
    pub body: String,
}

#[async_trait]
impl Command for CreateCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let issue = context
            .client
            .create_issue(&context.owner, &context.repo, &self.title, &self.body)
            .await?;
        info!(url = issue.url(), "Issue created");

        println!("{}", issue);
        Ok(())
    }
}
