//! Issue file persistence
//!
//! Issues are stored as a pretty-printed JSON array of
//! `{"title", "body", "url"}` objects.

use crate::utils::ensure_parent_directory;
use anyhow::{Context, Result};
use ghcli_github::Issue;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Write `issues` to `path`, replacing any existing file
pub fn save_issues_to_file(issues: &[Issue], path: &Path) -> Result<()> {
    ensure_parent_directory(path)?;

    let json = serde_json::to_string_pretty(issues).context("Failed to serialize issues")?;
    fs::write(path, format!("{json}\n"))
        .with_context(|| format!("Failed to write issues to {}", path.display()))?;

    debug!(count = issues.len(), path = %path.display(), "Saved issues");
    Ok(())
}

/// Read issues previously written by [`save_issues_to_file`]
pub fn load_issues_from_file(path: &Path) -> Result<Vec<Issue>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read issues from {}", path.display()))?;
    let issues: Vec<Issue> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse issues in {}", path.display()))?;
    Ok(issues)
}
