//! Command argument validation utilities
//!
//! This module provides validation for command arguments after clap parsing.
//! Everything here runs before the token is resolved and before any request
//! is sent.

use anyhow::{Result, anyhow};
use ghcli_github::{GitHubError, validate_repository};

/// Validation errors for command arguments
#[derive(Debug, PartialEq)]
pub enum CommandValidationError {
    /// Required argument was empty
    MissingRequired { argument: String },
    /// Invalid argument value
    InvalidValue {
        argument: String,
        value: String,
        reason: String,
    },
}

impl std::fmt::Display for CommandValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandValidationError::MissingRequired { argument } => {
                write!(f, "{} is required", argument)
            }
            CommandValidationError::InvalidValue {
                argument,
                value,
                reason,
            } => {
                write!(f, "Invalid value '{}' for {}: {}", value, argument, reason)
            }
        }
    }
}

impl std::error::Error for CommandValidationError {}

/// Convert validation error to anyhow::Error
pub fn validation_error_to_anyhow(error: CommandValidationError) -> anyhow::Error {
    anyhow!(error.to_string())
}

/// Validate the `--owner` and `--repo` arguments
///
/// Runs the client's identifier check and reports failures in terms of the
/// command-line flags.
pub fn validate_repository_args(owner: &str, repo: &str) -> Result<()> {
    match validate_repository(owner, repo) {
        Ok(()) => Ok(()),
        Err(GitHubError::InvalidRepository {
            field,
            value,
            reason,
        }) => {
            let argument = if field == "owner" { "--owner" } else { "--repo" }.to_string();
            let error = if value.is_empty() {
                CommandValidationError::MissingRequired { argument }
            } else {
                CommandValidationError::InvalidValue {
                    argument,
                    value,
                    reason: reason.to_string(),
                }
            };
            Err(validation_error_to_anyhow(error))
        }
        Err(other) => Err(other.into()),
    }
}

/// Validate the title of a new issue
///
/// Titles are displayed in listings, so they cannot be blank
pub fn validate_issue_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: "title".to_string(),
                value: title.to_string(),
                reason: "title cannot be empty or whitespace only".to_string(),
            },
        ));
    }
    Ok(())
}
