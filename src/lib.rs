//! ghcli - A CLI and form interface to list and create GitHub issues

pub mod commands;
pub mod config;
pub mod constants;
pub mod forms;
pub mod logging;
pub mod storage;
pub mod utils;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{Command, CommandContext};
pub use config::Config;
pub use ghcli_github::{GitHubClient, GitHubError, Issue};
pub use storage::{load_issues_from_file, save_issues_to_file};
