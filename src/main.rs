use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use ghcli::commands::validators;
use ghcli::constants::github::{DEFAULT_OWNER, DEFAULT_REPO};
use ghcli::forms::{TerminalIo, Worker, run_forms};
use ghcli::{commands::*, config::Config, constants, logging};
use ghcli_github::GitHubClient;
use std::{process, sync::Arc};
use tokio::runtime::Handle;

#[derive(Parser)]
#[command(name = "ghcli")]
#[command(about = "GHCLI - CLI to list and create GitHub issues.")]
#[command(version)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the issues of a GitHub repository
    List {
        /// Owner of the GitHub repository
        #[arg(long, default_value_t = DEFAULT_OWNER.to_string())]
        owner: String,

        /// GitHub repository
        #[arg(long, default_value_t = DEFAULT_REPO.to_string())]
        repo: String,

        /// Output in JSON format for machine consumption
        #[arg(long)]
        json: bool,
    },

    /// Create an issue in a GitHub repository
    Create {
        /// Owner of the GitHub repository
        #[arg(long, default_value_t = DEFAULT_OWNER.to_string())]
        owner: String,

        /// GitHub repository
        #[arg(long, default_value_t = DEFAULT_REPO.to_string())]
        repo: String,

        /// Title of the GitHub issue
        title: String,

        /// Body of the GitHub issue
        body: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let config = Config::from_env()?;

    match cli.command {
        Some(command) => execute_builtin_command(command, &config).await?,
        None => launch_forms(&config).await?,
    }

    Ok(())
}

/// Build the issue client, terminating the process if the token is missing
fn connect(config: &Config) -> Result<Arc<GitHubClient>> {
    match GitHubClient::from_env(&config.client_config()) {
        Ok(client) => Ok(Arc::new(client)),
        Err(err) if err.is_missing_token() => {
            eprintln!("{}", err.to_string().red());
            process::exit(constants::exit::MISSING_CREDENTIAL);
        }
        Err(err) => Err(err.into()),
    }
}

async fn execute_builtin_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::List { owner, repo, json } => {
            validators::validate_repository_args(&owner, &repo)?;

            let context = CommandContext {
                client: connect(config)?,
                owner,
                repo,
            };
            ListCommand { json }.execute(&context).await?;
        }
        Commands::Create {
            owner,
            repo,
            title,
            body,
        } => {
            validators::validate_repository_args(&owner, &repo)?;
            validators::validate_issue_title(&title)?;

            let context = CommandContext {
                client: connect(config)?,
                owner,
                repo,
            };
            CreateCommand { title, body }.execute(&context).await?;
        }
    }

    Ok(())
}

/// Run the forms on a blocking thread; submissions go back to this runtime
async fn launch_forms(config: &Config) -> Result<()> {
    let worker = Worker::new(Handle::current(), connect(config)?);

    tokio::task::spawn_blocking(move || {
        let mut io = TerminalIo::stdio();
        run_forms(&mut io, &worker)
    })
    .await??;

    Ok(())
}
