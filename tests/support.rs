//! Common test support utilities and fixtures
//!
//! This module provides shared functionality to reduce code duplication
//! across integration tests.

#![allow(dead_code)]

use ghcli::GitHubClient;
use ghcli_github::ClientConfig;
use serde_json::{Value, json};
use std::io::Write;
use std::process::{Command, Stdio};

pub const TEST_TOKEN: &str = "ghp_test_token";

/// Result of running a CLI command
#[derive(Debug)]
pub struct CliOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Run the ghcli binary with a clean environment plus `env`
///
/// `stdin` is written to the process and then closed.
pub fn run_cli(args: &[&str], env: &[(&str, &str)], stdin: Option<&str>) -> CliOutput {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ghcli"));
    cmd.args(args)
        .env_remove("GHCLI_TOKEN")
        .env_remove("GHCLI_API_URL")
        .env_remove("GHCLI_TIMEOUT_SECS")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    for (key, value) in env {
        cmd.env(key, value);
    }

    let mut child = cmd.spawn().expect("Failed to start ghcli");
    {
        let mut child_stdin = child.stdin.take().expect("stdin is piped");
        if let Some(input) = stdin {
            // The process may exit before reading its input
            let _ = child_stdin.write_all(input.as_bytes());
        }
    }

    let output = child.wait_with_output().expect("Failed to wait for ghcli");

    CliOutput {
        status: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// Environment pointing the binary at a mock server
pub fn mock_env(server_uri: &str) -> Vec<(&'static str, String)> {
    vec![
        ("GHCLI_TOKEN", TEST_TOKEN.to_string()),
        ("GHCLI_API_URL", server_uri.to_string()),
    ]
}

/// Borrow a `mock_env` result in the shape `run_cli` expects
pub fn as_env<'a>(pairs: &'a [(&'static str, String)]) -> Vec<(&'static str, &'a str)> {
    pairs.iter().map(|(k, v)| (*k, v.as_str())).collect()
}

/// Issue client talking to `server_uri`
pub fn client_for(server_uri: &str) -> GitHubClient {
    let config = ClientConfig {
        base_url: server_uri.to_string(),
        ..Default::default()
    };
    GitHubClient::new(TEST_TOKEN.to_string(), &config).expect("Failed to build client")
}

/// Issue object as GitHub returns it
pub fn issue_json(owner: &str, repo: &str, number: u64, title: &str, body: &str) -> Value {
    json!({
        "number": number,
        "state": "open",
        "title": title,
        "body": body,
        "url": format!("https://api.github.com/repos/{owner}/{repo}/issues/{number}"),
        "html_url": format!("https://github.com/{owner}/{repo}/issues/{number}")
    })
}
