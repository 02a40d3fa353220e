//! Runtime configuration read from the environment

use crate::constants::config::{API_URL_ENV, TIMEOUT_ENV};
use crate::constants::github::{DEFAULT_API_BASE, DEFAULT_TIMEOUT_SECS};
use anyhow::{Result, anyhow};
use ghcli_github::ClientConfig;
use std::time::Duration;

/// Connection settings shared by the CLI and the form interface
///
/// The token is not part of the configuration; it is resolved separately so
/// that a missing token can be reported on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(API_URL_ENV) {
            let url = url.trim();
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(anyhow!(
                    "Invalid value '{}' for {}: expected an http(s) URL",
                    url,
                    API_URL_ENV
                ));
            }
            config.api_url = url.trim_end_matches('/').to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            config.timeout_secs = match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(anyhow!(
                        "Invalid value '{}' for {}: expected a positive number of seconds",
                        raw,
                        TIMEOUT_ENV
                    ));
                }
            };
        }

        Ok(config)
    }

    /// Settings for the issue client
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            ..Default::default()
        }
    }
}
