//! Central constants for the ghcli application

/// Default target repository for CLI commands
pub mod github {
    /// Default repository owner
    pub const DEFAULT_OWNER: &str = "mlambda";

    /// Default repository name
    pub const DEFAULT_REPO: &str = "tp-ghcli";

    pub use ghcli_github::{DEFAULT_API_BASE, DEFAULT_TIMEOUT_SECS, TOKEN_ENV_VAR};
}

/// Environment-based configuration
pub mod config {
    /// Overrides the GitHub API base URL
    pub const API_URL_ENV: &str = "GHCLI_API_URL";

    /// Overrides the request timeout, in seconds
    pub const TIMEOUT_ENV: &str = "GHCLI_TIMEOUT_SECS";

    /// Log filter used when RUST_LOG is unset
    pub const DEFAULT_LOG_FILTER: &str = "warn";

    /// Log filter used with --verbose
    pub const VERBOSE_LOG_FILTER: &str = "debug";
}

/// Process exit codes
pub mod exit {
    /// The token environment variable is not set
    pub const MISSING_CREDENTIAL: i32 = 1;
}

/// Form interface settings
pub mod forms {
    /// Line that ends a multi-line body
    pub const BODY_TERMINATOR: &str = ".";
}
