//! Tracing subscriber setup

use crate::constants::config::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};
use tracing_subscriber::{EnvFilter, Layer, fmt::layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Build the log filter
///
/// `--verbose` wins over `RUST_LOG`; otherwise `RUST_LOG` is used when set
/// and valid, falling back to [`DEFAULT_LOG_FILTER`].
pub fn build_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new(VERBOSE_LOG_FILTER);
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install a compact stderr subscriber
///
/// Stdout stays reserved for command output. Calling this more than once is
/// harmless; later calls are ignored.
pub fn init_logging(verbose: bool) {
    let _ = tracing_subscriber::registry()
        .with(
            layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_filter(build_filter(verbose)),
        )
        .try_init();
}
