//! Structured logging for the calldata-bench binaries.
//!
//! Every subscriber writes to stderr. Stdout belongs to command output: the
//! CLI prints records as JSON there and must not interleave log lines.
//!
//! The level is taken from `RUST_LOG` when set, otherwise from a
//! per-binary default.

use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogFormat;

/// Default filter for the HTTP service.
pub const SERVICE_DEFAULT_FILTER: &str = "info";

/// Default filter for the CLI; per-record progress is hidden unless asked for.
pub const CLI_DEFAULT_FILTER: &str = "warn";

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Initialize service logging in the configured format.
///
/// # Example
/// ```no_run
/// use calldata_core::{logging, LogFormat};
///
/// logging::init_with_format(LogFormat::Json);
/// tracing::info!(service = "calldata-api", "Service started");
/// ```
pub fn init_with_format(format: LogFormat) {
    let registry = tracing_subscriber::registry().with(env_filter(SERVICE_DEFAULT_FILTER));
    match format {
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .with_thread_ids(true),
            )
            .init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .with_thread_ids(true),
            )
            .init(),
    }
}

/// Initialize compact stderr logging for command-line tools.
pub fn init_cli() {
    tracing_subscriber::registry()
        .with(env_filter(CLI_DEFAULT_FILTER))
        .with(
            fmt::layer()
                .compact()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filters_parse() {
        // The global subscriber can only be installed once per process, so
        // only filter construction is checked here. Stdout cleanliness of
        // the CLI is covered by crates/crypto/tests/cli.rs.
        for default in [SERVICE_DEFAULT_FILTER, CLI_DEFAULT_FILTER] {
            let _ = EnvFilter::new(default);
            let _ = env_filter(default);
        }
    }
}
