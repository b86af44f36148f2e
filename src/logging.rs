//! Logging setup
//!
//! Diagnostics go to stderr so stdout stays clean for tables, JSON and CSV.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub(crate) const DEFAULT_LEVEL: &str = "warn";

/// Pick the filter directive: `--debug` wins, then the configured level
fn directive(debug: bool, configured: Option<&str>) -> String {
    if debug {
        return "debug".to_string();
    }
    configured
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or(DEFAULT_LEVEL)
        .to_string()
}

/// Install the global subscriber. `RUST_LOG` overrides the configured
/// level unless `--debug` was given.
pub(crate) fn init(debug_flag: bool, configured: Option<&str>) {
    let filter = if debug_flag {
        EnvFilter::new(directive(true, None))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(directive(false, configured)))
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(debug_flag)
        .without_time();

    // A second init (tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();

    tracing::debug!(debug_flag, configured, "logging initialized");
}
