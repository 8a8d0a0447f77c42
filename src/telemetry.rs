//! Telemetry initialisation for the feed service.
//!
//! The stub uses a lightweight setup: structured JSON logs to stdout only.
//! No metrics or trace export — there is nothing meaningful to measure in a
//! fixed-value feed.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initialise the tracing subscriber.
///
/// Outputs structured JSON logs to stdout. `RUST_LOG` takes precedence over
/// the configured log level when set.
///
/// # Errors
///
/// Returns an error if the subscriber has already been set.
pub fn init(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise tracing subscriber: {e}"))
}
