//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Initialize the process-wide subscriber. `RUST_LOG` overrides the
/// default `info` filter.
pub fn setup_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_target(true)
        .with_level(true)
        .compact()
        .with_env_filter(filter)
        .init();
}
