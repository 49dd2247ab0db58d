//! Logging setup
//!
//! Diagnostics go through `tracing` to stderr. `RUST_LOG` wins when set;
//! otherwise the level is `warn`, or `debug` with `--debug`.

use tracing_subscriber::EnvFilter;

/// Default filter directive for a run
pub fn default_directive(debug: bool) -> &'static str {
    if debug {
        "heatmock=debug"
    } else {
        "warn"
    }
}

/// Install the global subscriber
///
/// Returns an error if a subscriber is already installed.
pub fn init_logging(debug: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
