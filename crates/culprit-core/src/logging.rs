//! Tracing subscriber setup for embedders and integration tests.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber, filter taken from `RUST_LOG` with an
/// `info` default. Safe to call more than once; later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
