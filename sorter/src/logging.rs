//! Development-time tracing for debugging the sorter.
//!
//! Tracing goes to stderr and never mixes with classification output on
//! stdout, so scripts can consume `sorter classify` regardless of `RUST_LOG`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber for development logging.
///
/// Reads `RUST_LOG`; falls back to `default_filter` (from config) if unset
/// or unparsable. Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=sorter=debug sorter classify 150 10 10 20
/// ```
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
