//! Tracing setup for the `puzzles` CLI.
//!
//! Answers are printed to stdout. Diagnostics go to stderr: `debug` events
//! name each input file as it is read (`read input`), and `info` events
//! report the answers computed for a day (`solved`). Both are hidden by the
//! default `warn` filter.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a compact stderr subscriber filtered by `RUST_LOG` (default `warn`).
///
/// # Example
/// ```bash
/// RUST_LOG=puzzles=debug cargo run -- solve 4
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
