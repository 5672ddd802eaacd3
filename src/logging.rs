//! Diagnostic tracing for the solvers.
//!
//! Answers and `--verbose` traces are program output and go to stdout.
//! Everything emitted through `tracing` goes to stderr and is filtered by
//! `RUST_LOG`, so it never changes what a solver prints.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`, defaulting to `warn`. Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=aoc2025=debug aoc2025 solve 2 input.txt
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
