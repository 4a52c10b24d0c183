//! Tracing setup.
//!
//! stdout carries the JSON response, so every log line goes to stderr.

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// - `quiet`: suppress all logging output
/// - `verbose`: enable debug-level logging
/// - otherwise `RUST_LOG`, defaulting to `info`
pub fn init_tracing(quiet: bool, verbose: bool) {
    let filter = if quiet {
        EnvFilter::new("off")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    // try_init: tests may install their own subscriber first.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .compact()
        .try_init();
}
