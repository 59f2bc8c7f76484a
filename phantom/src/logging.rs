//! Tracing setup for the host harness.
//!
//! Plugin warnings go through [`crate::diagnostics::TracingDiagnostics`], so
//! they share this subscriber with debug output. Output goes to stderr.

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`; falls back to `default_filter` if unset or unparsable.
/// Colors are only used when stderr is a terminal.
///
/// # Example
/// ```bash
/// RUST_LOG=phantom=debug phantom save out.txt --text hello
/// ```
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .compact(),
        )
        .init();
}
