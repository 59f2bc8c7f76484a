//! Warning channel injected into plugin components.

use tracing::warn;

/// Sink for host-visible warnings.
pub trait Diagnostics: Send + Sync {
    fn warn(&self, message: &str);
}

/// Forwards warnings to the `tracing` subscriber installed by [`crate::logging`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn warn(&self, message: &str) {
        warn!(target: "phantom", "{message}");
    }
}
