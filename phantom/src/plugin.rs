//! Startup registration of the Phantom plugin capabilities.

use std::sync::Arc;

use crate::capability::{Phantom, RecordResultCapability, SaveToFileCapability};
use crate::core::registry::Registry;
use crate::core::types::ScriptContext;
use crate::diagnostics::Diagnostics;
use crate::io::file_writer::FileWriter;
use crate::io::results::ResultsStore;

pub const PHANTOM_NAMESPACE: &str = "Phantom";
pub const SAVE_TO_FILE: &str = "saveToFile";

pub const WINDOW_NAMESPACE: &str = "window";
pub const PHANTOM_WRITE_FILE: &str = "__phantom_writeFile";

/// Register `Phantom.saveToFile`, writing relative to `context`.
pub fn register(registry: &mut Registry, context: ScriptContext, diagnostics: Arc<dyn Diagnostics>) {
    let phantom = Phantom::new(context, FileWriter::new(diagnostics));
    registry.register(
        PHANTOM_NAMESPACE,
        SAVE_TO_FILE,
        Arc::new(SaveToFileCapability::new(phantom)),
    );
}

/// Register every plugin capability.
///
/// Returns the store behind `window.__phantom_writeFile`; the host flushes it
/// when the run finishes.
pub fn register_all(
    registry: &mut Registry,
    context: ScriptContext,
    diagnostics: Arc<dyn Diagnostics>,
) -> Arc<ResultsStore> {
    register(registry, context, diagnostics);
    let store = Arc::new(ResultsStore::new());
    registry.register(
        WINDOW_NAMESPACE,
        PHANTOM_WRITE_FILE,
        Arc::new(RecordResultCapability::new(store.clone())),
    );
    store
}
