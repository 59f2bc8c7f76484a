//! In-memory report buffer behind `window.__phantom_writeFile`.
//!
//! Pages record report output by filename while the run is in progress; the
//! harness flushes everything to disk once the run is finished.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use super::file_writer::FileWriter;
use crate::core::types::ScriptContext;

#[derive(Debug, Default)]
pub struct ResultsStore {
    entries: Mutex<BTreeMap<String, String>>,
}

/// Filenames written or skipped by [`ResultsStore::flush`], in filename order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlushReport {
    pub written: Vec<String>,
    pub failed: Vec<String>,
}

impl ResultsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `text` for `filename`; a later record for the same name wins.
    pub fn record(&self, filename: impl Into<String>, text: impl Into<String>) {
        let filename = filename.into();
        debug!(filename = %filename, "result recorded");
        self.lock().insert(filename, text.into());
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Take every recorded entry, leaving the store empty.
    pub fn drain(&self) -> Vec<(String, String)> {
        std::mem::take(&mut *self.lock()).into_iter().collect()
    }

    /// Drain the store and write each entry relative to `context`.
    ///
    /// Failed entries are dropped; the writer has already warned about them.
    pub fn flush(&self, writer: &FileWriter, context: &ScriptContext) -> FlushReport {
        let mut report = FlushReport::default();
        for (filename, text) in self.drain() {
            if writer.write(context, &text, &filename) {
                report.written.push(filename);
            } else {
                report.failed.push(filename);
            }
        }
        debug!(
            written = report.written.len(),
            failed = report.failed.len(),
            "results flushed"
        );
        report
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
