//! `saveToFile` backend: write UTF-8 text below the script directory.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::core::types::{ScriptContext, WriteOutcome, WriteRequest};
use crate::diagnostics::Diagnostics;

/// Why a write did not complete.
///
/// Never crosses the capability boundary; [`FileWriter`] turns it into a
/// warning and a `false` result.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("phantom.saveToFile - Could not open file: '{}'", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("phantom.saveToFile - Could not write file: '{}'", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Clone)]
pub struct FileWriter {
    diagnostics: Arc<dyn Diagnostics>,
}

impl FileWriter {
    pub fn new(diagnostics: Arc<dyn Diagnostics>) -> Self {
        Self { diagnostics }
    }

    /// Write `text` to `context.script_dir + file_name`, truncating.
    ///
    /// Returns `false` (after a warning naming the resolved path) when the
    /// file cannot be opened or written.
    pub fn write(&self, context: &ScriptContext, text: &str, file_name: &str) -> bool {
        self.write_request(context, WriteRequest { text, file_name })
            .into()
    }

    pub fn write_request(&self, context: &ScriptContext, request: WriteRequest<'_>) -> WriteOutcome {
        let path = context.resolve(request.file_name);
        match write_text(&path, request.text) {
            Ok(()) => {
                debug!(path = %path.display(), bytes = request.text.len(), "file written");
                WriteOutcome::Written
            }
            Err(err) => {
                debug!(path = %path.display(), error = ?err, "file write failed");
                self.diagnostics.warn(&err.to_string());
                WriteOutcome::Failed
            }
        }
    }
}

/// Create or truncate `path` and write `text` as UTF-8.
///
/// The handle is dropped before returning on every path. Errors on close are
/// not observable through `Drop`, so only open and write are checked.
pub fn write_text(path: &Path, text: &str) -> Result<(), WriteError> {
    let mut file = File::create(path).map_err(|source| WriteError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(text.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|source| WriteError::Write {
            path: path.to_path_buf(),
            source,
        })
}
