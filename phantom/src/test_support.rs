//! Test-only helpers for plugin tests.

use std::fs;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tempfile::TempDir;

use crate::core::types::ScriptContext;
use crate::diagnostics::Diagnostics;

/// Diagnostics sink that keeps every warning in memory.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    warnings: Mutex<Vec<String>>,
}

impl RecordingDiagnostics {
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().expect("warnings lock").clone()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn warn(&self, message: &str) {
        self.warnings
            .lock()
            .expect("warnings lock")
            .push(message.to_string());
    }
}

/// Temporary script directory, removed on drop.
pub struct ScriptDir {
    temp: TempDir,
}

impl ScriptDir {
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            temp: tempfile::tempdir()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Context whose `script_dir` ends with a separator, like a host would set it.
    pub fn context(&self) -> ScriptContext {
        ScriptContext::new(format!("{}/", self.path().display()))
    }

    pub fn read(&self, file_name: &str) -> io::Result<String> {
        fs::read_to_string(self.path().join(file_name))
    }
}
