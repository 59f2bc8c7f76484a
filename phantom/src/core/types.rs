//! Shared value types for the file-writing capability.

use std::path::PathBuf;

use super::path::resolve;

/// Script execution context owned by the host.
///
/// Only the base directory is read; the plugin never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScriptContext {
    script_dir: String,
}

impl ScriptContext {
    pub fn new(script_dir: impl Into<String>) -> Self {
        Self {
            script_dir: script_dir.into(),
        }
    }

    pub fn script_dir(&self) -> &str {
        &self.script_dir
    }

    /// Target path for `file_name`, see [`resolve`].
    pub fn resolve(&self, file_name: &str) -> PathBuf {
        resolve(&self.script_dir, file_name)
    }
}

/// One `saveToFile` call; lives only for the duration of the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteRequest<'a> {
    pub text: &'a str,
    pub file_name: &'a str,
}

/// Result of a write. Scripts only ever see this as a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Failed,
}

impl WriteOutcome {
    pub fn is_written(self) -> bool {
        self == WriteOutcome::Written
    }
}

impl From<WriteOutcome> for bool {
    fn from(outcome: WriteOutcome) -> Self {
        outcome.is_written()
    }
}
