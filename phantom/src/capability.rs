//! Typed capability interfaces and their script-call bindings.
//!
//! Host objects implement the typed traits ([`SaveToFile`]); the registry only
//! stores [`Capability`] adapters that check script arguments before
//! delegating to them.

use std::sync::Arc;

use serde_json::Value;

use crate::core::types::ScriptContext;
use crate::io::file_writer::FileWriter;
use crate::io::results::ResultsStore;

/// Why a script call could not be dispatched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CallError {
    #[error("unknown namespace: {0}")]
    UnknownNamespace(String),
    #[error("unknown capability: {namespace}.{name}")]
    UnknownCapability { namespace: String, name: String },
    #[error("expected {expected} arguments, got {actual}")]
    Arity { expected: usize, actual: usize },
    #[error("argument {index} must be a string")]
    NotAString { index: usize },
}

/// A callable exposed to scripts.
pub trait Capability: Send + Sync {
    fn invoke(&self, args: &[Value]) -> Result<Value, CallError>;
}

/// `saveToFile(text, fileName) -> bool`.
pub trait SaveToFile {
    fn save_to_file(&self, text: &str, file_name: &str) -> bool;
}

/// The `Phantom` namespace object seen by scripts.
#[derive(Clone)]
pub struct Phantom {
    context: ScriptContext,
    writer: FileWriter,
}

impl Phantom {
    pub fn new(context: ScriptContext, writer: FileWriter) -> Self {
        Self { context, writer }
    }

    pub fn context(&self) -> &ScriptContext {
        &self.context
    }
}

impl SaveToFile for Phantom {
    fn save_to_file(&self, text: &str, file_name: &str) -> bool {
        self.writer.write(&self.context, text, file_name)
    }
}

/// Binds any [`SaveToFile`] implementation to `(text, fileName)` arguments.
pub struct SaveToFileCapability<S> {
    target: S,
}

impl<S> SaveToFileCapability<S> {
    pub fn new(target: S) -> Self {
        Self { target }
    }
}

impl<S: SaveToFile + Send + Sync> Capability for SaveToFileCapability<S> {
    fn invoke(&self, args: &[Value]) -> Result<Value, CallError> {
        let [text, file_name] = string_args::<2>(args)?;
        Ok(Value::Bool(self.target.save_to_file(text, file_name)))
    }
}

/// `__phantom_writeFile(filename, text)`: buffer report output in memory.
pub struct RecordResultCapability {
    store: Arc<ResultsStore>,
}

impl RecordResultCapability {
    pub fn new(store: Arc<ResultsStore>) -> Self {
        Self { store }
    }
}

impl Capability for RecordResultCapability {
    fn invoke(&self, args: &[Value]) -> Result<Value, CallError> {
        let [filename, text] = string_args::<2>(args)?;
        self.store.record(filename, text);
        Ok(Value::Null)
    }
}

/// Borrow exactly `N` string arguments.
pub fn string_args<const N: usize>(args: &[Value]) -> Result<[&str; N], CallError> {
    if args.len() != N {
        return Err(CallError::Arity {
            expected: N,
            actual: args.len(),
        });
    }
    let mut out: [&str; N] = [""; N];
    for (index, (slot, value)) in out.iter_mut().zip(args).enumerate() {
        *slot = value.as_str().ok_or(CallError::NotAString { index })?;
    }
    Ok(out)
}
