//! Pure logic shared by the plugin layer.
//!
//! Nothing in here touches the filesystem. Modules operate on in-memory values
//! and return deterministic outputs suitable for tests.

pub mod path;
pub mod registry;
pub mod types;
