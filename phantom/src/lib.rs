//! Phantom script plugins.
//!
//! Exposes `Phantom.saveToFile(text, fileName)` to host-managed scripts: the
//! text is written as UTF-8 to `scriptDir + fileName` and the script gets back
//! a success flag. The layout follows a strict split:
//!
//! - **[`core`]**: the data model, path resolution, and the capability
//!   [`core::registry::Registry`]. No I/O.
//! - **[`io`]**: the file writer, the page results buffer, and config loading.
//!
//! [`capability`] holds the typed interfaces and script bindings, and
//! [`plugin`] wires them into a registry at startup.

pub mod capability;
pub mod core;
pub mod diagnostics;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod plugin;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
