//! Stable exit codes for the `phantom` host harness.

/// The capability returned `true`.
pub const OK: i32 = 0;
/// `saveToFile` returned `false`.
pub const WRITE_FAILED: i32 = 1;
/// Invalid config, arguments, or any other harness error.
pub const INVALID: i32 = 2;
