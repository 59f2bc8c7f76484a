//! Side-effecting plugin components.

pub mod config;
pub mod file_writer;
pub mod results;
