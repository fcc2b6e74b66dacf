//! Commands module - CLI command implementations.
//!
//! Each command is implemented in its own module and writes its report to
//! the given writer.

pub mod check;
pub mod constraints;
