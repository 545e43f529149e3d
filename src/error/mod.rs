//! Error handling module
//!
//! Defines the command-line error type and its exit code

pub mod types;

pub use types::*;
