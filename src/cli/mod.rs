//! Command-line interface module
//!
//! Declares the recognized options and the help-flag scan

pub mod args;

pub use args::*;
