//! `widthopt` - a minimal command-line option parsing demo
//!
//! Declares a single integer option (`-w/--width`) and a help flag, parses
//! the process arguments with clap, and reports either a fixed help message
//! or a one-line parse error. A help request always wins over a parse error.

pub mod cli;
pub mod error;

use anyhow::Result;
use clap::Parser as _;
use cli::Args;
use error::CliError;
use std::ffi::OsString;
use tracing::debug;

/// Fixed text printed for `-h`, `-?` and `--help`
pub const HELP_TEXT: &str = "This is supposed to be helpful...";

/// What the command line asks for once parsing is done
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// A help flag was present somewhere on the command line
    Help,
    /// Options parsed cleanly
    Run(Args),
}

/// Parse a full argument vector, program name first.
///
/// # Errors
///
/// Returns [`CliError::Parse`] when the arguments do not match the declared
/// options and no help flag is present.
pub fn parse_invocation<I, T>(argv: I) -> Result<Invocation, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();

    if cli::help_requested(&argv) {
        debug!("Help flag present, skipping option parsing");
        return Ok(Invocation::Help);
    }

    let args = Args::try_parse_from(&argv)?;

    debug!("Parsed options: {args:?}");
    Ok(Invocation::Run(args))
}

/// Main entry point for the successful path
///
/// The width is accepted and nothing further is done with it.
pub fn run(args: &Args) -> Result<()> {
    debug!("Accepted width: {}", args.width);
    Ok(())
}
