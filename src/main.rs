//! # `widthopt`
//!
//! Minimal command-line option parsing demo.
//!
//! ## Usage
//!
//! ```sh
//! widthopt --width 42
//! widthopt -w 42
//! widthopt --help
//! ```
//!
//! Help and error messages go to stderr. Exit status is `0` for help or a
//! clean parse and `1` for a malformed command line. Set `RUST_LOG=debug`
//! to see the parse outcome.

use anyhow::{Result, anyhow};
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};
use widthopt::{HELP_TEXT, Invocation};

fn main() -> Result<()> {
    init_tracing()?;

    match widthopt::parse_invocation(std::env::args_os()) {
        // A call for help always takes precedence
        Ok(Invocation::Help) => {
            eprintln!("{HELP_TEXT}");
            std::process::exit(0);
        }
        Ok(Invocation::Run(args)) => {
            if let Err(err) = widthopt::run(&args) {
                error!("{}", err);
                std::process::exit(1);
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(err.exit_code());
        }
    }
}

/// Log to stderr only; stdout stays untouched.
fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow!("failed to initialize logging: {err}"))
}
