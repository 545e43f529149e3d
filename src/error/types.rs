//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for widthopt
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CliError {
    /// Parse Error - malformed option value, unknown option or stray argument
    #[error("Error in command line: {message}")]
    Parse { message: String },
}

impl CliError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Parse { .. } => 1,
        }
    }

    /// Create a parse error
    #[inline]
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// The parser's description of what went wrong, without the prefix
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        match self {
            Self::Parse { message } => message,
        }
    }
}

impl From<clap::Error> for CliError {
    /// Reduce clap's multi-line report to its first line, minus the
    /// `error: ` lead-in.
    fn from(err: clap::Error) -> Self {
        let rendered = err.to_string();
        let first_line = rendered
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or_default();
        let message = first_line.strip_prefix("error:").unwrap_or(first_line).trim();

        if message.is_empty() {
            return Self::parse(format!("invalid arguments ({:?})", err.kind()));
        }
        Self::parse(message)
    }
}
