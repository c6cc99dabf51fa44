//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Required parameters were not supplied and prompting is disabled.
    #[error("Missing required argument(s): {}", .0.join(", "))]
    MissingArguments(Vec<&'static str>),

    /// Standard input ended while a value was being prompted for.
    #[error("Input closed while reading {0}")]
    InputClosed(&'static str),

    /// Configuration file problem.
    #[error("Configuration error in {}: {reason}", path.display())]
    Config {
        /// Offending file.
        path: PathBuf,
        /// Parser or IO message.
        reason: String,
    },

    /// Bond input file problem.
    #[error("Cannot read bond terms from {}: {reason}", path.display())]
    InputFile {
        /// Offending file.
        path: PathBuf,
        /// Parser or IO message.
        reason: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
