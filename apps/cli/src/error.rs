//! Error handling for the command-line tool

use std::path::PathBuf;
use thiserror::Error;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Cannot read {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output file already exists: {0} (use --force to overwrite)")]
    OutputExists(PathBuf),

    #[error("Unknown format: {0}")]
    UnknownFormat(String),
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
