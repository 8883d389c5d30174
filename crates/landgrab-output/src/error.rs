//! Error types for writing output files.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing the cleaned table.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Could not create the directory holding the output file.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Could not create or truncate the output file.
    #[error("failed to create {path}: {source}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV serialization failed.
    #[error("failed to write CSV record: {0}")]
    Csv(#[from] csv::Error),

    /// Buffered data could not be flushed.
    #[error("failed to flush output: {0}")]
    Flush(#[source] std::io::Error),

    /// Polars DataFrame operation error.
    #[error("polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
