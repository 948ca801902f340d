//! Error types for the cleaning pipeline.
//!
//! Every stage fails fast and carries enough context (row index, column
//! name, file path) to diagnose a bad input without re-running under a
//! debugger. No stage silently coerces bad data into a default.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the pipeline stages.
///
/// Row indices are 0-based and count data rows only (the header is not a
/// row).
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Malformed input structure: missing header row, a ragged row, or a
    /// required column absent from the header.
    #[error("malformed input {}: {reason}", .path.display())]
    Format { path: PathBuf, reason: String },

    /// A field declared numeric holds a value that does not parse.
    #[error("row {row}, column '{column}': cannot parse {value:?} as {expected}")]
    Parse {
        row: usize,
        column: &'static str,
        value: String,
        expected: &'static str,
    },

    /// An operation received an empty value in a field it requires.
    #[error("row {row}: column '{column}' is empty")]
    MissingValue { row: usize, column: &'static str },

    /// Filesystem access failed on read or write.
    #[error("failed to access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Any other error from the CSV layer.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl PipelineError {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Build a `Format` error for the given input file.
    pub fn format(path: &std::path::Path, reason: impl Into<String>) -> Self {
        Self::Format {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;
