//! Metadata table error types
//!
//! Errors raised while reading or writing the metadata table. I/O errors
//! carry the path that failed so the user can tell the input table apart
//! from the output table.

use super::TableFormat;
use std::path::PathBuf;
use thiserror::Error;

/// Metadata table errors
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Reading or writing a table file failed
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing table rows failed
    #[error("Failed to write rows: {0}")]
    Write(#[from] std::io::Error),

    /// Malformed CSV (ragged rows, invalid UTF-8, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A JSON Lines row failed to parse
    #[error("Invalid JSON on line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A row parsed but does not have the expected shape
    #[error("Invalid row on line {line}: {message}")]
    InvalidRow { line: usize, message: String },

    /// The table lacks a required column
    #[error("Missing required column '{0}'")]
    MissingColumn(String),

    /// The file extension does not name a supported table format
    #[error("Unsupported metadata format: {0}")]
    UnsupportedFormat(String),

    /// A record was loaded from a different format than the one being written
    #[error("Record {index} cannot be written as {format}")]
    FormatMismatch { index: usize, format: TableFormat },
}

impl DatasetError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for metadata table operations
pub type Result<T> = std::result::Result<T, DatasetError>;
