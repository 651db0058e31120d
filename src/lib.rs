//! Curatr - browse an image dataset, mark records to keep, export the subset
//!
//! This library loads a metadata table (CSV or JSON Lines), exposes the
//! first N records as a preview window, tracks a keep/discard flag per
//! record, and writes the kept records plus copies of their images.

use thiserror::Error;

pub mod browse;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dataset;
pub mod export;
pub mod resolve;
pub mod selection;
pub mod session;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum CuratrError {
    /// Metadata table could not be read or written
    #[error("Dataset error: {0}")]
    DatasetError(#[from] dataset::DatasetError),
    /// Navigation, selection, or export failed
    #[error("{0}")]
    SessionError(#[from] session::SessionError),
    /// Export aborted
    #[error("Export error: {0}")]
    ExportError(#[from] export::ExportError),
    /// Selection index outside the preview window
    #[error("Selection error: {0}")]
    SelectionError(#[from] selection::SelectionError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Terminal or prompt failure
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub use dataset::{MetadataTable, Record, TableFormat};
pub use export::{CollisionPolicy, ExportOptions, ExportSummary, ExportWarning, MissingImagePolicy};
pub use resolve::ImageResolver;
pub use selection::SelectionStore;
pub use session::{CurationSession, RecordView};
