//! Export of the selected subset
//!
//! Writes a filtered metadata table and a flat directory holding copies of
//! the selected records' images. Export is best-effort per record: a missing
//! image is reported as a warning, never an abort. Whole-operation failures
//! (directory creation, copy, table write) abort immediately and leave any
//! files already copied in place.
//!
//! # Workflow
//!
//! ```text
//! selected records + resolved images
//!     ↓
//! plan copies (missing images, filename collisions)
//!     ↓
//! create output image directory
//!     ↓
//! copy images (overwriting existing output files)
//!     ↓
//! write filtered table
//! ```

use crate::dataset::{DatasetError, MetadataTable, Record};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// What to do with a selected record whose image file cannot be found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MissingImagePolicy {
    /// Keep the record in the output table with its original path
    #[default]
    Include,
    /// Leave the record out of the output table
    Exclude,
}

/// What to do when two selected records resolve to images with the same
/// file name but different source files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Keep the first image, report the rest as warnings
    #[default]
    Skip,
    /// Let the last image win, report the collision as a warning
    Overwrite,
    /// Abort the export before copying anything
    Fail,
}

/// Destination and policies for an export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Output metadata table (replaced if present)
    pub table_path: PathBuf,
    /// Output image directory (created if absent)
    pub image_dir: PathBuf,
    pub missing_images: MissingImagePolicy,
    pub collisions: CollisionPolicy,
}

impl ExportOptions {
    /// Options with default policies
    #[must_use]
    pub fn new(table_path: impl Into<PathBuf>, image_dir: impl Into<PathBuf>) -> Self {
        Self {
            table_path: table_path.into(),
            image_dir: image_dir.into(),
            missing_images: MissingImagePolicy::default(),
            collisions: CollisionPolicy::default(),
        }
    }
}

/// A selected record paired with its resolved image file
#[derive(Debug, Clone, Copy)]
pub struct ExportItem<'a> {
    pub record: &'a Record,
    pub image: Option<&'a Path>,
}

/// Non-fatal problems collected during an export
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportWarning {
    /// No file matched the record's stored image path
    ImageNotFound { index: usize, stored_path: String },
    /// Another selected record's image already claimed this file name
    FilenameCollision {
        index: usize,
        file_name: String,
        other_index: usize,
    },
}

impl std::fmt::Display for ExportWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ImageNotFound { index, stored_path } => {
                write!(f, "Record {index}: image not found: {stored_path}")
            }
            Self::FilenameCollision {
                index,
                file_name,
                other_index,
            } => write!(
                f,
                "Record {index}: image name '{file_name}' collides with record {other_index}"
            ),
        }
    }
}

/// Outcome of a completed export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub records_written: usize,
    pub images_copied: usize,
    pub images_missing: usize,
    pub warnings: Vec<ExportWarning>,
    pub table_path: PathBuf,
    pub image_dir: PathBuf,
}

/// Whole-operation export failures
#[derive(Debug, Error)]
pub enum ExportError {
    /// Directory creation or image copy failed
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the output table failed
    #[error("Failed to write output table: {0}")]
    Table(#[from] DatasetError),

    /// Two selected records map to the same output file name
    #[error("Records {first} and {second} both export an image named '{file_name}'")]
    FilenameCollision {
        file_name: String,
        first: usize,
        second: usize,
    },
}

/// Result type for export operations
pub type Result<T> = std::result::Result<T, ExportError>;

/// One planned image copy
struct PlannedCopy<'a> {
    index: usize,
    source: &'a Path,
    file_name: OsString,
}

/// Export `items` (already filtered and in index order) to `options`
///
/// # Errors
///
/// Returns `ExportError::FilenameCollision` under `CollisionPolicy::Fail`,
/// or `ExportError::Io` / `ExportError::Table` when the filesystem refuses
/// a write. Files copied before a failure are left in place.
pub fn run(
    table: &MetadataTable,
    items: &[ExportItem<'_>],
    options: &ExportOptions,
) -> Result<ExportSummary> {
    let mut warnings = Vec::new();
    let mut images_missing = 0;
    let mut rows: Vec<&Record> = Vec::with_capacity(items.len());
    let mut copies: Vec<PlannedCopy<'_>> = Vec::new();
    let mut claimed: HashMap<OsString, usize> = HashMap::new();

    for item in items {
        let index = item.record.index();

        let Some(source) = item.image else {
            tracing::warn!(index, stored = item.record.image_path(), "Image not found");
            images_missing += 1;
            warnings.push(ExportWarning::ImageNotFound {
                index,
                stored_path: item.record.image_path().to_string(),
            });
            if options.missing_images == MissingImagePolicy::Include {
                rows.push(item.record);
            }
            continue;
        };
        rows.push(item.record);

        let Some(file_name) = source.file_name().map(OsString::from) else {
            continue;
        };

        let Some(&slot) = claimed.get(&file_name) else {
            claimed.insert(file_name.clone(), copies.len());
            copies.push(PlannedCopy {
                index,
                source,
                file_name,
            });
            continue;
        };

        let existing = &mut copies[slot];
        if existing.source == source {
            continue;
        }

        let name = file_name.to_string_lossy().into_owned();
        match options.collisions {
            CollisionPolicy::Fail => {
                return Err(ExportError::FilenameCollision {
                    file_name: name,
                    first: existing.index,
                    second: index,
                });
            }
            CollisionPolicy::Skip => {
                tracing::warn!(index, file_name = %name, "Skipping colliding image");
                warnings.push(ExportWarning::FilenameCollision {
                    index,
                    file_name: name,
                    other_index: existing.index,
                });
            }
            CollisionPolicy::Overwrite => {
                tracing::warn!(index, file_name = %name, "Colliding image replaces earlier one");
                warnings.push(ExportWarning::FilenameCollision {
                    index: existing.index,
                    file_name: name,
                    other_index: index,
                });
                existing.index = index;
                existing.source = source;
            }
        }
    }

    fs::create_dir_all(&options.image_dir).map_err(|source| ExportError::Io {
        path: options.image_dir.clone(),
        source,
    })?;

    let mut images_copied = 0;
    for copy in &copies {
        let dest = options.image_dir.join(&copy.file_name);
        if !is_same_file(copy.source, &dest) {
            copy_image(copy.source, &dest).map_err(|source| ExportError::Io {
                path: dest.clone(),
                source,
            })?;
        }
        images_copied += 1;
    }

    let records_written = table.write_subset(&options.table_path, rows)?;

    tracing::info!(
        records_written,
        images_copied,
        images_missing,
        table = %options.table_path.display(),
        images = %options.image_dir.display(),
        "Export complete"
    );

    Ok(ExportSummary {
        records_written,
        images_copied,
        images_missing,
        warnings,
        table_path: options.table_path.clone(),
        image_dir: options.image_dir.clone(),
    })
}

/// Copy `source` to `dest`, keeping its modification time
fn copy_image(source: &Path, dest: &Path) -> io::Result<()> {
    fs::copy(source, dest)?;
    let modified = fs::metadata(source)?.modified()?;
    fs::File::options().write(true).open(dest)?.set_modified(modified)
}

/// Copying a file onto itself would truncate it
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
