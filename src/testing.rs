//! Testing utilities for curatr
//!
//! This module provides a `Fixture` that lays out a small dataset on disk
//! (metadata CSV plus one image file per record) inside a temporary
//! directory that is removed on drop.
//!
//! Only available when compiled with `cfg(test)`.

use crate::dataset::MetadataTable;
use crate::export::ExportOptions;
use crate::resolve::ImageResolver;
use crate::session::CurationSession;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Header written by every fixture table
pub const FIXTURE_HEADER: &str =
    "image_path,caption,subset,split,pathology,roi_text,noisy_text,corrected_text";

/// Temporary dataset with `n` records named `img_<i>.jpg`
///
/// # Examples
/// ```ignore
/// let fixture = Fixture::new(5);
/// let mut session = fixture.session(100);
/// session.toggle_current(true).unwrap();
/// let summary = session.export(&fixture.export_options()).unwrap();
/// assert_eq!(summary.records_written, 1);
/// ```
pub struct Fixture {
    dir: TempDir,
    records: usize,
}

impl Fixture {
    /// Create a fixture with `n` records and their images
    ///
    /// # Panics
    /// Panics if the temporary directory or any file cannot be created.
    pub fn new(n: usize) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let images = dir.path().join("images");
        fs::create_dir_all(&images).expect("Failed to create image dir");

        let mut csv = format!("{FIXTURE_HEADER}\n");
        for i in 0..n {
            csv.push_str(&Self::row(i));
            csv.push('\n');
            fs::write(images.join(format!("img_{i}.jpg")), format!("image {i}"))
                .expect("Failed to write image");
        }
        fs::write(dir.path().join("metadata.csv"), csv).expect("Failed to write metadata");

        Self { dir, records: n }
    }

    /// CSV row written for record `i`
    #[must_use]
    pub fn row(i: usize) -> String {
        let split = if i % 2 == 0 { "train" } else { "test" };
        format!("img_{i}.jpg,caption {i},subset,{split},,roi {i},,")
    }

    /// Number of records in the fixture table
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records
    }

    /// Root of the temporary directory
    #[must_use]
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the metadata CSV
    #[must_use]
    pub fn metadata_path(&self) -> PathBuf {
        self.root().join("metadata.csv")
    }

    /// Directory holding the source images
    #[must_use]
    pub fn image_dir(&self) -> PathBuf {
        self.root().join("images")
    }

    /// Delete the image of record `i`
    ///
    /// # Panics
    /// Panics if the file cannot be removed.
    pub fn remove_image(&self, i: usize) {
        fs::remove_file(self.image_dir().join(format!("img_{i}.jpg")))
            .expect("Failed to remove image");
    }

    /// Load the fixture table
    ///
    /// # Panics
    /// Panics if the table cannot be loaded.
    #[must_use]
    pub fn table(&self) -> MetadataTable {
        MetadataTable::load(&self.metadata_path()).expect("Failed to load fixture table")
    }

    /// Start a session over the first `preview` records
    #[must_use]
    pub fn session(&self, preview: usize) -> CurationSession {
        CurationSession::new(self.table(), preview, ImageResolver::new(self.image_dir()))
    }

    /// Export destination inside the fixture directory
    #[must_use]
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions::new(self.root().join("selected.csv"), self.root().join("selected"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_layout() {
        let fixture = Fixture::new(3);
        assert!(fixture.metadata_path().exists());
        assert!(fixture.image_dir().join("img_2.jpg").exists());
        assert_eq!(fixture.table().len(), 3);
        assert_eq!(fixture.len(), 3);
    }

    #[test]
    fn test_fixture_cleanup() {
        let root = {
            let fixture = Fixture::new(1);
            fixture.root().to_path_buf()
        };
        assert!(!root.exists());
    }
}
