//! Image resolution: map a record's stored path to a file on disk
//!
//! Stored paths are relative to the image directory. Datasets are often
//! copied between filesystems that disagree about extension case
//! (`slide.jpg` in the table, `slide.JPG` on disk), so resolution falls back
//! to a same-stem search that compares extensions case-insensitively.

use byte_unit::{Byte, UnitType};
use glob::{MatchOptions, Pattern};
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions tried when a stored path has none
pub const IMAGE_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "bmp", "tiff", "tif", "webp"];

/// Locates image files for records under a base directory
#[derive(Debug, Clone)]
pub struct ImageResolver {
    base_dir: PathBuf,
}

/// Display information about a resolved image file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    /// Resolved path
    pub path: PathBuf,
    /// File size in bytes
    pub size: u64,
    /// Pixel dimensions, when the header could be decoded
    pub dimensions: Option<(u32, u32)>,
    /// Detected image format name
    pub format: Option<String>,
}

impl ImageInfo {
    /// File size formatted for display (e.g. "1.21 MiB")
    #[must_use]
    pub fn human_size(&self) -> String {
        Byte::from_u64(self.size)
            .get_appropriate_unit(UnitType::Binary)
            .to_string()
    }

    /// One-line description: format, dimensions, and size
    #[must_use]
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if let Some(format) = &self.format {
            parts.push(format.clone());
        }
        if let Some((w, h)) = self.dimensions {
            parts.push(format!("{w}×{h}"));
        }
        parts.push(self.human_size());
        parts.join("  ")
    }
}

impl ImageResolver {
    /// Create a resolver for images under `base_dir`
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Directory stored paths are resolved against
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Find the file backing `stored`, or `None` if nothing matches
    ///
    /// Tries the exact path first, then files with the same stem whose
    /// extension matches ignoring ASCII case. A stored path without an
    /// extension matches any of [`IMAGE_EXTENSIONS`].
    #[must_use]
    pub fn resolve(&self, stored: &str) -> Option<PathBuf> {
        if stored.is_empty() {
            return None;
        }

        let candidate = self.base_dir.join(stored);
        if candidate.is_file() {
            return Some(candidate);
        }

        let stem = candidate.file_stem()?.to_str()?;
        let parent = candidate.parent()?;
        let wanted_ext = candidate.extension().and_then(|e| e.to_str());

        let pattern = format!(
            "{}/{}.*",
            Pattern::escape(&parent.to_string_lossy()),
            Pattern::escape(stem)
        );
        let options = MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: false,
        };

        let mut matches: Vec<PathBuf> = glob::glob_with(&pattern, options)
            .ok()?
            .filter_map(std::result::Result::ok)
            .filter(|path| path.is_file() && path.file_stem().and_then(|s| s.to_str()) == Some(stem))
            .filter(|path| {
                let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
                wanted_ext.map_or_else(
                    || IMAGE_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)),
                    |wanted| ext.eq_ignore_ascii_case(wanted),
                )
            })
            .collect();

        matches.sort();
        let found = matches.into_iter().next();
        if found.is_none() {
            tracing::debug!(stored, base = %self.base_dir.display(), "No image file matched");
        }
        found
    }

    /// Gather size, dimensions, and format of an image file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file metadata cannot be read. Undecodable
    /// images are not an error; their dimensions and format are left empty.
    pub fn inspect(path: &Path) -> std::io::Result<ImageInfo> {
        let size = fs::metadata(path)?.len();

        let reader = image::ImageReader::open(path)?.with_guessed_format()?;
        let format = reader
            .format()
            .map(|f| format!("{f:?}").to_ascii_uppercase());
        let dimensions = reader.into_dimensions().ok();

        Ok(ImageInfo {
            path: path.to_path_buf(),
            size,
            dimensions,
            format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, b"not really an image").unwrap();
        path
    }

    #[test]
    fn test_exact_match() {
        let temp = TempDir::new().unwrap();
        let path = touch(temp.path(), "a.jpg");
        let resolver = ImageResolver::new(temp.path());
        assert_eq!(resolver.resolve("a.jpg"), Some(path));
    }

    #[test]
    fn test_extension_case_insensitive() {
        let temp = TempDir::new().unwrap();
        let path = touch(temp.path(), "slide.JPG");
        let resolver = ImageResolver::new(temp.path());
        assert_eq!(resolver.resolve("slide.jpg"), Some(path));
    }

    #[test]
    fn test_stem_is_case_sensitive() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "Slide.jpg");
        let resolver = ImageResolver::new(temp.path());
        assert_eq!(resolver.resolve("slide.jpg"), None);
    }

    #[test]
    fn test_nested_relative_path() {
        let temp = TempDir::new().unwrap();
        let path = touch(temp.path(), "part_1/x.PNG");
        let resolver = ImageResolver::new(temp.path());
        assert_eq!(resolver.resolve("part_1/x.png"), Some(path));
    }

    #[test]
    fn test_missing_extension_uses_known_list() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "b.txt");
        let path = touch(temp.path(), "b.Png");
        let resolver = ImageResolver::new(temp.path());
        assert_eq!(resolver.resolve("b"), Some(path));
    }

    #[test]
    fn test_not_found() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "other.jpg");
        let resolver = ImageResolver::new(temp.path());
        assert_eq!(resolver.resolve("missing.jpg"), None);
        assert_eq!(resolver.resolve(""), None);
    }

    #[test]
    fn test_inspect_undecodable_file() {
        let temp = TempDir::new().unwrap();
        let path = touch(temp.path(), "c.jpg");
        let info = ImageResolver::inspect(&path).unwrap();
        assert_eq!(info.size, 19);
        assert_eq!(info.dimensions, None);
        assert!(!info.human_size().is_empty());
    }

    #[test]
    fn test_info_summary() {
        let info = ImageInfo {
            path: PathBuf::from("a.png"),
            size: 2048,
            dimensions: Some((64, 32)),
            format: Some("PNG".to_string()),
        };
        let summary = info.summary();
        assert!(summary.starts_with("PNG  64×32  "));

        let bare = ImageInfo {
            dimensions: None,
            format: None,
            ..info
        };
        assert_eq!(bare.summary(), bare.human_size());
    }
}
