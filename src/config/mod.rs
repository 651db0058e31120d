//! Configuration module for curatr
//!
//! Manages dataset locations, the preview window size, and export policies.
//! Values are layered: built-in defaults, then the TOML config file in the
//! user's config directory (or `--config`), then `CURATR_*` environment
//! variables, then command-line flags.

mod setup;

pub use setup::interactive_setup;

use crate::export::{CollisionPolicy, ExportOptions, MissingImagePolicy};
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default number of records in the preview window
pub const DEFAULT_PREVIEW_SIZE: usize = 100;

const fn default_preview_size() -> usize {
    DEFAULT_PREVIEW_SIZE
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CuratrConfig {
    /// Metadata table to curate (CSV or JSON Lines)
    #[serde(default)]
    pub metadata_path: Option<PathBuf>,

    /// Directory the table's image paths are relative to
    #[serde(default)]
    pub image_dir: Option<PathBuf>,

    /// Number of leading records available for browsing
    #[serde(default = "default_preview_size")]
    pub preview_size: usize,

    /// Where the filtered table is written
    #[serde(default)]
    pub output_table: Option<PathBuf>,

    /// Where selected images are copied
    #[serde(default)]
    pub output_image_dir: Option<PathBuf>,

    /// Whether records with missing images stay in the output table
    #[serde(default)]
    pub missing_image_policy: MissingImagePolicy,

    /// How duplicate image file names among selected records are handled
    #[serde(default)]
    pub collision_policy: CollisionPolicy,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Write log output to this file instead of stderr
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for CuratrConfig {
    fn default() -> Self {
        Self {
            metadata_path: None,
            image_dir: None,
            preview_size: DEFAULT_PREVIEW_SIZE,
            output_table: None,
            output_image_dir: None,
            missing_image_policy: MissingImagePolicy::default(),
            collision_policy: CollisionPolicy::default(),
            quiet: false,
            log_file: None,
        }
    }
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetOverrides {
    pub metadata_path: Option<PathBuf>,
    pub image_dir: Option<PathBuf>,
    pub preview_size: Option<usize>,
    pub output_table: Option<PathBuf>,
    pub output_image_dir: Option<PathBuf>,
    pub missing_image_policy: Option<MissingImagePolicy>,
    pub collision_policy: Option<CollisionPolicy>,
}

/// Fully resolved settings for one dataset session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSettings {
    pub metadata_path: PathBuf,
    pub image_dir: PathBuf,
    pub preview_size: usize,
    pub export: ExportOptions,
}

impl CuratrConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("curatr").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// A missing config file is not an error; defaults and environment
    /// variables still apply.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file or environment cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        Self::load_from(&path, false)
    }

    /// Load configuration from `path`, layered under `CURATR_*` variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `required` is set and the file is missing,
    /// or if any source fails to parse.
    pub fn load_from(path: &Path, required: bool) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(Environment::with_prefix("CURATR").try_parsing(true))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Combine this configuration with command-line overrides
    ///
    /// Unset outputs default to siblings of the metadata table:
    /// `<stem>_select.<ext>` for the table and `<stem>_select/` for images.
    /// An unset image directory defaults to the table's directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no metadata table is configured or the
    /// preview size is zero.
    pub fn dataset_settings(&self, overrides: &DatasetOverrides) -> Result<DatasetSettings, ConfigError> {
        let metadata_path = overrides
            .metadata_path
            .clone()
            .or_else(|| self.metadata_path.clone())
            .ok_or_else(|| {
                ConfigError::Message(
                    "No metadata table configured; pass --metadata or set metadata_path".to_string(),
                )
            })?;

        let preview_size = overrides.preview_size.unwrap_or(self.preview_size);
        if preview_size == 0 {
            return Err(ConfigError::Message("preview_size must be at least 1".to_string()));
        }

        let base = metadata_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let stem = metadata_path
            .file_stem()
            .map_or_else(|| "metadata".into(), |s| s.to_string_lossy().into_owned());
        let ext = metadata_path
            .extension()
            .map_or_else(|| "csv".into(), |e| e.to_string_lossy().into_owned());

        let image_dir = overrides
            .image_dir
            .clone()
            .or_else(|| self.image_dir.clone())
            .unwrap_or_else(|| base.clone());
        let table_path = overrides
            .output_table
            .clone()
            .or_else(|| self.output_table.clone())
            .unwrap_or_else(|| base.join(format!("{stem}_select.{ext}")));
        let output_image_dir = overrides
            .output_image_dir
            .clone()
            .or_else(|| self.output_image_dir.clone())
            .unwrap_or_else(|| base.join(format!("{stem}_select")));

        Ok(DatasetSettings {
            metadata_path,
            image_dir,
            preview_size,
            export: ExportOptions {
                table_path,
                image_dir: output_image_dir,
                missing_images: overrides
                    .missing_image_policy
                    .unwrap_or(self.missing_image_policy),
                collisions: overrides.collision_policy.unwrap_or(self.collision_policy),
            },
        })
    }
}
