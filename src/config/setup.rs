//! Interactive setup wizard for `curatr config init`
//!
//! Prompts for the dataset locations and preview size, then writes the
//! configuration file.

use super::CuratrConfig;
use config::ConfigError;
use dialoguer::{Input, theme::ColorfulTheme};
use std::path::{Path, PathBuf};

fn prompt_error(e: dialoguer::Error) -> ConfigError {
    ConfigError::Message(format!("Failed to read input: {e}"))
}

/// Prompt for dataset locations and save the result to `path`
///
/// Values already present in `base` are offered as defaults.
///
/// # Errors
///
/// Returns `ConfigError` if user input cannot be read or the configuration
/// cannot be saved.
pub fn interactive_setup(base: CuratrConfig, path: &Path) -> Result<CuratrConfig, ConfigError> {
    println!("Let's point curatr at a dataset.\n");
    let theme = ColorfulTheme::default();

    let metadata: String = Input::with_theme(&theme)
        .with_prompt("Metadata table (CSV or JSONL)")
        .default(
            base.metadata_path
                .as_deref()
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_else(|| "quilt_1M_lookup.csv".to_string()),
        )
        .interact_text()
        .map_err(prompt_error)?;
    let metadata = PathBuf::from(metadata);

    let default_images = base
        .image_dir
        .clone()
        .or_else(|| metadata.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    let images: String = Input::with_theme(&theme)
        .with_prompt("Image directory")
        .default(default_images.to_string_lossy().into_owned())
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)?;

    let preview_size: usize = Input::with_theme(&theme)
        .with_prompt("Records to preview")
        .default(base.preview_size)
        .validate_with(|n: &usize| if *n == 0 { Err("must be at least 1") } else { Ok(()) })
        .interact_text()
        .map_err(prompt_error)?;

    let config = CuratrConfig {
        metadata_path: Some(metadata),
        image_dir: (!images.is_empty()).then(|| PathBuf::from(images)),
        preview_size,
        ..base
    };
    config.save_to(path)?;

    println!("\nConfiguration saved to {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_signature() {
        let _: fn(CuratrConfig, &Path) -> Result<CuratrConfig, ConfigError> = interactive_setup;
    }
}
