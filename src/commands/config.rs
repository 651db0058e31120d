//! Config command - create and inspect the configuration file

use crate::{
    cli::ConfigCommands,
    config::{self, CuratrConfig},
    ui::OutputWriter,
    CuratrError,
};
use ::config::ConfigError;
use std::path::Path;

type Result<T> = std::result::Result<T, CuratrError>;

/// Execute a config subcommand
///
/// `effective` is the configuration after file and environment layering;
/// `path` is the file `init` writes and `path` prints.
///
/// # Errors
///
/// Returns `CuratrError::ConfigError` if the file cannot be written or the
/// configuration cannot be serialized.
pub fn execute(
    command: &ConfigCommands,
    effective: &CuratrConfig,
    path: &Path,
    output: &dyn OutputWriter,
) -> Result<()> {
    match command {
        ConfigCommands::Init { defaults, force } => {
            if path.exists() && !force {
                output.warning(&format!(
                    "Config file already exists at {} (use --force to replace it)",
                    path.display()
                ));
                return Ok(());
            }

            if *defaults {
                CuratrConfig::default().save_to(path)?;
                output.success(&format!("Wrote default config to {}", path.display()));
            } else {
                config::interactive_setup(effective.clone(), path)?;
            }
        }
        ConfigCommands::Show => {
            let text = toml::to_string_pretty(effective)
                .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;
            output.write(text.trim_end());
        }
        ConfigCommands::Path => {
            output.write(&path.display().to_string());
        }
    }
    Ok(())
}
