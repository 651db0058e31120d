//! Curatr CLI application entry point
//!
//! This is the main executable for curatr, a terminal tool for curating image
//! datasets. It loads a metadata table, lets the user step through the first N
//! records, mark the ones to keep, and export the kept subset as a filtered
//! table plus a directory of copied images.
//!
//! # Features
//!
//! - **Browse Mode**: Full-screen record browser with keyboard navigation
//! - **Selection**: Keep/discard flags per record, select all, clear all
//! - **Export**: Filtered table in the source format plus copied images
//! - **Scripting**: `list`, `show` and `export --select` without the TUI
//! - **Quiet Mode**: Suppress informational output for scripting
//!
//! # Usage
//!
//! ```bash
//! # Browse the first 100 records (default command)
//! curatr -m quilt_1M_lookup.csv -i /data/quilt
//! curatr browse -m quilt_1M_lookup.csv -n 50
//!
//! # Print the preview window with record indices
//! curatr list -m quilt_1M_lookup.csv
//!
//! # Export records 0, 3, 4 and 5 without opening the browser
//! curatr export -m quilt_1M_lookup.csv --select 0,3-5 --yes
//!
//! # Log navigation and export details to a file
//! curatr -vv --log-file curatr.log browse
//! ```
//!
//! # Configuration
//!
//! `curatr config init` writes `~/.config/curatr/config.toml` (on Linux).
//! Every setting can also come from a `CURATR_*` environment variable or a
//! command-line flag, which take precedence in that order.

use curatr::{
    cli::{Cli, Commands, ConfigCommands, DatasetArgs},
    commands,
    config::{CuratrConfig, DatasetOverrides},
    ui::{DialoguerInput, StdoutWriter},
    CuratrError,
};
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, CuratrError>;

/// Install the tracing subscriber
///
/// `RUST_LOG` wins when set. Otherwise the browser logs nothing to stderr
/// (it owns the terminal) and CLI commands log warnings, raised by `-v`.
fn init_logging(cli: &Cli, log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let default_directive = if interactive && log_file.is_none() {
        "off"
    } else {
        cli.log_directive()
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
    }
    Ok(())
}

/// Load the configuration, honouring `--config`
///
/// An explicit `--config` file must exist, except for `config init`, which
/// is about to create it.
fn load_config(cli: &Cli, command: &Commands) -> Result<CuratrConfig> {
    let creating = matches!(
        command,
        Commands::Config {
            command: ConfigCommands::Init { .. }
        }
    );

    let config = match &cli.config {
        Some(path) => CuratrConfig::load_from(path, !creating)?,
        None => CuratrConfig::load()?,
    };
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    let command = cli.get_command();

    let config = load_config(&cli, &command)?;
    let quiet = cli.quiet || config.quiet;
    let log_file = cli.log_file.as_deref().or(config.log_file.as_deref());
    init_logging(&cli, log_file, command.is_interactive())?;

    let output = StdoutWriter::quiet(quiet);
    let settings =
        |dataset: &DatasetArgs| config.dataset_settings(&DatasetOverrides::from(dataset));

    match &command {
        Commands::Browse { dataset } => {
            commands::browse(&settings(dataset)?, &output)?;
        }
        Commands::List { dataset } => {
            commands::list(&settings(dataset)?, &output)?;
        }
        Commands::Show { index, dataset } => {
            commands::show(&settings(dataset)?, *index, &output)?;
        }
        Commands::Export {
            select,
            all,
            yes,
            dataset,
        } => {
            let select = if *all { None } else { select.as_deref() };
            let input = DialoguerInput::new();
            commands::export(&settings(dataset)?, select, *yes, quiet, &input, &output)?;
        }
        Commands::Config { command } => {
            let path = match &cli.config {
                Some(path) => path.clone(),
                None => CuratrConfig::config_path()?,
            };
            commands::config(command, &config, &path, &output)?;
        }
        Commands::Completions { shell } => {
            commands::completions(*shell, &mut io::stdout());
        }
    }

    Ok(())
}
