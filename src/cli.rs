//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for curatr using the `clap` crate.
//! It provides command parsing, argument validation, and the mapping from
//! dataset flags onto configuration overrides.
//!
//! # Commands
//!
//! - **browse**: Interactive record browser (default)
//! - **list**: Print the records in the preview window
//! - **show**: Print one record
//! - **export**: Export a selection without the TUI
//! - **config**: Create and inspect the config file
//! - **completions**: Generate shell completion scripts
//!
//! # Examples
//!
//! ```
//! use curatr::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["curatr", "export", "--metadata", "data.csv", "--all"]);
//! assert!(matches!(cli.get_command(), Commands::Export { all: true, .. }));
//! ```

use crate::config::DatasetOverrides;
use crate::export::{CollisionPolicy, MissingImagePolicy};
use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Dataset location and export flags shared by every dataset command
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetArgs {
    /// Metadata table to curate (.csv, .jsonl or .ndjson)
    #[arg(short = 'm', long = "metadata", value_name = "FILE")]
    pub metadata: Option<PathBuf>,

    /// Directory the table's image paths are relative to
    #[arg(short = 'i', long = "images", value_name = "DIR")]
    pub images: Option<PathBuf>,

    /// Number of leading records to load into the preview window
    #[arg(short = 'n', long = "limit", value_name = "N")]
    pub limit: Option<usize>,

    /// Where the filtered table is written
    #[arg(long = "out-table", value_name = "FILE")]
    pub out_table: Option<PathBuf>,

    /// Where selected images are copied
    #[arg(long = "out-images", value_name = "DIR")]
    pub out_images: Option<PathBuf>,

    /// Keep or drop records whose image cannot be found
    #[arg(long = "missing-images", value_enum, value_name = "POLICY")]
    pub missing_images: Option<MissingImagePolicy>,

    /// How duplicate image file names are handled on export
    #[arg(long = "collisions", value_enum, value_name = "POLICY")]
    pub collisions: Option<CollisionPolicy>,
}

impl DatasetArgs {
    /// Fill flags left unset here from `outer`
    #[must_use]
    pub fn or(self, outer: &Self) -> Self {
        Self {
            metadata: self.metadata.or_else(|| outer.metadata.clone()),
            images: self.images.or_else(|| outer.images.clone()),
            limit: self.limit.or(outer.limit),
            out_table: self.out_table.or_else(|| outer.out_table.clone()),
            out_images: self.out_images.or_else(|| outer.out_images.clone()),
            missing_images: self.missing_images.or(outer.missing_images),
            collisions: self.collisions.or(outer.collisions),
        }
    }
}

impl From<&DatasetArgs> for DatasetOverrides {
    fn from(args: &DatasetArgs) -> Self {
        Self {
            metadata_path: args.metadata.clone(),
            image_dir: args.images.clone(),
            preview_size: args.limit,
            output_table: args.out_table.clone(),
            output_image_dir: args.out_images.clone(),
            missing_image_policy: args.missing_images,
            collision_policy: args.collisions,
        }
    }
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Create the config file
    Init {
        /// Write default values without prompting
        #[arg(long = "defaults")]
        defaults: bool,

        /// Replace an existing config file
        #[arg(short = 'f', long = "force")]
        force: bool,
    },

    /// Print the effective configuration
    Show,

    /// Print the config file location
    Path,
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "curatr")]
#[command(about = "Browse an image dataset, mark records to keep, export the subset", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Dataset flags given before the subcommand, or for the default browse
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Config file to use instead of the default location
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write log output to this file
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive record browser (default)
    #[command(visible_alias = "b")]
    Browse {
        #[command(flatten)]
        dataset: DatasetArgs,
    },

    /// Print the records in the preview window with their indices
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        dataset: DatasetArgs,
    },

    /// Print one record with its resolved image
    Show {
        /// Record index (0-based)
        #[arg(value_name = "INDEX")]
        index: usize,

        #[command(flatten)]
        dataset: DatasetArgs,
    },

    /// Export selected records without opening the browser
    #[command(visible_alias = "x")]
    Export {
        /// Record indices to keep, e.g. "1,3,5-7" (0-based)
        #[arg(
            short = 's',
            long = "select",
            value_name = "INDICES",
            conflicts_with = "all",
            required_unless_present = "all"
        )]
        select: Option<String>,

        /// Keep every record in the preview window
        #[arg(long = "all")]
        all: bool,

        /// Overwrite existing output without asking
        #[arg(short = 'y', long = "yes")]
        yes: bool,

        #[command(flatten)]
        dataset: DatasetArgs,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Commands {
    /// Whether the command takes over the terminal
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        matches!(self, Self::Browse { .. })
    }
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    ///
    /// Dataset flags given before the subcommand fill in the ones it leaves
    /// unset.
    #[must_use]
    pub fn get_command(&self) -> Commands {
        let outer = &self.dataset;
        match self.command.clone() {
            None => Commands::Browse {
                dataset: outer.clone(),
            },
            Some(Commands::Browse { dataset }) => Commands::Browse {
                dataset: dataset.or(outer),
            },
            Some(Commands::List { dataset }) => Commands::List {
                dataset: dataset.or(outer),
            },
            Some(Commands::Show { index, dataset }) => Commands::Show {
                index,
                dataset: dataset.or(outer),
            },
            Some(Commands::Export {
                select,
                all,
                yes,
                dataset,
            }) => Commands::Export {
                select,
                all,
                yes,
                dataset: dataset.or(outer),
            },
            Some(command) => command,
        }
    }

    /// Log filter directive implied by `-v`
    #[must_use]
    pub const fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "curatr=warn",
            1 => "curatr=info",
            _ => "curatr=debug",
        }
    }
}
