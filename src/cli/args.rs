//! Command-line argument definitions for inventory sync
//!
//! Defines the CLI interface using the clap derive API. Flags given here
//! override the configuration file and environment.

use crate::config::Config;
use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the inventory sync tool
///
/// Normalizes an inventory CSV export into product records and delivers
/// them to the catalog service, or exports the catalog back to CSV.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "inventory-sync",
    version,
    about = "Sync inventory CSV exports with the product catalog service",
    long_about = "Reads a quoted, comma-delimited inventory export, derives category-specific \
                  product specifications, and sends the whole batch to the catalog service's \
                  batch endpoint in one request. The export command writes the catalog back \
                  out in the same column layout."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file (TOML)
    ///
    /// Defaults to <config dir>/inventory-sync/config.toml when that file exists.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config_path: Option<PathBuf>,

    /// Enable verbose (debug) logging
    #[arg(short = 'v', long = "verbose", global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors.
    ///
    /// Also hides progress output, as well as the record count and sample
    /// record logged before a batch is sent.
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse an inventory export and deliver it to the catalog service
    Sync(SyncArgs),
    /// Write the catalog's current products as an inventory export
    Export(ExportArgs),
}

/// Catalog connection overrides shared by every command
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CatalogArgs {
    /// Catalog service base URL, e.g. http://localhost:5001
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long = "timeout-secs", value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Extra attempts after a transport failure (batch sends retry connection failures only)
    #[arg(long = "retries", value_name = "N")]
    pub retries: Option<u32>,

    /// Field delimiter of the inventory file
    #[arg(long = "delimiter", value_name = "CHAR")]
    pub delimiter: Option<char>,
}

impl CatalogArgs {
    /// Apply the flags that were given on top of `config`
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url.clone());
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config = config.with_timeout_secs(timeout_secs);
        }
        if let Some(retries) = self.retries {
            config = config.with_max_retries(retries);
        }
        if let Some(delimiter) = self.delimiter {
            config = config.with_delimiter(delimiter);
        }
        config
    }
}

/// Arguments for the sync command
#[derive(Debug, Clone, Parser)]
pub struct SyncArgs {
    /// Inventory export to read
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Parse and report the batch without sending it
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

/// Arguments for the export command
#[derive(Debug, Clone, Parser)]
pub struct ExportArgs {
    /// Destination file; stdout when omitted
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

impl Args {
    /// Log level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }

    /// Whether to draw spinners
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }

    /// Catalog overrides of the selected command
    pub fn catalog_args(&self) -> CatalogArgs {
        match &self.command {
            Some(Commands::Sync(args)) => args.catalog.clone(),
            Some(Commands::Export(args)) => args.catalog.clone(),
            None => CatalogArgs::default(),
        }
    }

    /// Check argument combinations clap cannot express
    pub fn validate(&self) -> Result<()> {
        if let Some(Commands::Sync(sync)) = &self.command {
            if !sync.input.exists() {
                return Err(Error::input_access(
                    &sync.input,
                    std::io::Error::new(std::io::ErrorKind::NotFound, "file does not exist"),
                ));
            }
        }

        if let Some(path) = &self.config_path {
            if !path.is_file() {
                return Err(Error::configuration(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
        }

        Ok(())
    }
}
