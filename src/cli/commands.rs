//! Command implementations for the inventory sync CLI
//!
//! Sets up logging and layered configuration, then dispatches to the
//! selected subcommand.

pub mod export;
pub mod sync;

use crate::cli::args::{Args, CatalogArgs, Commands};
use crate::config::Config;
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, error, info};

/// Main command runner; a failed run is logged before it is returned
pub async fn run(args: Args) -> Result<()> {
    setup_logging(&args);

    let result = execute(&args).await;
    if let Err(e) = &result {
        error!("{}", e);
    }
    result
}

async fn execute(args: &Args) -> Result<()> {
    debug!("Command line arguments: {:?}", args);
    args.validate()?;

    let config = load_configuration(args, &args.catalog_args())?;
    debug!("Loaded configuration: {:?}", config);

    match &args.command {
        Some(Commands::Sync(sync_args)) => sync::run(args, sync_args, config).await,
        Some(Commands::Export(export_args)) => export::run(args, export_args, config).await,
        None => Err(Error::configuration("No command given")),
    }
}

/// Set up structured logging on stderr based on the verbosity flags.
///
/// `RUST_LOG` takes precedence when set. A second call is a no-op.
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("inventory_sync={}", log_level)));

    let initialized = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if initialized.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }
}

/// Load configuration using the layered approach (defaults -> file -> env -> args)
pub fn load_configuration(args: &Args, overrides: &CatalogArgs) -> Result<Config> {
    let config_file = resolve_config_file(args);

    match &config_file {
        Some(path) => info!("Using config file: {}", path.display()),
        None => debug!("No config file found, using defaults and environment variables"),
    }

    let config = overrides.apply(Config::load_layered(config_file.as_deref())?);
    config.validate()?;

    Ok(config)
}

/// Explicit `--config`, else the default location when it exists
fn resolve_config_file(args: &Args) -> Option<PathBuf> {
    if let Some(path) = &args.config_path {
        return Some(path.clone());
    }

    Config::default_config_path()
        .ok()
        .filter(|path| path.exists())
}

/// Spinner shown while a command waits on the catalog service
pub(crate) fn spinner(args: &Args, message: &str) -> Option<ProgressBar> {
    if !args.show_progress() {
        return None;
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    Some(pb)
}
