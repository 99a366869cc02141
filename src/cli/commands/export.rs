//! The `export` command: write the catalog as an inventory export

use colored::*;
use tracing::info;

use super::spinner;
use crate::app::services::inventory_export::{write_inventory, write_inventory_file};
use crate::cli::args::{Args, ExportArgs};
use crate::config::Config;
use crate::processor::InventoryProcessor;
use crate::{Error, Result};

pub async fn run(args: &Args, export_args: &ExportArgs, config: Config) -> Result<()> {
    let delimiter = config.parser.delimiter;
    let processor = InventoryProcessor::new(config)?;

    let progress = spinner(args, "Fetching catalog products...");
    let fetched = processor.fetch_catalog().await;
    if let Some(pb) = &progress {
        pb.finish_and_clear();
    }
    let products = fetched?;

    match &export_args.output {
        Some(path) => {
            let rows = write_inventory_file(&products, path, delimiter)?;
            info!("Exported {} products to {}", rows, path.display());

            if !args.quiet {
                println!(
                    "{} {} products to {}",
                    "Exported".bright_green().bold(),
                    rows.to_string().bright_cyan(),
                    path.display()
                );
            }
        }
        None => {
            let stdout = std::io::stdout();
            let rows = write_inventory(&products, stdout.lock(), delimiter)
                .map_err(|e| Error::output_write("stdout", e))?;
            info!("Exported {} products to stdout", rows);
        }
    }

    Ok(())
}
