//! The `sync` command: parse an inventory export and deliver it

use colored::*;
use indicatif::HumanDuration;
use tracing::info;

use super::spinner;
use crate::Result;
use crate::cli::args::{Args, SyncArgs};
use crate::config::Config;
use crate::processor::{DeliveryOutcome, InventoryProcessor, SyncMode, SyncOutcome};

pub async fn run(args: &Args, sync_args: &SyncArgs, config: Config) -> Result<()> {
    let processor = InventoryProcessor::new(config)?;

    let mode = if sync_args.dry_run {
        SyncMode::DryRun
    } else {
        SyncMode::Deliver
    };

    info!("Starting inventory sync of {}", sync_args.input.display());

    let progress = spinner(args, "Syncing inventory...");
    let result = processor.sync(&sync_args.input, mode).await;

    if let Some(pb) = &progress {
        match &result {
            Ok(_) => pb.finish_with_message("Sync complete"),
            Err(_) => pb.abandon_with_message("Sync failed"),
        }
    }

    let outcome = result?;
    if !args.quiet {
        print_summary(&outcome);
    }

    Ok(())
}

fn print_summary(outcome: &SyncOutcome) {
    let stats = &outcome.stats;

    println!();
    println!("{}", "Inventory sync summary".bright_green().bold());
    println!("  {:<22}{}", "Records parsed:", stats.records_parsed.to_string().bright_cyan());
    println!("  {:<22}{}", "Lines read:", stats.lines_read);

    if stats.decode_anomalies() > 0 {
        println!(
            "  {:<22}{}",
            "Malformed rows:",
            format!(
                "{} ragged, {} overflowing",
                stats.ragged_rows, stats.overflow_rows
            )
            .bright_yellow()
        );
    }
    if stats.coercion_fallbacks > 0 {
        println!(
            "  {:<22}{}",
            "Defaulted counts:",
            stats.coercion_fallbacks.to_string().bright_yellow()
        );
    }

    match &outcome.delivery {
        DeliveryOutcome::Delivered(report) => {
            println!("  {:<22}{}", "Endpoint:", report.endpoint);
            println!(
                "  {:<22}{}",
                "Delivered:",
                format!("{} records (HTTP {})", report.records_sent, report.status).bright_green()
            );
            if report.attempts > 1 {
                println!("  {:<22}{}", "Attempts:", report.attempts);
            }
            println!("  {:<22}{}", "Acknowledgment:", report.acknowledgment);
        }
        DeliveryOutcome::DryRun { records } => {
            println!(
                "  {:<22}{}",
                "Delivered:",
                format!("dry run, {} records not sent", records).bright_yellow()
            );
        }
    }

    println!(
        "  {:<22}{}",
        "Elapsed:",
        HumanDuration(outcome.duration).to_string().bright_black()
    );
}
