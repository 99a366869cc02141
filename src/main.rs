use clap::Parser;
use inventory_sync::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        let shutdown_signal = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("Failed to install CTRL+C signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        };

        tokio::select! {
            result = commands::run(args) => result,
            _ = shutdown_signal => {
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(inventory_sync::Error::processing_interrupted(
                    "Sync interrupted by user",
                ))
            }
        }
    });

    match result {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Inventory Sync - Catalog Import Tool");
    println!("====================================");
    println!();
    println!("Normalize inventory CSV exports into product records and deliver");
    println!("them to the catalog service in a single batch request.");
    println!();
    println!("USAGE:");
    println!("    inventory-sync [OPTIONS] <COMMAND>");
    println!();
    println!("COMMANDS:");
    println!("    sync        Parse an inventory export and send it to the catalog");
    println!("    export      Write the catalog's products as an inventory export");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    --config <PATH>  Configuration file (TOML)");
    println!("    -v, --verbose    Enable debug logging");
    println!("    -q, --quiet      Only log warnings and errors (hides the batch sample)");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Send an export to the local catalog service:");
    println!("    inventory-sync sync inventory.csv");
    println!();
    println!("    # Check what would be sent, without sending:");
    println!("    inventory-sync sync inventory.csv --dry-run -v");
    println!();
    println!("    # Target another catalog and retry connection failures:");
    println!("    inventory-sync sync inventory.csv --base-url http://catalog:5001 --retries 2");
    println!();
    println!("    # Export the catalog to a file:");
    println!("    inventory-sync export -o inventory.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    inventory-sync <COMMAND> --help");
}
