use std::process;

use clap::Parser;

use lidar_recorder::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    match runtime.block_on(commands::run(args)) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("LIDAR Recorder - Polar-Coordinate Measurement Session Store");
    println!("===========================================================");
    println!();
    println!("Record instrument measurement sessions from delimited text exports");
    println!("into a local SQLite store, and retrieve them by filter.");
    println!();
    println!("USAGE:");
    println!("    lidar-recorder <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    ingest      Parse a coordinate export file and store it as an experiment");
    println!("    list        List stored experiments, optionally filtered");
    println!("    export      Export one experiment's readings as delimited text");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Ingest a coordinate export for room 'Lab 204':");
    println!("    lidar-recorder ingest readings.txt --room \"Lab 204\" \\");
    println!("                   --timestamp \"2024-01-01 10:00:00\"");
    println!();
    println!("    # List experiments recorded in rooms matching 'lab':");
    println!("    lidar-recorder list --room lab");
    println!();
    println!("    # Export experiment 3 to a file:");
    println!("    lidar-recorder export 3 --output readings-3.txt");
    println!();
    println!("For detailed help on any command, use:");
    println!("    lidar-recorder <COMMAND> --help");
}
