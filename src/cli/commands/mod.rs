//! Command implementations for the recorder CLI
//!
//! This module contains the command execution logic and error handling for
//! the CLI interface. Each command is implemented in its own module:
//! - `ingest`: parse a coordinate export and store it as a new experiment
//! - `list`: filtered experiment listings in human or JSON form
//! - `export`: render one experiment back to delimited text

pub mod export;
pub mod ingest;
pub mod list;
pub mod shared;

use crate::cli::args::{Args, Commands};
use crate::Result;

/// Main command runner for the recorder
///
/// Dispatches to the appropriate subcommand handler based on CLI args.
pub async fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Ingest(ingest_args) => ingest::run_ingest(ingest_args).await,
        Commands::List(list_args) => list::run_list(list_args).await,
        Commands::Export(export_args) => export::run_export(export_args).await,
    }
}
