//! List command: filtered experiment listings

use colored::Colorize;

use super::shared::{load_configuration, open_repository, setup_logging};
use crate::app::models::{ExperimentFilter, ExperimentSummary};
use crate::app::services::session_coordinator::SessionCoordinator;
use crate::cli::args::{ListArgs, OutputFormat};
use crate::{Error, Result};

/// Run the list command
pub async fn run_list(args: ListArgs) -> Result<()> {
    args.validate()?;
    setup_logging(args.get_log_level());

    let config = load_configuration(args.config_file.as_deref(), args.database.clone())?;
    let coordinator = SessionCoordinator::new(open_repository(&config)?);

    let summaries = coordinator.find_sessions(build_filter(&args)).await?;
    coordinator.shutdown();

    match args.output_format {
        OutputFormat::Human => print_human(&summaries),
        OutputFormat::Json => print_json(&summaries)?,
    }
    Ok(())
}

/// Assemble a lookup filter from CLI arguments
fn build_filter(args: &ListArgs) -> ExperimentFilter {
    ExperimentFilter {
        id: args.id,
        room_description: args.room_description.clone(),
        address: args.address.clone(),
        limit: args.limit,
    }
}

fn print_human(summaries: &[ExperimentSummary]) {
    if summaries.is_empty() {
        println!("No experiments found");
        return;
    }

    println!(
        "{:>6}  {:<20} {:<24} {:<24} {:>9}",
        "ID".bold(),
        "Timestamp".bold(),
        "Room".bold(),
        "Address".bold(),
        "Readings".bold()
    );
    for summary in summaries {
        println!(
            "{:>6}  {:<20} {:<24} {:<24} {:>9}",
            summary.id,
            summary.timestamp,
            summary.room_description,
            summary.address.as_deref().unwrap_or("-"),
            summary.measurement_count
        );
    }
    println!(
        "\n{} experiment{}",
        summaries.len(),
        if summaries.len() == 1 { "" } else { "s" }
    );
}

fn print_json(summaries: &[ExperimentSummary]) -> Result<()> {
    let json = serde_json::to_string_pretty(summaries)
        .map_err(|e| Error::configuration(format!("failed to serialize listing: {}", e)))?;
    println!("{}", json);
    Ok(())
}
