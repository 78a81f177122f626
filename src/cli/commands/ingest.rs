//! Ingest command: parse a coordinate export and store it as an experiment

use colored::Colorize;
use tracing::info;

use super::shared::{load_configuration, open_repository, setup_logging};
use crate::app::models::{ExperimentFilter, ExperimentMeta};
use crate::app::services::session_coordinator::SessionCoordinator;
use crate::cli::args::IngestArgs;
use crate::constants::DEFAULT_TIMESTAMP_FORMAT;
use crate::{Error, Result};

/// Run the ingest command
pub async fn run_ingest(args: IngestArgs) -> Result<()> {
    args.validate()?;
    setup_logging(args.get_log_level());

    let config = load_configuration(args.config_file.as_deref(), args.database.clone())?;

    let raw_text = std::fs::read_to_string(&args.input).map_err(|e| {
        Error::io(
            format!("failed to read input file '{}'", args.input.display()),
            e,
        )
    })?;
    info!("Read {} bytes from {}", raw_text.len(), args.input.display());

    let meta = build_meta(&args);
    let coordinator = SessionCoordinator::new(open_repository(&config)?);

    let id = coordinator.record_session(&raw_text, meta).await?;
    let summaries = coordinator.find_sessions(ExperimentFilter::by_id(id)).await?;
    coordinator.shutdown();

    // The summary must exist; we just stored it on the only connection
    let count = summaries.first().map(|s| s.measurement_count).unwrap_or(0);
    if !args.quiet {
        println!(
            "{} experiment {} with {} readings",
            "Stored".green().bold(),
            id,
            count
        );
    }
    Ok(())
}

/// Assemble experiment metadata from CLI arguments
///
/// An omitted timestamp defaults to the current local time; the stored value
/// remains a plain string either way.
fn build_meta(args: &IngestArgs) -> ExperimentMeta {
    let timestamp = args.timestamp.clone().unwrap_or_else(|| {
        chrono::Local::now()
            .format(DEFAULT_TIMESTAMP_FORMAT)
            .to_string()
    });

    let mut meta = ExperimentMeta::new(timestamp, args.room_description.clone());
    if let Some(address) = &args.address {
        meta = meta.with_address(address.clone());
    }
    if let Some(summary) = &args.coordinates_summary {
        meta = meta.with_coordinates_summary(summary.clone());
    }
    if let Some(object) = &args.object_description {
        meta = meta.with_object_description(object.clone());
    }
    meta
}
