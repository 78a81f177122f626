//! Export command: render one experiment back to delimited text

use tracing::warn;

use super::shared::{load_configuration, open_repository, setup_logging};
use crate::app::services::session_coordinator::SessionCoordinator;
use crate::cli::args::ExportArgs;
use crate::{Error, Result};

/// Run the export command
pub async fn run_export(args: ExportArgs) -> Result<()> {
    args.validate()?;
    setup_logging(args.get_log_level());

    let config = load_configuration(args.config_file.as_deref(), args.database.clone())?;
    let coordinator = SessionCoordinator::new(open_repository(&config)?);

    let text = coordinator.export_session(args.experiment_id).await?;
    coordinator.shutdown();

    if text.is_empty() {
        // Valid outcome for an unknown id, but worth telling the operator
        warn!("experiment {} has no stored readings", args.experiment_id);
    }

    match &args.output {
        Some(path) => {
            std::fs::write(path, &text).map_err(|e| {
                Error::io(
                    format!("failed to write export file '{}'", path.display()),
                    e,
                )
            })?;
            eprintln!("Exported experiment {} to {}", args.experiment_id, path.display());
        }
        None => {
            print!("{}", text);
        }
    }
    Ok(())
}
