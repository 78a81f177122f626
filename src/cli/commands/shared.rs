//! Shared components for CLI commands
//!
//! Common logging, configuration and repository setup used across the
//! command implementations.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::app::services::experiment_repository::ExperimentRepository;
use crate::config::Config;
use crate::constants::LOG_TARGET_PREFIX;
use crate::Result;

/// Set up structured logging to stderr at the given level
pub fn setup_logging(log_level: &str) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET_PREFIX, log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Load configuration using the layered approach (defaults -> file -> args)
pub fn load_configuration(
    config_file: Option<&Path>,
    database_override: Option<PathBuf>,
) -> Result<Config> {
    // An explicitly passed file must exist; the default location is optional
    let default_config_path = if config_file.is_none() {
        Config::default_config_path().ok()
    } else {
        None
    };

    let effective_file = match config_file {
        Some(path) => Some(path),
        None => default_config_path
            .as_deref()
            .filter(|path| path.exists()),
    };

    if let Some(path) = effective_file {
        info!("Using config file: {}", path.display());
    } else {
        debug!("No config file found, using defaults");
    }

    let mut config = Config::load(effective_file)?;

    if let Some(database) = database_override {
        config.database.path = database;
    }

    config.validate()?;
    Ok(config)
}

/// Open the repository at the configured database location
///
/// The returned handle is acquired once per command invocation and released
/// when the coordinator shuts down.
pub fn open_repository(config: &Config) -> Result<ExperimentRepository> {
    config.ensure_database_directory()?;
    info!("Opening database: {}", config.database.path.display());

    let repository = ExperimentRepository::open(&config.database.path)?
        .with_default_limit(config.query.default_limit);
    Ok(repository)
}
