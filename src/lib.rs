//! LIDAR Session Recorder Library
//!
//! A Rust library for recording instrument measurement sessions captured as
//! sequences of polar-coordinate readings parsed from delimited text exports.
//!
//! This library provides tools for:
//! - Parsing `fi;teta;R` coordinate exports with strict validation
//! - Persisting an experiment and its ordered readings as one atomic unit
//! - Looking up experiments by identity and descriptive filters
//! - Exporting a stored experiment back to the delimited text format
//! - A coordinator that runs blocking storage work off the caller's thread

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod coordinate_parser;
        pub mod experiment_repository;
        pub mod export_encoder;
        pub mod session_coordinator;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ExperimentFilter, ExperimentId, ExperimentMeta, ExperimentSummary, Triple};
pub use app::services::coordinate_parser::{parse, ParseError};
pub use app::services::experiment_repository::{ExperimentRepository, RepositoryError};
pub use app::services::export_encoder::encode;
pub use app::services::session_coordinator::SessionCoordinator;
pub use config::Config;

/// Result type alias for the recorder
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type aggregating the component error taxonomies
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Coordinate text could not be parsed
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A storage operation failed
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// The repository worker is gone; the session must be discarded
    #[error("repository worker unavailable")]
    WorkerUnavailable,
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a worker-loss error
    pub fn worker_unavailable() -> Self {
        Self::WorkerUnavailable
    }

    /// Whether re-invoking the failed operation with the same arguments may
    /// succeed; true only for transient storage connectivity loss
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Repository(err) if err.is_retryable())
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
