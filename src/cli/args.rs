//! Command-line argument definitions for the LIDAR session recorder
//!
//! This module defines the complete CLI interface using the clap derive API.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::{Error, Result};

/// CLI arguments for the LIDAR session recorder
///
/// Records polar-coordinate measurement sessions from delimited text exports
/// into a local SQLite store and retrieves them by identity or descriptive
/// filters.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "lidar-recorder",
    version,
    about = "Record LIDAR polar-coordinate measurement sessions and retrieve them by filter",
    long_about = "Records instrument measurement sessions captured as sequences of polar-coordinate \
                  readings (fi;teta;R) parsed from delimited text exports. Sessions are stored \
                  atomically together with their descriptive metadata and can later be listed by \
                  filter or exported back to the same text format."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the recorder
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse a coordinate export file and store it as a new experiment
    Ingest(IngestArgs),
    /// List stored experiments, optionally filtered
    List(ListArgs),
    /// Export one experiment's readings as delimited text
    Export(ExportArgs),
}

/// Arguments for the ingest command
#[derive(Debug, Clone, Parser)]
pub struct IngestArgs {
    /// Path of the coordinate export file to ingest
    ///
    /// UTF-8 text, one `fi;teta;R` reading per line; blank lines are ignored.
    #[arg(value_name = "FILE", help = "Coordinate export file to ingest")]
    pub input: PathBuf,

    /// Description of the room the session was recorded in (required)
    #[arg(short = 'r', long = "room", value_name = "TEXT")]
    pub room_description: String,

    /// Date and time of the session
    ///
    /// Stored as given, without parsing. Defaults to the current local time
    /// in `YYYY-MM-DD HH:MM:SS` format.
    #[arg(short = 't', long = "timestamp", value_name = "TEXT")]
    pub timestamp: Option<String>,

    /// Street address of the site
    #[arg(short = 'a', long = "address", value_name = "TEXT")]
    pub address: Option<String>,

    /// Free-text summary of the measurement coordinates
    #[arg(long = "coordinates", value_name = "TEXT")]
    pub coordinates_summary: Option<String>,

    /// Description of the measured object
    #[arg(long = "object", value_name = "TEXT")]
    pub object_description: Option<String>,

    /// Path of the SQLite database file
    ///
    /// Overrides the config file and the platform default location.
    #[arg(long = "database", value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Path to configuration file (TOML format)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Arguments for the list command
#[derive(Debug, Clone, Parser)]
pub struct ListArgs {
    /// Match one experiment by its identity
    #[arg(long = "id", value_name = "ID")]
    pub id: Option<i64>,

    /// Case-insensitive substring match on the room description
    #[arg(short = 'r', long = "room", value_name = "TEXT")]
    pub room_description: Option<String>,

    /// Case-insensitive substring match on the address
    #[arg(short = 'a', long = "address", value_name = "TEXT")]
    pub address: Option<String>,

    /// Maximum number of experiments to list
    #[arg(long = "limit", value_name = "COUNT")]
    pub limit: Option<usize>,

    /// Output format for the listing
    #[arg(long = "output-format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,

    /// Path of the SQLite database file
    #[arg(long = "database", value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Path to configuration file (TOML format)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Arguments for the export command
#[derive(Debug, Clone, Parser)]
pub struct ExportArgs {
    /// Identity of the experiment to export
    #[arg(value_name = "ID")]
    pub experiment_id: i64,

    /// Output file for the export
    ///
    /// If not specified, the export is written to stdout.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path of the SQLite database file
    #[arg(long = "database", value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Path to configuration file (TOML format)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl IngestArgs {
    /// Validate the ingest command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.input.display()
            )));
        }
        if !self.input.is_file() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                self.input.display()
            )));
        }
        if self.room_description.trim().is_empty() {
            return Err(Error::configuration(
                "Room description must not be empty",
            ));
        }
        if let Some(timestamp) = &self.timestamp {
            if timestamp.trim().is_empty() {
                return Err(Error::configuration("Timestamp must not be empty"));
            }
        }
        validate_config_file(&self.config_file)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            verbosity_level(self.verbose)
        }
    }
}

impl ListArgs {
    /// Validate the list command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(limit) = self.limit {
            if limit == 0 {
                return Err(Error::configuration("Limit must be greater than 0"));
            }
        }
        if let Some(id) = self.id {
            if id <= 0 {
                return Err(Error::configuration(
                    "Experiment id must be a positive integer",
                ));
            }
        }
        validate_config_file(&self.config_file)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        verbosity_level(self.verbose)
    }
}

impl ExportArgs {
    /// Validate the export command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.experiment_id <= 0 {
            return Err(Error::configuration(
                "Experiment id must be a positive integer",
            ));
        }
        if let Some(output) = &self.output {
            if let Some(parent) = output.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output file directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }
        validate_config_file(&self.config_file)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        verbosity_level(self.verbose)
    }
}

fn verbosity_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn validate_config_file(config_file: &Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_file {
        if !path.exists() {
            return Err(Error::configuration(format!(
                "Config file does not exist: {}",
                path.display()
            )));
        }
    }
    Ok(())
}
