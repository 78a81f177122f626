//! Shared constants for the LIDAR session recorder
//!
//! Collects the wire-format constants for the delimited coordinate files
//! and the default limits used by repository queries and configuration.

/// Field delimiter used by instrument text exports (`fi;teta;R`)
pub const FIELD_DELIMITER: char = ';';

/// Number of fields in one coordinate record
pub const FIELDS_PER_RECORD: usize = 3;

/// Fractional digits written by the export encoder
pub const EXPORT_FRACTION_DIGITS: usize = 4;

/// Default cap on unscoped experiment listings
///
/// The repository never returns unbounded result sets; callers may raise or
/// lower this per query or through `[query] default_limit` in the config file.
pub const DEFAULT_QUERY_LIMIT: usize = 1000;

/// Application directory name used for config and data paths
pub const APP_DIR_NAME: &str = "lidar-recorder";

/// Default database file name inside the application data directory
pub const DEFAULT_DATABASE_FILENAME: &str = "experiments.sqlite3";

/// Config file name inside the application config directory
pub const CONFIG_FILENAME: &str = "config.toml";

/// Timestamp format used when the ingest command fills in the current time
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Tracing filter target prefix for this crate
pub const LOG_TARGET_PREFIX: &str = "lidar_recorder";
