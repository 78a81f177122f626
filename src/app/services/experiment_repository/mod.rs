//! Persistence for experiments and their measurement sets
//!
//! The repository owns a single SQLite connection and provides the three
//! storage operations of the recorder: atomic creation of an experiment with
//! its ordered readings, filtered lookup of experiment summaries, and fetching
//! one experiment's readings in insertion order.
//!
//! ## Architecture
//!
//! - [`repository`] - the repository itself and its error taxonomy
//! - [`schema`] - table definitions and SQL statements
//!
//! All statements bind values through positional parameters; no SQL is ever
//! assembled from user-supplied text.

pub mod repository;
pub mod schema;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use repository::{ExperimentRepository, RepositoryError};
