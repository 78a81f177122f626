//! Coordinator sequencing parser, repository and encoder
//!
//! The coordinator is the thin collaborator that drives the core in response
//! to external triggers. Repository calls block on disk I/O, so they run on a
//! dedicated worker thread that owns the database connection; the coordinator
//! talks to it purely by message passing and applies the returned values
//! itself. No shared mutable state crosses the thread boundary.
//!
//! ## Architecture
//!
//! - [`coordinator`] - async facade used by the CLI commands
//! - [`worker`] - the connection-owning worker thread and its request types

pub mod coordinator;
pub mod worker;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use coordinator::SessionCoordinator;
pub use worker::RepositoryWorker;
