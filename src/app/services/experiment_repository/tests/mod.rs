//! Test helpers for repository testing

use crate::app::models::{ExperimentMeta, Triple};
use crate::app::services::experiment_repository::ExperimentRepository;

// Test modules
mod repository_tests;

/// Helper to open a fresh in-memory repository
pub fn test_repository() -> ExperimentRepository {
    ExperimentRepository::open_in_memory().unwrap()
}

/// Helper to build minimal valid metadata
pub fn test_meta(room: &str) -> ExperimentMeta {
    ExperimentMeta::new("2024-01-01 10:00:00", room)
}

/// Helper to build a small valid reading set
pub fn test_triples() -> Vec<Triple> {
    vec![Triple::new(10.5, 45.0, 3.2), Triple::new(20.1, 50.0, 4.0)]
}
