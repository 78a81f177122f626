//! Tests for the experiment repository

use super::{test_meta, test_repository, test_triples};
use crate::app::models::{ExperimentFilter, ExperimentMeta, Triple};
use crate::app::services::experiment_repository::RepositoryError;

#[test]
fn test_create_and_fetch_preserves_order() {
    let mut repo = test_repository();
    let triples = test_triples();

    let id = repo.create_experiment(&test_meta("Lab A"), &triples).unwrap();
    assert_eq!(id, 1);

    let fetched = repo.fetch_measurements(id).unwrap();
    assert_eq!(fetched, triples);
}

#[test]
fn test_identities_are_monotonic() {
    let mut repo = test_repository();
    let first = repo.create_experiment(&test_meta("Lab A"), &test_triples()).unwrap();
    let second = repo.create_experiment(&test_meta("Lab B"), &test_triples()).unwrap();
    assert!(second > first);
}

#[test]
fn test_create_rejects_blank_timestamp() {
    let mut repo = test_repository();
    let meta = ExperimentMeta::new("   ", "Lab A");

    let err = repo.create_experiment(&meta, &test_triples()).unwrap_err();
    assert!(matches!(err, RepositoryError::ValidationFailed { .. }));
    assert!(!err.is_retryable());
    assert!(repo.find_experiments(&ExperimentFilter::default()).unwrap().is_empty());
}

#[test]
fn test_create_rejects_blank_room_description() {
    let mut repo = test_repository();
    let meta = ExperimentMeta::new("2024-01-01 10:00:00", "");

    let err = repo.create_experiment(&meta, &test_triples()).unwrap_err();
    assert!(matches!(err, RepositoryError::ValidationFailed { .. }));
}

#[test]
fn test_create_rejects_empty_reading_set() {
    let mut repo = test_repository();

    let err = repo.create_experiment(&test_meta("Lab A"), &[]).unwrap_err();
    assert!(matches!(err, RepositoryError::ValidationFailed { .. }));
    assert!(repo.find_experiments(&ExperimentFilter::default()).unwrap().is_empty());
}

#[test]
fn test_mid_batch_failure_leaves_no_rows() {
    let mut repo = test_repository();

    // SQLite stores NaN as NULL, so the second reading trips the NOT NULL
    // constraint after the experiment row and first reading were inserted
    let triples = vec![Triple::new(1.0, 2.0, 3.0), Triple::new(f64::NAN, 2.0, 3.0)];
    let err = repo.create_experiment(&test_meta("Lab A"), &triples).unwrap_err();
    assert!(matches!(err, RepositoryError::ConstraintViolation(_)));
    assert!(!err.is_retryable());

    // No experiment and no measurement subset may remain visible
    assert!(repo.find_experiments(&ExperimentFilter::default()).unwrap().is_empty());
    assert!(repo.fetch_measurements(1).unwrap().is_empty());

    // The identity sequence is usable afterwards
    let id = repo.create_experiment(&test_meta("Lab A"), &test_triples()).unwrap();
    assert_eq!(repo.fetch_measurements(id).unwrap(), test_triples());
}

#[test]
fn test_fetch_unknown_id_returns_empty() {
    let repo = test_repository();
    assert_eq!(repo.fetch_measurements(42).unwrap(), Vec::<Triple>::new());
}

#[test]
fn test_find_by_id_exact_match() {
    let mut repo = test_repository();
    repo.create_experiment(&test_meta("Lab A"), &test_triples()).unwrap();
    let id = repo.create_experiment(&test_meta("Lab B"), &test_triples()).unwrap();

    let found = repo.find_experiments(&ExperimentFilter::by_id(id)).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, id);
    assert_eq!(found[0].room_description, "Lab B");
    assert_eq!(found[0].measurement_count, 2);
}

#[test]
fn test_find_room_substring_is_case_insensitive() {
    let mut repo = test_repository();
    repo.create_experiment(&test_meta("Lab 204"), &test_triples()).unwrap();
    repo.create_experiment(&test_meta("Warehouse"), &test_triples()).unwrap();

    let filter = ExperimentFilter::default().with_room_description("lab");
    let found = repo.find_experiments(&filter).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].room_description, "Lab 204");

    let filter = ExperimentFilter::default().with_room_description("HOUSE");
    let found = repo.find_experiments(&filter).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].room_description, "Warehouse");
}

#[test]
fn test_find_address_filter_skips_missing_addresses() {
    let mut repo = test_repository();
    repo.create_experiment(
        &test_meta("Lab A").with_address("12 Harbour Rd"),
        &test_triples(),
    )
    .unwrap();
    repo.create_experiment(&test_meta("Lab B"), &test_triples()).unwrap();

    let filter = ExperimentFilter::default().with_address("harbour");
    let found = repo.find_experiments(&filter).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].room_description, "Lab A");
}

#[test]
fn test_find_combines_filters_with_and() {
    let mut repo = test_repository();
    repo.create_experiment(
        &test_meta("Lab 204").with_address("12 Harbour Rd"),
        &test_triples(),
    )
    .unwrap();
    repo.create_experiment(
        &test_meta("Lab 204").with_address("7 Quay St"),
        &test_triples(),
    )
    .unwrap();

    let filter = ExperimentFilter::default()
        .with_room_description("lab")
        .with_address("quay");
    let found = repo.find_experiments(&filter).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].address.as_deref(), Some("7 Quay St"));
}

#[test]
fn test_find_unfiltered_returns_all_id_ascending() {
    let mut repo = test_repository();
    for room in ["C", "A", "B"] {
        repo.create_experiment(&test_meta(room), &test_triples()).unwrap();
    }

    let found = repo.find_experiments(&ExperimentFilter::default()).unwrap();
    assert_eq!(found.len(), 3);
    let ids: Vec<i64> = found.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_find_respects_limit() {
    let mut repo = test_repository();
    for _ in 0..5 {
        repo.create_experiment(&test_meta("Lab"), &test_triples()).unwrap();
    }

    let found = repo
        .find_experiments(&ExperimentFilter::default().with_limit(2))
        .unwrap();
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].id, 1);
}

#[test]
fn test_find_respects_repository_default_limit() {
    let mut repo = test_repository().with_default_limit(3);
    for _ in 0..5 {
        repo.create_experiment(&test_meta("Lab"), &test_triples()).unwrap();
    }

    let found = repo.find_experiments(&ExperimentFilter::default()).unwrap();
    assert_eq!(found.len(), 3);

    // An explicit filter limit still wins over the repository default
    let found = repo
        .find_experiments(&ExperimentFilter::default().with_limit(5))
        .unwrap();
    assert_eq!(found.len(), 5);
}

#[test]
fn test_duplicate_sessions_are_allowed() {
    // Same timestamp and room twice: two distinct experiments
    let mut repo = test_repository();
    let first = repo.create_experiment(&test_meta("Lab A"), &test_triples()).unwrap();
    let second = repo.create_experiment(&test_meta("Lab A"), &test_triples()).unwrap();
    assert_ne!(first, second);

    let found = repo.find_experiments(&ExperimentFilter::default()).unwrap();
    assert_eq!(found.len(), 2);
}

#[test]
fn test_summary_carries_full_metadata() {
    let mut repo = test_repository();
    let meta = test_meta("Lab A")
        .with_address("12 Harbour Rd")
        .with_coordinates_summary("NW corner")
        .with_object_description("calibration sphere");
    let id = repo.create_experiment(&meta, &test_triples()).unwrap();

    let found = repo.find_experiments(&ExperimentFilter::by_id(id)).unwrap();
    let summary = &found[0];
    assert_eq!(summary.timestamp, "2024-01-01 10:00:00");
    assert_eq!(summary.address.as_deref(), Some("12 Harbour Rd"));
    assert_eq!(summary.coordinates_summary.as_deref(), Some("NW corner"));
    assert_eq!(summary.object_description.as_deref(), Some("calibration sphere"));
    assert_eq!(summary.measurement_count, 2);
}
