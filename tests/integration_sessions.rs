//! Integration tests for the measurement session core
//!
//! Exercises the full parse -> store -> fetch -> encode pipeline against a
//! disk-backed database, including the durability and atomicity guarantees
//! that only show up across a close-and-reopen cycle.

use tempfile::TempDir;

use lidar_recorder::{
    encode, parse, ExperimentFilter, ExperimentMeta, ExperimentRepository, SessionCoordinator,
    Triple,
};

fn temp_database() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("experiments.sqlite3");
    (dir, path)
}

#[tokio::test]
async fn test_end_to_end_scenario() {
    let (_dir, db_path) = temp_database();
    let coordinator = SessionCoordinator::new(ExperimentRepository::open(&db_path).unwrap());

    let input = "10.5;45.0;3.2\n20.1;50.0;4.0\n";
    let meta = ExperimentMeta::new("2024-01-01 10:00:00", "Lab A");

    // First experiment in a fresh store gets identity 1
    let id = coordinator.record_session(input, meta).await.unwrap();
    assert_eq!(id, 1);

    let triples = coordinator.fetch_session(id).await.unwrap();
    assert_eq!(
        triples,
        vec![Triple::new(10.5, 45.0, 3.2), Triple::new(20.1, 50.0, 4.0)]
    );

    let exported = coordinator.export_session(id).await.unwrap();
    assert_eq!(exported, "10.5000;45.0000;3.2000\n20.1000;50.0000;4.0000\n");

    coordinator.shutdown();
}

#[tokio::test]
async fn test_sessions_survive_reopen() {
    let (_dir, db_path) = temp_database();

    let coordinator = SessionCoordinator::new(ExperimentRepository::open(&db_path).unwrap());
    let id = coordinator
        .record_session(
            "1.5;2.5;3.5\n",
            ExperimentMeta::new("2024-02-02 12:00:00", "Basement").with_address("12 Harbour Rd"),
        )
        .await
        .unwrap();
    coordinator.shutdown();

    // A fresh connection sees the committed experiment
    let coordinator = SessionCoordinator::new(ExperimentRepository::open(&db_path).unwrap());
    let summaries = coordinator
        .find_sessions(ExperimentFilter::by_id(id))
        .await
        .unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].room_description, "Basement");
    assert_eq!(summaries[0].address.as_deref(), Some("12 Harbour Rd"));
    assert_eq!(summaries[0].measurement_count, 1);

    let triples = coordinator.fetch_session(id).await.unwrap();
    assert_eq!(triples, vec![Triple::new(1.5, 2.5, 3.5)]);
    coordinator.shutdown();
}

#[test]
fn test_aborted_ingestion_leaves_no_rows_on_disk() {
    let (_dir, db_path) = temp_database();

    {
        let mut repo = ExperimentRepository::open(&db_path).unwrap();
        // NaN becomes NULL in SQLite and trips the NOT NULL constraint
        // after the experiment row was already inserted
        let err = repo
            .create_experiment(
                &ExperimentMeta::new("2024-01-01 10:00:00", "Lab A"),
                &[Triple::new(1.0, 2.0, 3.0), Triple::new(f64::NAN, 0.0, 0.0)],
            )
            .unwrap_err();
        assert!(!err.is_retryable());
    }

    // Nothing of the aborted unit of work is durable
    let repo = ExperimentRepository::open(&db_path).unwrap();
    assert!(repo
        .find_experiments(&ExperimentFilter::default())
        .unwrap()
        .is_empty());
    assert!(repo.fetch_measurements(1).unwrap().is_empty());
}

#[tokio::test]
async fn test_filtered_lookup_over_multiple_sessions() {
    let (_dir, db_path) = temp_database();
    let coordinator = SessionCoordinator::new(ExperimentRepository::open(&db_path).unwrap());

    coordinator
        .record_session("1.0;1.0;1.0\n", ExperimentMeta::new("t1", "Lab 204"))
        .await
        .unwrap();
    coordinator
        .record_session("2.0;2.0;2.0\n", ExperimentMeta::new("t2", "Lab 310"))
        .await
        .unwrap();
    coordinator
        .record_session("3.0;3.0;3.0\n", ExperimentMeta::new("t3", "Warehouse"))
        .await
        .unwrap();

    // Case-insensitive substring matching
    let labs = coordinator
        .find_sessions(ExperimentFilter::default().with_room_description("lab"))
        .await
        .unwrap();
    assert_eq!(labs.len(), 2);
    assert!(labs.iter().all(|s| s.room_description.starts_with("Lab")));

    // Unfiltered listing is ordered by identity ascending
    let all = coordinator
        .find_sessions(ExperimentFilter::default())
        .await
        .unwrap();
    let ids: Vec<i64> = all.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    // Unknown identity yields an empty reading set, not an error
    let triples = coordinator.fetch_session(999).await.unwrap();
    assert!(triples.is_empty());

    coordinator.shutdown();
}

#[test]
fn test_parse_encode_round_trip() {
    let input = "0.1234;45.5678;12.9012\n-10.0000;0.0001;3.5000\n";
    let triples = parse(input).unwrap();
    assert_eq!(encode(&triples), input);
}
