//! SQLite schema and statements for the experiment store
//!
//! The `measurement` table has no surrogate key; (experiment_id, ordinal)
//! identifies a reading, and `ordinal` records insertion order so fetches can
//! reproduce the ingested sequence exactly.

/// Experiment metadata table
pub const CREATE_EXPERIMENT_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS experiment (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    timestamp TEXT NOT NULL,
    room_description TEXT NOT NULL,
    address TEXT,
    coordinates_summary TEXT,
    object_description TEXT
)";

/// Measurement table, many-to-one with experiment
///
/// The REAL columns are NOT NULL on purpose: SQLite stores NaN as NULL, so
/// the constraint doubles as a finiteness check at the storage boundary.
pub const CREATE_MEASUREMENT_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS measurement (
    experiment_id INTEGER NOT NULL REFERENCES experiment(id),
    ordinal INTEGER NOT NULL,
    fi REAL NOT NULL,
    teta REAL NOT NULL,
    r REAL NOT NULL,
    PRIMARY KEY (experiment_id, ordinal)
)";

pub const INSERT_EXPERIMENT: &str = "\
INSERT INTO experiment (timestamp, room_description, address, coordinates_summary, object_description)
VALUES (?1, ?2, ?3, ?4, ?5)";

pub const INSERT_MEASUREMENT: &str = "\
INSERT INTO measurement (experiment_id, ordinal, fi, teta, r)
VALUES (?1, ?2, ?3, ?4, ?5)";

/// Base of the summary lookup; `repository::find_experiments` appends
/// parameterized WHERE conditions, GROUP BY, ORDER BY and LIMIT.
pub const SELECT_SUMMARIES_BASE: &str = "\
SELECT e.id, e.timestamp, e.room_description, e.address, e.coordinates_summary,
       e.object_description, COUNT(m.ordinal) AS measurement_count
FROM experiment e
LEFT JOIN measurement m ON m.experiment_id = e.id";

pub const SELECT_MEASUREMENTS: &str = "\
SELECT fi, teta, r FROM measurement WHERE experiment_id = ?1 ORDER BY ordinal ASC";
