//! Experiment repository over a single SQLite connection
//!
//! Creation of an experiment with its readings happens inside one
//! transaction: readers can never observe an experiment with a strict subset
//! of its measurements, nor measurements without their owning experiment.
//! The repository never retries on its own; only `ConnectivityLost` failures
//! are safe for the caller to retry with the same arguments.

use std::path::Path;

use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, ErrorCode};
use thiserror::Error;

use super::schema;
use crate::app::models::{ExperimentFilter, ExperimentId, ExperimentMeta, ExperimentSummary, Triple};

/// Errors produced by repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Arguments failed the repository's own validation; caller bug,
    /// non-retryable
    #[error("validation failed: {reason}")]
    ValidationFailed { reason: String },

    /// A database constraint rejected the write; non-retryable as-is
    #[error("constraint violation: {0}")]
    ConstraintViolation(#[source] rusqlite::Error),

    /// The connection or underlying storage became unavailable; the caller
    /// may retry the whole call, atomicity guarantees no partial rows remain
    #[error("database connectivity lost: {0}")]
    ConnectivityLost(#[source] rusqlite::Error),

    /// Any other query or storage failure
    #[error("storage error: {0}")]
    Storage(#[source] rusqlite::Error),
}

impl RepositoryError {
    fn validation(reason: impl Into<String>) -> Self {
        Self::ValidationFailed {
            reason: reason.into(),
        }
    }

    /// Whether re-invoking the failed operation with the same arguments is
    /// safe and potentially useful
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ConnectivityLost(_))
    }
}

impl From<rusqlite::Error> for RepositoryError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(code, _) => match code.code {
                ErrorCode::ConstraintViolation => Self::ConstraintViolation(err),
                ErrorCode::DatabaseBusy
                | ErrorCode::DatabaseLocked
                | ErrorCode::CannotOpen
                | ErrorCode::DiskFull
                | ErrorCode::SystemIoFailure => Self::ConnectivityLost(err),
                _ => Self::Storage(err),
            },
            _ => Self::Storage(err),
        }
    }
}

/// Repository owning one SQLite connection and the experiment schema
///
/// The handle has an explicit lifecycle: opened once by the coordinator,
/// dropped on shutdown, never recreated mid-operation. A caller that times
/// out must discard the repository rather than reuse it.
#[derive(Debug)]
pub struct ExperimentRepository {
    conn: Connection,
    default_limit: Option<usize>,
}

impl ExperimentRepository {
    /// Open (or create) the database at `path` and ensure the schema exists
    pub fn open(path: &Path) -> Result<Self, RepositoryError> {
        Self::from_connection(Connection::open(path)?)
    }

    /// Open an in-memory database; used by tests and dry runs
    pub fn open_in_memory() -> Result<Self, RepositoryError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, RepositoryError> {
        conn.pragma_update(None, "foreign_keys", true)?;
        conn.execute(schema::CREATE_EXPERIMENT_TABLE, [])?;
        conn.execute(schema::CREATE_MEASUREMENT_TABLE, [])?;
        Ok(Self {
            conn,
            default_limit: None,
        })
    }

    /// Set the default cap applied to lookups whose filter carries no limit
    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = Some(limit);
        self
    }

    /// Store an experiment and its readings as one atomic unit
    ///
    /// Inserts the experiment row, then one measurement row per reading in
    /// input order, and commits. Any failure aborts the whole unit of work;
    /// dropping the uncommitted transaction rolls it back. Returns the
    /// server-assigned experiment identity.
    pub fn create_experiment(
        &mut self,
        meta: &ExperimentMeta,
        triples: &[Triple],
    ) -> Result<ExperimentId, RepositoryError> {
        // Re-check caller preconditions rather than trusting the parser
        if let Some(field) = meta.first_blank_required_field() {
            return Err(RepositoryError::validation(format!(
                "required field '{}' is empty",
                field
            )));
        }
        if triples.is_empty() {
            return Err(RepositoryError::validation(
                "an experiment requires at least one reading",
            ));
        }

        let tx = self.conn.transaction()?;

        tx.execute(
            schema::INSERT_EXPERIMENT,
            params![
                meta.timestamp,
                meta.room_description,
                meta.address,
                meta.coordinates_summary,
                meta.object_description,
            ],
        )?;
        let id = tx.last_insert_rowid();

        {
            let mut stmt = tx.prepare(schema::INSERT_MEASUREMENT)?;
            for (ordinal, triple) in triples.iter().enumerate() {
                stmt.execute(params![id, ordinal as i64, triple.fi, triple.teta, triple.r])?;
            }
        }

        tx.commit()?;
        Ok(id)
    }

    /// Look up experiment summaries matching a filter
    ///
    /// Unset filter fields impose no constraint; set fields are AND-combined.
    /// Results are ordered by identity ascending and capped by the filter's
    /// limit, the repository default, or [`DEFAULT_QUERY_LIMIT`].
    ///
    /// [`DEFAULT_QUERY_LIMIT`]: crate::constants::DEFAULT_QUERY_LIMIT
    pub fn find_experiments(
        &self,
        filter: &ExperimentFilter,
    ) -> Result<Vec<ExperimentSummary>, RepositoryError> {
        let mut conditions: Vec<&'static str> = Vec::new();
        let mut values: Vec<Value> = Vec::new();

        if let Some(id) = filter.id {
            conditions.push("e.id = ?");
            values.push(Value::Integer(id));
        }
        if let Some(room) = &filter.room_description {
            conditions.push("instr(lower(e.room_description), lower(?)) > 0");
            values.push(Value::Text(room.clone()));
        }
        if let Some(address) = &filter.address {
            conditions.push("(e.address IS NOT NULL AND instr(lower(e.address), lower(?)) > 0)");
            values.push(Value::Text(address.clone()));
        }

        // Conditions are fixed SQL fragments; every value travels as a
        // bound parameter
        let mut sql = String::from(schema::SELECT_SUMMARIES_BASE);
        if !conditions.is_empty() {
            sql.push_str("\nWHERE ");
            sql.push_str(&conditions.join(" AND "));
        }
        sql.push_str("\nGROUP BY e.id\nORDER BY e.id ASC\nLIMIT ?");
        values.push(Value::Integer(
            filter.effective_limit(self.default_limit) as i64
        ));

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(values), |row| {
            Ok(ExperimentSummary {
                id: row.get(0)?,
                timestamp: row.get(1)?,
                room_description: row.get(2)?,
                address: row.get(3)?,
                coordinates_summary: row.get(4)?,
                object_description: row.get(5)?,
                measurement_count: row.get::<_, i64>(6)? as usize,
            })
        })?;

        let mut summaries = Vec::new();
        for row in rows {
            summaries.push(row?);
        }
        Ok(summaries)
    }

    /// Fetch one experiment's readings in insertion order
    ///
    /// An unknown identity yields an empty sequence; absence of rows is a
    /// valid outcome, not an error.
    pub fn fetch_measurements(
        &self,
        experiment_id: ExperimentId,
    ) -> Result<Vec<Triple>, RepositoryError> {
        let mut stmt = self.conn.prepare(schema::SELECT_MEASUREMENTS)?;
        let rows = stmt.query_map(params![experiment_id], |row| {
            Ok(Triple {
                fi: row.get(0)?,
                teta: row.get(1)?,
                r: row.get(2)?,
            })
        })?;

        let mut triples = Vec::new();
        for row in rows {
            triples.push(row?);
        }
        Ok(triples)
    }
}
