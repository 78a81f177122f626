//! Data models for LIDAR measurement sessions
//!
//! This module contains the core data structures for representing recorded
//! experiments and their polar-coordinate readings, shared by the parser,
//! repository and export encoder.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_QUERY_LIMIT;

// =============================================================================
// Measurement Reading
// =============================================================================

/// One polar-coordinate reading belonging to an experiment
///
/// Field names follow the instrument export convention: `fi` is the azimuth
/// angle, `teta` the elevation angle and `r` the measured range. Values are
/// stored and returned exactly as given; no unit conversion is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triple {
    /// Azimuth angle
    pub fi: f64,

    /// Elevation angle
    pub teta: f64,

    /// Range
    pub r: f64,
}

impl Triple {
    /// Create a new reading
    pub fn new(fi: f64, teta: f64, r: f64) -> Self {
        Self { fi, teta, r }
    }

    /// Check that all three components are finite (no NaN or infinity)
    pub fn is_finite(&self) -> bool {
        self.fi.is_finite() && self.teta.is_finite() && self.r.is_finite()
    }
}

// =============================================================================
// Experiment Metadata
// =============================================================================

/// Server-assigned experiment identity (monotonically increasing)
pub type ExperimentId = i64;

/// Descriptive metadata supplied by the operator when recording a session
///
/// `timestamp` is a free-form date-time string taken as given; the recorder
/// does not parse or normalize it. `timestamp` and `room_description` are
/// required non-blank, everything else is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentMeta {
    /// Date and time of the measurement session (free-form, required)
    pub timestamp: String,

    /// Description of the room the session was recorded in (required)
    pub room_description: String,

    /// Street address of the site (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Free-text summary of the measurement coordinates, as entered by the
    /// operator; distinct from the parsed readings themselves (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates_summary: Option<String>,

    /// Description of the measured object (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_description: Option<String>,
}

impl ExperimentMeta {
    /// Create metadata with only the required fields set
    pub fn new(timestamp: impl Into<String>, room_description: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            room_description: room_description.into(),
            address: None,
            coordinates_summary: None,
            object_description: None,
        }
    }

    /// Set the site address
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Set the operator-entered coordinates summary
    pub fn with_coordinates_summary(mut self, summary: impl Into<String>) -> Self {
        self.coordinates_summary = Some(summary.into());
        self
    }

    /// Set the object description
    pub fn with_object_description(mut self, description: impl Into<String>) -> Self {
        self.object_description = Some(description.into());
        self
    }

    /// Name of the first required field that is empty or whitespace-only,
    /// if any
    pub fn first_blank_required_field(&self) -> Option<&'static str> {
        if self.timestamp.trim().is_empty() {
            Some("timestamp")
        } else if self.room_description.trim().is_empty() {
            Some("room_description")
        } else {
            None
        }
    }
}

// =============================================================================
// Lookup Results and Filters
// =============================================================================

/// Summary row returned by experiment lookups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentSummary {
    /// Server-assigned experiment identity
    pub id: ExperimentId,

    /// Free-form session date-time string
    pub timestamp: String,

    /// Room description
    pub room_description: String,

    /// Site address, if recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Operator-entered coordinates summary, if recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates_summary: Option<String>,

    /// Object description, if recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_description: Option<String>,

    /// Number of readings stored for this experiment
    pub measurement_count: usize,
}

/// Filter for experiment lookups
///
/// All fields are independently optional; set fields are combined with
/// logical AND. Text filters match case-insensitively on substrings.
/// An unset `limit` falls back to [`DEFAULT_QUERY_LIMIT`] so unscoped
/// listings stay bounded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperimentFilter {
    /// Exact identity match
    pub id: Option<ExperimentId>,

    /// Case-insensitive substring match on the room description
    pub room_description: Option<String>,

    /// Case-insensitive substring match on the address
    pub address: Option<String>,

    /// Maximum number of summaries to return
    pub limit: Option<usize>,
}

impl ExperimentFilter {
    /// Filter matching a single experiment by identity
    pub fn by_id(id: ExperimentId) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }

    /// Set the room description substring filter
    pub fn with_room_description(mut self, pattern: impl Into<String>) -> Self {
        self.room_description = Some(pattern.into());
        self
    }

    /// Set the address substring filter
    pub fn with_address(mut self, pattern: impl Into<String>) -> Self {
        self.address = Some(pattern.into());
        self
    }

    /// Set the result cap
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Whether no constraining fields are set (limit does not constrain
    /// which experiments match, only how many are returned)
    pub fn is_unconstrained(&self) -> bool {
        self.id.is_none() && self.room_description.is_none() && self.address.is_none()
    }

    /// Effective result cap for this filter
    pub fn effective_limit(&self, configured_default: Option<usize>) -> usize {
        self.limit
            .or(configured_default)
            .unwrap_or(DEFAULT_QUERY_LIMIT)
    }
}
