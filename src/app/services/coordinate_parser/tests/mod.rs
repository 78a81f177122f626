//! Test helpers for coordinate parser testing
//!
//! Provides small fixture builders shared by the parser test modules.

use crate::app::models::Triple;


/// Helper to build the canonical two-reading export text
pub fn two_reading_export() -> &'static str {
    "10.5;45.0;3.2\n20.1;50.0;4.0\n"
}

/// Helper to build the triples matching [`two_reading_export`]
pub fn two_reading_triples() -> Vec<Triple> {
    vec![Triple::new(10.5, 45.0, 3.2), Triple::new(20.1, 50.0, 4.0)]
}
