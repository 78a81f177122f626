//! Parser for delimited polar-coordinate instrument exports
//!
//! Turns raw `fi;teta;R` text into an ordered sequence of [`Triple`]s,
//! rejecting malformed records. The parser is strict by design: it fails on
//! the first malformed line instead of skipping it, so a recorded experiment
//! can never silently miss readings.
//!
//! ## Architecture
//!
//! - [`parser`] - the pure parsing function and its error type
//!
//! ## Usage
//!
//! ```rust
//! use lidar_recorder::app::services::coordinate_parser;
//!
//! let triples = coordinate_parser::parse("10.5;45.0;3.2\n20.1;50.0;4.0\n").unwrap();
//! assert_eq!(triples.len(), 2);
//! assert_eq!(triples[0].fi, 10.5);
//! ```
//!
//! [`Triple`]: crate::app::models::Triple

pub mod parser;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::{parse, ParseError};
