//! Encoder for writing readings back to the delimited export format
//!
//! Renders a fetched measurement sequence into the same `fi;teta;R` line
//! format the parser consumes, with a fixed number of fractional digits so
//! round trips are bit-exact regardless of locale.
//!
//! ## Usage
//!
//! ```rust
//! use lidar_recorder::app::models::Triple;
//! use lidar_recorder::app::services::export_encoder;
//!
//! let text = export_encoder::encode(&[Triple::new(10.5, 45.0, 3.2)]);
//! assert_eq!(text, "10.5000;45.0000;3.2000\n");
//! ```

pub mod encoder;

#[cfg(test)]
pub mod tests;

// Re-export main functions for easy access
pub use encoder::{encode, write_export};
