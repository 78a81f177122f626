//! Core coordinate parsing implementation
//!
//! Pure, stateless line-oriented parsing of instrument text exports. No I/O
//! happens here; callers hand in the full text and receive either the
//! complete ordered reading sequence or the first error encountered.

use thiserror::Error;

use crate::app::models::Triple;
use crate::constants::{FIELDS_PER_RECORD, FIELD_DELIMITER};

/// Errors produced while parsing a coordinate export
///
/// Parse errors are always caller-recoverable by fixing the input and
/// re-parsing; no state is left behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input contained no coordinate records after blank-line filtering
    #[error("input contains no coordinate records")]
    EmptyInput,

    /// A line did not yield exactly three finite decimal fields
    #[error("malformed record at line {line_number}: '{raw_line}' ({reason})")]
    MalformedRecord {
        /// 1-based physical line number in the input
        line_number: usize,
        /// The offending line, verbatim
        raw_line: String,
        /// What was wrong with it
        reason: String,
    },
}

/// Parse raw delimited text into an ordered sequence of readings
///
/// Lines that are empty or whitespace-only are skipped. Every remaining line
/// must split on `;` into exactly three fields, each a finite decimal number.
/// The first malformed line aborts the parse; if nothing remains after
/// filtering, [`ParseError::EmptyInput`] is returned. Input order is
/// preserved because it determines storage and display order downstream.
pub fn parse(raw_text: &str) -> Result<Vec<Triple>, ParseError> {
    let mut triples = Vec::new();

    for (index, line) in raw_text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        triples.push(parse_record(line, index + 1)?);
    }

    if triples.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    Ok(triples)
}

/// Parse a single non-blank record line
fn parse_record(line: &str, line_number: usize) -> Result<Triple, ParseError> {
    let fields: Vec<&str> = line.trim().split(FIELD_DELIMITER).collect();

    if fields.len() != FIELDS_PER_RECORD {
        return Err(malformed(
            line_number,
            line,
            format!(
                "expected {} fields separated by '{}', found {}",
                FIELDS_PER_RECORD,
                FIELD_DELIMITER,
                fields.len()
            ),
        ));
    }

    let fi = parse_field(fields[0], "fi", line, line_number)?;
    let teta = parse_field(fields[1], "teta", line, line_number)?;
    let r = parse_field(fields[2], "R", line, line_number)?;

    Ok(Triple::new(fi, teta, r))
}

/// Parse one field as a finite decimal number
///
/// `f64::from_str` accepts `NaN` and `inf` spellings; those are not valid
/// readings and are rejected here.
fn parse_field(
    field: &str,
    name: &str,
    line: &str,
    line_number: usize,
) -> Result<f64, ParseError> {
    let trimmed = field.trim();

    let value: f64 = trimmed.parse().map_err(|_| {
        malformed(
            line_number,
            line,
            format!("field {} is not a decimal number: '{}'", name, trimmed),
        )
    })?;

    if !value.is_finite() {
        return Err(malformed(
            line_number,
            line,
            format!("field {} is not finite: '{}'", name, trimmed),
        ));
    }

    Ok(value)
}

fn malformed(line_number: usize, raw_line: &str, reason: String) -> ParseError {
    ParseError::MalformedRecord {
        line_number,
        raw_line: raw_line.to_string(),
        reason,
    }
}
