//! Core export encoding implementation

use std::io::{self, Write};

use crate::app::models::Triple;
use crate::constants::{EXPORT_FRACTION_DIGITS, FIELD_DELIMITER};

/// Render readings as delimited text, one `fi;teta;R` record per line
///
/// Each value carries exactly [`EXPORT_FRACTION_DIGITS`] digits after the
/// decimal point. Rust's formatter always uses `.` as the decimal separator,
/// so the output is reproducible under any locale. Total over any finite
/// sequence; an empty slice produces empty text.
pub fn encode(triples: &[Triple]) -> String {
    let mut out = String::new();
    for triple in triples {
        out.push_str(&encode_record(triple));
        out.push('\n');
    }
    out
}

/// Write readings in export format to a file-like sink
pub fn write_export<W: Write>(sink: &mut W, triples: &[Triple]) -> io::Result<()> {
    for triple in triples {
        writeln!(sink, "{}", encode_record(triple))?;
    }
    Ok(())
}

/// Render a single record without the line terminator
fn encode_record(triple: &Triple) -> String {
    format!(
        "{:.digits$}{sep}{:.digits$}{sep}{:.digits$}",
        triple.fi,
        triple.teta,
        triple.r,
        digits = EXPORT_FRACTION_DIGITS,
        sep = FIELD_DELIMITER,
    )
}
