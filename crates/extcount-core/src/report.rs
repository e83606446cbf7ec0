//! Frequency report rendering.

use crate::error::ExtCountError;
use std::io::Write;

/// First line of every report, printed even when nothing matched.
pub const HEADER: &str = "File Extension Count (sorted by frequency):";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub extension: String,
    pub count: u64,
}

/// Write the header and one `<ext>: <count>` line per entry, in the given order.
pub fn write_report<W: Write>(mut out: W, entries: &[ReportEntry]) -> Result<(), ExtCountError> {
    writeln!(out, "{HEADER}").map_err(ExtCountError::ReportWrite)?;
    for entry in entries {
        writeln!(out, "{}: {}", entry.extension, entry.count).map_err(ExtCountError::ReportWrite)?;
    }
    out.flush().map_err(ExtCountError::ReportWrite)
}
