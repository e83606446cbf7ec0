//! Fatal error kinds. None of them are retried; the binary reports and exits 1.

use std::io;
use thiserror::Error;

/// Error returned by the allow-list loader, the stream processor or the reporter.
///
/// The `Display` text is exactly what the binary prints to stderr, so the io
/// error is carried as a plain field rather than a `source` to avoid printing
/// it twice under `{:#}`.
#[derive(Debug, Error)]
pub enum ExtCountError {
    /// The allow-list resource could not be opened or read.
    #[error("Error reading allowed extensions: {0}")]
    ResourceLoad(io::Error),
    /// Standard input failed for a reason other than end of stream.
    #[error("Error reading from stdin: {0}")]
    StreamRead(io::Error),
    /// The report could not be written to standard output.
    #[error("Error writing report: {0}")]
    ReportWrite(io::Error),
}
