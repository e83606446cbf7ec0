pub mod config;
pub mod error;
pub mod logging;

// Counting pipeline: allow-list -> extract -> tally -> report.
pub mod allowlist;
pub mod extract;
pub mod process;
pub mod report;
pub mod tally;

pub use allowlist::AllowList;
pub use error::ExtCountError;
pub use process::{process_lines, ProcessStats};
pub use report::{write_report, ReportEntry};
pub use tally::ExtensionTally;
