//! Report rendering for load results

mod formatter;

pub use formatter::{OutputFormat, ReportFormatter, Reporter};
