//! Persistence of cleaning outputs: the clean dataset table and the
//! machine-readable cleaning report.

pub mod output;
pub mod report;

pub use output::{format_numeric, write_clean_csv};
pub use report::{CleaningReport, ExplorationSection, build_report, write_report};
