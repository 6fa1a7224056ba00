//! Housing data ingestion.
//!
//! Reads the raw tabular input, probes conventional input locations,
//! and validates that the five required columns are present before any
//! cleaning logic runs.

pub mod csv_table;
pub mod discovery;
pub mod error;
pub mod raw_table;

pub use csv_table::{CsvTable, read_csv_table};
pub use discovery::resolve_input_path;
pub use error::{IngestError, Result};
pub use raw_table::RawTable;
