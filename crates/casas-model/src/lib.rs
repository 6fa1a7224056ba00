//! Shared data model for the housing dataset cleaning pipeline.
//!
//! Defines the tagged raw-value variant used at the ingestion boundary,
//! the canonical record types, and the per-field problem counters that
//! feed the cleaning report.

pub mod problems;
pub mod record;

pub use problems::ProblemCounts;
pub use record::{CleanRecord, Location, RawValue};

/// Required input columns, in canonical output order.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    COL_SUPERFICIE,
    COL_HABITACIONES,
    COL_ANTIGUEDAD,
    COL_UBICACION,
    COL_PRECIO,
];

/// Surface area in square meters.
pub const COL_SUPERFICIE: &str = "superficie";
/// Room count.
pub const COL_HABITACIONES: &str = "habitaciones";
/// Age of the property in years.
pub const COL_ANTIGUEDAD: &str = "antiguedad";
/// Location category (urbano/rural).
pub const COL_UBICACION: &str = "ubicacion";
/// Sale price, the training target.
pub const COL_PRECIO: &str = "precio";
