//! Record types shared across the cleaning pipeline.

use serde::{Deserialize, Serialize};

/// A raw cell value as it arrives at the ingestion boundary.
///
/// Source tables and inference payloads deliver fields as free text or
/// as numbers; this tagged variant makes the distinction explicit so
/// that parsing logic never has to guess at a value's representation.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Textual cell content, already trimmed of surrounding whitespace.
    Text(String),
    /// A value that arrived as a number (e.g. from a JSON payload).
    Number(f64),
    /// The cell was empty or not present at all.
    Absent,
}

impl RawValue {
    /// Build a `RawValue` from a CSV cell. Empty or whitespace-only
    /// cells become [`RawValue::Absent`].
    pub fn from_cell(cell: &str) -> Self {
        let trimmed = cell.trim();
        if trimmed.is_empty() {
            RawValue::Absent
        } else {
            RawValue::Text(trimmed.to_string())
        }
    }

    /// Convenience constructor for tests and single-value callers.
    pub fn text(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, RawValue::Absent)
    }
}

/// Canonical location category.
///
/// The dataset's native vocabulary is Spanish, so the canonical string
/// forms are `"urbano"` and `"rural"`; those are also what the clean
/// output table and the report carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Location {
    #[serde(rename = "urbano")]
    Urban,
    #[serde(rename = "rural")]
    Rural,
}

impl Location {
    /// The canonical string written to output tables.
    pub fn as_str(self) -> &'static str {
        match self {
            Location::Urban => "urbano",
            Location::Rural => "rural",
        }
    }

    /// Parse an exact canonical string. Typo repair lives in the
    /// normalization layer, not here.
    pub fn from_canonical(value: &str) -> Option<Self> {
        match value {
            "urbano" => Some(Location::Urban),
            "rural" => Some(Location::Rural),
            _ => None,
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fully cleaned row of the housing dataset.
///
/// Invariants: `superficie > 0`, `habitaciones` in `[1, 10]`,
/// `antiguedad >= 0`, `precio > 0` and free of placeholder and extreme
/// outlier values. Every field is non-missing by construction; rows
/// whose price could not be recovered are dropped before this type is
/// built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanRecord {
    pub superficie: f64,
    pub habitaciones: i64,
    pub antiguedad: i64,
    pub ubicacion: Location,
    pub precio: f64,
}
