//! Typed view over the raw input table.
//!
//! Validates the required columns and converts string cells into the
//! tagged [`RawValue`] representation before any parsing logic runs.
//! Extra columns in the source file are ignored.

use std::path::Path;

use casas_model::{RawValue, REQUIRED_COLUMNS};

use crate::csv_table::CsvTable;
use crate::error::{IngestError, Result};

/// The five raw predictor/target columns, row-aligned.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub superficie: Vec<RawValue>,
    pub habitaciones: Vec<RawValue>,
    pub antiguedad: Vec<RawValue>,
    pub ubicacion: Vec<RawValue>,
    pub precio: Vec<RawValue>,
}

impl RawTable {
    /// Build a `RawTable` from an untyped CSV table.
    ///
    /// Fails with [`IngestError::MissingColumn`] if any required
    /// column is absent from the header row.
    pub fn from_table(table: &CsvTable, path: &Path) -> Result<Self> {
        let mut columns = Vec::with_capacity(REQUIRED_COLUMNS.len());
        for name in REQUIRED_COLUMNS {
            let values = table
                .column_values(name)
                .ok_or_else(|| IngestError::MissingColumn {
                    path: path.to_path_buf(),
                    column: name.to_string(),
                })?;
            columns.push(
                values
                    .iter()
                    .map(|cell| RawValue::from_cell(cell))
                    .collect::<Vec<_>>(),
            );
        }
        let mut iter = columns.into_iter();
        Ok(RawTable {
            superficie: iter.next().unwrap_or_default(),
            habitaciones: iter.next().unwrap_or_default(),
            antiguedad: iter.next().unwrap_or_default(),
            ubicacion: iter.next().unwrap_or_default(),
            precio: iter.next().unwrap_or_default(),
        })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.superficie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.superficie.is_empty()
    }
}
