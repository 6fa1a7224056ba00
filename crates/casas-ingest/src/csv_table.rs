//! Raw CSV table loading.
//!
//! Cells are kept as strings at this stage; type interpretation is the
//! normalization layer's job. Headers and cells are trimmed and
//! stripped of a UTF-8 BOM so downstream lookups never see invisible
//! characters.

use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

/// An untyped table: one header row plus string cells.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Index of a column by exact, case-insensitive header match.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
    }

    /// All cells of one column, padding short rows with empty strings.
    pub fn column_values(&self, name: &str) -> Option<Vec<String>> {
        let idx = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(idx).cloned().unwrap_or_default())
                .collect(),
        )
    }

    /// (rows, columns) shape of the table body.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.headers.len())
    }
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a CSV file into a [`CsvTable`].
///
/// The first record is taken as the header row. Rows are padded or
/// truncated to the header width; fully empty rows are skipped.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    let mut records = reader.records();
    let header_record = match records.next() {
        Some(record) => record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?,
        None => {
            return Err(IngestError::EmptyInput {
                path: path.to_path_buf(),
            });
        }
    };
    let headers: Vec<String> = header_record.iter().map(normalize_cell).collect();

    let mut rows = Vec::new();
    for record in records {
        let record = record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            let value = record.get(idx).unwrap_or("");
            row.push(normalize_cell(value));
        }
        rows.push(row);
    }

    tracing::debug!(
        path = %path.display(),
        rows = rows.len(),
        columns = headers.len(),
        "csv table loaded"
    );

    Ok(CsvTable { headers, rows })
}
