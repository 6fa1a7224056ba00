//! Descriptive exploration of a raw table.
//!
//! Purely observational: nothing here mutates the dataset or feeds the
//! imputer. The exploration populates the "before" section of the
//! cleaning report and the `explore` CLI command.

use std::collections::BTreeMap;

use casas_ingest::CsvTable;
use serde::Serialize;

use crate::stats::quantile_sorted;

/// How many sample rows to keep verbatim.
const HEAD_ROWS: usize = 5;

/// Literal cell contents a tabular reader would load as null.
const NULL_TOKENS: [&str; 5] = ["nan", "na", "n/a", "null", "none"];

fn is_null_cell(cell: &str) -> bool {
    let trimmed = cell.trim();
    trimmed.is_empty() || NULL_TOKENS.contains(&trimmed.to_lowercase().as_str())
}

/// Snapshot of a table before cleaning.
#[derive(Debug, Clone, Serialize)]
pub struct Exploration {
    /// (rows, columns).
    pub shape: (usize, usize),
    /// Inferred storage type per column: `int64`, `float64`, `object`.
    pub dtypes: BTreeMap<String, String>,
    /// Count of null cells per column: empty, or a literal missing
    /// marker such as `nan` or `None`.
    pub nulls: BTreeMap<String, usize>,
    /// First rows, verbatim, keyed by column name.
    pub head: Vec<BTreeMap<String, String>>,
    /// Per-column descriptive summary.
    pub describe: BTreeMap<String, ColumnSummary>,
}

/// Descriptive statistics for one column. Numeric fields are present
/// for numeric columns, frequency fields for categorical ones.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    /// Non-null cell count.
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub std: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(rename = "25%", skip_serializing_if = "Option::is_none")]
    pub q25: Option<f64>,
    #[serde(rename = "50%", skip_serializing_if = "Option::is_none")]
    pub median: Option<f64>,
    #[serde(rename = "75%", skip_serializing_if = "Option::is_none")]
    pub q75: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freq: Option<usize>,
}

/// Compute the exploration snapshot for a raw table.
pub fn explore_table(table: &CsvTable) -> Exploration {
    let shape = table.shape();
    let mut dtypes = BTreeMap::new();
    let mut nulls = BTreeMap::new();
    let mut describe = BTreeMap::new();

    for (idx, header) in table.headers.iter().enumerate() {
        let cells: Vec<&str> = table
            .rows
            .iter()
            .map(|row| row.get(idx).map_or("", String::as_str))
            .collect();
        let present: Vec<&str> = cells
            .iter()
            .copied()
            .filter(|cell| !is_null_cell(cell))
            .collect();
        nulls.insert(header.clone(), cells.len() - present.len());
        dtypes.insert(header.clone(), infer_dtype(&cells, &present).to_string());
        describe.insert(header.clone(), summarize_column(&present));
    }

    let head = table
        .rows
        .iter()
        .take(HEAD_ROWS)
        .map(|row| {
            table
                .headers
                .iter()
                .enumerate()
                .map(|(idx, header)| {
                    (header.clone(), row.get(idx).cloned().unwrap_or_default())
                })
                .collect()
        })
        .collect();

    Exploration {
        shape,
        dtypes,
        nulls,
        head,
        describe,
    }
}

/// Infer a column's storage type from its raw cells: all-integer
/// columns with no nulls are `int64`, otherwise fully numeric content
/// (nulls allowed) is `float64`, anything else is `object`. An
/// entirely null column reads as `float64`.
fn infer_dtype(cells: &[&str], present: &[&str]) -> &'static str {
    if present.is_empty() {
        return "float64";
    }
    let all_int = present.iter().all(|cell| cell.trim().parse::<i64>().is_ok());
    if all_int && present.len() == cells.len() {
        return "int64";
    }
    let all_float = present
        .iter()
        .all(|cell| cell.trim().parse::<f64>().is_ok());
    if all_float { "float64" } else { "object" }
}

fn summarize_column(present: &[&str]) -> ColumnSummary {
    let numeric: Vec<f64> = present
        .iter()
        .filter_map(|cell| cell.trim().parse::<f64>().ok())
        .filter(|value| !value.is_nan())
        .collect();

    if !numeric.is_empty() && numeric.len() == present.len() {
        let mut sorted = numeric.clone();
        sorted.sort_by(f64::total_cmp);
        let count = sorted.len();
        let mean = sorted.iter().sum::<f64>() / count as f64;
        let std = if count > 1 {
            let variance = sorted
                .iter()
                .map(|value| (value - mean).powi(2))
                .sum::<f64>()
                / (count - 1) as f64;
            Some(variance.sqrt())
        } else {
            None
        };
        return ColumnSummary {
            count,
            mean: Some(mean),
            std,
            min: sorted.first().copied(),
            q25: quantile_sorted(&sorted, 0.25),
            median: quantile_sorted(&sorted, 0.5),
            q75: quantile_sorted(&sorted, 0.75),
            max: sorted.last().copied(),
            unique: None,
            top: None,
            freq: None,
        };
    }

    let mut frequencies: BTreeMap<&str, usize> = BTreeMap::new();
    for cell in present {
        *frequencies.entry(cell).or_default() += 1;
    }
    let top = frequencies
        .iter()
        .max_by_key(|(_, count)| **count)
        .map(|(value, count)| ((*value).to_string(), *count));
    ColumnSummary {
        count: present.len(),
        mean: None,
        std: None,
        min: None,
        q25: None,
        median: None,
        q75: None,
        max: None,
        unique: Some(frequencies.len()),
        top: top.as_ref().map(|(value, _)| value.clone()),
        freq: top.map(|(_, count)| count),
    }
}
