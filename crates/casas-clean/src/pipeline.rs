//! Dataset-level cleaning orchestration.
//!
//! Sequences normalization, imputation, and target filtering over a
//! whole raw table, then drops every row whose price could not be
//! recovered. Insertion order is preserved apart from row removal.

use casas_ingest::RawTable;
use casas_model::{CleanRecord, ProblemCounts};
use tracing::{debug, info};

use crate::impute::{PredictorColumns, impute};
use crate::normalize::{
    Outcome, normalize_age, normalize_location, normalize_rooms, normalize_surface,
};
use crate::price::clean_price;

/// Result of cleaning one table.
#[derive(Debug, Clone)]
pub struct CleanOutcome {
    /// Fully cleaned rows, in input order.
    pub records: Vec<CleanRecord>,
    /// Per-field problem counters for the report.
    pub problems: ProblemCounts,
    /// Row count before any row was dropped.
    pub before_rows: usize,
}

fn push_outcome<T>(
    outcome: Outcome<T>,
    column: &mut Vec<Option<T>>,
    invalid: Option<&mut usize>,
    repaired: Option<&mut usize>,
) {
    if outcome.is_invalid()
        && let Some(counter) = invalid
    {
        *counter += 1;
    }
    if outcome.is_repaired()
        && let Some(counter) = repaired
    {
        *counter += 1;
    }
    column.push(outcome.into_value());
}

/// Clean a raw table: normalize each predictor column, impute the
/// remaining gaps, filter the price column, and drop rows without a
/// usable price.
pub fn clean_table(raw: &RawTable) -> CleanOutcome {
    let before_rows = raw.len();
    let mut problems = ProblemCounts::default();
    let mut columns = PredictorColumns::with_capacity(before_rows);

    for value in &raw.superficie {
        push_outcome(
            normalize_surface(value),
            &mut columns.superficie,
            Some(&mut problems.superficie_non_numeric),
            None,
        );
    }
    for value in &raw.habitaciones {
        push_outcome(
            normalize_rooms(value),
            &mut columns.habitaciones,
            Some(&mut problems.habitaciones_out_of_range),
            None,
        );
    }
    for value in &raw.antiguedad {
        push_outcome(
            normalize_age(value),
            &mut columns.antiguedad,
            None,
            Some(&mut problems.antiguedad_negative_fixed),
        );
    }
    for value in &raw.ubicacion {
        push_outcome(
            normalize_location(value),
            &mut columns.ubicacion,
            None,
            Some(&mut problems.ubicacion_fixed),
        );
    }

    // Statistics live only for the duration of the run.
    let stats = impute(&mut columns);
    debug!(?stats, "imputation complete");

    let price = clean_price(&raw.precio);
    problems.precio_outliers_marked = price.marked_missing;

    let mut records = Vec::with_capacity(before_rows - price.marked_missing.min(before_rows));
    for idx in 0..before_rows {
        // No imputation strategy exists for the target; rows without a
        // recoverable price cannot be used for supervised training.
        let Some(precio) = price.values[idx] else {
            continue;
        };
        let (Some(superficie), Some(habitaciones), Some(antiguedad), Some(ubicacion)) = (
            columns.superficie[idx],
            columns.habitaciones[idx],
            columns.antiguedad[idx],
            columns.ubicacion[idx],
        ) else {
            continue;
        };
        records.push(CleanRecord {
            superficie,
            habitaciones,
            antiguedad,
            ubicacion,
            precio,
        });
    }

    info!(
        before_rows,
        after_rows = records.len(),
        dropped = before_rows - records.len(),
        "table cleaned"
    );

    CleanOutcome {
        records,
        problems,
        before_rows,
    }
}
