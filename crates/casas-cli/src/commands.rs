//! Command implementations.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use casas_clean::{clean_table, explore_table};
use casas_ingest::{RawTable, read_csv_table, resolve_input_path};
use casas_model::REQUIRED_COLUMNS;
use casas_report::{build_report, write_clean_csv, write_report};

use crate::cli::{CleanArgs, ExploreArgs};
use crate::summary::print_exploration;
use crate::types::CleanRunResult;

/// Run the full cleaning pipeline: explore, normalize, impute, filter,
/// persist the dataset and the report.
pub fn run_clean(args: &CleanArgs) -> Result<CleanRunResult> {
    let input = resolve_input_path(args.input.as_deref())?;
    let span = info_span!("clean", input = %input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let table = read_csv_table(&input)?;
    let raw = RawTable::from_table(&table, &input)?;
    let before_shape = table.shape();
    info!(
        rows = before_shape.0,
        columns = before_shape.1,
        "input table loaded"
    );

    // Before-snapshot for the report; never feeds imputation.
    let exploration = explore_table(&table);

    let outcome = clean_table(&raw);

    write_clean_csv(&args.output, &outcome.records)
        .with_context(|| format!("write clean dataset {}", args.output.display()))?;
    let report = build_report(&exploration, &outcome);
    write_report(&args.report, &report)
        .with_context(|| format!("write cleaning report {}", args.report.display()))?;

    let after_shape = (outcome.records.len(), REQUIRED_COLUMNS.len());
    info!(
        before_rows = before_shape.0,
        after_rows = after_shape.0,
        duration_ms = start.elapsed().as_millis(),
        "cleaning run complete"
    );

    Ok(CleanRunResult {
        input,
        output: args.output.clone(),
        report: args.report.clone(),
        before_shape,
        after_shape,
        problems: outcome.problems,
    })
}

/// Print descriptive statistics for a table without touching it.
pub fn run_explore(args: &ExploreArgs) -> Result<()> {
    let input = resolve_input_path(args.input.as_deref())?;
    let table = read_csv_table(&input)?;
    let exploration = explore_table(&table);
    print_exploration(&input, &exploration);
    Ok(())
}
