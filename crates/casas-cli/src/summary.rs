//! Human-readable run summaries.

use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use casas_clean::Exploration;

use crate::types::CleanRunResult;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    Cell::new(count).set_alignment(CellAlignment::Right)
}

/// Print the summary for a completed `clean` run.
pub fn print_summary(result: &CleanRunResult) {
    println!("Input: {}", result.input.display());
    println!("Output: {}", result.output.display());
    println!("Report: {}", result.report.display());

    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![header_cell("Problem"), header_cell("Count")]);
    table.add_row(vec![
        Cell::new("superficie: non-numeric"),
        count_cell(result.problems.superficie_non_numeric),
    ]);
    table.add_row(vec![
        Cell::new("habitaciones: out of range"),
        count_cell(result.problems.habitaciones_out_of_range),
    ]);
    table.add_row(vec![
        Cell::new("antiguedad: negative fixed"),
        count_cell(result.problems.antiguedad_negative_fixed),
    ]);
    table.add_row(vec![
        Cell::new("ubicacion: typo fixed"),
        count_cell(result.problems.ubicacion_fixed),
    ]);
    table.add_row(vec![
        Cell::new("precio: marked missing"),
        count_cell(result.problems.precio_outliers_marked),
    ]);
    println!("{table}");

    let (before_rows, _) = result.before_shape;
    let (after_rows, _) = result.after_shape;
    println!(
        "Rows: {before_rows} before, {after_rows} after ({} dropped)",
        before_rows.saturating_sub(after_rows)
    );
}

/// Print the exploration snapshot for the `explore` command.
pub fn print_exploration(input: &Path, exploration: &Exploration) {
    println!("Table: {}", input.display());
    println!(
        "Shape: {} rows x {} columns",
        exploration.shape.0, exploration.shape.1
    );

    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Dtype"),
        header_cell("Nulls"),
        header_cell("Count"),
        header_cell("Summary"),
    ]);
    for (column, dtype) in &exploration.dtypes {
        let nulls = exploration.nulls.get(column).copied().unwrap_or(0);
        let summary = exploration.describe.get(column);
        let count = summary.map_or(0, |s| s.count);
        let detail = summary.map_or_else(String::new, |s| {
            if let (Some(mean), Some(median)) = (s.mean, s.median) {
                format!("mean {mean:.1}, median {median:.1}")
            } else if let (Some(top), Some(freq)) = (s.top.as_deref(), s.freq) {
                format!("top {top:?} ({freq})")
            } else {
                String::new()
            }
        });
        table.add_row(vec![
            Cell::new(column),
            Cell::new(dtype),
            count_cell(nulls),
            count_cell(count),
            Cell::new(detail),
        ]);
    }
    println!("{table}");
}
