//! Clean dataset CSV writer.

use std::path::Path;

use anyhow::{Context, Result};
use casas_model::{CleanRecord, REQUIRED_COLUMNS};

/// Format a float without a trailing `.0` for integral values, so the
/// output table reads naturally and round-trips through the pipeline.
pub fn format_numeric(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Write the clean records as a five-column CSV, creating parent
/// directories as needed.
pub fn write_clean_csv(path: &Path, records: &[CleanRecord]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("create output file {}", path.display()))?;
    writer
        .write_record(REQUIRED_COLUMNS)
        .context("write header row")?;
    for record in records {
        writer
            .write_record([
                format_numeric(record.superficie),
                record.habitaciones.to_string(),
                record.antiguedad.to_string(),
                record.ubicacion.as_str().to_string(),
                format_numeric(record.precio),
            ])
            .context("write data row")?;
    }
    writer
        .flush()
        .with_context(|| format!("flush output file {}", path.display()))?;
    Ok(())
}
