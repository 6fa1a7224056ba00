//! The machine-readable cleaning report.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use casas_clean::{CleanOutcome, Exploration};
use casas_model::{CleanRecord, ProblemCounts, REQUIRED_COLUMNS};
use serde::{Deserialize, Serialize};

/// How many sample records the report keeps on each side.
const EXAMPLE_ROWS: usize = 5;

/// One cleaning run's report: what the table looked like, what was
/// fixed, and what came out. Written once per run, then discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleaningReport {
    pub exploration: ExplorationSection,
    pub problems_summary: ProblemCounts,
    pub after_shape: (usize, usize),
    pub examples_before: Vec<BTreeMap<String, String>>,
    pub examples_after: Vec<CleanRecord>,
}

/// The subset of the exploration snapshot the report carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorationSection {
    pub shape: (usize, usize),
    pub dtypes: BTreeMap<String, String>,
    pub nulls: BTreeMap<String, usize>,
}

/// Assemble the report from the before-snapshot and the clean outcome.
pub fn build_report(exploration: &Exploration, outcome: &CleanOutcome) -> CleaningReport {
    CleaningReport {
        exploration: ExplorationSection {
            shape: exploration.shape,
            dtypes: exploration.dtypes.clone(),
            nulls: exploration.nulls.clone(),
        },
        problems_summary: outcome.problems,
        after_shape: (outcome.records.len(), REQUIRED_COLUMNS.len()),
        examples_before: exploration.head.iter().take(EXAMPLE_ROWS).cloned().collect(),
        examples_after: outcome
            .records
            .iter()
            .take(EXAMPLE_ROWS)
            .cloned()
            .collect(),
    }
}

/// Write the report as pretty-printed JSON, creating parent
/// directories as needed.
pub fn write_report(path: &Path, report: &CleaningReport) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create report directory {}", parent.display()))?;
    }
    let file = std::fs::File::create(path)
        .with_context(|| format!("create report file {}", path.display()))?;
    serde_json::to_writer_pretty(file, report)
        .with_context(|| format!("write report {}", path.display()))?;
    Ok(())
}
