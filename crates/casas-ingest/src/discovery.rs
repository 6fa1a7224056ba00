//! Input file discovery.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Conventional file name of the dirty input table.
pub const DEFAULT_INPUT_NAME: &str = "casas_sucias.csv";

/// Candidate locations probed when no explicit input path is given.
fn candidate_paths() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join(DEFAULT_INPUT_NAME));
    }
    candidates.push(PathBuf::from("/mnt/data").join(DEFAULT_INPUT_NAME));
    candidates
}

/// Resolve the input table path.
///
/// An explicit path must exist; with no explicit path, the first
/// existing conventional candidate wins. Failure here is fatal for the
/// run.
pub fn resolve_input_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return Err(IngestError::InputMissing {
            path: path.to_path_buf(),
        });
    }

    let candidates = candidate_paths();
    for candidate in &candidates {
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "input discovered");
            return Ok(candidate.clone());
        }
    }
    Err(IngestError::InputNotFound { candidates })
}
