//! Ingestion error types.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, IngestError>;

/// Fatal ingestion failures. Per-value parse problems are not errors;
/// they degrade to missing values during normalization.
#[derive(Debug, Error)]
pub enum IngestError {
    /// No input file was given and none of the conventional candidate
    /// locations exist.
    #[error("input file not found; tried: {}", format_candidates(.candidates))]
    InputNotFound { candidates: Vec<PathBuf> },

    /// The given input path does not exist.
    #[error("input file not found: {path}")]
    InputMissing { path: PathBuf },

    /// A required column is absent from the header row.
    #[error("required column missing from {path}: {column}")]
    MissingColumn { path: PathBuf, column: String },

    /// The input file has no header row at all.
    #[error("input file is empty: {path}")]
    EmptyInput { path: PathBuf },

    #[error("read csv {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn format_candidates(candidates: &[PathBuf]) -> String {
    candidates
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
