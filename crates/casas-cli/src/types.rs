use std::path::PathBuf;

use casas_model::ProblemCounts;

/// Outcome of one `clean` invocation, used for the printed summary.
#[derive(Debug)]
pub struct CleanRunResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub report: PathBuf,
    pub before_shape: (usize, usize),
    pub after_shape: (usize, usize),
    pub problems: ProblemCounts,
}
