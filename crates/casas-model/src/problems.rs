//! Per-field problem counters surfaced in the cleaning report.

use serde::{Deserialize, Serialize};

/// Counts of invalid or repaired values detected during one cleaning
/// run. Per-value parse failures never abort the pipeline; they are
/// only visible here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemCounts {
    /// Surface values present in the input but with no usable numeric
    /// content (or a non-positive magnitude).
    pub superficie_non_numeric: usize,
    /// Room counts that parsed but fell outside `[1, 10]`, plus values
    /// that did not parse at all.
    pub habitaciones_out_of_range: usize,
    /// Negative ages with magnitude <= 120, repaired to their absolute
    /// value as sign-entry errors.
    pub antiguedad_negative_fixed: usize,
    /// Location values recovered from misspellings or partial matches.
    pub ubicacion_fixed: usize,
    /// Price cells left missing by the target filter: non-numeric,
    /// non-positive, placeholder, or outside the IQR band.
    pub precio_outliers_marked: usize,
}
