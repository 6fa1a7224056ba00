//! Order statistics used by the imputer and the target filter.
//!
//! Quantiles use linear interpolation between order statistics (the
//! conventional default), which keeps runs reproducible across dataset
//! sizes.

/// Quantile of an ascending-sorted slice with linear interpolation.
///
/// `q` is in `[0, 1]`. Returns `None` for an empty slice.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let position = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    if lower == upper {
        return Some(sorted[lower]);
    }
    let weight = position - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * weight)
}

/// Median of an unsorted slice. `None` when empty.
pub fn median(values: &[f64]) -> Option<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    quantile_sorted(&sorted, 0.5)
}

/// Round to the nearest integer, half away from zero.
pub fn round_to_i64(value: f64) -> i64 {
    value.round() as i64
}

/// Quantile bin edges for partitioning a column into up to `max_bins`
/// groups of approximately equal population.
///
/// Fewer bins are produced when the column has fewer distinct values;
/// duplicate edges are dropped. A result with fewer than two edges
/// means no binning is possible.
pub fn quantile_bin_edges(values: &[f64], max_bins: usize) -> Vec<f64> {
    if values.is_empty() || max_bins == 0 {
        return Vec::new();
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mut distinct = 1usize;
    for pair in sorted.windows(2) {
        if pair[0] != pair[1] {
            distinct += 1;
        }
    }
    let bins = max_bins.min(distinct);
    let mut edges = Vec::with_capacity(bins + 1);
    for i in 0..=bins {
        let q = i as f64 / bins as f64;
        if let Some(edge) = quantile_sorted(&sorted, q) {
            edges.push(edge);
        }
    }
    edges.dedup();
    edges
}

/// Bin index of `x` given ascending `edges`. Bins are right-closed;
/// the first bin also includes its left edge, so every value between
/// the minimum and maximum edge lands somewhere. Values outside the
/// edge range (or an edge list too short to form a bin) yield `None`.
pub fn bin_index(edges: &[f64], x: f64) -> Option<usize> {
    if edges.len() < 2 || x < edges[0] || x > edges[edges.len() - 1] {
        return None;
    }
    if x <= edges[1] {
        return Some(0);
    }
    for bin in 1..edges.len() - 1 {
        if x <= edges[bin + 1] {
            return Some(bin);
        }
    }
    None
}
