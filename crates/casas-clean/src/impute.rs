//! Multi-pass statistical imputation of the predictor columns.
//!
//! The four stages run in a fixed, dependency-respecting order:
//! location (global mode), rooms (medians by surface quantile bin),
//! surface (medians by location and room count), then age (medians by
//! location). Later stages consume earlier stages' already-imputed
//! values, with one deliberate exception: the room stage bins rows by
//! the surface column as it stood after normalization, before surface
//! itself is imputed. Each stage computes its statistics explicitly
//! and passes them into pure per-row fill functions.

use std::collections::BTreeMap;

use casas_model::Location;
use tracing::debug;

use crate::defaults;
use crate::stats::{bin_index, median, quantile_bin_edges, round_to_i64};

/// Maximum number of surface quantile bins for room imputation.
const SURFACE_BIN_COUNT: usize = 5;

/// Valid room-count range; imputed values are clamped into it.
const ROOMS_MIN: i64 = 1;
const ROOMS_MAX: i64 = 10;

/// The four predictor columns after normalization, row-aligned.
/// `None` marks values the normalizer could not recover.
#[derive(Debug, Clone, Default)]
pub struct PredictorColumns {
    pub superficie: Vec<Option<f64>>,
    pub habitaciones: Vec<Option<i64>>,
    pub antiguedad: Vec<Option<i64>>,
    pub ubicacion: Vec<Option<Location>>,
}

impl PredictorColumns {
    pub fn with_capacity(rows: usize) -> Self {
        PredictorColumns {
            superficie: Vec::with_capacity(rows),
            habitaciones: Vec::with_capacity(rows),
            antiguedad: Vec::with_capacity(rows),
            ubicacion: Vec::with_capacity(rows),
        }
    }

    pub fn len(&self) -> usize {
        self.superficie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.superficie.is_empty()
    }
}

/// Statistics derived for one imputation run. Computed stage by stage,
/// consumed by the per-row fill functions, and discarded afterward;
/// kept only long enough to be logged.
#[derive(Debug, Clone)]
pub struct ImputationStats {
    pub location_mode: Location,
    pub surface_bin_edges: Vec<f64>,
    pub rooms_median_by_bin: Vec<Option<f64>>,
    pub rooms_global_median: Option<f64>,
    pub surface_median_by_group: BTreeMap<(Location, i64), f64>,
    pub surface_global_median: Option<f64>,
    pub age_median_by_location: BTreeMap<Location, f64>,
    pub age_global_median: Option<f64>,
}

/// Fill every missing predictor value in place and return the
/// statistics that were used.
pub fn impute(columns: &mut PredictorColumns) -> ImputationStats {
    let location_mode = impute_location(columns);
    let (surface_bin_edges, rooms_median_by_bin, rooms_global_median) = impute_rooms(columns);
    let (surface_median_by_group, surface_global_median) = impute_surface(columns);
    let (age_median_by_location, age_global_median) = impute_age(columns);

    let stats = ImputationStats {
        location_mode,
        surface_bin_edges,
        rooms_median_by_bin,
        rooms_global_median,
        surface_median_by_group,
        surface_global_median,
        age_median_by_location,
        age_global_median,
    };
    debug!(
        location_mode = %stats.location_mode,
        surface_bins = stats.rooms_median_by_bin.len(),
        surface_groups = stats.surface_median_by_group.len(),
        "imputation statistics computed"
    );
    stats
}

/// Mode of the known locations. Ties resolve to the lexicographically
/// first canonical string (`rural`), matching conventional mode order;
/// with no known location at all the mode is undefined.
fn location_mode(values: &[Option<Location>]) -> Option<Location> {
    let mut urban = 0usize;
    let mut rural = 0usize;
    for value in values.iter().flatten() {
        match value {
            Location::Urban => urban += 1,
            Location::Rural => rural += 1,
        }
    }
    if urban == 0 && rural == 0 {
        None
    } else if urban > rural {
        Some(Location::Urban)
    } else {
        Some(Location::Rural)
    }
}

/// Stage 1: fill missing locations with the global mode, defaulting to
/// urban when nothing is known. Location goes first because it is a
/// grouping key for both the surface and age stages.
fn impute_location(columns: &mut PredictorColumns) -> Location {
    let mode = location_mode(&columns.ubicacion).unwrap_or(defaults::UBICACION);
    for slot in &mut columns.ubicacion {
        if slot.is_none() {
            *slot = Some(mode);
        }
    }
    mode
}

/// Pure per-row fill for the room stage.
fn fill_rooms(
    surface: Option<f64>,
    edges: &[f64],
    median_by_bin: &[Option<f64>],
    global_fill: i64,
) -> i64 {
    if let Some(surface) = surface
        && let Some(bin) = bin_index(edges, surface)
        && let Some(bin_median) = median_by_bin.get(bin).copied().flatten()
    {
        return round_to_i64(bin_median);
    }
    global_fill
}

/// Stage 2: fill missing room counts from the median within the row's
/// surface quantile bin, then clamp the whole column into `[1, 10]`.
///
/// Binning uses the surface column as normalized, which may still
/// contain missing entries; such rows fall back to the global median.
fn impute_rooms(
    columns: &mut PredictorColumns,
) -> (Vec<f64>, Vec<Option<f64>>, Option<f64>) {
    let known_surface: Vec<f64> = columns.superficie.iter().flatten().copied().collect();
    let edges = quantile_bin_edges(&known_surface, SURFACE_BIN_COUNT);
    let bin_count = edges.len().saturating_sub(1);

    let mut per_bin: Vec<Vec<f64>> = vec![Vec::new(); bin_count];
    for (surface, rooms) in columns.superficie.iter().zip(&columns.habitaciones) {
        if let (Some(surface), Some(rooms)) = (surface, rooms)
            && let Some(bin) = bin_index(&edges, *surface)
        {
            per_bin[bin].push(*rooms as f64);
        }
    }
    let median_by_bin: Vec<Option<f64>> = per_bin.iter().map(|values| median(values)).collect();

    let known_rooms: Vec<f64> = columns
        .habitaciones
        .iter()
        .flatten()
        .map(|rooms| *rooms as f64)
        .collect();
    let global_median = median(&known_rooms);
    let global_fill = global_median.map_or(defaults::HABITACIONES, round_to_i64);

    for (surface, slot) in columns.superficie.iter().zip(&mut columns.habitaciones) {
        if slot.is_none() {
            *slot = Some(fill_rooms(*surface, &edges, &median_by_bin, global_fill));
        }
    }
    for slot in columns.habitaciones.iter_mut().flatten() {
        *slot = (*slot).clamp(ROOMS_MIN, ROOMS_MAX);
    }

    (edges, median_by_bin, global_median)
}

/// Pure per-row fill for the surface stage.
fn fill_surface(
    location: Option<Location>,
    rooms: Option<i64>,
    median_by_group: &BTreeMap<(Location, i64), f64>,
    global_fill: f64,
) -> f64 {
    if let (Some(location), Some(rooms)) = (location, rooms)
        && let Some(group_median) = median_by_group.get(&(location, rooms))
    {
        return *group_median;
    }
    global_fill
}

/// Stage 3: fill missing surfaces from the median within the group
/// sharing the row's already-imputed location and room count.
fn impute_surface(
    columns: &mut PredictorColumns,
) -> (BTreeMap<(Location, i64), f64>, Option<f64>) {
    let mut groups: BTreeMap<(Location, i64), Vec<f64>> = BTreeMap::new();
    for idx in 0..columns.len() {
        if let (Some(surface), Some(location), Some(rooms)) = (
            columns.superficie[idx],
            columns.ubicacion[idx],
            columns.habitaciones[idx],
        ) {
            groups.entry((location, rooms)).or_default().push(surface);
        }
    }
    let median_by_group: BTreeMap<(Location, i64), f64> = groups
        .iter()
        .filter_map(|(key, values)| median(values).map(|m| (*key, m)))
        .collect();

    let known_surface: Vec<f64> = columns.superficie.iter().flatten().copied().collect();
    let global_median = median(&known_surface);
    let global_fill = global_median.unwrap_or(defaults::SUPERFICIE);

    for idx in 0..columns.len() {
        if columns.superficie[idx].is_none() {
            columns.superficie[idx] = Some(fill_surface(
                columns.ubicacion[idx],
                columns.habitaciones[idx],
                &median_by_group,
                global_fill,
            ));
        }
    }

    (median_by_group, global_median)
}

/// Pure per-row fill for the age stage.
fn fill_age(
    location: Option<Location>,
    median_by_location: &BTreeMap<Location, f64>,
    global_fill: i64,
) -> i64 {
    if let Some(location) = location
        && let Some(group_median) = median_by_location.get(&location)
    {
        return round_to_i64(*group_median);
    }
    global_fill
}

/// Stage 4: fill missing ages from the median within the row's
/// already-imputed location group.
fn impute_age(columns: &mut PredictorColumns) -> (BTreeMap<Location, f64>, Option<f64>) {
    let mut groups: BTreeMap<Location, Vec<f64>> = BTreeMap::new();
    for (location, age) in columns.ubicacion.iter().zip(&columns.antiguedad) {
        if let (Some(location), Some(age)) = (location, age) {
            groups.entry(*location).or_default().push(*age as f64);
        }
    }
    let median_by_location: BTreeMap<Location, f64> = groups
        .iter()
        .filter_map(|(key, values)| median(values).map(|m| (*key, m)))
        .collect();

    let known_ages: Vec<f64> = columns
        .antiguedad
        .iter()
        .flatten()
        .map(|age| *age as f64)
        .collect();
    let global_median = median(&known_ages);
    let global_fill = global_median.map_or(defaults::ANTIGUEDAD, round_to_i64);

    for idx in 0..columns.len() {
        if columns.antiguedad[idx].is_none() {
            columns.antiguedad[idx] = Some(fill_age(
                columns.ubicacion[idx],
                &median_by_location,
                global_fill,
            ));
        }
    }

    (median_by_location, global_median)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(
        superficie: Vec<Option<f64>>,
        habitaciones: Vec<Option<i64>>,
        antiguedad: Vec<Option<i64>>,
        ubicacion: Vec<Option<Location>>,
    ) -> PredictorColumns {
        PredictorColumns {
            superficie,
            habitaciones,
            antiguedad,
            ubicacion,
        }
    }

    #[test]
    fn location_mode_fills_missing_rows() {
        let mut cols = columns(
            vec![Some(50.0), Some(60.0), Some(70.0)],
            vec![Some(2), Some(3), Some(3)],
            vec![Some(5), Some(10), Some(15)],
            vec![Some(Location::Urban), Some(Location::Urban), None],
        );
        let stats = impute(&mut cols);
        assert_eq!(stats.location_mode, Location::Urban);
        assert_eq!(cols.ubicacion[2], Some(Location::Urban));
    }

    #[test]
    fn location_mode_tie_resolves_to_rural() {
        let mut cols = columns(
            vec![Some(50.0), Some(60.0), Some(70.0), Some(80.0), Some(90.0)],
            vec![Some(2), Some(3), Some(3), Some(4), Some(2)],
            vec![Some(5), Some(10), Some(15), Some(20), Some(25)],
            vec![
                Some(Location::Urban),
                Some(Location::Urban),
                Some(Location::Rural),
                Some(Location::Rural),
                None,
            ],
        );
        let stats = impute(&mut cols);
        assert_eq!(stats.location_mode, Location::Rural);
        assert_eq!(cols.ubicacion[4], Some(Location::Rural));
    }

    #[test]
    fn location_defaults_to_urban_when_nothing_known() {
        let mut cols = columns(
            vec![Some(50.0)],
            vec![Some(2)],
            vec![Some(5)],
            vec![None],
        );
        let stats = impute(&mut cols);
        assert_eq!(stats.location_mode, Location::Urban);
        assert_eq!(cols.ubicacion[0], Some(Location::Urban));
    }

    #[test]
    fn rooms_imputed_from_surface_bin_median() {
        // Small surfaces have 2 rooms, large ones have 8. A missing
        // room count on a large surface should pick up the large-bin
        // median, not the global one.
        let mut cols = columns(
            vec![
                Some(40.0),
                Some(40.0),
                Some(40.0),
                Some(200.0),
                Some(200.0),
                Some(200.0),
            ],
            vec![Some(2), Some(2), Some(2), Some(8), Some(8), None],
            vec![Some(5); 6],
            vec![Some(Location::Urban); 6],
        );
        impute(&mut cols);
        assert_eq!(cols.habitaciones[5], Some(8));
    }

    #[test]
    fn rooms_fall_back_to_global_median_without_a_bin() {
        let mut cols = columns(
            vec![None, Some(50.0), Some(60.0), Some(70.0)],
            vec![None, Some(2), Some(3), Some(4)],
            vec![Some(5); 4],
            vec![Some(Location::Urban); 4],
        );
        impute(&mut cols);
        // Global median of {2, 3, 4} is 3.
        assert_eq!(cols.habitaciones[0], Some(3));
    }

    #[test]
    fn imputed_rooms_are_clamped_into_range() {
        let mut cols = columns(
            vec![Some(50.0), Some(60.0), None],
            vec![Some(1), Some(1), None],
            vec![Some(5); 3],
            vec![Some(Location::Urban); 3],
        );
        impute(&mut cols);
        for rooms in cols.habitaciones.iter().flatten() {
            assert!((1..=10).contains(rooms));
        }
    }

    #[test]
    fn surface_imputed_from_location_rooms_group() {
        let mut cols = columns(
            vec![Some(80.0), Some(90.0), None, Some(30.0)],
            vec![Some(3), Some(3), Some(3), Some(1)],
            vec![Some(5); 4],
            vec![
                Some(Location::Urban),
                Some(Location::Urban),
                Some(Location::Urban),
                Some(Location::Rural),
            ],
        );
        let stats = impute(&mut cols);
        // Median of urban 3-room surfaces {80, 90} is 85.
        assert_eq!(cols.superficie[2], Some(85.0));
        assert_eq!(
            stats.surface_median_by_group.get(&(Location::Urban, 3)),
            Some(&85.0)
        );
    }

    #[test]
    fn age_imputed_from_location_median() {
        let mut cols = columns(
            vec![Some(50.0); 4],
            vec![Some(3); 4],
            vec![Some(10), Some(20), None, Some(50)],
            vec![
                Some(Location::Urban),
                Some(Location::Urban),
                Some(Location::Urban),
                Some(Location::Rural),
            ],
        );
        impute(&mut cols);
        // Median urban age of {10, 20} is 15.
        assert_eq!(cols.antiguedad[2], Some(15));
    }

    #[test]
    fn empty_columns_fall_back_to_fixed_defaults() {
        let mut cols = columns(
            vec![None, None],
            vec![None, None],
            vec![None, None],
            vec![None, None],
        );
        impute(&mut cols);
        assert_eq!(cols.superficie, vec![Some(70.0), Some(70.0)]);
        assert_eq!(cols.habitaciones, vec![Some(3), Some(3)]);
        assert_eq!(cols.antiguedad, vec![Some(10), Some(10)]);
        assert_eq!(cols.ubicacion[0], Some(Location::Urban));
    }
}
