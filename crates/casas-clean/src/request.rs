//! Single-record normalization for the serving collaborator.
//!
//! The inference service receives one value per field and has no
//! dataset-wide statistics to impute with, so any value the
//! normalizers cannot recover is replaced by a fixed default instead.
//! The normalization rules themselves are exactly the ones the batch
//! pipeline uses, which keeps offline cleaning and online inference
//! consistent.

use casas_model::{Location, RawValue};
use serde::Serialize;

use crate::defaults;
use crate::normalize::{normalize_age, normalize_location, normalize_rooms, normalize_surface};

/// A fully resolved predictor set for one inference request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanPredictors {
    pub superficie: f64,
    pub habitaciones: i64,
    pub antiguedad: i64,
    pub ubicacion: Location,
}

/// Normalize one incoming value per field, falling back to the fixed
/// per-field defaults where normalization yields nothing.
pub fn normalize_request(
    superficie: &RawValue,
    habitaciones: &RawValue,
    antiguedad: &RawValue,
    ubicacion: &RawValue,
) -> CleanPredictors {
    CleanPredictors {
        superficie: normalize_surface(superficie)
            .into_value()
            .unwrap_or(defaults::SUPERFICIE),
        habitaciones: normalize_rooms(habitaciones)
            .into_value()
            .unwrap_or(defaults::HABITACIONES),
        antiguedad: normalize_age(antiguedad)
            .into_value()
            .unwrap_or(defaults::ANTIGUEDAD),
        ubicacion: normalize_location(ubicacion)
            .into_value()
            .unwrap_or(defaults::UBICACION),
    }
}
