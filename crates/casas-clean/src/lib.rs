//! Core cleaning pipeline for the housing dataset.
//!
//! The pipeline turns a noisy raw table into a training-ready one in a
//! fixed sequence: per-field normalization, multi-pass statistical
//! imputation with cross-field grouping, target outlier filtering, and
//! finally removal of rows without a recoverable price. Every step is
//! deterministic given the same input.

pub mod explore;
pub mod impute;
pub mod normalize;
pub mod pipeline;
pub mod price;
pub mod request;
pub mod stats;

pub use explore::{Exploration, explore_table};
pub use impute::{ImputationStats, PredictorColumns, impute};
pub use normalize::{
    Outcome, normalize_age, normalize_location, normalize_rooms, normalize_surface,
};
pub use pipeline::{CleanOutcome, clean_table};
pub use price::{PRICE_PLACEHOLDER, PriceFilter, clean_price};
pub use request::{CleanPredictors, normalize_request};

/// Fixed per-field defaults used when no dataset-wide statistic is
/// available: single-request normalization for the serving layer, and
/// the last-resort fallback when an entire input column is unusable.
pub mod defaults {
    use casas_model::Location;

    pub const SUPERFICIE: f64 = 70.0;
    pub const HABITACIONES: i64 = 3;
    pub const ANTIGUEDAD: i64 = 10;
    pub const UBICACION: Location = Location::Urban;
}
