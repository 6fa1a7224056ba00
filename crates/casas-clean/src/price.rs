//! Target variable cleaning and outlier filtering.

use casas_model::RawValue;

use crate::stats::quantile_sorted;

/// Literal value known to mean "no real price" in the source data.
pub const PRICE_PLACEHOLDER: f64 = 9_999_999.0;

/// IQR multiplier for the acceptance band. Deliberately wide so that
/// only extreme outliers are removed, not ordinary tail values.
const IQR_MULTIPLIER: f64 = 3.0;

/// Result of filtering the price column.
#[derive(Debug, Clone)]
pub struct PriceFilter {
    /// Row-aligned prices; `None` marks values removed for any reason.
    pub values: Vec<Option<f64>>,
    /// Total count of missing values after filtering. Feeds the
    /// report's `precio_outliers_marked` counter.
    pub marked_missing: usize,
}

fn coerce_numeric(raw: &RawValue) -> Option<f64> {
    match raw {
        RawValue::Absent => None,
        RawValue::Number(n) if n.is_nan() => None,
        RawValue::Number(n) => Some(*n),
        RawValue::Text(text) => {
            let value = text.trim().parse::<f64>().ok()?;
            if value.is_nan() { None } else { Some(value) }
        }
    }
}

/// Clean the price column.
///
/// Non-numeric, non-positive, and placeholder values become missing.
/// The remaining values define an IQR band `[Q1 - 3*IQR, Q3 + 3*IQR]`
/// (quartiles by linear interpolation); values outside it are marked
/// missing as well. With no valid values at all, the band stage is
/// skipped since no bounds are computable.
pub fn clean_price(raw: &[RawValue]) -> PriceFilter {
    let mut values: Vec<Option<f64>> = raw.iter().map(coerce_numeric).collect();
    for slot in &mut values {
        if let Some(price) = *slot
            && (price <= 0.0 || price == PRICE_PLACEHOLDER)
        {
            *slot = None;
        }
    }

    let mut valid: Vec<f64> = values.iter().flatten().copied().collect();
    valid.sort_by(f64::total_cmp);
    if let (Some(q1), Some(q3)) = (
        quantile_sorted(&valid, 0.25),
        quantile_sorted(&valid, 0.75),
    ) {
        let iqr = q3 - q1;
        let lower = q1 - IQR_MULTIPLIER * iqr;
        let upper = q3 + IQR_MULTIPLIER * iqr;
        for slot in &mut values {
            if let Some(price) = *slot
                && (price < lower || price > upper)
            {
                *slot = None;
            }
        }
    }

    let marked_missing = values.iter().filter(|slot| slot.is_none()).count();
    PriceFilter {
        values,
        marked_missing,
    }
}
