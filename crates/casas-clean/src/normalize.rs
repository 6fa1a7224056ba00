//! Per-field normalization of raw values.
//!
//! Four independent, side-effect-free functions, one per predictor
//! field. Each accepts a raw value of unknown representation and
//! returns an [`Outcome`]: a typed value, a value recovered from a
//! known data-entry defect, or an explicit missing marker. Malformed
//! input never raises; it degrades to `Absent` or `Invalid` and is
//! only visible as a report counter increment.

use casas_model::{Location, RawValue};

/// Literal tokens that mean "no value" in the source data.
const MISSING_TOKENS: [&str; 4] = ["", "?", "nan", "none"];

/// Spanish number words accepted for room counts.
const ROOM_WORDS: [(&str, i64); 11] = [
    ("uno", 1),
    ("una", 1),
    ("dos", 2),
    ("tres", 3),
    ("cuatro", 4),
    ("cinco", 5),
    ("seis", 6),
    ("siete", 7),
    ("ocho", 8),
    ("nueve", 9),
    ("diez", 10),
];

/// Known location misspellings, mapped explicitly.
const URBAN_TYPOS: [&str; 3] = ["urbnaa", "ubano", "urabno"];
const RURAL_TYPOS: [&str; 3] = ["rurall", "rrual", "rurl"];

/// Ages with a larger magnitude than this are implausible even as
/// sign-entry errors and become missing.
const MAX_PLAUSIBLE_AGE: i64 = 120;

/// Outcome of normalizing one raw cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<T> {
    /// Parsed to a usable value as-is.
    Value(T),
    /// Parsed after repairing a known data-entry defect (sign error,
    /// misspelling). Counted separately in the report.
    Repaired(T),
    /// Explicit missing marker: empty, absent, "?", "nan", "none".
    Absent,
    /// Present but unusable; degrades to missing.
    Invalid,
}

impl<T> Outcome<T> {
    /// The usable value, if any. `Repaired` counts as usable.
    pub fn into_value(self) -> Option<T> {
        match self {
            Outcome::Value(value) | Outcome::Repaired(value) => Some(value),
            Outcome::Absent | Outcome::Invalid => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Outcome::Invalid)
    }

    pub fn is_repaired(&self) -> bool {
        matches!(self, Outcome::Repaired(_))
    }
}

fn is_missing_token(text: &str) -> bool {
    MISSING_TOKENS.contains(&text)
}

/// Extract the first contiguous numeric substring: an integer with an
/// optional single decimal part separated by `.` or `,`. A leading
/// sign is not part of the pattern, so `-5` yields magnitude 5.
fn extract_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let start = bytes.iter().position(u8::is_ascii_digit)?;
    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut literal = text[start..end].to_string();
    if end + 1 < bytes.len()
        && (bytes[end] == b'.' || bytes[end] == b',')
        && bytes[end + 1].is_ascii_digit()
    {
        let mut frac_end = end + 1;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        literal.push('.');
        literal.push_str(&text[end + 1..frac_end]);
    }
    literal.parse::<f64>().ok()
}

fn parse_numeric(text: &str) -> Option<f64> {
    let value = text.parse::<f64>().ok()?;
    if value.is_nan() { None } else { Some(value) }
}

/// Normalize a surface value to square meters.
///
/// Accepts forms like `"120"`, `"120m2"`, `" 85 m²"`. Non-positive
/// magnitudes and values with no numeric content are invalid.
pub fn normalize_surface(raw: &RawValue) -> Outcome<f64> {
    match raw {
        RawValue::Absent => Outcome::Absent,
        RawValue::Number(n) if n.is_nan() => Outcome::Absent,
        RawValue::Number(n) => {
            let magnitude = n.abs();
            if magnitude <= 0.0 {
                Outcome::Invalid
            } else {
                Outcome::Value(magnitude)
            }
        }
        RawValue::Text(text) => {
            let lowered = text.trim().to_lowercase();
            if is_missing_token(&lowered) {
                return Outcome::Absent;
            }
            match extract_number(&lowered) {
                Some(value) if value > 0.0 => Outcome::Value(value),
                _ => Outcome::Invalid,
            }
        }
    }
}

fn room_word(text: &str) -> Option<i64> {
    ROOM_WORDS
        .iter()
        .find(|(word, _)| *word == text)
        .map(|(_, value)| *value)
}

/// Normalize a room count to an integer in `[1, 10]`.
///
/// Spanish number words are resolved first; other values are parsed as
/// numbers and truncated. Out-of-range values are invalid, not
/// clamped; clamping only applies to imputed values later.
pub fn normalize_rooms(raw: &RawValue) -> Outcome<i64> {
    let resolved = match raw {
        RawValue::Absent => return Outcome::Absent,
        RawValue::Number(n) if n.is_nan() => return Outcome::Absent,
        RawValue::Number(n) => n.trunc() as i64,
        RawValue::Text(text) => {
            let lowered = text.trim().to_lowercase();
            if is_missing_token(&lowered) {
                return Outcome::Absent;
            }
            if let Some(value) = room_word(&lowered) {
                return Outcome::Value(value);
            }
            match parse_numeric(&lowered) {
                Some(value) => value.trunc() as i64,
                None => return Outcome::Invalid,
            }
        }
    };
    if (1..=10).contains(&resolved) {
        Outcome::Value(resolved)
    } else {
        Outcome::Invalid
    }
}

fn resolve_age(value: i64) -> Outcome<i64> {
    if value < 0 {
        // A plausible negative age is a sign-entry error.
        let magnitude = value.checked_neg().unwrap_or(i64::MAX);
        if magnitude <= MAX_PLAUSIBLE_AGE {
            Outcome::Repaired(magnitude)
        } else {
            Outcome::Invalid
        }
    } else {
        Outcome::Value(value)
    }
}

/// Normalize an age in years.
///
/// `"nueva"`/`"nuevo"` means a new build (0 years). Negative values
/// with magnitude <= 120 are repaired to their absolute value.
pub fn normalize_age(raw: &RawValue) -> Outcome<i64> {
    match raw {
        RawValue::Absent => Outcome::Absent,
        RawValue::Number(n) if n.is_nan() => Outcome::Absent,
        RawValue::Number(n) => resolve_age(n.trunc() as i64),
        RawValue::Text(text) => {
            let lowered = text.trim().to_lowercase();
            if is_missing_token(&lowered) {
                return Outcome::Absent;
            }
            if lowered == "nueva" || lowered == "nuevo" {
                return Outcome::Value(0);
            }
            match parse_numeric(&lowered) {
                Some(value) => resolve_age(value.trunc() as i64),
                None => Outcome::Invalid,
            }
        }
    }
}

/// Normalize a location to the canonical urban/rural categories.
///
/// Exact canonical strings pass through untouched; prefix matches,
/// listed misspellings, and finally substring containment are treated
/// as repairs. Anything else is invalid.
pub fn normalize_location(raw: &RawValue) -> Outcome<Location> {
    let text = match raw {
        RawValue::Absent => return Outcome::Absent,
        RawValue::Number(_) => return Outcome::Invalid,
        RawValue::Text(text) => text,
    };
    let lowered = text.trim().to_lowercase();
    if is_missing_token(&lowered) {
        return Outcome::Absent;
    }
    if let Some(location) = Location::from_canonical(&lowered) {
        return Outcome::Value(location);
    }
    if lowered.starts_with("urb") || URBAN_TYPOS.contains(&lowered.as_str()) {
        return Outcome::Repaired(Location::Urban);
    }
    if lowered.starts_with("rur") || RURAL_TYPOS.contains(&lowered.as_str()) {
        return Outcome::Repaired(Location::Rural);
    }
    // Last resort: containment anywhere in the string.
    if lowered.contains("urb") {
        return Outcome::Repaired(Location::Urban);
    }
    if lowered.contains("rur") {
        return Outcome::Repaired(Location::Rural);
    }
    Outcome::Invalid
}
