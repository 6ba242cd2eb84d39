//! Hour utilities: parsing user input, list arguments and formatting.

use crate::errors::{AppError, AppResult};

/// Parse a single hour value. Accepts `3`, `2.5` or `2,5`; rejects
/// negatives, NaN and anything non-numeric.
pub fn parse_hours(s: &str) -> AppResult<f64> {
    let cleaned = s.trim().replace(',', ".");
    let v: f64 = cleaned
        .parse()
        .map_err(|_| AppError::InvalidHours(s.to_string()))?;

    if !v.is_finite() || v < 0.0 {
        return Err(AppError::InvalidHours(s.to_string()));
    }
    Ok(v)
}

/// Parse a comma-separated list of hour values (`2,3,4`). Decimal commas
/// are not accepted here; use dots.
pub fn parse_hour_list(s: &str) -> AppResult<Vec<f64>> {
    s.split(',')
        .filter(|p| !p.trim().is_empty())
        .map(parse_hours)
        .collect()
}

/// Parse a comma-separated list of day-cell indices (`1,3`). Whether an
/// index is a day column is up to the gesture tracker.
pub fn parse_cells(s: &str) -> AppResult<Vec<usize>> {
    s.split(',')
        .filter(|p| !p.trim().is_empty())
        .map(|p| {
            p.trim()
                .parse::<usize>()
                .map_err(|_| AppError::Other(format!("Invalid cell index '{}'", p.trim())))
        })
        .collect()
}

/// `8.0` → "8", `2.5` → "2.5", `0` → "·" when `dot_for_zero`.
pub fn format_hours(v: f64, dot_for_zero: bool) -> String {
    if v == 0.0 && dot_for_zero {
        return "·".to_string();
    }
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}
