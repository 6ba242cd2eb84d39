// src/export/range.rs

use crate::core::day_grid::month_days;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// Parse --range (year / month / day / interval).
///
/// Supported:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub(crate) fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::InvalidDate(format!(
                "start and end of '{}' must have the same format",
                r
            )));
        }

        let (d1, _) = parse_single(start)?;
        let (_, d2) = parse_single(end)?;
        if d2 < d1 {
            return Err(AppError::InvalidDate(format!("empty range '{}'", r)));
        }
        Ok((d1, d2))
    } else {
        parse_single(r.trim())
    }
}

/// First and last day covered by a single period expression.
fn parse_single(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidDate(p.to_string());

    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid())?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let (y, m) = parse_year_month(p).ok_or_else(invalid)?;
            let days = month_days(y, m);
            match (days.first(), days.last()) {
                (Some(d1), Some(d2)) => Ok((*d1, *d2)),
                _ => Err(invalid()),
            }
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}

pub(crate) fn parse_year_month(p: &str) -> Option<(i32, u32)> {
    let (y, m) = p.split_once('-')?;
    let y: i32 = y.parse().ok()?;
    let m: u32 = m.parse().ok()?;
    if (1..=12).contains(&m) {
        Some((y, m))
    } else {
        None
    }
}
