// src/export/logic.rs

use crate::core::day_grid::{week_days, week_key, week_start_of};
use crate::core::detector::detect_all;
use crate::core::hour_map::HourMap;
use crate::core::store::HourStore;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{BlockExport, HourExport};
use crate::export::range::parse_range;
use crate::models::{HourEntry, Mode};
use crate::ui::messages::warning;
use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::path::Path;

/// Bounds used when no range (or `all`) is given.
const ALL_FROM: (i32, u32, u32) = (1, 1, 1);
const ALL_TO: (i32, u32, u32) = (9999, 12, 31);

/// What to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    /// One row per (project, date).
    Hours,
    /// One row per block detected week by week in the given mode.
    Blocks(Mode),
}

pub struct ExportLogic;

impl ExportLogic {
    /// Export hours or blocks for `user_id`.
    ///
    /// - `file`: absolute output path
    /// - `range`: `None`, `"all"` or YYYY / YYYY-MM / YYYY-MM-DD (or a
    ///   `start:end` range of the same shape)
    ///
    /// Returns the number of exported rows.
    #[allow(clippy::too_many_arguments)]
    pub fn export<S: HourStore + ?Sized>(
        store: &S,
        user_id: &str,
        format: ExportFormat,
        kind: ExportKind,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let (from, to) = match range {
            Some(r) if !r.eq_ignore_ascii_case("all") => parse_range(r)?,
            _ => all_bounds()?,
        };

        match kind {
            ExportKind::Hours => {
                let rows = load_hours(store, user_id, from, to)?;
                write_items(&rows, format, path)
            }
            ExportKind::Blocks(mode) => {
                let rows = load_blocks(store, user_id, from, to, mode)?;
                write_items(&rows, format, path)
            }
        }
    }
}

fn all_bounds() -> AppResult<(NaiveDate, NaiveDate)> {
    let from = NaiveDate::from_ymd_opt(ALL_FROM.0, ALL_FROM.1, ALL_FROM.2);
    let to = NaiveDate::from_ymd_opt(ALL_TO.0, ALL_TO.1, ALL_TO.2);
    match (from, to) {
        (Some(f), Some(t)) => Ok((f, t)),
        _ => Err(AppError::Other("invalid export bounds".into())),
    }
}

fn write_items<T: Serialize>(items: &[T], format: ExportFormat, path: &Path) -> AppResult<usize> {
    if items.is_empty() {
        warning("No rows found for selected range.");
        return Ok(0);
    }

    match format {
        ExportFormat::Csv => export_csv(items, path)?,
        ExportFormat::Json => export_json(items, path)?,
    }

    Ok(items.len())
}

fn load_hours<S: HourStore + ?Sized>(
    store: &S,
    user_id: &str,
    from: NaiveDate,
    to: NaiveDate,
) -> AppResult<Vec<HourExport>> {
    let rows = store.fetch(user_id, from, to)?;

    let mut entries: Vec<HourEntry> = rows.iter().filter_map(HourEntry::from_row).collect();
    entries.sort_by(|a, b| (a.date, &a.project_id).cmp(&(b.date, &b.project_id)));

    Ok(entries.iter().map(HourExport::from).collect())
}

/// Blocks are detected on whole Monday-anchored weeks, so a range starting
/// mid-week still sees the blocks of that week. Only the weeks between the
/// first and last fetched day are walked.
fn load_blocks<S: HourStore + ?Sized>(
    store: &S,
    user_id: &str,
    from: NaiveDate,
    to: NaiveDate,
    mode: Mode,
) -> AppResult<Vec<BlockExport>> {
    let (_, upper) = all_bounds()?;
    let first_week = week_start_of(from);
    // stay within 4-digit years: dates are compared as strings by the store
    let last_day = (week_start_of(to) + Duration::days(6)).min(upper);

    let rows = store.fetch(user_id, first_week, last_day)?;
    let map = HourMap::build(&rows, Some((first_week, last_day)));

    let Some((first_day, last_data_day)) = map.date_span() else {
        return Ok(Vec::new());
    };
    let end = to.min(last_data_day);

    let mut out = Vec::new();
    let mut start = week_start_of(from.max(first_day));
    while start <= end {
        let days = week_days(start);
        let key = week_key(start);

        for blocks in detect_all(&days, &map, mode).values() {
            out.extend(blocks.iter().map(|b| BlockExport::new(b, mode, key.clone())));
        }

        start += Duration::days(7);
    }

    Ok(out)
}
