// src/export/model.rs

use crate::models::{Block, HourEntry, Mode};
use serde::Serialize;

/// Flat row for hour exports (one per project/date).
#[derive(Serialize, Clone, Debug)]
pub struct HourExport {
    pub project_id: String,
    pub date: String,
    pub planned_hours: f64,
    pub recorded_hours: Option<f64>,
}

impl From<&HourEntry> for HourExport {
    fn from(e: &HourEntry) -> Self {
        Self {
            project_id: e.project_id.clone(),
            date: e.date_str(),
            planned_hours: e.planned_hours,
            recorded_hours: e.recorded_hours,
        }
    }
}

/// Flat row for block exports (one per detected block).
#[derive(Serialize, Clone, Debug)]
pub struct BlockExport {
    pub project_id: String,
    pub mode: String,
    pub week: String,
    pub start: String,
    pub end: String,
    pub days: usize,
    pub total_hours: f64,
    /// Per-day values joined with `;`
    pub values: String,
}

impl BlockExport {
    pub fn new(block: &Block, mode: Mode, week: String) -> Self {
        let fmt = |d: Option<chrono::NaiveDate>| {
            d.map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        };

        Self {
            project_id: block.project_id.clone(),
            mode: mode.as_str().to_string(),
            week,
            start: fmt(block.first_date()),
            end: fmt(block.last_date()),
            days: block.len(),
            total_hours: block.total(),
            values: block
                .values()
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(";"),
        }
    }
}
