use super::mode::Mode;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Row shape exchanged with the hour-storage collaborator.
///
/// Dates travel as `YYYY-MM-DD` strings and `project_id` may be missing in
/// malformed rows; [`HourEntry::from_row`] is the only way to turn a row
/// into something the engine trusts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourRow {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    pub date: String,
    #[serde(default)]
    pub planned_hours: f64,
    #[serde(default)]
    pub recorded_hours: Option<f64>,
}

impl HourRow {
    pub fn new(project_id: &str, date: &str, planned: f64, recorded: Option<f64>) -> Self {
        Self {
            user_id: None,
            project_id: Some(project_id.to_string()),
            date: date.to_string(),
            planned_hours: planned,
            recorded_hours: recorded,
        }
    }

    pub fn with_user(mut self, user_id: &str) -> Self {
        self.user_id = Some(user_id.to_string());
        self
    }
}

/// Validated (project, date) record holding both hour values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourEntry {
    pub project_id: String,
    pub date: NaiveDate,
    pub planned_hours: f64,
    pub recorded_hours: Option<f64>,
}

impl HourEntry {
    /// Returns None for rows without a project, with an unparsable date or
    /// with non-finite hour values.
    pub fn from_row(row: &HourRow) -> Option<Self> {
        let project_id = row.project_id.as_deref()?.trim();
        if project_id.is_empty() {
            return None;
        }

        let date = NaiveDate::parse_from_str(row.date.trim(), "%Y-%m-%d").ok()?;

        if !row.planned_hours.is_finite() {
            return None;
        }
        if let Some(r) = row.recorded_hours
            && !r.is_finite()
        {
            return None;
        }

        Some(Self {
            project_id: project_id.to_string(),
            date,
            planned_hours: row.planned_hours,
            recorded_hours: row.recorded_hours,
        })
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// The `{planned, recorded}` pair stored in the hour map.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct HourPair {
    pub planned: f64,
    pub recorded: Option<f64>,
}

impl HourPair {
    /// Effective value for the given mode; a missing recorded value reads as 0.
    pub fn value(&self, mode: Mode) -> f64 {
        match mode {
            Mode::Plan => self.planned,
            Mode::Record => self.recorded.unwrap_or(0.0),
        }
    }
}

impl From<&HourEntry> for HourPair {
    fn from(e: &HourEntry) -> Self {
        Self {
            planned: e.planned_hours,
            recorded: e.recorded_hours,
        }
    }
}
