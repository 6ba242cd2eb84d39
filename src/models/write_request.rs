use super::mode::{HourField, Mode};
use chrono::NaiveDate;
use serde::Serialize;

/// One per-date write issued to the hour-storage collaborator.
/// The collaborator upserts on (user, project, date).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WriteRequest {
    pub project_id: String,
    pub date: NaiveDate,
    pub field: HourField,
    pub value: Option<f64>,
}

impl WriteRequest {
    pub fn new(project_id: &str, date: NaiveDate, mode: Mode, value: f64) -> Self {
        // recorded hours of 0 are stored as NULL
        let value = if value <= 0.0 {
            mode.cleared_value()
        } else {
            Some(value)
        };

        Self {
            project_id: project_id.to_string(),
            date,
            field: mode.field(),
            value,
        }
    }

    pub fn clear(project_id: &str, date: NaiveDate, mode: Mode) -> Self {
        Self {
            project_id: project_id.to_string(),
            date,
            field: mode.field(),
            value: mode.cleared_value(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
