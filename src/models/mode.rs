use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which hour field is active for reading and writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Plan,
    Record,
}

/// Column targeted by a write request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HourField {
    PlannedHours,
    RecordedHours,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Plan => "plan",
            Mode::Record => "record",
        }
    }

    pub fn field(&self) -> HourField {
        match self {
            Mode::Plan => HourField::PlannedHours,
            Mode::Record => HourField::RecordedHours,
        }
    }

    /// Value written when a day is cleared: 0 for planned, NULL for recorded.
    pub fn cleared_value(&self) -> Option<f64> {
        match self {
            Mode::Plan => Some(0.0),
            Mode::Record => None,
        }
    }
}

impl HourField {
    /// Convert enum → DB column name
    pub fn column(&self) -> &'static str {
        match self {
            HourField::PlannedHours => "planned_hours",
            HourField::RecordedHours => "recorded_hours",
        }
    }
}
