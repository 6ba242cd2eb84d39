use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// A contiguous run (two days or more) of positive hours for one project.
///
/// Blocks are derived on every pass over the hour map and carry no identity
/// of their own; `start_index`/`end_index` are the grid columns they cover.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub project_id: String,
    pub start_index: usize,
    pub dates: Vec<NaiveDate>,
    pub distribution: BTreeMap<NaiveDate, f64>,
}

impl Block {
    pub fn end_index(&self) -> usize {
        self.start_index + self.dates.len().saturating_sub(1)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.distribution.contains_key(&date)
    }

    pub fn contains_index(&self, index: usize) -> bool {
        index >= self.start_index && index <= self.end_index()
    }

    pub fn total(&self) -> f64 {
        self.distribution.values().sum()
    }

    /// Values in date order.
    pub fn values(&self) -> Vec<f64> {
        self.dates
            .iter()
            .map(|d| self.distribution.get(d).copied().unwrap_or(0.0))
            .collect()
    }
}
