//! Collaborator seams for the hour storage.
//!
//! The engine only reads rows and issues per-date writes; upsert semantics
//! on (user, project, date) belong to the implementation.

use crate::errors::{AppError, AppResult};
use crate::models::{HourField, HourRow, Mode, WriteRequest};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashSet};

pub trait HourStore {
    /// Rows for `user_id` dated within `[from, to]`.
    fn fetch(&self, user_id: &str, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<HourRow>>;

    /// Upsert a single (project, date) field.
    fn write(&mut self, user_id: &str, req: &WriteRequest) -> AppResult<()>;
}

/// Optional explicit delete path used by the block editor instead of
/// zeroing each day.
pub trait BlockDeleter {
    fn delete_block(
        &mut self,
        user_id: &str,
        project_id: &str,
        dates: &[NaiveDate],
        mode: Mode,
    ) -> AppResult<()>;
}

type Key = (String, String, NaiveDate);

/// In-memory store. `fail_on` makes writes for the listed dates fail.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: BTreeMap<Key, (f64, Option<f64>)>,
    fail_on: HashSet<NaiveDate>,
    writes: Vec<WriteRequest>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(user_id: &str, rows: &[HourRow]) -> Self {
        let mut store = Self::new();
        for row in rows {
            let Some(project) = row.project_id.as_deref() else {
                continue;
            };
            let Ok(date) = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d") else {
                continue;
            };
            store.rows.insert(
                (user_id.to_string(), project.to_string(), date),
                (row.planned_hours, row.recorded_hours),
            );
        }
        store
    }

    pub fn fail_on(&mut self, date: NaiveDate) {
        self.fail_on.insert(date);
    }

    pub fn clear_failures(&mut self) {
        self.fail_on.clear();
    }

    /// Every successful write, in order.
    pub fn writes(&self) -> &[WriteRequest] {
        &self.writes
    }

    fn prune(&mut self, key: &Key) {
        if let Some((planned, recorded)) = self.rows.get(key)
            && *planned == 0.0
            && recorded.is_none()
        {
            self.rows.remove(key);
        }
    }
}

impl HourStore for MemoryStore {
    fn fetch(&self, user_id: &str, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<HourRow>> {
        Ok(self
            .rows
            .iter()
            .filter(|((u, _, d), _)| u == user_id && *d >= from && *d <= to)
            .map(|((u, p, d), (planned, recorded))| HourRow {
                user_id: Some(u.clone()),
                project_id: Some(p.clone()),
                date: d.format("%Y-%m-%d").to_string(),
                planned_hours: *planned,
                recorded_hours: *recorded,
            })
            .collect())
    }

    fn write(&mut self, user_id: &str, req: &WriteRequest) -> AppResult<()> {
        if self.fail_on.contains(&req.date) {
            return Err(AppError::Write {
                project: req.project_id.clone(),
                date: req.date,
                reason: "simulated failure".into(),
            });
        }

        let key = (user_id.to_string(), req.project_id.clone(), req.date);
        let cell = self.rows.entry(key.clone()).or_insert((0.0, None));
        match req.field {
            HourField::PlannedHours => cell.0 = req.value.unwrap_or(0.0),
            HourField::RecordedHours => cell.1 = req.value,
        }

        self.prune(&key);
        self.writes.push(req.clone());
        Ok(())
    }
}

impl BlockDeleter for MemoryStore {
    fn delete_block(
        &mut self,
        user_id: &str,
        project_id: &str,
        dates: &[NaiveDate],
        mode: Mode,
    ) -> AppResult<()> {
        for d in dates {
            self.write(user_id, &WriteRequest::clear(project_id, *d, mode))?;
        }
        Ok(())
    }
}
