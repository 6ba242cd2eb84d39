//! Read-only (project, date) → {planned, recorded} lookup built from rows
//! fetched from the hour store. A write never patches the map; the caller
//! refetches and builds a new one.

use crate::models::{HourEntry, HourPair, HourRow, Mode};
use chrono::NaiveDate;
use std::collections::{BTreeSet, HashMap};

/// Cells are grouped per project so lookups can borrow the project id.
#[derive(Debug, Clone, Default)]
pub struct HourMap {
    cells: HashMap<String, HashMap<NaiveDate, HourPair>>,
    skipped: usize,
}

impl HourMap {
    /// Build from raw rows, skipping malformed ones.
    ///
    /// When `range` is given, rows dated outside `[from, to]` are skipped
    /// too. Duplicate keys resolve last-write-wins.
    pub fn build(rows: &[HourRow], range: Option<(NaiveDate, NaiveDate)>) -> Self {
        let mut map = Self::default();

        for row in rows {
            let Some(entry) = HourEntry::from_row(row) else {
                map.skipped += 1;
                continue;
            };

            if let Some((from, to)) = range
                && (entry.date < from || entry.date > to)
            {
                map.skipped += 1;
                continue;
            }

            map.insert(&entry);
        }

        map
    }

    pub fn from_entries(entries: &[HourEntry]) -> Self {
        let mut map = Self::default();
        for e in entries {
            map.insert(e);
        }
        map
    }

    fn insert(&mut self, entry: &HourEntry) {
        self.cells
            .entry(entry.project_id.clone())
            .or_default()
            .insert(entry.date, HourPair::from(entry));
    }

    pub fn lookup(&self, project_id: &str, date: NaiveDate) -> Option<HourPair> {
        self.cells.get(project_id)?.get(&date).copied()
    }

    /// Lookup treating an absent cell as `{planned: 0, recorded: 0}`.
    pub fn value(&self, project_id: &str, date: NaiveDate, mode: Mode) -> f64 {
        self.lookup(project_id, date)
            .map(|p| p.value(mode))
            .unwrap_or(0.0)
    }

    /// Sorted, de-duplicated project ids present in the map.
    pub fn projects(&self) -> Vec<String> {
        let mut projects: Vec<String> = self.cells.keys().cloned().collect();
        projects.sort();
        projects
    }

    /// Earliest and latest date holding a cell, if any.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut dates = self.cells.values().flat_map(|days| days.keys().copied());
        let first = dates.next()?;
        Some(dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d))))
    }

    pub fn len(&self) -> usize {
        self.cells.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of rows dropped while building.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

/// Team-wide variant keyed by (user, project, date).
#[derive(Debug, Clone, Default)]
pub struct TeamHourMap {
    cells: HashMap<(String, String, NaiveDate), HourPair>,
    skipped: usize,
}

impl TeamHourMap {
    /// Rows without a `user_id` are skipped along with the usual malformed ones.
    pub fn build(rows: &[HourRow], range: Option<(NaiveDate, NaiveDate)>) -> Self {
        let mut map = Self::default();

        for row in rows {
            let user = row.user_id.as_deref().map(str::trim).unwrap_or_default();
            let entry = HourEntry::from_row(row);

            match entry {
                Some(e) if !user.is_empty() => {
                    if let Some((from, to)) = range
                        && (e.date < from || e.date > to)
                    {
                        map.skipped += 1;
                        continue;
                    }
                    map.cells
                        .insert((user.to_string(), e.project_id.clone(), e.date), HourPair::from(&e));
                }
                _ => map.skipped += 1,
            }
        }

        map
    }

    pub fn lookup(&self, user_id: &str, project_id: &str, date: NaiveDate) -> Option<HourPair> {
        self.cells
            .get(&(user_id.to_string(), project_id.to_string(), date))
            .copied()
    }

    pub fn users(&self) -> Vec<String> {
        self.cells
            .keys()
            .map(|(u, _, _)| u.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Project one user's cells into a single-user map.
    pub fn for_user(&self, user_id: &str) -> HourMap {
        let entries: Vec<HourEntry> = self
            .cells
            .iter()
            .filter(|((u, _, _), _)| u == user_id)
            .map(|((_, p, d), pair)| HourEntry {
                project_id: p.clone(),
                date: *d,
                planned_hours: pair.planned,
                recorded_hours: pair.recorded,
            })
            .collect();

        HourMap::from_entries(&entries)
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }
}
