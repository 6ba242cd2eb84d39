//! One user's week: day grid, hour map and the blocks detected on it.
//! Rebuilt from the store after every write batch.

use crate::core::day_grid::{day_index, week_days, week_key, week_start_of};
use crate::core::detector::detect;
use crate::core::hour_map::HourMap;
use crate::core::store::HourStore;
use crate::errors::AppResult;
use crate::models::{Block, Mode};
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct WeekSchedule {
    pub user_id: String,
    pub mode: Mode,
    pub week_start: NaiveDate,
    pub days: Vec<NaiveDate>,
    pub map: HourMap,
    pub blocks: BTreeMap<String, Vec<Block>>,
}

impl WeekSchedule {
    /// Fetch the week containing `date` and detect blocks for every project
    /// present in it (plus `extra_projects`, which may have no rows yet).
    pub fn load<S: HourStore + ?Sized>(
        store: &S,
        user_id: &str,
        date: NaiveDate,
        mode: Mode,
        extra_projects: &[String],
    ) -> AppResult<Self> {
        let week_start = week_start_of(date);
        let days = week_days(week_start);
        let map = Self::fetch_map(store, user_id, &days)?;

        let mut schedule = Self {
            user_id: user_id.to_string(),
            mode,
            week_start,
            days,
            map,
            blocks: BTreeMap::new(),
        };
        schedule.detect_blocks(extra_projects);
        Ok(schedule)
    }

    /// Refetch rows and recompute blocks (invalidates the cached map).
    pub fn refresh<S: HourStore + ?Sized>(&mut self, store: &S) -> AppResult<()> {
        let extra: Vec<String> = self.blocks.keys().cloned().collect();
        self.map = Self::fetch_map(store, &self.user_id, &self.days)?;
        self.detect_blocks(&extra);
        Ok(())
    }

    fn fetch_map<S: HourStore + ?Sized>(
        store: &S,
        user_id: &str,
        days: &[NaiveDate],
    ) -> AppResult<HourMap> {
        let (Some(from), Some(to)) = (days.first().copied(), days.last().copied()) else {
            return Ok(HourMap::default());
        };
        let rows = store.fetch(user_id, from, to)?;
        Ok(HourMap::build(&rows, Some((from, to))))
    }

    fn detect_blocks(&mut self, extra_projects: &[String]) {
        let mut projects = self.map.projects();
        for p in extra_projects {
            if !projects.contains(p) {
                projects.push(p.clone());
            }
        }
        projects.sort();

        self.blocks = projects
            .into_iter()
            .map(|p| {
                let found = detect(&p, &self.days, &self.map, self.mode);
                (p, found)
            })
            .collect();
    }

    pub fn week_key(&self) -> String {
        week_key(self.week_start)
    }

    pub fn projects(&self) -> Vec<String> {
        self.blocks.keys().cloned().collect()
    }

    /// Effective value of one grid cell for the active mode.
    pub fn cell(&self, project_id: &str, index: usize) -> f64 {
        self.days
            .get(index)
            .map(|d| self.map.value(project_id, *d, self.mode))
            .unwrap_or(0.0)
    }

    pub fn blocks_for(&self, project_id: &str) -> &[Block] {
        self.blocks
            .get(project_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn block_at(&self, project_id: &str, index: usize) -> Option<&Block> {
        self.blocks_for(project_id)
            .iter()
            .find(|b| b.contains_index(index))
    }

    pub fn block_on(&self, project_id: &str, date: NaiveDate) -> Option<&Block> {
        let index = day_index(self.week_start, date)?;
        self.block_at(project_id, index)
    }

    pub fn project_total(&self, project_id: &str) -> f64 {
        (0..self.days.len()).map(|i| self.cell(project_id, i)).sum()
    }

    pub fn day_total(&self, index: usize) -> f64 {
        self.blocks
            .keys()
            .map(|p| self.cell(p, index))
            .sum()
    }

    pub fn block_count(&self) -> usize {
        self.blocks.values().map(Vec::len).sum()
    }
}
