//! Draft editing of one block (detected or freshly drawn).
//!
//! The source block is never touched; edits go to a draft copy. A commit
//! that fails on any date keeps the editor open with the draft as entered.

use crate::core::distributor::distribute;
use crate::core::store::{BlockDeleter, HourStore};
use crate::errors::{AppError, AppResult};
use crate::models::{Block, Mode, WriteRequest};
use crate::utils::hours::parse_hours;
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug)]
pub struct BlockEditor {
    user_id: String,
    mode: Mode,
    source: Option<Block>,
    draft: BTreeMap<NaiveDate, f64>,
}

impl BlockEditor {
    pub fn new(user_id: &str, mode: Mode) -> Self {
        Self {
            user_id: user_id.to_string(),
            mode,
            source: None,
            draft: BTreeMap::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Snapshot the block's distribution into the draft.
    pub fn open(&mut self, block: Block) {
        self.draft = block.distribution.clone();
        self.source = Some(block);
    }

    pub fn is_open(&self) -> bool {
        self.source.is_some()
    }

    pub fn block(&self) -> Option<&Block> {
        self.source.as_ref()
    }

    pub fn draft(&self) -> &BTreeMap<NaiveDate, f64> {
        &self.draft
    }

    /// Draft values in date order.
    pub fn draft_values(&self) -> Vec<f64> {
        self.draft.values().copied().collect()
    }

    pub fn draft_total(&self) -> f64 {
        self.draft.values().sum()
    }

    /// Set one day of the draft. Negative numbers clamp to 0; NaN/inf and
    /// dates outside the block are rejected without touching the draft.
    pub fn set_draft_value(&mut self, date: NaiveDate, value: f64) -> AppResult<()> {
        if !self.is_open() {
            return Err(AppError::EditorClosed);
        }
        if !value.is_finite() {
            return Err(AppError::InvalidHours(value.to_string()));
        }

        let slot = self
            .draft
            .get_mut(&date)
            .ok_or_else(|| AppError::InvalidDate(format!("{} is not part of the block", date)))?;
        *slot = value.max(0.0);
        Ok(())
    }

    /// Textual entry: rejects negative or non-numeric input.
    pub fn set_draft_input(&mut self, date: NaiveDate, input: &str) -> AppResult<()> {
        let value = parse_hours(input)?;
        self.set_draft_value(date, value)
    }

    /// Replace the whole draft, one value per block date in order.
    pub fn set_draft_values(&mut self, values: &[f64]) -> AppResult<()> {
        if !self.is_open() {
            return Err(AppError::EditorClosed);
        }
        if values.len() != self.draft.len() {
            return Err(AppError::ValueCountMismatch {
                expected: self.draft.len(),
                got: values.len(),
            });
        }
        if let Some(bad) = values.iter().find(|v| !v.is_finite() || **v < 0.0) {
            return Err(AppError::InvalidHours(bad.to_string()));
        }

        for (slot, v) in self.draft.values_mut().zip(values) {
            *slot = *v;
        }
        Ok(())
    }

    /// Overwrite the draft with an even split of `total`.
    pub fn fill_evenly(&mut self, total: u32) -> AppResult<()> {
        if !self.is_open() {
            return Err(AppError::EditorClosed);
        }

        let split = distribute(total, self.draft.len());
        for (slot, v) in self.draft.values_mut().zip(split) {
            *slot = v as f64;
        }
        Ok(())
    }

    /// Write every date of the draft (changed or not) for the active mode.
    ///
    /// On success the editor closes and the number of writes is returned.
    /// On failure the editor stays open with the draft intact and a single
    /// `PartialCommit` error lists the failing dates with their reasons.
    pub fn commit<S: HourStore + ?Sized>(&mut self, store: &mut S) -> AppResult<usize> {
        let block = self.source.as_ref().ok_or(AppError::EditorClosed)?;

        let requests: Vec<WriteRequest> = self
            .draft
            .iter()
            .map(|(d, v)| WriteRequest::new(&block.project_id, *d, self.mode, *v))
            .collect();

        self.send(store, &requests)
    }

    /// Inline quick entry: even split of `total`, then commit.
    pub fn quick_entry<S: HourStore + ?Sized>(&mut self, store: &mut S, total: u32) -> AppResult<usize> {
        self.fill_evenly(total)?;
        self.commit(store)
    }

    /// Close without writing.
    pub fn discard(&mut self) {
        self.source = None;
        self.draft.clear();
    }

    /// Clear every date of the block for the active mode (0 for plan,
    /// NULL for record). The draft itself is left as entered.
    pub fn delete<S: HourStore + ?Sized>(&mut self, store: &mut S) -> AppResult<usize> {
        let block = self.source.as_ref().ok_or(AppError::EditorClosed)?;

        let requests: Vec<WriteRequest> = block
            .dates
            .iter()
            .map(|d| WriteRequest::clear(&block.project_id, *d, self.mode))
            .collect();

        self.send(store, &requests)
    }

    /// Delete through an explicit delete collaborator.
    pub fn delete_with<D: BlockDeleter + ?Sized>(&mut self, deleter: &mut D) -> AppResult<()> {
        let block = self.source.as_ref().ok_or(AppError::EditorClosed)?;

        deleter.delete_block(&self.user_id, &block.project_id, &block.dates, self.mode)?;
        self.discard();
        Ok(())
    }

    fn send<S: HourStore + ?Sized>(&mut self, store: &mut S, requests: &[WriteRequest]) -> AppResult<usize> {
        let mut failed = Vec::new();

        // per-date writes are independent; keep going after a failure
        for req in requests {
            if let Err(e) = store.write(&self.user_id, req) {
                let reason = match e {
                    AppError::Write { reason, .. } => reason,
                    other => other.to_string(),
                };
                failed.push((req.date, reason));
            }
        }

        if !failed.is_empty() {
            return Err(AppError::PartialCommit { failed });
        }

        self.discard();
        Ok(requests.len())
    }
}
