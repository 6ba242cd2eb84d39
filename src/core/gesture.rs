//! Drag-to-create gesture over a week row.
//!
//! `Idle → Dragging → (Idle | PendingBlock)`. A gesture is pinned to the
//! project/week row it started on. Pointer-up is global: it ends the
//! gesture whatever cell (if any) is under the pointer.

use crate::core::day_grid::DAYS_PER_WEEK;
use crate::models::Block;
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

/// Live state between pointer-down and pointer-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragState {
    pub project_id: String,
    pub week_key: String,
    pub day_indices: BTreeSet<usize>,
}

/// Result of a gesture that touched two or more cells.
/// `[start, end]` is the min/max envelope of the visited cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingBlock {
    pub project_id: String,
    pub week_key: String,
    pub start: usize,
    pub end: usize,
}

impl PendingBlock {
    pub fn indices(&self) -> Vec<usize> {
        (self.start..=self.end).collect()
    }

    pub fn day_count(&self) -> usize {
        self.end - self.start + 1
    }

    /// Resolve column indices to dates of `days`; every value starts at 0.
    /// Returns None if the envelope falls outside `days`.
    pub fn to_block(&self, days: &[NaiveDate]) -> Option<Block> {
        let dates: Vec<NaiveDate> = days.get(self.start..=self.end)?.to_vec();
        let distribution: BTreeMap<NaiveDate, f64> = dates.iter().map(|d| (*d, 0.0)).collect();

        Some(Block {
            project_id: self.project_id.clone(),
            start_index: self.start,
            dates,
            distribution,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging(DragState),
    PendingBlock(PendingBlock),
}

#[derive(Debug, Default)]
pub struct DragTracker {
    state: GestureState,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, GestureState::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging(_))
    }

    /// Start a gesture on `index`. Ignored (returns false) unless idle or
    /// when the index is not a day column.
    pub fn pointer_down(&mut self, project_id: &str, week_key: &str, index: usize) -> bool {
        if !self.is_idle() || index >= DAYS_PER_WEEK {
            return false;
        }

        self.state = GestureState::Dragging(DragState {
            project_id: project_id.to_string(),
            week_key: week_key.to_string(),
            day_indices: BTreeSet::from([index]),
        });
        true
    }

    /// Add `index` to the gesture if it is on the originating row.
    pub fn pointer_enter(&mut self, project_id: &str, week_key: &str, index: usize) -> bool {
        let GestureState::Dragging(drag) = &mut self.state else {
            return false;
        };

        if drag.project_id != project_id || drag.week_key != week_key || index >= DAYS_PER_WEEK {
            return false;
        }

        drag.day_indices.insert(index)
    }

    /// Global pointer release. Returns the pending block, if one was created.
    pub fn pointer_up(&mut self) -> Option<&PendingBlock> {
        let state = std::mem::take(&mut self.state);

        self.state = match state {
            GestureState::Dragging(drag) if drag.day_indices.len() >= 2 => {
                // BTreeSet is ordered: first/last are min/max
                let start = drag.day_indices.first().copied().unwrap_or_default();
                let end = drag.day_indices.last().copied().unwrap_or_default();
                GestureState::PendingBlock(PendingBlock {
                    project_id: drag.project_id,
                    week_key: drag.week_key,
                    start,
                    end,
                })
            }
            GestureState::Dragging(_) => GestureState::Idle,
            other => other,
        };

        self.pending()
    }

    pub fn pending(&self) -> Option<&PendingBlock> {
        match &self.state {
            GestureState::PendingBlock(p) => Some(p),
            _ => None,
        }
    }

    /// Hand the pending block to the editor and return to idle.
    pub fn take_pending(&mut self) -> Option<PendingBlock> {
        match std::mem::take(&mut self.state) {
            GestureState::PendingBlock(p) => Some(p),
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Drop a pending block (editor discarded or committed).
    pub fn clear_pending(&mut self) {
        if matches!(self.state, GestureState::PendingBlock(_)) {
            self.state = GestureState::Idle;
        }
    }
}
