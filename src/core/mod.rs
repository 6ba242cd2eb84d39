//! Weekly hour-block engine.
//!
//! Everything here is synchronous and local. The only fallible boundary is
//! the [`store::HourStore`] collaborator used by the editor and schedule.

pub mod day_grid;
pub mod detector;
pub mod distributor;
pub mod editor;
pub mod gesture;
pub mod hour_map;
pub mod log;
pub mod schedule;
pub mod store;

pub use detector::{detect, detect_all};
pub use distributor::distribute;
pub use editor::BlockEditor;
pub use gesture::{DragTracker, GestureState, PendingBlock};
pub use hour_map::{HourMap, TeamHourMap};
pub use schedule::WeekSchedule;
pub use store::{BlockDeleter, HourStore, MemoryStore};
