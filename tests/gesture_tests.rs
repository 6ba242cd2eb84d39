mod common;
use common::{d, week_days};
use hourblocks::core::{DragTracker, GestureState};

const KEY: &str = "2025-W11";

#[test]
fn test_drag_over_two_cells_creates_pending_block() {
    let mut t = DragTracker::new();
    assert!(t.is_idle());

    assert!(t.pointer_down("alpha", KEY, 1));
    assert!(t.is_dragging());
    assert!(t.pointer_enter("alpha", KEY, 2));

    let pending = t.pointer_up().cloned().expect("pending block");
    assert_eq!(pending.project_id, "alpha");
    assert_eq!(pending.week_key, KEY);
    assert_eq!((pending.start, pending.end), (1, 2));
    assert_eq!(pending.day_count(), 2);
}

#[test]
fn test_single_cell_click_returns_to_idle() {
    let mut t = DragTracker::new();
    t.pointer_down("alpha", KEY, 3);
    assert!(t.pointer_up().is_none());
    assert!(t.is_idle());
    assert_eq!(t.state(), &GestureState::Idle);
}

#[test]
fn test_reentering_the_same_cell_does_not_count_twice() {
    let mut t = DragTracker::new();
    t.pointer_down("alpha", KEY, 3);
    assert!(!t.pointer_enter("alpha", KEY, 3));
    assert!(t.pointer_up().is_none());
}

#[test]
fn test_envelope_fills_skipped_cells() {
    let mut t = DragTracker::new();
    t.pointer_down("alpha", KEY, 4);
    t.pointer_enter("alpha", KEY, 1);

    let pending = t.pointer_up().cloned().unwrap();
    assert_eq!((pending.start, pending.end), (1, 4));
    assert_eq!(pending.indices(), vec![1, 2, 3, 4]);
}

#[test]
fn test_other_rows_are_ignored_while_dragging() {
    let mut t = DragTracker::new();
    t.pointer_down("alpha", KEY, 0);

    assert!(!t.pointer_enter("beta", KEY, 1));
    assert!(!t.pointer_enter("alpha", "2025-W12", 1));
    assert!(!t.pointer_enter("alpha", KEY, 7));

    assert!(t.pointer_up().is_none());
    assert!(t.is_idle());
}

#[test]
fn test_pointer_down_is_ignored_unless_idle() {
    let mut t = DragTracker::new();
    t.pointer_down("alpha", KEY, 0);
    assert!(!t.pointer_down("beta", KEY, 5));
    t.pointer_enter("alpha", KEY, 1);
    t.pointer_up();

    // pending block waits for the editor
    assert!(!t.pointer_down("alpha", KEY, 3));
    assert!(t.pending().is_some());

    t.clear_pending();
    assert!(t.is_idle());
    assert!(t.pointer_down("alpha", KEY, 3));
}

#[test]
fn test_pointer_down_outside_day_columns() {
    let mut t = DragTracker::new();
    assert!(!t.pointer_down("alpha", KEY, 7));
    assert!(t.is_idle());
}

#[test]
fn test_pointer_up_without_gesture_is_a_no_op() {
    let mut t = DragTracker::new();
    assert!(t.pointer_up().is_none());
    assert!(t.is_idle());
}

#[test]
fn test_take_pending_resolves_to_zeroed_block() {
    let mut t = DragTracker::new();
    t.pointer_down("alpha", KEY, 2);
    t.pointer_enter("alpha", KEY, 3);
    t.pointer_enter("alpha", KEY, 4);
    t.pointer_up();

    let pending = t.take_pending().unwrap();
    assert!(t.is_idle());
    assert!(t.take_pending().is_none());

    let block = pending.to_block(&week_days()).unwrap();
    assert_eq!(block.project_id, "alpha");
    assert_eq!(block.start_index, 2);
    assert_eq!(block.dates, vec![d("2025-03-12"), d("2025-03-13"), d("2025-03-14")]);
    assert_eq!(block.values(), vec![0.0, 0.0, 0.0]);

    // envelope beyond the provided days
    assert!(pending.to_block(&week_days()[..3]).is_none());
}
