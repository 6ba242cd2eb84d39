mod common;
use chrono::NaiveDate;
use common::{d, week_days};
use hourblocks::core::{BlockEditor, DragTracker, HourStore, MemoryStore, WeekSchedule};
use hourblocks::errors::{AppError, AppResult};
use hourblocks::models::{Block, HourField, HourRow, Mode, WriteRequest};

const USER: &str = "tester";

/// alpha: Tue-Thu planned 3,3,2
fn seeded_store() -> MemoryStore {
    MemoryStore::with_rows(
        USER,
        &[
            HourRow::new("alpha", "2025-03-11", 3.0, None),
            HourRow::new("alpha", "2025-03-12", 3.0, None),
            HourRow::new("alpha", "2025-03-13", 2.0, Some(1.0)),
        ],
    )
}

fn first_block(store: &MemoryStore, mode: Mode) -> Block {
    let schedule = WeekSchedule::load(store, USER, d("2025-03-12"), mode, &[]).unwrap();
    schedule.blocks_for("alpha")[0].clone()
}

fn drawn_block(start: usize, end: usize) -> Block {
    let mut t = DragTracker::new();
    t.pointer_down("alpha", "2025-W11", start);
    t.pointer_enter("alpha", "2025-W11", end);
    t.pointer_up();
    t.take_pending().unwrap().to_block(&week_days()).unwrap()
}

#[test]
fn test_open_snapshots_distribution() {
    let store = seeded_store();
    let block = first_block(&store, Mode::Plan);

    let mut editor = BlockEditor::new(USER, Mode::Plan);
    editor.open(block.clone());

    assert!(editor.is_open());
    assert_eq!(editor.draft_values(), vec![3.0, 3.0, 2.0]);
    assert_eq!(editor.draft_total(), 8.0);

    editor.set_draft_value(d("2025-03-11"), 5.0).unwrap();
    // the source block is untouched
    assert_eq!(editor.block().unwrap(), &block);
}

#[test]
fn test_negative_draft_value_clamps_to_zero() {
    let mut editor = BlockEditor::new(USER, Mode::Plan);
    editor.open(drawn_block(1, 3));

    editor.set_draft_value(d("2025-03-12"), -4.0).unwrap();
    assert_eq!(editor.draft()[&d("2025-03-12")], 0.0);
}

#[test]
fn test_invalid_draft_entries_are_rejected() {
    let mut editor = BlockEditor::new(USER, Mode::Plan);
    assert!(matches!(
        editor.set_draft_value(d("2025-03-11"), 1.0),
        Err(AppError::EditorClosed)
    ));

    editor.open(drawn_block(1, 2));
    assert!(matches!(
        editor.set_draft_value(d("2025-03-11"), f64::NAN),
        Err(AppError::InvalidHours(_))
    ));
    assert!(matches!(
        editor.set_draft_value(d("2025-03-16"), 1.0),
        Err(AppError::InvalidDate(_))
    ));
    assert!(matches!(
        editor.set_draft_input(d("2025-03-11"), "-2"),
        Err(AppError::InvalidHours(_))
    ));
    assert!(matches!(
        editor.set_draft_input(d("2025-03-11"), "abc"),
        Err(AppError::InvalidHours(_))
    ));

    editor.set_draft_input(d("2025-03-11"), "2,5").unwrap();
    assert_eq!(editor.draft_values(), vec![2.5, 0.0]);
}

#[test]
fn test_set_draft_values_checks_count_and_sign() {
    let mut editor = BlockEditor::new(USER, Mode::Plan);
    editor.open(drawn_block(0, 2));

    assert!(matches!(
        editor.set_draft_values(&[1.0, 2.0]),
        Err(AppError::ValueCountMismatch { expected: 3, got: 2 })
    ));
    assert!(matches!(
        editor.set_draft_values(&[1.0, -2.0, 3.0]),
        Err(AppError::InvalidHours(_))
    ));
    assert_eq!(editor.draft_values(), vec![0.0, 0.0, 0.0]);

    editor.set_draft_values(&[1.0, 2.0, 3.0]).unwrap();
    assert_eq!(editor.draft_values(), vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_fill_evenly_and_commit_writes_every_date() {
    let mut store = MemoryStore::new();
    let mut editor = BlockEditor::new(USER, Mode::Plan);
    editor.open(drawn_block(0, 6));

    editor.fill_evenly(10).unwrap();
    assert_eq!(editor.draft_values(), vec![2.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0]);

    let n = editor.commit(&mut store).unwrap();
    assert_eq!(n, 7);
    assert!(!editor.is_open());
    assert_eq!(store.writes().len(), 7);
    assert!(store.writes().iter().all(|w| w.field == HourField::PlannedHours));

    let schedule = WeekSchedule::load(&store, USER, d("2025-03-10"), Mode::Plan, &[]).unwrap();
    let blocks = schedule.blocks_for("alpha");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].len(), 7);
    assert_eq!(blocks[0].total(), 10.0);
}

#[test]
fn test_commit_writes_unchanged_dates_too() {
    let mut store = seeded_store();
    let mut editor = BlockEditor::new(USER, Mode::Plan);
    editor.open(first_block(&store, Mode::Plan));

    editor.set_draft_value(d("2025-03-12"), 6.0).unwrap();
    assert_eq!(editor.commit(&mut store).unwrap(), 3);
    assert_eq!(store.writes().len(), 3);
}

#[test]
fn test_failed_commit_keeps_draft_and_reports_once() {
    let mut store = MemoryStore::new();
    store.fail_on(d("2025-03-12"));

    let mut editor = BlockEditor::new(USER, Mode::Plan);
    editor.open(drawn_block(1, 3));
    editor.set_draft_values(&[4.0, 5.0, 6.0]).unwrap();

    let err = editor.commit(&mut store).unwrap_err();
    match &err {
        AppError::PartialCommit { failed } => {
            assert_eq!(failed, &vec![(d("2025-03-12"), "simulated failure".to_string())])
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("2025-03-12 (simulated failure)"));

    // other dates were still attempted
    assert_eq!(store.writes().len(), 2);

    // still open with the values as entered
    assert!(editor.is_open());
    assert_eq!(editor.draft_values(), vec![4.0, 5.0, 6.0]);

    // retry succeeds once the collaborator recovers
    store.clear_failures();
    assert_eq!(editor.commit(&mut store).unwrap(), 3);
    assert!(!editor.is_open());
}

/// Store whose every write fails the way a broken database would.
struct BrokenStore;

impl HourStore for BrokenStore {
    fn fetch(&self, _user_id: &str, _from: NaiveDate, _to: NaiveDate) -> AppResult<Vec<HourRow>> {
        Ok(Vec::new())
    }

    fn write(&mut self, _user_id: &str, req: &WriteRequest) -> AppResult<()> {
        Err(AppError::Write {
            project: req.project_id.clone(),
            date: req.date,
            reason: "disk I/O error".into(),
        })
    }
}

#[test]
fn test_failed_commit_surfaces_store_reason() {
    let mut editor = BlockEditor::new(USER, Mode::Plan);
    editor.open(drawn_block(0, 1));
    editor.fill_evenly(4).unwrap();

    let err = editor.commit(&mut BrokenStore).unwrap_err();
    let msg = err.to_string();

    assert!(msg.starts_with("Commit incomplete"));
    assert!(msg.contains("2025-03-10 (disk I/O error)"));
    assert!(msg.contains("2025-03-11 (disk I/O error)"));
    assert!(editor.is_open());
}

#[test]
fn test_commit_in_record_mode_stores_zero_as_null() {
    let mut store = seeded_store();
    let mut editor = BlockEditor::new(USER, Mode::Record);
    editor.open(drawn_block(2, 4));
    editor.set_draft_values(&[2.0, 0.0, 1.5]).unwrap();
    editor.commit(&mut store).unwrap();

    let w = store.writes();
    assert!(w.iter().all(|r| r.field == HourField::RecordedHours));
    assert_eq!(w[0].value, Some(2.0));
    assert_eq!(w[1].value, None);
    assert_eq!(w[2].value, Some(1.5));

    // planned hours of the Thursday row survive
    let rows = store.fetch(USER, d("2025-03-13"), d("2025-03-13")).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].planned_hours, 2.0);
    assert_eq!(rows[0].recorded_hours, None);
}

#[test]
fn test_quick_entry_spreads_and_commits() {
    let mut store = MemoryStore::new();
    let mut editor = BlockEditor::new(USER, Mode::Plan);
    editor.open(drawn_block(3, 5));

    assert_eq!(editor.quick_entry(&mut store, 8).unwrap(), 3);
    let values: Vec<Option<f64>> = store.writes().iter().map(|w| w.value).collect();
    assert_eq!(values, vec![Some(3.0), Some(3.0), Some(2.0)]);
}

#[test]
fn test_discard_writes_nothing() {
    let mut store = MemoryStore::new();
    let mut editor = BlockEditor::new(USER, Mode::Plan);
    editor.open(drawn_block(0, 1));
    editor.fill_evenly(4).unwrap();
    editor.discard();

    assert!(!editor.is_open());
    assert!(editor.draft().is_empty());
    assert!(matches!(editor.commit(&mut store), Err(AppError::EditorClosed)));
    assert!(store.writes().is_empty());
}

#[test]
fn test_delete_clears_only_the_active_field() {
    let mut store = seeded_store();
    let mut editor = BlockEditor::new(USER, Mode::Plan);
    editor.open(first_block(&store, Mode::Plan));

    assert_eq!(editor.delete(&mut store).unwrap(), 3);
    assert!(!editor.is_open());

    // Tue/Wed rows are gone; Thursday keeps its recorded hour
    let rows = store.fetch(USER, d("2025-03-10"), d("2025-03-16")).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].date, "2025-03-13");
    assert_eq!(rows[0].planned_hours, 0.0);
    assert_eq!(rows[0].recorded_hours, Some(1.0));

    let schedule = WeekSchedule::load(&store, USER, d("2025-03-12"), Mode::Plan, &[]).unwrap();
    assert_eq!(schedule.block_count(), 0);
}

#[test]
fn test_delete_with_explicit_deleter() {
    let mut store = seeded_store();
    let mut editor = BlockEditor::new(USER, Mode::Plan);
    editor.open(first_block(&store, Mode::Plan));

    editor.delete_with(&mut store).unwrap();
    assert!(!editor.is_open());

    let schedule = WeekSchedule::load(&store, USER, d("2025-03-12"), Mode::Plan, &[]).unwrap();
    assert!(schedule.blocks_for("alpha").is_empty());
}
