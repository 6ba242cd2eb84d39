mod common;
use common::d;
use hourblocks::core::{BlockEditor, HourStore, MemoryStore, WeekSchedule};
use hourblocks::models::{HourRow, Mode, WriteRequest};

const USER: &str = "tester";

fn store() -> MemoryStore {
    MemoryStore::with_rows(
        USER,
        &[
            HourRow::new("alpha", "2025-03-10", 2.0, None),
            HourRow::new("alpha", "2025-03-11", 2.0, None),
            HourRow::new("beta", "2025-03-11", 1.0, None),
            HourRow::new("beta", "2025-03-17", 4.0, None),
        ],
    )
}

#[test]
fn test_load_anchors_on_monday() {
    let s = WeekSchedule::load(&store(), USER, d("2025-03-14"), Mode::Plan, &[]).unwrap();
    assert_eq!(s.week_start, d("2025-03-10"));
    assert_eq!(s.week_key(), "2025-W11");
    assert_eq!(s.days.len(), 7);
}

#[test]
fn test_cells_totals_and_blocks() {
    let s = WeekSchedule::load(&store(), USER, d("2025-03-10"), Mode::Plan, &[]).unwrap();

    assert_eq!(s.projects(), vec!["alpha".to_string(), "beta".to_string()]);
    assert_eq!(s.cell("alpha", 0), 2.0);
    assert_eq!(s.cell("alpha", 2), 0.0);
    assert_eq!(s.project_total("alpha"), 4.0);
    assert_eq!(s.day_total(1), 3.0);

    assert_eq!(s.block_count(), 1);
    assert!(s.block_at("alpha", 1).is_some());
    assert!(s.block_at("beta", 1).is_none());
    assert!(s.block_on("alpha", d("2025-03-10")).is_some());
    assert!(s.block_on("alpha", d("2025-03-17")).is_none());
}

#[test]
fn test_other_users_are_not_visible() {
    let mut st = store();
    st.write("someone", &WriteRequest::new("gamma", d("2025-03-12"), Mode::Plan, 3.0))
        .unwrap();

    let s = WeekSchedule::load(&st, USER, d("2025-03-10"), Mode::Plan, &[]).unwrap();
    assert!(!s.projects().contains(&"gamma".to_string()));
}

#[test]
fn test_extra_projects_get_an_empty_row() {
    let s = WeekSchedule::load(
        &store(),
        USER,
        d("2025-03-10"),
        Mode::Plan,
        &["delta".to_string()],
    )
    .unwrap();
    assert!(s.projects().contains(&"delta".to_string()));
    assert!(s.blocks_for("delta").is_empty());
    assert!(s.blocks_for("unknown").is_empty());
}

#[test]
fn test_refresh_sees_committed_block() {
    let mut st = store();
    let mut s = WeekSchedule::load(&st, USER, d("2025-03-10"), Mode::Plan, &[]).unwrap();
    assert!(s.blocks_for("beta").is_empty());

    st.write(USER, &WriteRequest::new("beta", d("2025-03-12"), Mode::Plan, 1.0))
        .unwrap();
    // cached until refreshed
    assert!(s.blocks_for("beta").is_empty());

    s.refresh(&st).unwrap();
    let blocks = s.blocks_for("beta");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].start_index, 1);
    assert_eq!(blocks[0].len(), 2);
}

#[test]
fn test_editing_a_block_then_refresh() {
    let mut st = store();
    let mut s = WeekSchedule::load(&st, USER, d("2025-03-10"), Mode::Plan, &[]).unwrap();

    let mut editor = BlockEditor::new(USER, Mode::Plan);
    editor.open(s.blocks_for("alpha")[0].clone());
    editor.set_draft_values(&[5.0, 0.0]).unwrap();
    editor.commit(&mut st).unwrap();

    s.refresh(&st).unwrap();
    // one day left: no longer a block
    assert!(s.blocks_for("alpha").is_empty());
    assert_eq!(s.cell("alpha", 0), 5.0);
    assert_eq!(s.cell("alpha", 1), 0.0);
}
