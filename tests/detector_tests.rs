mod common;
use common::{d, week_days};
use hourblocks::core::day_grid::weeks_of_month;
use hourblocks::core::{HourMap, detect, detect_all, distribute};
use hourblocks::models::{HourRow, Mode};

fn planned(project: &str, values: &[f64]) -> Vec<HourRow> {
    week_days()
        .iter()
        .zip(values)
        .filter(|(_, v)| **v != 0.0)
        .map(|(day, v)| HourRow::new(project, &day.to_string(), *v, None))
        .collect()
}

#[test]
fn test_two_runs_and_a_lone_day() {
    let rows = planned("alpha", &[2.0, 3.0, 0.0, 4.0, 0.0, 1.0, 1.0]);
    let map = HourMap::build(&rows, None);

    let blocks = detect("alpha", &week_days(), &map, Mode::Plan);
    assert_eq!(blocks.len(), 2);

    assert_eq!(blocks[0].start_index, 0);
    assert_eq!(blocks[0].end_index(), 1);
    assert_eq!(blocks[0].values(), vec![2.0, 3.0]);

    assert_eq!(blocks[1].start_index, 5);
    assert_eq!(blocks[1].end_index(), 6);
    assert_eq!(blocks[1].total(), 2.0);

    // the lone Thursday is not a block
    assert!(blocks.iter().all(|b| !b.contains(d("2025-03-13"))));
}

#[test]
fn test_single_day_is_never_a_block() {
    let rows = planned("alpha", &[0.0, 0.0, 0.0, 5.0, 0.0, 0.0, 0.0]);
    let map = HourMap::build(&rows, None);
    assert!(detect("alpha", &week_days(), &map, Mode::Plan).is_empty());
}

#[test]
fn test_empty_row_yields_no_blocks() {
    let map = HourMap::build(&[], None);
    assert!(detect("alpha", &week_days(), &map, Mode::Plan).is_empty());
}

#[test]
fn test_full_week_is_one_block() {
    let rows = planned("alpha", &[1.0; 7]);
    let map = HourMap::build(&rows, None);

    let blocks = detect("alpha", &week_days(), &map, Mode::Plan);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].len(), 7);
    assert_eq!(blocks[0].first_date(), Some(d("2025-03-10")));
    assert_eq!(blocks[0].last_date(), Some(d("2025-03-16")));
}

#[test]
fn test_blocks_are_disjoint_and_cover_every_run() {
    let rows = planned("alpha", &[1.0, 1.0, 1.0, 0.0, 2.0, 2.0, 0.0]);
    let map = HourMap::build(&rows, None);
    let blocks = detect("alpha", &week_days(), &map, Mode::Plan);

    for (i, a) in blocks.iter().enumerate() {
        assert!(a.len() >= 2);
        assert!(a.values().iter().all(|v| *v > 0.0));
        for b in blocks.iter().skip(i + 1) {
            assert!(a.end_index() < b.start_index, "blocks overlap: {a:?} {b:?}");
        }
        // maximal: the cells just outside the run are zero
        if a.start_index > 0 {
            assert_eq!(map.value("alpha", week_days()[a.start_index - 1], Mode::Plan), 0.0);
        }
        if a.end_index() < 6 {
            assert_eq!(map.value("alpha", week_days()[a.end_index() + 1], Mode::Plan), 0.0);
        }
    }
}

#[test]
fn test_modes_are_detected_independently() {
    let days = week_days();
    let rows = vec![
        HourRow::new("alpha", &days[0].to_string(), 4.0, None),
        HourRow::new("alpha", &days[1].to_string(), 4.0, Some(3.0)),
        HourRow::new("alpha", &days[2].to_string(), 0.0, Some(2.0)),
    ];
    let map = HourMap::build(&rows, None);

    let plan = detect("alpha", &days, &map, Mode::Plan);
    let record = detect("alpha", &days, &map, Mode::Record);

    assert_eq!(plan.len(), 1);
    assert_eq!(plan[0].start_index, 0);
    assert_eq!(plan[0].values(), vec![4.0, 4.0]);

    assert_eq!(record.len(), 1);
    assert_eq!(record[0].start_index, 1);
    assert_eq!(record[0].values(), vec![3.0, 2.0]);
}

#[test]
fn test_runs_do_not_cross_week_boundaries() {
    // Fri 2025-03-14 .. Tue 2025-03-18 spans two weeks
    let rows: Vec<HourRow> = ["2025-03-14", "2025-03-15", "2025-03-16", "2025-03-17", "2025-03-18"]
        .iter()
        .map(|s| HourRow::new("alpha", s, 2.0, None))
        .collect();
    let map = HourMap::build(&rows, None);

    let weeks = weeks_of_month(2025, 3);
    let first = weeks.iter().find(|w| w[0] == d("2025-03-10")).unwrap();
    let second = weeks.iter().find(|w| w[0] == d("2025-03-17")).unwrap();

    let a = detect("alpha", first, &map, Mode::Plan);
    let b = detect("alpha", second, &map, Mode::Plan);

    assert_eq!(a.len(), 1);
    assert_eq!(a[0].len(), 3);
    assert_eq!(a[0].last_date(), Some(d("2025-03-16")));

    assert_eq!(b.len(), 1);
    assert_eq!(b[0].len(), 2);
    assert_eq!(b[0].first_date(), Some(d("2025-03-17")));
}

#[test]
fn test_detect_all_groups_by_project() {
    let mut rows = planned("alpha", &[1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    rows.extend(planned("beta", &[0.0, 0.0, 0.0, 0.0, 3.0, 0.0, 0.0]));
    let map = HourMap::build(&rows, None);

    let all = detect_all(&week_days(), &map, Mode::Plan);
    assert_eq!(all.len(), 2);
    assert_eq!(all["alpha"].len(), 1);
    assert!(all["beta"].is_empty());
}

#[test]
fn test_even_distribution_is_detected_back_as_one_block() {
    let days = week_days();
    let split = distribute(17, 5);
    let rows: Vec<HourRow> = days[1..6]
        .iter()
        .zip(&split)
        .map(|(day, v)| HourRow::new("alpha", &day.to_string(), *v as f64, None))
        .collect();
    let map = HourMap::build(&rows, None);

    let blocks = detect("alpha", &days, &map, Mode::Plan);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].start_index, 1);
    assert_eq!(blocks[0].len(), 5);
    assert_eq!(blocks[0].total(), 17.0);
}
