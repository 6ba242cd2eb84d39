//! Contiguous-run detection over one project's row of the day grid.

use crate::core::hour_map::HourMap;
use crate::models::{Block, Mode};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Shortest run that is reported as a block. A lone non-zero day stays a
/// plain cell.
pub const MIN_BLOCK_DAYS: usize = 2;

/// Detect the maximal runs of positive hours for `project_id` over `days`.
///
/// Runs are cut at the edges of `days`: nothing is stitched across weeks.
pub fn detect(project_id: &str, days: &[NaiveDate], map: &HourMap, mode: Mode) -> Vec<Block> {
    let mut blocks = Vec::new();

    // (index, date, value) of the current run
    let mut run: Vec<(usize, NaiveDate, f64)> = Vec::new();

    for (i, day) in days.iter().enumerate() {
        let value = map.value(project_id, *day, mode);

        if value > 0.0 {
            run.push((i, *day, value));
            continue;
        }

        flush(project_id, &mut run, &mut blocks);
    }

    // run still open at the end of the range
    flush(project_id, &mut run, &mut blocks);

    blocks
}

/// Detect blocks for every project present in the map.
pub fn detect_all(days: &[NaiveDate], map: &HourMap, mode: Mode) -> BTreeMap<String, Vec<Block>> {
    map.projects()
        .into_iter()
        .map(|p| {
            let blocks = detect(&p, days, map, mode);
            (p, blocks)
        })
        .collect()
}

fn flush(project_id: &str, run: &mut Vec<(usize, NaiveDate, f64)>, out: &mut Vec<Block>) {
    if run.len() >= MIN_BLOCK_DAYS {
        let start_index = run[0].0;
        let dates = run.iter().map(|(_, d, _)| *d).collect();
        let distribution = run.iter().map(|(_, d, v)| (*d, *v)).collect();

        out.push(Block {
            project_id: project_id.to_string(),
            start_index,
            dates,
            distribution,
        });
    }

    run.clear();
}
