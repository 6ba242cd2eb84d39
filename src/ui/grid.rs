//! Text rendering of a week schedule: one row per project, one column per
//! day, block cells highlighted, followed by the list of detected blocks.

use crate::config::Config;
use crate::core::schedule::WeekSchedule;
use crate::models::Block;
use crate::utils::colors::{CYAN, color_for_cell, paint};
use crate::utils::{bold, format_hours};
use crate::utils::table::{Column, Table};

const PROJECT_W: usize = 16;
const DAY_W: usize = 7;

pub fn render_week(schedule: &WeekSchedule, cfg: &Config) -> String {
    let mut columns = vec![Column::left("Project", PROJECT_W)];
    for d in &schedule.days {
        let label = match cfg.weekday_format() {
            Some(fmt) => format!("{} {}", d.format(fmt), d.format("%d")),
            None => d.format("%m-%d").to_string(),
        };
        columns.push(Column::right(&label, DAY_W));
    }
    columns.push(Column::right("Total", DAY_W));

    let sep = cfg.separator_char.chars().next().unwrap_or('-');
    let mut table = Table::new(columns).with_separator(sep);

    for project in schedule.projects() {
        let mut row = vec![project.clone()];

        for i in 0..schedule.days.len() {
            let v = schedule.cell(&project, i);
            let in_block = schedule.block_at(&project, i).is_some();
            row.push(paint(&format_hours(v, true), color_for_cell(v, in_block)));
        }

        row.push(format_hours(schedule.project_total(&project), false));
        table.add_row(row);
    }

    let mut totals = vec![bold("Σ")];
    for i in 0..schedule.days.len() {
        totals.push(format_hours(schedule.day_total(i), true));
    }
    let week_total: f64 = (0..schedule.days.len()).map(|i| schedule.day_total(i)).sum();
    totals.push(format_hours(week_total, false));
    table.add_row(totals);

    table.render()
}

/// One line per block: `project  start → end  (n days, total h)  [v1, v2, ..]`
pub fn render_blocks(blocks: &[&Block]) -> String {
    let mut out = String::new();

    for b in blocks {
        let (Some(first), Some(last)) = (b.first_date(), b.last_date()) else {
            continue;
        };
        let values = b
            .values()
            .iter()
            .map(|v| format_hours(*v, false))
            .collect::<Vec<_>>()
            .join(", ");

        out.push_str(&format!(
            "  • {} {} → {}  ({} days, {}h)  [{}]\n",
            paint(&b.project_id, CYAN),
            first,
            last,
            b.len(),
            format_hours(b.total(), false),
            values
        ));
    }

    out
}
