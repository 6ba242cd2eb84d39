pub mod block;
pub mod config;
pub mod db;
pub mod edit;
pub mod export;
pub mod init;
pub mod log;
pub mod month;
pub mod set;
pub mod unblock;
pub mod week;

use crate::cli::parser::FillArgs;
use crate::config::Config;
use crate::core::editor::BlockEditor;
use crate::core::schedule::WeekSchedule;
use crate::db::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::ui::grid::{render_blocks, render_week};
use crate::ui::messages::{header, success, warning};
use crate::utils::hours::parse_hour_list;

/// Trimmed, non-empty project id.
pub(crate) fn parse_project(project: &str) -> AppResult<String> {
    let p = project.trim();
    if p.is_empty() {
        return Err(AppError::InvalidProject(project.to_string()));
    }
    Ok(p.to_string())
}

/// Fill the open editor's draft from --total or --values.
pub(crate) fn apply_fill(editor: &mut BlockEditor, fill: &FillArgs) -> AppResult<()> {
    match (&fill.total, &fill.values) {
        (Some(total), _) => editor.fill_evenly(*total),
        (None, Some(values)) => {
            let parsed = parse_hour_list(values)?;
            editor.set_draft_values(&parsed)
        }
        (None, None) => Ok(()),
    }
}

/// Commit the draft, audit the outcome and report a failure once.
pub(crate) fn commit_draft(
    editor: &mut BlockEditor,
    store: &mut SqliteStore,
    operation: &str,
    project: &str,
) -> AppResult<()> {
    let span = editor
        .block()
        .and_then(|b| Some(format!("{} → {}", b.first_date()?, b.last_date()?)))
        .unwrap_or_default();
    let total = editor.draft_total();

    match editor.commit(store) {
        Ok(n) => {
            store.audit(
                operation,
                project,
                &format!("{} ({} writes, {} mode, {}h)", span, n, editor.mode().as_str(), total),
            );
            success(format!("Saved {} days for {} ({}h).", n, project, total));
            Ok(())
        }
        Err(e) => {
            store.audit("write_failed", project, &e.to_string());
            warning(format!(
                "Draft kept with values {:?}; run the command again to retry.",
                editor.draft_values()
            ));
            Err(e)
        }
    }
}

/// Print the week grid followed by its blocks.
pub(crate) fn print_schedule(schedule: &WeekSchedule, cfg: &Config) {
    header(format!(
        "{} ({} → {}, {} mode)",
        schedule.week_key(),
        schedule.days.first().map(|d| d.to_string()).unwrap_or_default(),
        schedule.days.last().map(|d| d.to_string()).unwrap_or_default(),
        schedule.mode.as_str()
    ));
    print!("{}", render_week(schedule, cfg));

    let blocks: Vec<_> = schedule.blocks.values().flatten().collect();
    if blocks.is_empty() {
        println!("No blocks this week.");
    } else {
        println!("Blocks:");
        print!("{}", render_blocks(&blocks));
    }
}
