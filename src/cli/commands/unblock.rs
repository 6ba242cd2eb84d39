use crate::cli::commands::parse_project;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::editor::BlockEditor;
use crate::core::schedule::WeekSchedule;
use crate::db::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;

/// Delete the detected block containing a date through the store's
/// delete path (active field cleared for every day of the block).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Unblock {
        project,
        date: date_str,
        mode,
    } = cmd
    {
        let project = parse_project(project)?;
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;
        let mode = mode.unwrap_or(cfg.default_mode);

        let mut store = SqliteStore::open(&cfg.database)?;
        let schedule = WeekSchedule::load(&store, &cfg.user, d, mode, &[])?;

        let block = schedule
            .block_on(&project, d)
            .cloned()
            .ok_or_else(|| AppError::NoBlockAt {
                project: project.clone(),
                date: d,
            })?;
        let days = block.len();
        let span = format!("{} → {}", block.dates[0], block.dates[days - 1]);

        let mut editor = BlockEditor::new(&cfg.user, mode);
        editor.open(block);
        editor.delete_with(&mut store)?;

        store.audit("unblock", &project, &format!("{} ({} mode)", span, mode.as_str()));
        success(format!("Deleted block {} for {} ({} days).", span, project, days));
    }

    Ok(())
}
