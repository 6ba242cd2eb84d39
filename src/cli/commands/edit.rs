use crate::cli::commands::{apply_fill, commit_draft, parse_project, print_schedule};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::editor::BlockEditor;
use crate::core::schedule::WeekSchedule;
use crate::db::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::utils::date;

/// Open the detected block containing a date, refill it and commit.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        project,
        date: date_str,
        fill,
        mode,
    } = cmd
    {
        let project = parse_project(project)?;
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;
        let mode = mode.unwrap_or(cfg.default_mode);

        let mut store = SqliteStore::open(&cfg.database)?;
        let mut schedule = WeekSchedule::load(&store, &cfg.user, d, mode, &[])?;

        let block = schedule
            .block_on(&project, d)
            .cloned()
            .ok_or_else(|| AppError::NoBlockAt {
                project: project.clone(),
                date: d,
            })?;

        let mut editor = BlockEditor::new(&cfg.user, mode);
        editor.open(block);
        apply_fill(&mut editor, fill)?;
        commit_draft(&mut editor, &mut store, "edit", &project)?;

        schedule.refresh(&store)?;
        print_schedule(&schedule, cfg);
    }

    Ok(())
}
