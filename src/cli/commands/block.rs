use crate::cli::commands::{apply_fill, commit_draft, parse_project, print_schedule};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::day_grid::DAYS_PER_WEEK;
use crate::core::editor::BlockEditor;
use crate::core::gesture::DragTracker;
use crate::core::schedule::WeekSchedule;
use crate::db::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use crate::utils::date;
use crate::utils::hours::parse_cells;

/// Draw a block the way the grid does: pointer-down on the first cell,
/// pointer-enter on the others, then a global pointer-up.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Block {
        project,
        week,
        cells,
        fill,
        mode,
    } = cmd
    {
        let project = parse_project(project)?;
        let anchor = date::parse_date(week).ok_or_else(|| AppError::InvalidDate(week.clone()))?;
        let cells = parse_cells(cells)?;
        let mode = mode.unwrap_or(cfg.default_mode);

        let mut store = SqliteStore::open(&cfg.database)?;
        let mut schedule =
            WeekSchedule::load(&store, &cfg.user, anchor, mode, std::slice::from_ref(&project))?;
        let key = schedule.week_key();

        //
        // 1. Gesture
        //
        let mut tracker = DragTracker::new();
        if let Some((first, rest)) = cells.split_first() {
            if !tracker.pointer_down(&project, &key, *first) {
                return Err(AppError::InvalidCell(*first));
            }
            for c in rest {
                // re-entering a visited cell is fine; a column past Sunday is not
                if !tracker.pointer_enter(&project, &key, *c) && *c >= DAYS_PER_WEEK {
                    return Err(AppError::InvalidCell(*c));
                }
            }
        }
        tracker.pointer_up();

        let Some(pending) = tracker.take_pending() else {
            warning("A block needs at least two day cells; nothing created.");
            return Ok(());
        };

        let block = pending
            .to_block(&schedule.days)
            .ok_or(AppError::InvalidCell(pending.end))?;

        if schedule
            .blocks_for(&project)
            .iter()
            .any(|b| pending.indices().iter().any(|i| b.contains_index(*i)))
        {
            info("The new block overlaps an existing one; overlapping days are overwritten.");
        }

        //
        // 2. Editor: fill the zeroed draft and commit
        //
        let mut editor = BlockEditor::new(&cfg.user, mode);
        editor.open(block);
        apply_fill(&mut editor, fill)?;
        commit_draft(&mut editor, &mut store, "block", &project)?;

        //
        // 3. Refetch and show the week
        //
        schedule.refresh(&store)?;
        print_schedule(&schedule, cfg);
    }

    Ok(())
}
