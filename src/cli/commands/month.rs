use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::day_grid::weeks_of_month;
use crate::core::schedule::WeekSchedule;
use crate::db::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::export::parse_year_month;
use crate::ui::grid::render_blocks;
use crate::ui::messages::header;
use crate::utils::date::{current_year_month, month_name};
use crate::utils::format_hours;

/// List the blocks of every week intersecting a month.
/// Weeks are detected independently, so a run across a week boundary
/// shows up as two blocks.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Month { period, mode } = cmd {
        let (year, month) = match period {
            Some(p) => parse_year_month(p).ok_or_else(|| AppError::InvalidDate(p.clone()))?,
            None => current_year_month(),
        };
        let mode = mode.unwrap_or(cfg.default_mode);

        let store = SqliteStore::open(&cfg.database)?;

        header(format!("{} {} ({} mode)", month_name(month), year, mode.as_str()));

        let mut total_blocks = 0;
        for days in weeks_of_month(year, month) {
            let Some(start) = days.first().copied() else {
                continue;
            };
            let schedule = WeekSchedule::load(&store, &cfg.user, start, mode, &[])?;
            let blocks: Vec<_> = schedule.blocks.values().flatten().collect();

            let week_total: f64 = schedule
                .projects()
                .iter()
                .map(|p| schedule.project_total(p))
                .sum();

            println!(
                "\n{} ({} → {})  {}h",
                schedule.week_key(),
                start,
                days.last().copied().unwrap_or(start),
                format_hours(week_total, false)
            );

            if blocks.is_empty() {
                println!("  no blocks");
            } else {
                print!("{}", render_blocks(&blocks));
            }
            total_blocks += blocks.len();
        }

        println!("\nBlocks in month: {}", total_blocks);
    }

    Ok(())
}
