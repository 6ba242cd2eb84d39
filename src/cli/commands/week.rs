use crate::cli::commands::print_schedule;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::schedule::WeekSchedule;
use crate::db::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Week { date: date_arg, mode } = cmd {
        let anchor = date::resolve_date(date_arg.as_deref())
            .ok_or_else(|| AppError::InvalidDate(date_arg.clone().unwrap_or_default()))?;
        let mode = mode.unwrap_or(cfg.default_mode);

        let store = SqliteStore::open(&cfg.database)?;
        let schedule = WeekSchedule::load(&store, &cfg.user, anchor, mode, &[])?;

        if schedule.projects().is_empty() {
            info(format!(
                "No hours for week {} ({}).",
                schedule.week_key(),
                schedule.week_start
            ));
            return Ok(());
        }

        print_schedule(&schedule, cfg);
    }

    Ok(())
}
