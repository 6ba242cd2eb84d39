use crate::cli::commands::parse_project;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::HourStore;
use crate::db::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::models::WriteRequest;
use crate::ui::messages::success;
use crate::utils::{date, format_hours, parse_hours};

/// Write the hours of a single (project, date) cell.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set {
        project,
        date: date_str,
        hours,
        mode,
    } = cmd
    {
        //
        // 1. Validate input before touching the store
        //
        let project = parse_project(project)?;
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;
        let value = parse_hours(hours)?;
        let mode = mode.unwrap_or(cfg.default_mode);

        //
        // 2. Write
        //
        let mut store = SqliteStore::open(&cfg.database)?;
        let req = WriteRequest::new(&project, d, mode, value);
        store.write(&cfg.user, &req)?;

        store.audit(
            "set",
            &project,
            &format!("{} {} = {}h", d, mode.as_str(), format_hours(value, false)),
        );
        success(format!(
            "{} on {}: {}h ({})",
            project,
            d,
            format_hours(value, false),
            mode.as_str()
        ));
    }

    Ok(())
}
