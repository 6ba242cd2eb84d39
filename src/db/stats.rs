use crate::db::pool::DbPool;
use crate::db::queries::count_entries;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROWS / USERS / PROJECTS
    //
    let count = count_entries(&pool.conn)?;
    let users: i64 = pool.conn.query_row(
        "SELECT COUNT(DISTINCT user_id) FROM hour_entries",
        [],
        |row| row.get(0),
    )?;
    let projects: i64 = pool.conn.query_row(
        "SELECT COUNT(DISTINCT project_id) FROM hour_entries",
        [],
        |row| row.get(0),
    )?;

    println!("{}• Hour entries:{} {}{}{}", CYAN, RESET, GREEN, count, RESET);
    println!("{}• Users:{} {}", CYAN, RESET, users);
    println!("{}• Projects:{} {}", CYAN, RESET, projects);

    //
    // 3) DATE RANGE
    //
    let (first, last): (Option<String>, Option<String>) = pool
        .conn
        .query_row("SELECT MIN(date), MAX(date) FROM hour_entries", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .optional()?
        .unwrap_or((None, None));

    let fmt = |d: Option<String>| d.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt(first));
    println!("    to:   {}", fmt(last));

    //
    // 4) HOUR TOTALS
    //
    let (planned, recorded): (f64, f64) = pool.conn.query_row(
        "SELECT IFNULL(SUM(planned_hours), 0), IFNULL(SUM(recorded_hours), 0) FROM hour_entries",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;
    println!(
        "{}• Planned / recorded:{} {:.1}h / {:.1}h",
        CYAN, RESET, planned, recorded
    );

    println!();
    Ok(())
}
