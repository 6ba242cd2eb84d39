use crate::errors::AppResult;
use crate::models::{HourField, HourRow, WriteRequest};
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, Result, Row, params};

/// Load raw rows for one user within `[from, to]`, ordered by date.
///
/// Dates are returned as stored; validation happens when the hour map is
/// built.
pub fn load_rows(
    conn: &Connection,
    user_id: &str,
    from: &NaiveDate,
    to: &NaiveDate,
) -> AppResult<Vec<HourRow>> {
    let mut stmt = conn.prepare_cached(
        "SELECT user_id, project_id, date, planned_hours, recorded_hours
         FROM hour_entries
         WHERE user_id = ?1 AND date BETWEEN ?2 AND ?3
         ORDER BY date ASC, project_id ASC",
    )?;

    let rows = stmt.query_map(
        params![
            user_id,
            from.format("%Y-%m-%d").to_string(),
            to.format("%Y-%m-%d").to_string()
        ],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_row(row: &Row) -> Result<HourRow> {
    Ok(HourRow {
        user_id: row.get("user_id")?,
        project_id: row.get("project_id")?,
        date: row.get("date")?,
        planned_hours: row.get("planned_hours")?,
        recorded_hours: row.get("recorded_hours")?,
    })
}

/// Upsert one field of a (user, project, date) row.
pub fn upsert_hours(conn: &Connection, user_id: &str, req: &WriteRequest) -> AppResult<()> {
    let now = Local::now().to_rfc3339();
    let date = req.date_str();

    match req.field {
        HourField::PlannedHours => {
            conn.execute(
                "INSERT INTO hour_entries (user_id, project_id, date, planned_hours, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(user_id, project_id, date)
                 DO UPDATE SET planned_hours = excluded.planned_hours,
                               updated_at    = excluded.updated_at",
                params![user_id, req.project_id, date, req.value.unwrap_or(0.0), now],
            )?;
        }
        HourField::RecordedHours => {
            conn.execute(
                "INSERT INTO hour_entries (user_id, project_id, date, recorded_hours, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(user_id, project_id, date)
                 DO UPDATE SET recorded_hours = excluded.recorded_hours,
                               updated_at     = excluded.updated_at",
                params![user_id, req.project_id, date, req.value, now],
            )?;
        }
    }

    prune_empty(conn, user_id, &req.project_id, &req.date)?;
    Ok(())
}

/// Remove a row once both fields are empty.
pub fn prune_empty(conn: &Connection, user_id: &str, project_id: &str, date: &NaiveDate) -> Result<usize> {
    conn.execute(
        "DELETE FROM hour_entries
         WHERE user_id = ?1 AND project_id = ?2 AND date = ?3
           AND planned_hours = 0 AND recorded_hours IS NULL",
        params![user_id, project_id, date.format("%Y-%m-%d").to_string()],
    )
}

pub fn count_entries(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM hour_entries", [], |row| row.get(0))
}
