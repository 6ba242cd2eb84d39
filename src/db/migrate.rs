use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `hour_entries` table exists.
fn hour_entries_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='hour_entries'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `hour_entries` table. One row per (user, project, date).
fn create_hour_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS hour_entries (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id         TEXT NOT NULL,
            project_id      TEXT NOT NULL,
            date            TEXT NOT NULL,
            planned_hours   REAL NOT NULL DEFAULT 0 CHECK(planned_hours >= 0),
            recorded_hours  REAL NULL CHECK(recorded_hours IS NULL OR recorded_hours >= 0),
            updated_at      TEXT NOT NULL,
            UNIQUE(user_id, project_id, date)
        );
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Index for the week-range fetch (user + date window).
fn migrate_add_user_date_index(conn: &Connection) -> Result<()> {
    let version = "20250310_0002_hour_entries_user_date_idx";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_hour_entries_user_date ON hour_entries(user_id, date);",
    )?;

    mark_applied(conn, version, "Added (user_id, date) index to hour_entries")?;
    success(format!("Migration applied: {}", version));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Called by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Create hour_entries if missing
    if !hour_entries_table_exists(conn)? {
        create_hour_entries_table(conn)?;
        success("Created hour_entries table.");
    }

    // 3) Incremental migrations
    migrate_add_user_date_index(conn)?;

    Ok(())
}
