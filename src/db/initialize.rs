use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database: connection pragmas, then every pending
/// migration. Schema creation lives in the migration engine only.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.busy_timeout(std::time::Duration::from_secs(5))?;
    run_pending_migrations(conn)?;
    Ok(())
}
