//! SQLite implementation of the hour-storage collaborator.

use crate::core::store::{BlockDeleter, HourStore};
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{load_rows, upsert_hours};
use crate::errors::{AppError, AppResult};
use crate::models::{HourRow, Mode, WriteRequest};
use chrono::NaiveDate;

pub struct SqliteStore {
    pub pool: DbPool,
}

impl SqliteStore {
    /// Open the database and apply pending migrations.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn in_memory() -> AppResult<Self> {
        let pool = DbPool::in_memory()?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    /// Audit line in the `log` table; failures only produce a warning.
    pub fn audit(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = ttlog(&self.pool.conn, operation, target, message) {
            crate::ui::messages::warning(format!("Failed to write internal log: {}", e));
        }
    }
}

impl HourStore for SqliteStore {
    fn fetch(&self, user_id: &str, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<HourRow>> {
        load_rows(&self.pool.conn, user_id, &from, &to)
    }

    fn write(&mut self, user_id: &str, req: &WriteRequest) -> AppResult<()> {
        upsert_hours(&self.pool.conn, user_id, req).map_err(|e| AppError::Write {
            project: req.project_id.clone(),
            date: req.date,
            reason: e.to_string(),
        })
    }
}

impl BlockDeleter for SqliteStore {
    /// Clears the active field for every date in one transaction.
    fn delete_block(
        &mut self,
        user_id: &str,
        project_id: &str,
        dates: &[NaiveDate],
        mode: Mode,
    ) -> AppResult<()> {
        self.pool.with_conn(|conn| {
            let tx = conn.transaction()?;
            for d in dates {
                upsert_hours(&tx, user_id, &WriteRequest::clear(project_id, *d, mode))
                    .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
            }
            tx.commit()
        })?;
        Ok(())
    }
}
