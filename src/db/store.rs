//! Durable date → hours map.
//!
//! `EntryStore` is the only component that touches `daily_entries`. Every
//! write is mirrored into the internal `log` table; a failure there is
//! reported but never undoes the write itself.

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::daily_entry::DailyEntry;
use crate::models::year_month::YearMonth;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use rusqlite::Connection;
use std::collections::BTreeMap;
use std::path::Path;

pub struct EntryStore {
    pool: DbPool,
}

impl EntryStore {
    /// Open the store at `path`, creating missing directories and schema.
    pub fn open(path: &Path) -> AppResult<Self> {
        let pool = DbPool::open(path)?;

        let target = path.display().to_string();
        if let Err(e) = ttlog(&pool.conn, "init", &target, "Database opened") {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(Self { pool })
    }

    pub fn in_memory() -> AppResult<Self> {
        Ok(Self {
            pool: DbPool::in_memory()?,
        })
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    /// `None` when nothing was ever stored for `date` (distinct from an explicit 0).
    pub fn get(&self, date: &NaiveDate) -> AppResult<Option<DailyEntry>> {
        Ok(queries::get_entry(&self.pool.conn, date)?)
    }

    pub fn upsert(&self, entry: &DailyEntry) -> AppResult<()> {
        queries::upsert_entry(&self.pool.conn, entry)?;
        self.audit(
            "upsert",
            &entry.date_key(),
            &format!("hours={}", entry.hours_logged),
        );
        Ok(())
    }

    /// Removes the row for `date` if present; returns whether one existed.
    pub fn delete(&self, date: &NaiveDate) -> AppResult<bool> {
        let removed = queries::delete_entry(&self.pool.conn, date)?;
        if removed {
            self.audit("delete", &date.to_string(), "Entry deleted");
        }
        Ok(removed)
    }

    /// All entries, newest date first.
    pub fn list_all(&self) -> AppResult<Vec<DailyEntry>> {
        Ok(queries::list_entries(&self.pool.conn)?)
    }

    pub fn month_hours(&self, ym: &YearMonth) -> AppResult<BTreeMap<u32, u8>> {
        Ok(queries::month_entries(&self.pool.conn, ym)?)
    }

    fn audit(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = ttlog(&self.pool.conn, operation, target, message) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }
}
