//! SQLite connection wrapper (single connection, single writer).

use crate::db::initialize::init_db;
use crate::errors::AppResult;
use crate::utils::path::ensure_parent_dir;
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (or create) the database file, creating parent directories and
    /// applying pending migrations.
    pub fn open(path: &Path) -> AppResult<Self> {
        ensure_parent_dir(path)?;
        let conn = Connection::open(path)?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    /// Private in-memory database with the full schema.
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        init_db(&conn)?;
        Ok(Self { conn })
    }
}
