//! SQLite access over an r2d2 connection pool.
//!
//! The pool is created once at startup and handed to the HTTP layer
//! through `AppState`. Each operation checks out a connection for its
//! own duration; the pooled handle returns to the pool when dropped,
//! including on error paths.

use std::path::Path;
use std::time::Duration;

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use thiserror::Error;

/// Pooled SQLite connection, scoped to a single operation
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

/// Storage-layer failure: the pool had no usable connection, or SQLite
/// rejected the statement.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub struct Database {
    pool: Pool<SqliteConnectionManager>,
}

impl Database {
    /// Open (or create) the database file and ensure the schema exists.
    pub fn new(database_url: &str) -> Result<Self, StorageError> {
        if let Some(parent) = Path::new(database_url).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).ok();
            }
        }

        let manager = SqliteConnectionManager::file(database_url).with_init(|conn| {
            // WAL + busy timeout: concurrent writers wait on the write
            // lock instead of failing with SQLITE_BUSY.
            conn.pragma_update(None, "journal_mode", "WAL")?;
            conn.busy_timeout(Duration::from_secs(5))
        });
        let pool = Pool::new(manager)?;

        let db = Self { pool };
        db.init_schema()?;
        Ok(db)
    }

    /// Check a connection out of the pool.
    pub(crate) fn conn(&self) -> Result<DbConn, StorageError> {
        Ok(self.pool.get()?)
    }

    /// Create the notes table and its indexes if they don't exist yet.
    ///
    /// AUTOINCREMENT keeps ids strictly increasing: SQLite will never
    /// hand out a rowid below the highest ever assigned.
    fn init_schema(&self) -> Result<(), StorageError> {
        let conn = self.conn()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS notes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                subject TEXT NOT NULL,
                description TEXT NOT NULL
            )",
            [],
        )?;
        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_notes_subject ON notes(subject)",
            [],
        )?;
        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_notes_description ON notes(description)",
            [],
        )?;

        Ok(())
    }
}
