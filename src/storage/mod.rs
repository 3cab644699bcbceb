//! Storage layer for the purse ledger
//!
//! A single SQLite database holds the purses table and the append-only audit
//! table. The connection lives behind a mutex: callers that need atomicity
//! hold the lock for the whole transaction scope, which serializes in-process
//! writers, and the scope itself is opened IMMEDIATE so SQLite's write lock
//! is taken before the first read. Two transfers touching the same purse can
//! therefore never interleave their read and write phases.

pub mod purses;
pub mod schema;

pub use purses::PurseStore;

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::Connection;

use crate::error::{PurseError, PurseResult};

/// Owns the database connection and guards access to it
pub struct Storage {
    conn: Mutex<Connection>,
}

impl Storage {
    /// Open (or create) the ledger database at the given path
    pub fn open(path: &Path) -> PurseResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        Self::configure(conn)
    }

    /// Open a fresh in-memory database (used by tests)
    pub fn open_in_memory() -> PurseResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::configure(conn)
    }

    fn configure(conn: Connection) -> PurseResult<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.busy_timeout(std::time::Duration::from_secs(5))?;
        schema::create_tables(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Lock the database connection, surfacing a poisoned mutex as a storage
    /// error
    pub(crate) fn lock_conn(&self) -> PurseResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| PurseError::Storage("database connection poisoned".to_string()))
    }

    /// Insert the default purses if the table is empty
    ///
    /// Returns true if seeding happened. Seeding is first-run configuration,
    /// not part of the transfer contract, so an already-populated table is
    /// left untouched.
    pub fn seed_default_purses(&self) -> PurseResult<bool> {
        let mut conn = self.lock_conn()?;
        schema::seed_default_purses(&mut conn)
    }
}
