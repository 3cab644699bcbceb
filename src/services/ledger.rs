//! Read model and administration for purses
//!
//! Dashboards, reports, and the CLI consume purse balances through this
//! facade; none of them touch the transfer engine's invariants. Purse
//! creation and lock toggling live here too, mirroring the administrative
//! edits the surrounding application performs outside the transfer path.
//! There is deliberately no delete: audit entries reference purses by foreign
//! key for the lifetime of the store.

use crate::audit::{AuditEntry, AuditLog};
use crate::error::PurseResult;
use crate::models::{NewPurse, Purse, PurseId};
use crate::storage::{PurseStore, Storage};

/// Read-mostly facade over the purse ledger
pub struct LedgerService<'a> {
    storage: &'a Storage,
}

impl<'a> LedgerService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Snapshot of all purses, ordered by id
    pub fn list_purses(&self) -> PurseResult<Vec<Purse>> {
        let conn = self.storage.lock_conn()?;
        PurseStore::list_all(&conn)
    }

    /// Point read by id
    pub fn get(&self, id: PurseId) -> PurseResult<Option<Purse>> {
        let conn = self.storage.lock_conn()?;
        PurseStore::get(&conn, id)
    }

    /// Resolve user input that may be a purse id or a purse name
    pub fn find(&self, name_or_id: &str) -> PurseResult<Option<Purse>> {
        let conn = self.storage.lock_conn()?;

        if let Ok(id) = name_or_id.parse::<PurseId>() {
            if let Some(purse) = PurseStore::get(&conn, id)? {
                return Ok(Some(purse));
            }
        }

        PurseStore::find_by_name(&conn, name_or_id)
    }

    /// Full audit history for a purse, oldest first
    pub fn history_for(&self, id: PurseId) -> PurseResult<Vec<AuditEntry>> {
        let conn = self.storage.lock_conn()?;
        AuditLog::history_for(&conn, id)
    }

    /// Create a purse (administrative operation)
    pub fn create_purse(&self, new: &NewPurse) -> PurseResult<Purse> {
        let mut conn = self.storage.lock_conn()?;
        let scope = conn.transaction()?;
        let purse = PurseStore::insert(&scope, new)?;
        scope.commit()?;
        Ok(purse)
    }

    /// Set or clear the lock flag on a purse (administrative operation)
    pub fn set_locked(&self, id: PurseId, locked: bool) -> PurseResult<Purse> {
        let mut conn = self.storage.lock_conn()?;
        let scope = conn.transaction()?;
        PurseStore::set_locked(&scope, id, locked)?;
        let purse = PurseStore::get_for_update(&scope, id)?;
        scope.commit()?;
        Ok(purse)
    }
}
