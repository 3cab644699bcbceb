//! Database schema and first-run seed data
//!
//! Table creation is idempotent so it runs on every open. Amount columns hold
//! integer cents; the audit table references purses by foreign key, which
//! (with `PRAGMA foreign_keys = ON`) prevents deleting a purse that audit
//! entries still reference.

use rusqlite::Connection;

use crate::error::PurseResult;
use crate::models::{Money, NewPurse, PurseKind};

use super::purses::PurseStore;

pub fn create_tables(conn: &Connection) -> PurseResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS purses (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            name             TEXT NOT NULL UNIQUE,
            type             TEXT NOT NULL,
            allocated_amount INTEGER NOT NULL,
            spent_amount     INTEGER NOT NULL DEFAULT 0,
            is_locked        INTEGER NOT NULL DEFAULT 0,
            buffer_allowance INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS purse_audit (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            purse_id    INTEGER NOT NULL,
            action_type TEXT NOT NULL,
            amount      INTEGER NOT NULL,
            reason      TEXT NOT NULL,
            timestamp   TEXT NOT NULL,

            FOREIGN KEY (purse_id) REFERENCES purses(id)
        );

        CREATE INDEX IF NOT EXISTS idx_purse_audit_purse
        ON purse_audit(purse_id, timestamp);
        "#,
    )?;

    Ok(())
}

/// Insert the default purse set if the table is empty; returns true if seeded
pub fn seed_default_purses(conn: &mut Connection) -> PurseResult<bool> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM purses", [], |row| row.get(0))?;
    if count > 0 {
        return Ok(false);
    }

    let seeds = [
        NewPurse::new("Groceries", PurseKind::Flexible, Money::from_cents(45000))
            .with_buffer(Money::from_cents(5000)),
        NewPurse::new("Rent", PurseKind::Locked, Money::from_cents(120000)).locked(),
        NewPurse::new("Emergency Fund", PurseKind::Emergency, Money::from_cents(50000)).locked(),
        NewPurse::new("Fun Money", PurseKind::Flexible, Money::from_cents(15000)),
    ];

    let scope = conn.transaction()?;
    for seed in &seeds {
        PurseStore::insert(&scope, seed)?;
    }
    scope.commit()?;

    Ok(true)
}
