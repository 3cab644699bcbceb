//! Append-only audit log
//!
//! The audit table records every balance-affecting action. Appends are
//! timestamped by the store, never by the caller, and must run inside the
//! same transaction scope as the purse mutation they describe so that a
//! rollback removes both together. Entries are never updated or deleted.
//!
//! This layer performs no business validation; that is the transfer engine's
//! job.

use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, Row, Transaction};

use crate::error::PurseResult;
use crate::models::{AuditEntryId, Money, PurseId};

use super::entry::{AuditAction, AuditEntry};

/// Append-only store for audit entries
pub struct AuditLog;

impl AuditLog {
    /// Append one entry inside an active transaction scope
    ///
    /// The timestamp is assigned here, at append time. Returns the stored
    /// entry including its assigned id.
    pub fn append(
        scope: &Transaction<'_>,
        purse_id: PurseId,
        action: AuditAction,
        amount: Money,
        reason: &str,
    ) -> PurseResult<AuditEntry> {
        let timestamp = Utc::now();
        scope.execute(
            "INSERT INTO purse_audit (purse_id, action_type, amount, reason, timestamp)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                purse_id.raw(),
                action.as_str(),
                amount.cents(),
                reason,
                timestamp.to_rfc3339(),
            ],
        )?;

        Ok(AuditEntry {
            id: AuditEntryId::new(scope.last_insert_rowid()),
            purse_id,
            action,
            amount,
            reason: reason.to_string(),
            timestamp,
        })
    }

    /// All entries for a purse, oldest first
    ///
    /// Ordered by timestamp with the store-assigned id as tiebreak, so two
    /// appends within the same instant keep their insertion order. The
    /// returned list is finite and can be re-iterated freely.
    pub fn history_for(conn: &Connection, purse_id: PurseId) -> PurseResult<Vec<AuditEntry>> {
        let mut stmt = conn.prepare(
            "SELECT id, purse_id, action_type, amount, reason, timestamp
             FROM purse_audit
             WHERE purse_id = ?1
             ORDER BY timestamp ASC, id ASC",
        )?;

        let entries = stmt
            .query_map([purse_id.raw()], row_to_entry)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries)
    }
}

fn row_to_entry(row: &Row<'_>) -> rusqlite::Result<AuditEntry> {
    let action_str: String = row.get(2)?;
    let action = AuditAction::parse(&action_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            2,
            Type::Text,
            format!("unknown audit action: {}", action_str).into(),
        )
    })?;

    let timestamp_str: String = row.get(5)?;
    let timestamp = DateTime::parse_from_rfc3339(&timestamp_str)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e)))?
        .with_timezone(&Utc);

    Ok(AuditEntry {
        id: AuditEntryId::new(row.get(0)?),
        purse_id: PurseId::new(row.get(1)?),
        action,
        amount: Money::from_cents(row.get(3)?),
        reason: row.get(4)?,
        timestamp,
    })
}
