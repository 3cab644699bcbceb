//! Audit entry data structures
//!
//! Defines the action kinds and the immutable entry format for the
//! balance-affecting audit trail.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{AuditEntryId, Money, PurseId};

/// Kind of balance-affecting action recorded in the audit trail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    /// Funds arrived from another purse
    TransferIn,
    /// Funds left for another purse
    TransferOut,
    /// Funds left a locked purse under the break-glass override
    BreakGlass,
}

impl AuditAction {
    /// The stored representation (matches the `action_type` column)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TransferIn => "TRANSFER_IN",
            Self::TransferOut => "TRANSFER_OUT",
            Self::BreakGlass => "BREAK_GLASS",
        }
    }

    /// Parse a stored action kind
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "TRANSFER_IN" => Some(Self::TransferIn),
            "TRANSFER_OUT" => Some(Self::TransferOut),
            "BREAK_GLASS" => Some(Self::BreakGlass),
            _ => None,
        }
    }
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single immutable audit record
///
/// Entries are created exclusively by the transfer engine and are never
/// updated or deleted; together they are the historical truth for a purse's
/// balance changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Store-assigned, monotonically increasing identifier
    pub id: AuditEntryId,

    /// Purse affected by the action
    pub purse_id: PurseId,

    /// What happened
    pub action: AuditAction,

    /// Amount moved, always positive
    pub amount: Money,

    /// Free text naming the counterparty purse and the caller's reason
    pub reason: String,

    /// Creation time, set by the store at append time (UTC)
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_roundtrip() {
        for action in [
            AuditAction::TransferIn,
            AuditAction::TransferOut,
            AuditAction::BreakGlass,
        ] {
            assert_eq!(AuditAction::parse(action.as_str()), Some(action));
        }
        assert_eq!(AuditAction::parse("REFUND"), None);
    }

    #[test]
    fn test_action_display() {
        assert_eq!(AuditAction::BreakGlass.to_string(), "BREAK_GLASS");
    }

    #[test]
    fn test_entry_serialization() {
        let entry = AuditEntry {
            id: AuditEntryId::new(1),
            purse_id: PurseId::new(3),
            action: AuditAction::TransferOut,
            amount: Money::from_cents(500),
            reason: "To: Savings | rent".into(),
            timestamp: Utc::now(),
        };

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("TRANSFER_OUT"));

        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.action, AuditAction::TransferOut);
        assert_eq!(deserialized.amount, entry.amount);
    }
}
