//! Atomic fund movement between purses
//!
//! The transfer engine is the only code path allowed to move money between
//! purses. Each transfer validates, mutates both purse rows, and appends two
//! audit entries, all inside one IMMEDIATE transaction scope on the shared
//! connection: either every effect commits or none does. An error anywhere
//! between the first read and the commit drops the scope, which rolls the
//! whole attempt back, so readers can never observe one purse updated without
//! the other or a balance change without its audit entries.

use rusqlite::TransactionBehavior;

use crate::audit::{AuditAction, AuditEntry, AuditLog};
use crate::error::{PurseError, PurseResult};
use crate::models::{Money, Purse, PurseId};
use crate::storage::{PurseStore, Storage};

/// Reason string that unlocks transfers out of a locked purse
pub const BREAK_GLASS_TOKEN: &str = "BREAK_GLASS";

/// The caller's stated reason for a transfer
///
/// Break-glass authorization is a variant rather than a magic string so the
/// engine never has to compare reason text. [`TransferReason::from_raw`]
/// keeps the historical sentinel working at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferReason {
    /// Ordinary transfer; refused when the source purse is locked
    Normal(String),
    /// Explicit break-glass override, permitted out of a locked purse
    Override(String),
}

impl TransferReason {
    /// Interpret a raw reason string, honoring the break-glass sentinel
    pub fn from_raw(reason: &str) -> Self {
        if reason == BREAK_GLASS_TOKEN {
            Self::Override(reason.to_string())
        } else {
            Self::Normal(reason.to_string())
        }
    }

    /// The reason text as given by the caller
    pub fn text(&self) -> &str {
        match self {
            Self::Normal(text) | Self::Override(text) => text,
        }
    }

    /// Whether this reason authorizes transfers out of a locked purse
    pub fn is_override(&self) -> bool {
        matches!(self, Self::Override(_))
    }
}

/// A request to move funds between two purses; not persisted
#[derive(Debug, Clone)]
pub struct TransferRequest {
    pub from: PurseId,
    pub to: PurseId,
    pub amount: Money,
    pub reason: TransferReason,
}

/// The committed result of a transfer, for display and further processing
#[derive(Debug, Clone)]
pub struct TransferOutcome {
    /// Source purse after the transfer
    pub from_purse: Purse,
    /// Destination purse after the transfer
    pub to_purse: Purse,
    /// Audit entry recorded on the source
    pub out_entry: AuditEntry,
    /// Audit entry recorded on the destination
    pub in_entry: AuditEntry,
}

/// The sole mover of money between purses
pub struct TransferEngine<'a> {
    storage: &'a Storage,
}

impl<'a> TransferEngine<'a> {
    /// Create an engine over the given storage
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Move `request.amount` from one purse's allocation to another's
    ///
    /// Validation order: positive amount and distinct purses (checked before
    /// any transaction opens), existence of both purses, sufficient funds,
    /// then lock policy. A locked source is refused unless the reason is an
    /// override, in which case the source audit entry is recorded as
    /// `BREAK_GLASS`. Draining the source exactly to zero is valid. Spent
    /// amounts are never touched.
    ///
    /// The engine never retries: a busy or failing database surfaces as
    /// [`PurseError::Storage`] and the retry decision stays with the caller,
    /// who should reconcile via the audit history when the outcome is
    /// unknown.
    pub fn transfer(&self, request: &TransferRequest) -> PurseResult<TransferOutcome> {
        if !request.amount.is_positive() {
            return Err(PurseError::InvalidAmount(request.amount));
        }
        if request.from == request.to {
            return Err(PurseError::SameSourceAndDestination);
        }

        let mut conn = self.storage.lock_conn()?;
        // IMMEDIATE takes the write lock before the first read, so the two
        // rows cannot change under us between read and write.
        let scope = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let mut from = PurseStore::get_for_update(&scope, request.from)?;
        let mut to = PurseStore::get_for_update(&scope, request.to)?;

        if from.allocated < request.amount {
            return Err(PurseError::InsufficientFunds {
                purse: from.name,
                requested: request.amount,
                available: from.allocated,
            });
        }

        let out_action = if from.locked {
            if !request.reason.is_override() {
                return Err(PurseError::SourceLocked { purse: from.name });
            }
            AuditAction::BreakGlass
        } else {
            AuditAction::TransferOut
        };

        from.allocated = from
            .allocated
            .checked_sub(request.amount)
            .ok_or_else(|| PurseError::Validation("allocation arithmetic overflow".into()))?;
        to.allocated = to
            .allocated
            .checked_add(request.amount)
            .ok_or_else(|| PurseError::Validation("allocation arithmetic overflow".into()))?;

        PurseStore::write(&scope, &from)?;
        PurseStore::write(&scope, &to)?;

        let out_reason = format!("To: {} | {}", to.name, request.reason.text());
        let in_reason = format!("From: {} | {}", from.name, request.reason.text());
        let out_entry =
            AuditLog::append(&scope, from.id, out_action, request.amount, &out_reason)?;
        let in_entry = AuditLog::append(
            &scope,
            to.id,
            AuditAction::TransferIn,
            request.amount,
            &in_reason,
        )?;

        scope.commit()?;

        Ok(TransferOutcome {
            from_purse: from,
            to_purse: to,
            out_entry,
            in_entry,
        })
    }
}
