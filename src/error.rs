//! Custom error types for the purse ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Every transfer failure maps to exactly one
//! variant so callers can match on outcomes instead of parsing messages.

use thiserror::Error;

use crate::models::Money;

/// The main error type for purse ledger operations
#[derive(Error, Debug)]
pub enum PurseError {
    /// Transfer amount was zero or negative
    #[error("Transfer amount must be positive, got {0}")]
    InvalidAmount(Money),

    /// Source and destination purse are the same
    #[error("Cannot transfer from a purse to itself")]
    SameSourceAndDestination,

    /// Purse lookup failed
    #[error("Purse not found: {0}")]
    PurseNotFound(String),

    /// Source purse does not hold enough allocated funds
    #[error("Insufficient funds in purse '{purse}': requested {requested}, available {available}")]
    InsufficientFunds {
        purse: String,
        requested: Money,
        available: Money,
    },

    /// Source purse is locked and the request carried no override
    #[error("Purse '{purse}' is locked; pass the break-glass override to transfer out of it")]
    SourceLocked { purse: String },

    /// Storage backend errors (I/O, SQL, transaction failures)
    ///
    /// This is the only variant that can mean the outcome is unknown (e.g. a
    /// failure surfaced while committing). Callers should reconcile via the
    /// audit history rather than retry blindly.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Validation errors for user-supplied data
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PurseError {
    /// Create a "not found" error from a purse name or id
    pub fn purse_not_found(identifier: impl Into<String>) -> Self {
        Self::PurseNotFound(identifier.into())
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PurseNotFound(_))
    }

    /// Check if this is a storage error (outcome possibly unknown)
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

impl From<rusqlite::Error> for PurseError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<std::io::Error> for PurseError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for PurseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for purse ledger operations
pub type PurseResult<T> = Result<T, PurseError>;
