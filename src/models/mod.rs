//! Core data models for the purse ledger

pub mod ids;
pub mod money;
pub mod purse;

pub use ids::{AuditEntryId, PurseId};
pub use money::{Money, MoneyParseError};
pub use purse::{NewPurse, Purse, PurseKind};
