//! Audit trail for balance-affecting actions
//!
//! Every transfer writes two entries here, inside the same transaction scope
//! as the balance changes themselves.

pub mod entry;
pub mod log;

pub use entry::{AuditAction, AuditEntry};
pub use log::AuditLog;
