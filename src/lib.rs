//! Purse ledger with atomic transfers
//!
//! This library holds the core of a personal budgeting tool: a set of budget
//! envelopes ("purses") with allocated and spent balances, an atomic transfer
//! engine that moves money between them, and an append-only audit trail of
//! every balance change. Transfers preserve conservation of money, respect
//! purse lock policy (with an explicit break-glass override), and commit or
//! roll back as a unit.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, purses, typed ids)
//! - `storage`: SQLite storage layer and transactional purse access
//! - `audit`: Append-only audit trail
//! - `services`: Transfer engine and the ledger read facade
//! - `display`: Terminal output formatting
//! - `cli`: Command handlers for the `purse` binary
//!
//! # Example
//!
//! ```rust
//! use purse::models::{Money, NewPurse, PurseKind};
//! use purse::services::{LedgerService, TransferEngine, TransferReason, TransferRequest};
//! use purse::storage::Storage;
//!
//! # fn main() -> purse::PurseResult<()> {
//! let storage = Storage::open_in_memory()?;
//! let ledger = LedgerService::new(&storage);
//! let checking = ledger.create_purse(&NewPurse::new(
//!     "Checking",
//!     PurseKind::Flexible,
//!     Money::from_cents(10_000),
//! ))?;
//! let savings = ledger.create_purse(&NewPurse::new(
//!     "Savings",
//!     PurseKind::Flexible,
//!     Money::zero(),
//! ))?;
//!
//! let engine = TransferEngine::new(&storage);
//! engine.transfer(&TransferRequest {
//!     from: checking.id,
//!     to: savings.id,
//!     amount: Money::from_cents(2_500),
//!     reason: TransferReason::Normal("monthly savings".into()),
//! })?;
//! # Ok(())
//! # }
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{PurseError, PurseResult};
