//! Business logic layer
//!
//! The transfer engine owns every mutation of purse balances; the ledger
//! service is the read model consumed by everything else.

pub mod ledger;
pub mod transfer;

pub use ledger::LedgerService;
pub use transfer::{
    TransferEngine, TransferOutcome, TransferReason, TransferRequest, BREAK_GLASS_TOKEN,
};
