//! CLI command handler for purse transfers

use crate::error::{PurseError, PurseResult};
use crate::services::{LedgerService, TransferEngine, TransferReason, TransferRequest};
use crate::storage::Storage;

use super::purse::parse_amount;

/// Handle the transfer command
pub fn handle_transfer_command(
    storage: &Storage,
    from: &str,
    to: &str,
    amount: &str,
    reason: String,
    break_glass: bool,
) -> PurseResult<()> {
    let service = LedgerService::new(storage);

    let from_purse = service
        .find(from)?
        .ok_or_else(|| PurseError::purse_not_found(from))?;
    let to_purse = service
        .find(to)?
        .ok_or_else(|| PurseError::purse_not_found(to))?;

    let amount = parse_amount(amount)?;

    let reason = if break_glass {
        TransferReason::Override(reason)
    } else {
        // The raw string keeps the historical BREAK_GLASS sentinel working
        TransferReason::from_raw(&reason)
    };

    let engine = TransferEngine::new(storage);
    let outcome = engine.transfer(&TransferRequest {
        from: from_purse.id,
        to: to_purse.id,
        amount,
        reason,
    })?;

    println!("Transferred {}:", amount);
    println!(
        "  From: {} (now {})",
        outcome.from_purse.name, outcome.from_purse.allocated
    );
    println!(
        "  To:   {} (now {})",
        outcome.to_purse.name, outcome.to_purse.allocated
    );
    println!("  Recorded as {}", outcome.out_entry.action);

    Ok(())
}
