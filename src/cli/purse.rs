//! Purse CLI commands
//!
//! Read-model views plus the administrative operations (create, lock toggle)
//! that live outside the transfer path.

use crate::display::purse::{format_purse_details, format_purse_list};
use crate::error::{PurseError, PurseResult};
use crate::models::{Money, NewPurse, PurseKind};
use crate::services::LedgerService;
use crate::storage::Storage;

/// Handle the list command
pub fn handle_list_command(storage: &Storage) -> PurseResult<()> {
    let service = LedgerService::new(storage);
    let purses = service.list_purses()?;
    print!("{}", format_purse_list(&purses));
    Ok(())
}

/// Handle the show command
pub fn handle_show_command(storage: &Storage, purse: &str) -> PurseResult<()> {
    let service = LedgerService::new(storage);
    let found = service
        .find(purse)?
        .ok_or_else(|| PurseError::purse_not_found(purse))?;

    print!("{}", format_purse_details(&found));
    println!();
    println!("Run 'purse history {}' to see balance changes.", found.name);
    Ok(())
}

/// Handle the add command
pub fn handle_add_command(
    storage: &Storage,
    name: &str,
    kind: &str,
    allocated: &str,
    buffer: &str,
    locked: bool,
) -> PurseResult<()> {
    let kind = PurseKind::parse(kind).ok_or_else(|| {
        PurseError::Validation(format!(
            "Invalid purse kind: '{}'. Valid kinds: flexible, locked, emergency",
            kind
        ))
    })?;

    let allocated = parse_amount(allocated)?;
    if allocated.is_negative() {
        return Err(PurseError::Validation(
            "Initial allocation cannot be negative".into(),
        ));
    }
    let buffer = parse_amount(buffer)?;

    let mut new = NewPurse::new(name, kind, allocated).with_buffer(buffer);
    new.locked = locked;

    let service = LedgerService::new(storage);
    let purse = service.create_purse(&new)?;

    println!("Created purse: {}", purse.name);
    println!("  Kind:      {}", purse.kind);
    println!("  Allocated: {}", purse.allocated);
    println!("  Locked:    {}", if purse.locked { "Yes" } else { "No" });
    println!("  ID:        {}", purse.id);
    Ok(())
}

/// Handle the lock/unlock commands
pub fn handle_lock_command(storage: &Storage, purse: &str, locked: bool) -> PurseResult<()> {
    let service = LedgerService::new(storage);
    let found = service
        .find(purse)?
        .ok_or_else(|| PurseError::purse_not_found(purse))?;

    let updated = service.set_locked(found.id, locked)?;
    if locked {
        println!("Locked purse: {}", updated.name);
        println!("Outgoing transfers now require the break-glass override.");
    } else {
        println!("Unlocked purse: {}", updated.name);
    }
    Ok(())
}

pub(crate) fn parse_amount(raw: &str) -> PurseResult<Money> {
    Money::parse(raw).map_err(|e| {
        PurseError::Validation(format!(
            "Invalid amount: '{}'. Use a format like '100.00' or '100'. {}",
            raw, e
        ))
    })
}
