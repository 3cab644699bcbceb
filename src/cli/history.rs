//! CLI command handler for audit history

use crate::config::Settings;
use crate::display::audit::format_history;
use crate::error::{PurseError, PurseResult};
use crate::services::LedgerService;
use crate::storage::Storage;

/// Handle the history command
///
/// History is stored and returned oldest-first; `limit` trims to the most
/// recent entries (0 shows everything).
pub fn handle_history_command(
    storage: &Storage,
    settings: &Settings,
    purse: &str,
    limit: usize,
) -> PurseResult<()> {
    let service = LedgerService::new(storage);
    let found = service
        .find(purse)?
        .ok_or_else(|| PurseError::purse_not_found(purse))?;

    let entries = service.history_for(found.id)?;
    let shown = if limit > 0 && entries.len() > limit {
        &entries[entries.len() - limit..]
    } else {
        &entries[..]
    };

    print!(
        "{}",
        format_history(&found.name, shown, &settings.date_format)
    );
    if shown.len() < entries.len() {
        println!(
            "(showing {} of {} entries; use --limit 0 for all)",
            shown.len(),
            entries.len()
        );
    }
    Ok(())
}
