//! Audit history display formatting

use crate::audit::AuditEntry;

/// Format a purse's audit history as a table, oldest first
///
/// `date_format` is a strftime pattern from the user's settings.
pub fn format_history(purse_name: &str, entries: &[AuditEntry], date_format: &str) -> String {
    if entries.is_empty() {
        return format!("No audit history for '{}'.\n", purse_name);
    }

    let mut output = String::new();
    output.push_str(&format!("Audit history for '{}':\n", purse_name));
    output.push_str(&format!(
        "{:<17}  {:<12}  {:>12}  {}\n",
        "Timestamp", "Action", "Amount", "Reason"
    ));
    output.push_str(&format!(
        "{:-<17}  {:-<12}  {:->12}  {:-<30}\n",
        "", "", "", ""
    ));

    for entry in entries {
        output.push_str(&format!(
            "{:<17}  {:<12}  {:>12}  {}\n",
            entry.timestamp.format(date_format).to_string(),
            entry.action.to_string(),
            entry.amount.to_string(),
            entry.reason,
        ));
    }

    output
}
