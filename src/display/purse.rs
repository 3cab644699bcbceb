//! Purse display formatting
//!
//! Formats purses for terminal output in table and detail views.

use crate::models::{Money, Purse};

/// Format a list of purses as a table
pub fn format_purse_list(purses: &[Purse]) -> String {
    if purses.is_empty() {
        return "No purses found. Run 'purse init' to create the default set.".to_string();
    }

    let name_width = purses
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<9}  {:>12}  {:>12}  {:>12}  {}\n",
        "Name",
        "Kind",
        "Allocated",
        "Spent",
        "Available",
        "Status",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:-<9}  {:->12}  {:->12}  {:->12}  {:-<6}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for purse in purses {
        let status = if purse.locked { "Locked" } else { "" };
        output.push_str(&format!(
            "{:<name_width$}  {:<9}  {:>12}  {:>12}  {:>12}  {}\n",
            purse.name,
            purse.kind.to_string(),
            purse.allocated.to_string(),
            purse.spent.to_string(),
            purse.available().to_string(),
            status,
            name_width = name_width,
        ));
    }

    let total_allocated: Money = purses.iter().map(|p| p.allocated).sum();
    let total_available: Money = purses.iter().map(|p| p.available()).sum();

    output.push_str(&format!(
        "{:-<name_width$}  {:-<9}  {:->12}  {:->12}  {:->12}  {:-<6}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:<name_width$}  {:<9}  {:>12}  {:>12}  {:>12}\n",
        "TOTAL",
        "",
        total_allocated.to_string(),
        "",
        total_available.to_string(),
        name_width = name_width,
    ));

    output
}

/// Format a single purse's details
pub fn format_purse_details(purse: &Purse) -> String {
    let mut output = String::new();

    output.push_str(&format!("Purse: {}\n", purse.name));
    output.push_str(&format!("  ID:        {}\n", purse.id));
    output.push_str(&format!("  Kind:      {}\n", purse.kind));
    output.push_str(&format!(
        "  Locked:    {}\n",
        if purse.locked { "Yes" } else { "No" }
    ));
    output.push('\n');
    output.push_str(&format!("  Allocated: {}\n", purse.allocated));
    output.push_str(&format!("  Spent:     {}\n", purse.spent));
    output.push_str(&format!("  Available: {}\n", purse.available()));
    output.push_str(&format!("  Used:      {:.0}%\n", purse.progress() * 100.0));
    if !purse.buffer_allowance.is_zero() {
        output.push_str(&format!("  Buffer:    {}\n", purse.buffer_allowance));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PurseId, PurseKind};

    fn sample(name: &str, allocated: i64, locked: bool) -> Purse {
        Purse {
            id: PurseId::new(1),
            name: name.into(),
            kind: PurseKind::Flexible,
            allocated: Money::from_cents(allocated),
            spent: Money::zero(),
            locked,
            buffer_allowance: Money::zero(),
        }
    }

    #[test]
    fn test_format_purse_list() {
        let purses = vec![sample("Groceries", 45000, false), sample("Rent", 120000, true)];

        let output = format_purse_list(&purses);
        assert!(output.contains("Groceries"));
        assert!(output.contains("Rent"));
        assert!(output.contains("Locked"));
        assert!(output.contains("TOTAL"));
        assert!(output.contains("$1,650.00") || output.contains("$1650.00"));
    }

    #[test]
    fn test_format_empty_list() {
        let output = format_purse_list(&[]);
        assert!(output.contains("No purses found"));
    }

    #[test]
    fn test_format_purse_details() {
        let mut purse = sample("Emergency Fund", 50000, true);
        purse.buffer_allowance = Money::from_cents(2500);

        let output = format_purse_details(&purse);
        assert!(output.contains("Emergency Fund"));
        assert!(output.contains("Locked:    Yes"));
        assert!(output.contains("Allocated: $500.00"));
        assert!(output.contains("Used:      0%"));
        assert!(output.contains("Buffer:    $25.00"));
    }
}
