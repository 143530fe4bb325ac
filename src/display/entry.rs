//! Entry display formatting
//!
//! Formats the entries of a month as tables.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::report::truncate;
use crate::models::Entry;
use crate::services::EffectiveEntry;

const NAME_WIDTH: usize = 24;

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format effective entries as a table
///
/// Recurring rows have no editable ID or date; they are marked `(fixed)`.
pub fn format_entry_table(entries: &[EffectiveEntry], symbol: &str, date_format: &str) -> String {
    let rows = entries.iter().map(|entry| {
        let sign = if entry.kind.is_income() { "+" } else { "-" };
        EntryRow {
            id: entry
                .entry_id()
                .map(|id| id.short())
                .unwrap_or_else(|| "(fixed)".to_string()),
            date: entry
                .date
                .map(|d| d.format(date_format).to_string())
                .unwrap_or_else(|| "monthly".to_string()),
            category: entry.kind.category_name().to_string(),
            name: truncate(entry.name.as_deref().unwrap_or_default(), NAME_WIDTH),
            amount: format!("{}{}", sign, entry.amount.abs().format_with_symbol(symbol)),
        }
    });

    Table::new(rows).with(Style::psql()).to_string()
}

/// Format the details of a single stored entry
pub fn format_entry_details(entry: &Entry, symbol: &str, date_format: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("ID:       {}\n", entry.id));
    output.push_str(&format!("Type:     {}\n", entry.kind.entry_type()));
    output.push_str(&format!(
        "Category: {} ({})\n",
        entry.kind.category_name(),
        entry.kind.category_id()
    ));
    if let Some(name) = &entry.name {
        output.push_str(&format!("Name:     {}\n", name));
    }
    output.push_str(&format!(
        "Amount:   {}\n",
        entry.amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!("Date:     {}\n", entry.date.format(date_format)));
    output
}
