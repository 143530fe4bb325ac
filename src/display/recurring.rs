//! Recurring expense display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{EntryKind, ExpenseCategory, IncomeCategory, RecurringExpense};

#[derive(Tabled)]
struct RecurringRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Monthly")]
    amount: String,
    #[tabled(rename = "Active")]
    active: String,
}

/// Active range as `2024年4月 〜 2025年3月`, or `継続中` when open-ended
pub fn format_active_range(recurring: &RecurringExpense) -> String {
    let start = format!("{}年{}月", recurring.start_year, recurring.start_month);
    let end = match (recurring.end_year, recurring.end_month) {
        (Some(year), Some(month)) => format!("{}年{}月", year, month),
        (Some(year), None) => format!("{}年12月", year),
        _ => "継続中".to_string(),
    };
    format!("{} 〜 {}", start, end)
}

/// Format recurring expenses as a table
pub fn format_recurring_list(expenses: &[RecurringExpense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No recurring expenses registered.".to_string();
    }

    let rows = expenses.iter().map(|r| RecurringRow {
        id: r.id.short(),
        name: r.name.clone(),
        amount: format!("{} / 月", r.amount.format_with_symbol(symbol)),
        active: format_active_range(r),
    });

    Table::new(rows).with(Style::psql()).to_string()
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Type")]
    entry_type: String,
    #[tabled(rename = "ID")]
    id: &'static str,
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Color")]
    color: &'static str,
}

/// Format the fixed income and expense category sets
pub fn format_category_list() -> String {
    let kinds = IncomeCategory::ALL
        .into_iter()
        .map(EntryKind::Income)
        .chain(ExpenseCategory::ALL.into_iter().map(EntryKind::Expense));

    let rows = kinds.map(|kind| CategoryRow {
        entry_type: kind.entry_type().to_string(),
        id: kind.category_id(),
        name: kind.category_name(),
        color: kind.color(),
    });

    Table::new(rows).with(Style::psql()).to_string()
}
