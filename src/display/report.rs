//! Report formatting utilities for terminal output

use crate::models::Yen;

/// Signed amount, `+` for zero and positive balances
pub fn format_balance(amount: Yen, symbol: &str) -> String {
    if amount.is_negative() {
        amount.format_with_symbol(symbol)
    } else {
        format!("+{}", amount.format_with_symbol(symbol))
    }
}

/// Two-sided bar comparing income against expense
///
/// Each side gets `width` cells; the larger amount fills its side completely.
pub fn format_income_expense_bar(income: Yen, expense: Yen, width: usize) -> String {
    let max = income.value().max(expense.value());
    format!(
        "{}|{}",
        format_bar(income.value() as f64, max as f64, width),
        format_bar(expense.value() as f64, max as f64, width)
    )
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
