//! Fiscal Year Report
//!
//! Monthly income, expense and balance for the 12 months of a fiscal year,
//! April first, with annual totals.

use crate::display::report::{
    double_separator, format_balance, format_income_expense_bar, separator,
};
use crate::error::KakeiboResult;
use crate::models::{Yen, MONTH_LABELS};
use crate::services::{MonthSummary, SummaryService};
use crate::storage::Storage;

const BAR_WIDTH: usize = 10;
const REPORT_WIDTH: usize = 72;

/// Fiscal Year Report
#[derive(Debug, Clone)]
pub struct YearReport {
    pub fiscal_year: i32,
    /// The 12 months in fiscal order
    pub months: Vec<MonthSummary>,
    pub total_income: Yen,
    pub total_expense: Yen,
    pub balance: Yen,
}

impl YearReport {
    /// Generate the report for a fiscal year
    pub fn generate(storage: &Storage, fiscal_year: i32) -> KakeiboResult<Self> {
        let summary = SummaryService::new(storage).year(fiscal_year)?;

        Ok(Self {
            fiscal_year: summary.fiscal_year,
            months: summary.months,
            total_income: summary.total_income,
            total_expense: summary.total_expense,
            balance: summary.balance,
        })
    }

    /// Months whose expenses exceed their income
    pub fn deficit_months(&self) -> Vec<&MonthSummary> {
        self.months.iter().filter(|m| m.balance.is_negative()).collect()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        // Header
        output.push_str(&format!(
            "{}年度 ({}年4月 〜 {}年3月)\n",
            self.fiscal_year,
            self.fiscal_year,
            self.fiscal_year + 1
        ));
        output.push_str(&double_separator(REPORT_WIDTH));
        output.push('\n');

        output.push_str(&format!(
            "{:<6} {:>12} {:>12} {:>13}  {}\n",
            "Month", "Income", "Expense", "Balance", "Income|Expense"
        ));
        output.push_str(&separator(REPORT_WIDTH));
        output.push('\n');

        for (label, month) in MONTH_LABELS.iter().zip(&self.months) {
            let bar = format_income_expense_bar(month.income, month.expense, BAR_WIDTH);
            let marker = if month.balance.is_negative() { " *" } else { "" };

            output.push_str(&format!(
                "{:<6} {:>12} {:>12} {:>13}  {}{}\n",
                label,
                month.income.format_with_symbol(symbol),
                month.expense.format_with_symbol(symbol),
                format_balance(month.balance, symbol),
                bar,
                marker
            ));
        }

        // Totals
        output.push_str(&separator(REPORT_WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "{:<6} {:>12} {:>12} {:>13}\n",
            "Total",
            self.total_income.format_with_symbol(symbol),
            self.total_expense.format_with_symbol(symbol),
            format_balance(self.balance, symbol)
        ));

        if !self.deficit_months().is_empty() {
            output.push_str("\n* = Expenses exceed income\n");
        }

        output
    }
}
