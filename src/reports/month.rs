//! Monthly Report
//!
//! Incomes and expenses of one fiscal month listed separately, with a
//! breakdown by category and the month's totals.

use crate::display::entry::format_entry_table;
use crate::display::report::{double_separator, format_balance, separator};
use crate::error::KakeiboResult;
use crate::models::{EntryKind, FiscalMonth, Yen};
use crate::services::{EffectiveEntry, MonthTotals, SummaryService};
use crate::storage::Storage;

const REPORT_WIDTH: usize = 60;

/// Total of one category within the month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub kind: EntryKind,
    pub total: Yen,
    pub count: usize,
}

/// Monthly Report
#[derive(Debug, Clone)]
pub struct MonthReport {
    pub month: FiscalMonth,
    pub incomes: Vec<EffectiveEntry>,
    pub expenses: Vec<EffectiveEntry>,
    /// Category totals, in first-seen order
    pub by_category: Vec<CategoryTotal>,
    pub totals: MonthTotals,
}

impl MonthReport {
    /// Generate the report for a fiscal month
    pub fn generate(storage: &Storage, month: FiscalMonth) -> KakeiboResult<Self> {
        let detail = SummaryService::new(storage).month(month)?;

        let mut by_category: Vec<CategoryTotal> = Vec::new();
        for entry in detail.incomes.iter().chain(&detail.expenses) {
            match by_category.iter_mut().find(|c| c.kind == entry.kind) {
                Some(row) => {
                    row.total += entry.amount;
                    row.count += 1;
                }
                None => by_category.push(CategoryTotal {
                    kind: entry.kind,
                    total: entry.amount,
                    count: 1,
                }),
            }
        }

        Ok(Self {
            month: detail.month,
            incomes: detail.incomes,
            expenses: detail.expenses,
            by_category,
            totals: detail.totals,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.incomes.is_empty() && self.expenses.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str, date_format: &str) -> String {
        let mut output = String::new();

        // Header
        output.push_str(&format!("{}\n", self.month));
        output.push_str(&double_separator(REPORT_WIDTH));
        output.push('\n');

        if self.is_empty() {
            output.push_str("No entries for this month.\n");
        } else {
            for (title, rows) in [("収入", &self.incomes), ("支出", &self.expenses)] {
                output.push_str(&format!("\n{} ({})\n", title, rows.len()));
                if !rows.is_empty() {
                    output.push_str(&format_entry_table(rows, symbol, date_format));
                    output.push('\n');
                }
            }

            output.push_str("\nBy category\n");
            output.push_str(&separator(REPORT_WIDTH));
            output.push('\n');
            for row in &self.by_category {
                output.push_str(&format!(
                    "  {:<8} {:<12} {:>14} ({})\n",
                    row.kind.entry_type(),
                    row.kind.category_name(),
                    row.total.format_with_symbol(symbol),
                    row.count
                ));
            }
        }

        // Totals
        output.push_str(&separator(REPORT_WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "Income:  {:>14}\n",
            self.totals.income.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Expense: {:>14}\n",
            self.totals.expense.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Balance: {:>14}\n",
            format_balance(self.totals.balance, symbol)
        ));

        output
    }
}
