//! Ledger aggregation
//!
//! Pure functions that combine stored entries with recurring expenses for a
//! fiscal month or fiscal year. Nothing here touches storage; callers pass a
//! snapshot of the ledger.

use chrono::{Datelike, NaiveDate};

use crate::models::fiscal::{calendar_year_for, fiscal_year_of, month_from_index};
use crate::models::{
    Entry, EntryId, EntryKind, ExpenseCategory, FiscalMonth, RecurringExpense, RecurringId, Yen,
};

/// Where an effective entry comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntrySource {
    /// A stored entry; editable and deletable
    Stored(EntryId),
    /// Materialised from a recurring expense; read-only
    Recurring(RecurringId),
}

/// An entry as it applies to one month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveEntry {
    pub source: EntrySource,
    pub kind: EntryKind,
    pub name: Option<String>,
    pub amount: Yen,
    /// Recurring expenses have no date of their own
    pub date: Option<NaiveDate>,
}

impl EffectiveEntry {
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            source: EntrySource::Stored(entry.id),
            kind: entry.kind,
            name: entry.name.clone(),
            amount: entry.amount,
            date: Some(entry.date),
        }
    }

    /// Synthetic fixed-cost expense for one active month of `recurring`
    pub fn from_recurring(recurring: &RecurringExpense) -> Self {
        Self {
            source: EntrySource::Recurring(recurring.id),
            kind: EntryKind::Expense(ExpenseCategory::Fixed),
            name: Some(recurring.name.clone()),
            amount: recurring.amount,
            date: None,
        }
    }

    pub fn is_recurring(&self) -> bool {
        matches!(self.source, EntrySource::Recurring(_))
    }

    /// ID usable with the entry mutation API; `None` for recurring rows
    pub fn entry_id(&self) -> Option<EntryId> {
        match self.source {
            EntrySource::Stored(id) => Some(id),
            EntrySource::Recurring(_) => None,
        }
    }

    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .unwrap_or_else(|| self.kind.category_name())
    }
}

/// Income, expense and balance over a set of entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthTotals {
    pub income: Yen,
    pub expense: Yen,
    pub balance: Yen,
}

impl MonthTotals {
    pub fn from_entries(entries: &[EffectiveEntry]) -> Self {
        let income: Yen = entries
            .iter()
            .filter(|e| e.kind.is_income())
            .map(|e| e.amount)
            .sum();
        let expense: Yen = entries
            .iter()
            .filter(|e| e.kind.is_expense())
            .map(|e| e.amount)
            .sum();

        Self {
            income,
            expense,
            balance: income - expense,
        }
    }
}

/// One month of a year summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthSummary {
    pub calendar_year: i32,
    pub calendar_month: u32,
    pub income: Yen,
    pub expense: Yen,
    pub balance: Yen,
}

/// Totals for a fiscal year, with the 12 months in April-to-March order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearSummary {
    pub fiscal_year: i32,
    pub total_income: Yen,
    pub total_expense: Yen,
    pub balance: Yen,
    pub months: Vec<MonthSummary>,
}

/// Entries of one month split into income and expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthDetail {
    pub month: FiscalMonth,
    pub incomes: Vec<EffectiveEntry>,
    pub expenses: Vec<EffectiveEntry>,
    pub totals: MonthTotals,
}

/// The effective entry set for `month` (calendar month) of `fiscal_year`
///
/// Stored entries dated in that fiscal year and calendar month come first,
/// in stored order, followed by every recurring expense active for the
/// month. Nothing is deduplicated or re-sorted.
pub fn entries_for_month(
    entries: &[Entry],
    recurring: &[RecurringExpense],
    fiscal_year: i32,
    month: u32,
) -> Vec<EffectiveEntry> {
    let stored = entries
        .iter()
        .filter(|e| fiscal_year_of(e.date) == fiscal_year && e.date.month() == month)
        .map(EffectiveEntry::from_entry);

    let synthetic = recurring
        .iter()
        .filter(|r| r.is_active_in(fiscal_year, month))
        .map(EffectiveEntry::from_recurring);

    stored.chain(synthetic).collect()
}

/// Income, expense and balance for every month of `fiscal_year`
///
/// Always yields exactly 12 months, whatever the input.
pub fn year_summary(
    entries: &[Entry],
    recurring: &[RecurringExpense],
    fiscal_year: i32,
) -> YearSummary {
    let months: Vec<MonthSummary> = (0..12)
        .filter_map(|index| {
            let month = month_from_index(index)?;
            let totals =
                MonthTotals::from_entries(&entries_for_month(entries, recurring, fiscal_year, month));

            Some(MonthSummary {
                calendar_year: calendar_year_for(fiscal_year, index),
                calendar_month: month,
                income: totals.income,
                expense: totals.expense,
                balance: totals.balance,
            })
        })
        .collect();

    let total_income: Yen = months.iter().map(|m| m.income).sum();
    let total_expense: Yen = months.iter().map(|m| m.expense).sum();

    YearSummary {
        fiscal_year,
        total_income,
        total_expense,
        balance: total_income - total_expense,
        months,
    }
}

/// The monthly view: incomes and expenses listed separately with totals
pub fn month_detail(
    entries: &[Entry],
    recurring: &[RecurringExpense],
    month: FiscalMonth,
) -> MonthDetail {
    let effective = entries_for_month(entries, recurring, month.fiscal_year(), month.month());
    let totals = MonthTotals::from_entries(&effective);
    let (incomes, expenses) = effective.into_iter().partition(|e| e.kind.is_income());

    MonthDetail {
        month,
        incomes,
        expenses,
        totals,
    }
}
