//! Summary service
//!
//! Runs the aggregation functions against the ledger's current snapshot.

use crate::error::KakeiboResult;
use crate::models::FiscalMonth;
use crate::storage::Storage;

use super::aggregate::{entries_for_month, month_detail, year_summary};
use super::aggregate::{EffectiveEntry, MonthDetail, YearSummary};

/// Service for fiscal aggregation over stored data
pub struct SummaryService<'a> {
    storage: &'a Storage,
}

impl<'a> SummaryService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Effective entries of one month, stored entries first
    pub fn month_entries(&self, month: FiscalMonth) -> KakeiboResult<Vec<EffectiveEntry>> {
        let data = self.storage.ledger.snapshot()?;
        Ok(entries_for_month(
            &data.entries,
            &data.recurring_expenses,
            month.fiscal_year(),
            month.month(),
        ))
    }

    /// Incomes and expenses of one month with totals
    pub fn month(&self, month: FiscalMonth) -> KakeiboResult<MonthDetail> {
        let data = self.storage.ledger.snapshot()?;
        Ok(month_detail(&data.entries, &data.recurring_expenses, month))
    }

    /// Monthly and annual totals of a fiscal year
    pub fn year(&self, fiscal_year: i32) -> KakeiboResult<YearSummary> {
        let data = self.storage.ledger.snapshot()?;
        tracing::debug!(
            fiscal_year,
            entries = data.entries.len(),
            recurring = data.recurring_expenses.len(),
            "summarising fiscal year"
        );
        Ok(year_summary(
            &data.entries,
            &data.recurring_expenses,
            fiscal_year,
        ))
    }
}
