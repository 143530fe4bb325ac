//! Recurring expense service
//!
//! Recurring expenses are only added and deleted; there is no update.

use crate::error::{KakeiboError, KakeiboResult};
use crate::models::{RecurringExpense, RecurringId, Yen};
use crate::storage::{LedgerMutation, Storage};

/// Service for recurring expense management
pub struct RecurringService<'a> {
    storage: &'a Storage,
}

impl<'a> RecurringService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a recurring expense starting at `start` (calendar year, month)
    ///
    /// `end` is inclusive; `None` leaves the expense open-ended.
    pub fn add(
        &self,
        name: impl Into<String>,
        amount: Yen,
        start: (i32, u32),
        end: Option<(i32, u32)>,
    ) -> KakeiboResult<RecurringExpense> {
        let mut recurring = RecurringExpense::new(name.into().trim(), amount, start.0, start.1);
        if let Some((end_year, end_month)) = end {
            recurring = recurring.ending(end_year, end_month);
        }

        recurring
            .validate()
            .map_err(|e| KakeiboError::Validation(e.to_string()))?;

        self.storage
            .ledger
            .apply(LedgerMutation::AddRecurring(recurring.clone()))?;
        self.storage.ledger.save()?;

        tracing::info!(
            id = %recurring.id,
            name = %recurring.name,
            amount = recurring.amount.value(),
            "added recurring expense"
        );
        Ok(recurring)
    }

    /// Delete a recurring expense; returns it if it existed
    pub fn delete(&self, id: RecurringId) -> KakeiboResult<Option<RecurringExpense>> {
        let existing = self
            .list()?
            .into_iter()
            .find(|r| r.id == id);

        if self
            .storage
            .ledger
            .apply(LedgerMutation::DeleteRecurring(id))?
        {
            self.storage.ledger.save()?;
            tracing::info!(id = %id, "deleted recurring expense");
        }

        Ok(existing)
    }

    /// All recurring expenses in insertion order
    pub fn list(&self) -> KakeiboResult<Vec<RecurringExpense>> {
        Ok(self.storage.ledger.snapshot()?.recurring_expenses)
    }

    /// Find by full or short ID, or by exact name
    pub fn find(&self, identifier: &str) -> KakeiboResult<Option<RecurringExpense>> {
        self.storage.ledger.find_recurring(identifier)
    }

    pub fn require(&self, identifier: &str) -> KakeiboResult<RecurringExpense> {
        self.find(identifier)?
            .ok_or_else(|| KakeiboError::recurring_not_found(identifier))
    }
}
