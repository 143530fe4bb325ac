//! Recurring fixed expenses
//!
//! A recurring expense applies the same amount to every calendar month in a
//! contiguous range. Ranges are given in calendar year/month, not fiscal.

use serde::{Deserialize, Serialize};

use super::ids::RecurringId;
use super::money::{Yen, MAX_AMOUNT};

/// Years past the queried fiscal year that an open-ended range extends to
pub const OPEN_ENDED_HORIZON_YEARS: i32 = 10;

/// Validation errors for recurring expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecurringValidationError {
    EmptyName,
    NonPositiveAmount(Yen),
    AmountTooLarge(Yen),
    InvalidMonth(u32),
    IncompleteEnd,
    EndBeforeStart,
}

impl std::fmt::Display for RecurringValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Recurring expense name cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Amount must not exceed {} (got {})", MAX_AMOUNT, amount)
            }
            Self::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
            Self::IncompleteEnd => write!(f, "End year and end month must be given together"),
            Self::EndBeforeStart => write!(f, "End month is before start month"),
        }
    }
}

impl std::error::Error for RecurringValidationError {}

/// A monthly fixed expense active over a range of calendar months
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringExpense {
    pub id: RecurringId,
    pub name: String,
    pub amount: Yen,
    pub start_year: i32,
    pub start_month: u32,
    #[serde(default)]
    pub end_year: Option<i32>,
    #[serde(default)]
    pub end_month: Option<u32>,
}

impl RecurringExpense {
    /// Create an open-ended recurring expense
    pub fn new(name: impl Into<String>, amount: Yen, start_year: i32, start_month: u32) -> Self {
        Self {
            id: RecurringId::new(),
            name: name.into(),
            amount,
            start_year,
            start_month,
            end_year: None,
            end_month: None,
        }
    }

    /// Set the last active month (inclusive)
    pub fn ending(mut self, end_year: i32, end_month: u32) -> Self {
        self.end_year = Some(end_year);
        self.end_month = Some(end_month);
        self
    }

    pub fn is_open_ended(&self) -> bool {
        self.end_year.is_none()
    }

    /// Whether this expense applies to `month` of `fiscal_year`
    ///
    /// The query key is `fiscal_year * 12 + month`, compared inclusively
    /// against the start and end keys. A missing end year is read as
    /// `fiscal_year + 10` and a missing end month as December. An inverted
    /// range never matches.
    pub fn is_active_in(&self, fiscal_year: i32, month: u32) -> bool {
        let current = month_key(fiscal_year, month);
        let start = month_key(self.start_year, self.start_month);
        let end = month_key(
            self.end_year
                .unwrap_or(fiscal_year.saturating_add(OPEN_ENDED_HORIZON_YEARS)),
            self.end_month.unwrap_or(12),
        );

        current >= start && current <= end
    }

    /// Validate the recurring expense before it is persisted
    pub fn validate(&self) -> Result<(), RecurringValidationError> {
        if self.name.trim().is_empty() {
            return Err(RecurringValidationError::EmptyName);
        }
        if !self.amount.is_positive() {
            return Err(RecurringValidationError::NonPositiveAmount(self.amount));
        }
        if self.amount > MAX_AMOUNT {
            return Err(RecurringValidationError::AmountTooLarge(self.amount));
        }
        if !(1..=12).contains(&self.start_month) {
            return Err(RecurringValidationError::InvalidMonth(self.start_month));
        }

        match (self.end_year, self.end_month) {
            (None, None) => Ok(()),
            (Some(end_year), Some(end_month)) => {
                if !(1..=12).contains(&end_month) {
                    return Err(RecurringValidationError::InvalidMonth(end_month));
                }
                if month_key(end_year, end_month) < month_key(self.start_year, self.start_month) {
                    return Err(RecurringValidationError::EndBeforeStart);
                }
                Ok(())
            }
            _ => Err(RecurringValidationError::IncompleteEnd),
        }
    }
}

fn month_key(year: i32, month: u32) -> i64 {
    i64::from(year) * 12 + i64::from(month)
}
