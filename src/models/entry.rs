//! Income and expense entries
//!
//! An entry is a single dated record. Its persisted form keeps `type` and
//! `category` as separate string fields; in memory they are one
//! [`EntryKind`], so the pair is checked once when the document is read.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::{CategoryParseError, EntryKind, EntryType};
use super::fiscal::fiscal_year_of;
use super::ids::EntryId;
use super::money::{Yen, MAX_AMOUNT};

/// Validation errors for entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    NonPositiveAmount(Yen),
    AmountTooLarge(Yen),
}

impl std::fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Amount must not exceed {} (got {})", MAX_AMOUNT, amount)
            }
        }
    }
}

impl std::error::Error for EntryValidationError {}

/// A single income or expense record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EntryRecord", into = "EntryRecord")]
pub struct Entry {
    pub id: EntryId,
    pub kind: EntryKind,
    pub name: Option<String>,
    pub amount: Yen,
    pub date: NaiveDate,
}

impl Entry {
    /// Create a new entry with a fresh ID
    pub fn new(kind: EntryKind, amount: Yen, date: NaiveDate) -> Self {
        Self {
            id: EntryId::new(),
            kind,
            name: None,
            amount,
            date,
        }
    }

    /// Set the free-text label; blank labels are stored as no label
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.set_name(name);
        self
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.name = if name.trim().is_empty() {
            None
        } else {
            Some(name)
        };
    }

    /// Label shown in listings: the name, or the category name when unnamed
    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .unwrap_or_else(|| self.kind.category_name())
    }

    pub fn fiscal_year(&self) -> i32 {
        fiscal_year_of(self.date)
    }

    /// Validate the entry before it is persisted
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if !self.amount.is_positive() {
            return Err(EntryValidationError::NonPositiveAmount(self.amount));
        }
        if self.amount > MAX_AMOUNT {
            return Err(EntryValidationError::AmountTooLarge(self.amount));
        }
        Ok(())
    }
}

/// On-disk shape of an entry
#[derive(Debug, Clone, Serialize, Deserialize)]
struct EntryRecord {
    id: EntryId,
    #[serde(rename = "type")]
    entry_type: EntryType,
    category: String,
    #[serde(default)]
    name: String,
    amount: Yen,
    date: NaiveDate,
}

impl TryFrom<EntryRecord> for Entry {
    type Error = CategoryParseError;

    fn try_from(record: EntryRecord) -> Result<Self, Self::Error> {
        let kind = EntryKind::from_ids(record.entry_type, &record.category)?;
        let mut entry = Entry {
            id: record.id,
            kind,
            name: None,
            amount: record.amount,
            date: record.date,
        };
        entry.set_name(record.name);
        Ok(entry)
    }
}

impl From<Entry> for EntryRecord {
    fn from(entry: Entry) -> Self {
        Self {
            id: entry.id,
            entry_type: entry.kind.entry_type(),
            category: entry.kind.category_id().to_string(),
            name: entry.name.unwrap_or_default(),
            amount: entry.amount,
            date: entry.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::category::{ExpenseCategory, IncomeCategory};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_entry() {
        let entry = Entry::new(EntryKind::income(), Yen::new(300_000), date(2024, 5, 10))
            .with_name("Salary");

        assert_eq!(entry.name.as_deref(), Some("Salary"));
        assert_eq!(entry.label(), "Salary");
        assert_eq!(entry.fiscal_year(), 2024);
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn test_blank_name_falls_back_to_category() {
        let entry = Entry::new(EntryKind::expense(), Yen::new(1200), date(2025, 2, 1)).with_name("  ");
        assert!(entry.name.is_none());
        assert_eq!(entry.label(), "クレジット系");
        assert_eq!(entry.fiscal_year(), 2024);
    }

    #[test]
    fn test_validation_rejects_non_positive_amounts() {
        let zero = Entry::new(EntryKind::expense(), Yen::zero(), date(2024, 5, 1));
        assert!(matches!(
            zero.validate(),
            Err(EntryValidationError::NonPositiveAmount(_))
        ));

        let negative = Entry::new(EntryKind::expense(), Yen::new(-1), date(2024, 5, 1));
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_validation_caps_amount() {
        let at_cap = Entry::new(EntryKind::income(), MAX_AMOUNT, date(2024, 5, 1));
        assert!(at_cap.validate().is_ok());

        let huge = Entry::new(EntryKind::income(), Yen::new(i64::MAX), date(2024, 5, 1));
        assert!(matches!(
            huge.validate(),
            Err(EntryValidationError::AmountTooLarge(_))
        ));
    }

    #[test]
    fn test_persisted_shape() {
        let entry = Entry::new(
            EntryKind::Income(IncomeCategory::Side),
            Yen::new(300_000),
            date(2024, 5, 10),
        )
        .with_name("Consulting");

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["type"], "income");
        assert_eq!(value["category"], "side");
        assert_eq!(value["name"], "Consulting");
        assert_eq!(value["amount"], 300_000);
        assert_eq!(value["date"], "2024-05-10");
    }

    #[test]
    fn test_deserialize_from_document() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "type": "expense",
            "category": "fixed",
            "name": "",
            "amount": 50000,
            "date": "2024-05-15"
        }"#;

        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.kind, EntryKind::Expense(ExpenseCategory::Fixed));
        assert!(entry.id.matches("550e8400-e29b-41d4-a716-446655440000"));
        assert!(entry.name.is_none());
        assert_eq!(entry.amount, Yen::new(50_000));
    }

    #[test]
    fn test_deserialize_rejects_mismatched_category() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "type": "income",
            "category": "credit",
            "amount": 100,
            "date": "2024-05-15"
        }"#;

        assert!(serde_json::from_str::<Entry>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_malformed_date() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "type": "income",
            "category": "main",
            "amount": 100,
            "date": "2024-02-31"
        }"#;

        assert!(serde_json::from_str::<Entry>(json).is_err());
    }
}
