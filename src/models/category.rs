//! Fixed category sets for income and expense entries
//!
//! Categories are not user-editable. Each kind of entry has its own closed
//! set, so an expense can never carry an income category.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Categories available to income entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IncomeCategory {
    /// Primary job
    #[default]
    Main,
    /// Side business
    Side,
    /// One-off income
    Extra,
    /// Balance adjustment
    Adjust,
}

impl IncomeCategory {
    pub const ALL: [IncomeCategory; 4] = [Self::Main, Self::Side, Self::Extra, Self::Adjust];

    /// Stable identifier used in the persisted document
    pub fn id(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Side => "side",
            Self::Extra => "extra",
            Self::Adjust => "adjust",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Main => "本業",
            Self::Side => "副業",
            Self::Extra => "臨時",
            Self::Adjust => "調整金",
        }
    }

    /// Hex colour used when rendering the category
    pub fn color(&self) -> &'static str {
        match self {
            Self::Main => "#22c55e",
            Self::Side => "#3b82f6",
            Self::Extra => "#f59e0b",
            Self::Adjust => "#6b7280",
        }
    }
}

/// Categories available to expense entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    /// Card and credit payments
    #[default]
    Credit,
    /// Fixed monthly costs; also used for recurring expenses
    Fixed,
    /// Balance adjustment
    Adjust,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 3] = [Self::Credit, Self::Fixed, Self::Adjust];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::Fixed => "fixed",
            Self::Adjust => "adjust",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Credit => "クレジット系",
            Self::Fixed => "固定費",
            Self::Adjust => "調整金",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Credit => "#ef4444",
            Self::Fixed => "#8b5cf6",
            Self::Adjust => "#6b7280",
        }
    }
}

/// Income or expense, with the category belonging to that side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Income(IncomeCategory),
    Expense(ExpenseCategory),
}

impl EntryKind {
    /// Default income kind (`main`)
    pub fn income() -> Self {
        Self::Income(IncomeCategory::default())
    }

    /// Default expense kind (`credit`)
    pub fn expense() -> Self {
        Self::Expense(ExpenseCategory::default())
    }

    /// Build a kind from its persisted `type` and `category` identifiers
    pub fn from_ids(entry_type: EntryType, category: &str) -> Result<Self, CategoryParseError> {
        let category = category.trim().to_lowercase();
        match entry_type {
            EntryType::Income => IncomeCategory::ALL
                .into_iter()
                .find(|c| c.id() == category)
                .map(Self::Income),
            EntryType::Expense => ExpenseCategory::ALL
                .into_iter()
                .find(|c| c.id() == category)
                .map(Self::Expense),
        }
        .ok_or(CategoryParseError::Unknown {
            entry_type,
            category,
        })
    }

    pub fn entry_type(&self) -> EntryType {
        match self {
            Self::Income(_) => EntryType::Income,
            Self::Expense(_) => EntryType::Expense,
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income(_))
    }

    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense(_))
    }

    pub fn category_id(&self) -> &'static str {
        match self {
            Self::Income(c) => c.id(),
            Self::Expense(c) => c.id(),
        }
    }

    pub fn category_name(&self) -> &'static str {
        match self {
            Self::Income(c) => c.display_name(),
            Self::Expense(c) => c.display_name(),
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Income(c) => c.color(),
            Self::Expense(c) => c.color(),
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.entry_type(), self.category_id())
    }
}

/// The `type` field of a persisted entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Income,
    Expense,
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for EntryType {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(CategoryParseError::UnknownType(other.to_string())),
        }
    }
}

/// Error for category identifiers that do not belong to the entry type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryParseError {
    Unknown {
        entry_type: EntryType,
        category: String,
    },
    UnknownType(String),
}

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown {
                entry_type,
                category,
            } => write!(f, "Unknown {} category: {}", entry_type, category),
            Self::UnknownType(s) => write!(f, "Unknown entry type: {}", s),
        }
    }
}

impl std::error::Error for CategoryParseError {}
