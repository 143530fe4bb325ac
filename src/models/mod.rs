//! Core data models for kakeibo
//!
//! Entries, recurring expenses, the fixed category sets, yen amounts and the
//! April-to-March fiscal calendar.

pub mod category;
pub mod entry;
pub mod fiscal;
pub mod ids;
pub mod money;
pub mod recurring;

pub use category::{EntryKind, EntryType, ExpenseCategory, IncomeCategory};
pub use entry::Entry;
pub use fiscal::{fiscal_year_of, month_from_index, month_index, FiscalMonth, MONTH_LABELS};
pub use ids::{EntryId, RecurringId};
pub use money::{Yen, MAX_AMOUNT};
pub use recurring::RecurringExpense;
