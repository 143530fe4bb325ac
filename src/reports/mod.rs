//! Reports module for kakeibo
//!
//! Fiscal year and monthly reports over the ledger.

pub mod month;
pub mod year;

pub use month::{CategoryTotal, MonthReport};
pub use year::YearReport;
