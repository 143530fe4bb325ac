//! Service layer for kakeibo
//!
//! The service layer provides business logic on top of the storage layer:
//! validation, mutation requests, and fiscal aggregation.

pub mod aggregate;
pub mod entry;
pub mod recurring;
pub mod summary;

pub use aggregate::{
    entries_for_month, month_detail, year_summary, EffectiveEntry, EntrySource, MonthDetail,
    MonthSummary, MonthTotals, YearSummary,
};
pub use entry::{parse_date, EntryChanges, EntryService};
pub use recurring::RecurringService;
pub use summary::SummaryService;
