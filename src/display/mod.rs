//! Display formatting for terminal output
//!
//! Tables and amount formatting for entries, recurring expenses and reports.

pub mod entry;
pub mod recurring;
pub mod report;

pub use entry::{format_entry_details, format_entry_table};
pub use recurring::{format_active_range, format_category_list, format_recurring_list};
