//! Entry CLI commands
//!
//! Implements CLI commands for income and expense entries.

use clap::{Args, Subcommand};

use crate::config::settings::{DefaultEntryKind, Settings};
use crate::display::entry::{format_entry_details, format_entry_table};
use crate::display::report::format_balance;
use crate::error::{KakeiboError, KakeiboResult};
use crate::models::{EntryKind, EntryType, FiscalMonth, Yen};
use crate::services::{parse_date, EntryChanges, EntryService, MonthTotals, SummaryService};
use crate::storage::Storage;

/// Entry subcommands
#[derive(Subcommand)]
pub enum EntryCommands {
    /// Record a new income or expense
    Add {
        /// Amount in yen (e.g., "3000" or "3,000")
        amount: String,
        /// Record as income
        #[arg(long, conflicts_with = "expense")]
        income: bool,
        /// Record as expense
        #[arg(long)]
        expense: bool,
        /// Category ID (main, side, extra, adjust / credit, fixed, adjust)
        #[arg(short, long)]
        category: Option<String>,
        /// Optional label
        #[arg(short, long)]
        name: Option<String>,
        /// Entry date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Date the entry on the first day of this month (YYYY-MM)
        #[arg(short, long, conflicts_with = "date")]
        month: Option<String>,
    },
    /// Edit an existing entry
    Edit {
        /// Entry ID
        id: String,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// Change to income
        #[arg(long, conflicts_with = "expense")]
        income: bool,
        /// Change to expense
        #[arg(long)]
        expense: bool,
        /// New category ID
        #[arg(short, long)]
        category: Option<String>,
        /// New label (empty to clear)
        #[arg(short, long)]
        name: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete an entry
    Delete {
        /// Entry ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// List the entries of a month, recurring expenses included
    List {
        #[command(flatten)]
        month: MonthArgs,
    },
}

/// Month selection shared by listings and reports
#[derive(Args, Debug, Clone, Default)]
pub struct MonthArgs {
    /// Calendar month (YYYY-MM), defaults to the current month
    #[arg(short, long)]
    pub month: Option<String>,
    /// Show the following month, wrapping from March to April
    #[arg(long, conflicts_with = "prev")]
    pub next: bool,
    /// Show the preceding month, wrapping from April to March
    #[arg(long)]
    pub prev: bool,
}

impl MonthArgs {
    /// The selected month after applying `--next`/`--prev`
    pub fn resolve(&self) -> KakeiboResult<FiscalMonth> {
        let month = parse_month(self.month.as_deref())?;
        Ok(if self.next {
            month.next()
        } else if self.prev {
            month.prev()
        } else {
            month
        })
    }
}

/// Parse a yen amount given on the command line
pub(crate) fn parse_amount(s: &str) -> KakeiboResult<Yen> {
    Yen::parse(s).map_err(|e| {
        KakeiboError::Validation(format!(
            "Invalid amount: '{}'. Use a whole number of yen like '3000' or '3,000'. Error: {}",
            s, e
        ))
    })
}

/// Parse a `YYYY-MM` month, falling back to the current month
pub(crate) fn parse_month(month: Option<&str>) -> KakeiboResult<FiscalMonth> {
    match month {
        Some(s) => FiscalMonth::parse(s).map_err(|e| KakeiboError::Validation(e.to_string())),
        None => Ok(FiscalMonth::current()),
    }
}

/// Work out the entry kind from the type flags and category
///
/// Without a type flag the category is looked up under `fallback`.
fn resolve_kind(
    income: bool,
    expense: bool,
    category: Option<&str>,
    fallback: EntryType,
) -> KakeiboResult<EntryKind> {
    let entry_type = if income {
        EntryType::Income
    } else if expense {
        EntryType::Expense
    } else {
        fallback
    };

    match category {
        Some(category) => EntryKind::from_ids(entry_type, category)
            .map_err(|e| KakeiboError::Validation(e.to_string())),
        None => Ok(match entry_type {
            EntryType::Income => EntryKind::income(),
            EntryType::Expense => EntryKind::expense(),
        }),
    }
}

/// Kind for an edited entry; `None` keeps the current kind
///
/// A type flag matching the current type without `-c` keeps the category.
fn edited_kind(
    current: EntryKind,
    income: bool,
    expense: bool,
    category: Option<&str>,
) -> KakeiboResult<Option<EntryKind>> {
    let keeps_type = (!income && !expense)
        || (income && current.is_income())
        || (expense && current.is_expense());

    if category.is_none() && keeps_type {
        return Ok(None);
    }

    resolve_kind(income, expense, category, current.entry_type()).map(Some)
}

/// Handle an entry command
pub fn handle_entry_command(
    storage: &Storage,
    settings: &Settings,
    cmd: EntryCommands,
) -> KakeiboResult<()> {
    let service = EntryService::new(storage);
    let symbol = settings.currency_symbol.as_str();
    let date_format = settings.date_format.as_str();

    match cmd {
        EntryCommands::Add {
            amount,
            income,
            expense,
            category,
            name,
            date,
            month,
        } => {
            let fallback = match settings.default_entry_kind {
                DefaultEntryKind::Income => EntryType::Income,
                DefaultEntryKind::Expense => EntryType::Expense,
            };
            let kind = resolve_kind(income, expense, category.as_deref(), fallback)?;
            let amount = parse_amount(&amount)?;

            // Parse date (default to today)
            let date = match (date, month) {
                (Some(date), _) => parse_date(&date)?,
                (None, Some(month)) => parse_month(Some(&month))?.first_day(),
                (None, None) => chrono::Local::now().date_naive(),
            };

            let entry = service.add(kind, amount, date, name)?;

            println!("Created entry:");
            print!("{}", format_entry_details(&entry, symbol, date_format));
        }

        EntryCommands::Edit {
            id,
            amount,
            income,
            expense,
            category,
            name,
            date,
        } => {
            let entry = service.require(&id)?;

            let kind = edited_kind(entry.kind, income, expense, category.as_deref())?;

            let changes = EntryChanges {
                kind,
                name,
                amount: amount.as_deref().map(parse_amount).transpose()?,
                date: date.as_deref().map(parse_date).transpose()?,
            };

            let updated = service.update(entry.id, changes)?;

            println!("Updated entry:");
            print!("{}", format_entry_details(&updated, symbol, date_format));
        }

        EntryCommands::Delete { id, force } => {
            let entry = service.require(&id)?;

            if !force {
                println!("About to delete entry:");
                print!("{}", format_entry_details(&entry, symbol, date_format));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            match service.delete(entry.id)? {
                Some(deleted) => println!(
                    "Deleted entry: {} ({} {})",
                    deleted.id,
                    deleted.label(),
                    deleted.amount.format_with_symbol(symbol)
                ),
                None => return Err(KakeiboError::entry_not_found(id)),
            }
        }

        EntryCommands::List { month } => {
            let month = month.resolve()?;
            let entries = SummaryService::new(storage).month_entries(month)?;

            println!("{}", month);
            if entries.is_empty() {
                println!("No entries for this month.");
                return Ok(());
            }

            println!("{}", format_entry_table(&entries, symbol, date_format));

            let totals = MonthTotals::from_entries(&entries);
            println!();
            println!(
                "Income: {}  Expense: {}  Balance: {}",
                totals.income.format_with_symbol(symbol),
                totals.expense.format_with_symbol(symbol),
                format_balance(totals.balance, symbol)
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, IncomeCategory};

    #[test]
    fn test_resolve_kind_flags() {
        assert_eq!(
            resolve_kind(true, false, None, EntryType::Expense).unwrap(),
            EntryKind::Income(IncomeCategory::Main)
        );
        assert_eq!(
            resolve_kind(false, true, Some("fixed"), EntryType::Income).unwrap(),
            EntryKind::Expense(ExpenseCategory::Fixed)
        );
    }

    #[test]
    fn test_resolve_kind_uses_fallback_type() {
        assert_eq!(
            resolve_kind(false, false, Some("side"), EntryType::Income).unwrap(),
            EntryKind::Income(IncomeCategory::Side)
        );
        assert_eq!(
            resolve_kind(false, false, None, EntryType::Expense).unwrap(),
            EntryKind::Expense(ExpenseCategory::Credit)
        );
    }

    #[test]
    fn test_resolve_kind_rejects_foreign_category() {
        let err = resolve_kind(true, false, Some("fixed"), EntryType::Income).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_edited_kind_keeps_category_for_same_type() {
        let adjust = EntryKind::Income(IncomeCategory::Adjust);

        assert_eq!(edited_kind(adjust, true, false, None).unwrap(), None);
        assert_eq!(edited_kind(adjust, false, false, None).unwrap(), None);
        assert_eq!(
            edited_kind(adjust, false, true, None).unwrap(),
            Some(EntryKind::Expense(ExpenseCategory::Credit))
        );
        assert_eq!(
            edited_kind(adjust, true, false, Some("side")).unwrap(),
            Some(EntryKind::Income(IncomeCategory::Side))
        );
        assert_eq!(
            edited_kind(adjust, false, false, Some("extra")).unwrap(),
            Some(EntryKind::Income(IncomeCategory::Extra))
        );
    }

    #[test]
    fn test_month_args_navigation() {
        let args = |next, prev| MonthArgs {
            month: Some("2025-03".into()),
            next,
            prev,
        };

        let march = FiscalMonth::new(2024, 3).unwrap();

        assert_eq!(args(false, false).resolve().unwrap(), march);
        assert_eq!(args(true, false).resolve().unwrap(), march.next());
        assert_eq!(args(true, false).resolve().unwrap().month(), 4);
        assert_eq!(args(false, true).resolve().unwrap().month(), 2);
        assert_eq!(args(true, false).resolve().unwrap().fiscal_year(), 2024);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("3,000").unwrap(), Yen::new(3_000));
        assert!(parse_amount("abc").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_month() {
        let month = parse_month(Some("2025-02")).unwrap();
        assert_eq!(month.fiscal_year(), 2024);
        assert_eq!(month.month(), 2);
        assert!(parse_month(Some("2025-13")).is_err());
    }
}
