//! Recurring expense CLI commands

use clap::Subcommand;

use super::entry::{parse_amount, parse_month};
use crate::config::settings::Settings;
use crate::display::recurring::{format_active_range, format_recurring_list};
use crate::error::KakeiboResult;
use crate::services::RecurringService;
use crate::storage::Storage;

/// Recurring expense subcommands
#[derive(Subcommand)]
pub enum RecurringCommands {
    /// Register a monthly fixed expense
    Add {
        /// Name (e.g., "Rent")
        name: String,
        /// Monthly amount in yen
        amount: String,
        /// First month (YYYY-MM)
        #[arg(short, long)]
        start: String,
        /// Last month (YYYY-MM); open-ended when omitted
        #[arg(short, long)]
        end: Option<String>,
    },
    /// List recurring expenses
    List,
    /// Delete a recurring expense
    Delete {
        /// Recurring expense ID or name
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Calendar (year, month) of a `YYYY-MM` argument
fn parse_year_month(s: &str) -> KakeiboResult<(i32, u32)> {
    let month = parse_month(Some(s))?;
    Ok((month.calendar_year(), month.month()))
}

/// Handle a recurring expense command
pub fn handle_recurring_command(
    storage: &Storage,
    settings: &Settings,
    cmd: RecurringCommands,
) -> KakeiboResult<()> {
    let service = RecurringService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        RecurringCommands::Add {
            name,
            amount,
            start,
            end,
        } => {
            let amount = parse_amount(&amount)?;
            let start = parse_year_month(&start)?;
            let end = end.as_deref().map(parse_year_month).transpose()?;

            let recurring = service.add(name, amount, start, end)?;

            println!("Created recurring expense:");
            println!("  ID:      {}", recurring.id);
            println!("  Name:    {}", recurring.name);
            println!(
                "  Amount:  {} / 月",
                recurring.amount.format_with_symbol(symbol)
            );
            println!("  Active:  {}", format_active_range(&recurring));
        }

        RecurringCommands::List => {
            let expenses = service.list()?;
            println!("{}", format_recurring_list(&expenses, symbol));
        }

        RecurringCommands::Delete { id, force } => {
            let recurring = service.require(&id)?;

            if !force {
                println!("About to delete recurring expense:");
                println!("  Name:    {}", recurring.name);
                println!(
                    "  Amount:  {} / 月",
                    recurring.amount.format_with_symbol(symbol)
                );
                println!("  Active:  {}", format_active_range(&recurring));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            if let Some(deleted) = service.delete(recurring.id)? {
                println!("Deleted recurring expense: {} ({})", deleted.id, deleted.name);
            }
        }
    }

    Ok(())
}
