//! CLI commands for reports

use clap::Subcommand;

use super::entry::MonthArgs;
use crate::config::settings::Settings;
use crate::error::KakeiboResult;
use crate::models::FiscalMonth;
use crate::reports::{MonthReport, YearReport};
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Monthly totals for a fiscal year (April to March)
    Year {
        /// Fiscal year, named by the year it starts in; defaults to the current one
        #[arg(short = 'y', long)]
        fiscal_year: Option<i32>,
    },

    /// Incomes and expenses of one month
    Month {
        #[command(flatten)]
        month: MonthArgs,
    },
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> KakeiboResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Year { fiscal_year } => {
            let fiscal_year =
                fiscal_year.unwrap_or_else(|| FiscalMonth::current().fiscal_year());
            let report = YearReport::generate(storage, fiscal_year)?;
            print!("{}", report.format_terminal(symbol));
        }

        ReportCommands::Month { month } => {
            let month = month.resolve()?;
            let report = MonthReport::generate(storage, month)?;
            print!("{}", report.format_terminal(symbol, &settings.date_format));
        }
    }

    Ok(())
}
