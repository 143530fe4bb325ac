use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use kakeibo::cli::{handle_entry_command, handle_recurring_command, handle_report_command};
use kakeibo::config::paths::KakeiboPaths;
use kakeibo::config::settings::Settings;
use kakeibo::display::format_category_list;
use kakeibo::logging::init_tracing;
use kakeibo::models::FiscalMonth;
use kakeibo::storage::Storage;

#[derive(Parser)]
#[command(
    name = "kakeibo",
    version,
    about = "Terminal household ledger with April-to-March fiscal years",
    long_about = "kakeibo records income and expense entries and recurring fixed \
                  expenses, and summarises them by Japanese fiscal year (April to \
                  March) and month."
)]
struct Cli {
    /// Base directory for settings and data
    #[arg(long, global = true, env = "KAKEIBO_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Income and expense entries
    #[command(subcommand)]
    Entry(kakeibo::cli::EntryCommands),

    /// Recurring fixed expenses
    #[command(subcommand)]
    Recurring(kakeibo::cli::RecurringCommands),

    /// Fiscal year and monthly reports
    #[command(subcommand)]
    Report(kakeibo::cli::ReportCommands),

    /// List the income and expense categories
    Categories,

    /// Initialize settings and an empty ledger
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => KakeiboPaths::with_base_dir(dir),
        None => KakeiboPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Entry(cmd)) => {
            handle_entry_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Recurring(cmd)) => {
            handle_recurring_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Categories) => {
            println!("{}", format_category_list());
        }
        Some(Commands::Init) => {
            println!("Initializing kakeibo at: {}", paths.base_dir().display());
            kakeibo::storage::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'kakeibo entry add <amount>' to record an expense,");
            println!("or 'kakeibo recurring add <name> <amount> --start YYYY-MM' for fixed costs.");
        }
        Some(Commands::Config) => {
            println!("kakeibo Configuration");
            println!("=====================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Ledger file:     {}", paths.ledger_file().display());
            println!("Initialized:     {}", storage.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol:    {}", settings.currency_symbol);
            println!("  Date format:        {}", settings.date_format);
            println!("  Default entry kind: {:?}", settings.default_entry_kind);
            println!("  Current period:     {}", FiscalMonth::current());
        }
        None => {
            println!("kakeibo - Terminal household ledger");
            println!();
            println!("Run 'kakeibo --help' for usage information.");
            println!("Run 'kakeibo report year' for this fiscal year's summary.");
        }
    }

    Ok(())
}
