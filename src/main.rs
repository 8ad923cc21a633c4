use anyhow::Result;
use clap::{Parser, Subcommand};

use pocketfin_cli::cli::{
    handle_bank_command, handle_export_command, handle_goal_command, handle_report_command,
    handle_transaction_command, BankCommands, ExportCommands, GoalCommands, ReportCommands,
    TransactionCommands,
};
use pocketfin_cli::config::{paths::PocketFinPaths, settings::Settings};
use pocketfin_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "pocketfin",
    version,
    about = "Terminal-based personal finance tracker with savings goals",
    long_about = "PocketFin is a terminal personal finance tracker. It records income \
                  and expenses, analyses spending by week, month, and category, and \
                  keeps savings goals on schedule with suggested monthly contributions. \
                  Data lives in local JSON files; the bank connection is a scripted \
                  demo backed by sample data."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Spending analysis reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Simulated bank connection
    #[command(subcommand)]
    Bank(BankCommands),

    /// Export transaction data
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = PocketFinPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let currency_symbol = settings.currency.symbol();

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, currency_symbol, cmd)?;
        }
        Some(Commands::Goal(cmd)) => {
            handle_goal_command(&storage, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, currency_symbol, cmd)?;
        }
        Some(Commands::Bank(cmd)) => {
            handle_bank_command(&storage, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, cmd)?;
        }
        Some(Commands::Config) => {
            println!("PocketFin Configuration");
            println!("=======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency:    {} ({})", settings.currency.code(), currency_symbol);
            println!("  Date format: {}", settings.date_format);
        }
        None => {
            println!("PocketFin - Terminal-based personal finance tracker");
            println!();
            println!("Run 'pocketfin --help' for usage information.");
            println!("Run 'pocketfin bank connect hdfc' to try the demo import.");
        }
    }

    Ok(())
}
