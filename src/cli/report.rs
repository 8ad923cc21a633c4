//! Report CLI commands
//!
//! Implements CLI commands for spending analysis.

use clap::Subcommand;

use crate::display::chart::{format_category_breakdown, format_period_chart};
use crate::display::transaction::format_totals_summary;
use crate::error::{PocketFinError, PocketFinResult};
use crate::insights::{self, PeriodMode};
use crate::services::TransactionService;
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Income, expenses, and balance over all transactions
    Summary,
    /// Income and expenses bucketed by week or month
    Spending {
        /// Bucket size (weekly, monthly)
        #[arg(short, long, default_value = "weekly")]
        mode: String,
    },
    /// Expense totals per category
    Categories,
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    currency_symbol: &str,
    cmd: ReportCommands,
) -> PocketFinResult<()> {
    let transactions = TransactionService::new(storage).list(None)?;

    match cmd {
        ReportCommands::Summary => {
            let totals = insights::totals(&transactions);
            print!("{}", format_totals_summary(&totals, currency_symbol));
        }

        ReportCommands::Spending { mode } => {
            let mode = PeriodMode::parse(&mode).ok_or_else(|| {
                PocketFinError::Validation(format!(
                    "Invalid mode: '{}'. Valid modes: weekly, monthly",
                    mode
                ))
            })?;

            let buckets = insights::group_by_period(&transactions, mode);
            println!("Spending by {} period", mode);
            println!();
            print!("{}", format_period_chart(&buckets));
        }

        ReportCommands::Categories => {
            let breakdown = insights::group_by_category(&transactions);
            print!("{}", format_category_breakdown(&breakdown));
        }
    }

    Ok(())
}
