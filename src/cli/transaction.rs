//! Transaction CLI commands
//!
//! Implements CLI commands for recording and listing transactions.

use chrono::{NaiveDate, Utc};
use clap::Subcommand;

use crate::display::transaction::{format_register, format_totals_summary};
use crate::error::{PocketFinError, PocketFinResult};
use crate::insights;
use crate::models::{Money, TransactionKind};
use crate::services::{CreateTransactionInput, TransactionService};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// Amount (e.g., "45.50" or "45")
        amount: String,
        /// What the transaction was
        description: String,
        /// Kind of transaction (income, expense)
        #[arg(short, long, default_value = "expense")]
        kind: String,
        /// Category label
        #[arg(short, long)]
        category: Option<String>,
        /// Transaction date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List transactions with totals, newest first
    List {
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Remove every stored transaction
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    currency_symbol: &str,
    cmd: TransactionCommands,
) -> PocketFinResult<()> {
    let service = TransactionService::new(storage);

    match cmd {
        TransactionCommands::Add {
            amount,
            description,
            kind,
            category,
            date,
        } => {
            let kind = parse_kind(&kind)?;

            let amount = Money::parse(&amount).map_err(|e| {
                PocketFinError::Validation(format!(
                    "Invalid amount: '{}'. Use format like '45.50' or '45'. Error: {}",
                    amount, e
                ))
            })?;

            let date = match date {
                Some(text) => Some(parse_date(&text)?),
                None => None,
            };

            let txn = service.add(CreateTransactionInput {
                kind,
                amount,
                description,
                category,
                date,
            })?;

            println!("Recorded {}: {} ({})", txn.kind, txn.amount, txn.category);
            println!("  Date: {}", txn.date.format("%Y-%m-%d"));
            println!("  ID:   {}", txn.id);
        }

        TransactionCommands::List { limit } => {
            let transactions = service.list(limit)?;
            print!("{}", format_register(&transactions));

            if !transactions.is_empty() {
                let all = service.list(None)?;
                println!();
                print!(
                    "{}",
                    format_totals_summary(&insights::totals(&all), currency_symbol)
                );
            }
        }

        TransactionCommands::Clear { yes } => {
            if !yes {
                println!("This removes every stored transaction. Re-run with --yes to confirm.");
                return Ok(());
            }
            let removed = service.clear_all()?;
            println!("Removed {} transactions.", removed);
        }
    }

    Ok(())
}

fn parse_kind(s: &str) -> PocketFinResult<TransactionKind> {
    match s.to_lowercase().as_str() {
        "income" => Ok(TransactionKind::Income),
        "expense" => Ok(TransactionKind::Expense),
        other => Err(PocketFinError::Validation(format!(
            "Invalid kind: '{}'. Valid kinds: income, expense",
            other
        ))),
    }
}

fn parse_date(s: &str) -> PocketFinResult<chrono::DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| {
        PocketFinError::Validation(format!(
            "Invalid date: '{}'. Use YYYY-MM-DD. Error: {}",
            s, e
        ))
    })?;
    // Noon keeps the calendar date stable across timezones
    Ok(date.and_hms_opt(12, 0, 0).unwrap().and_utc())
}
