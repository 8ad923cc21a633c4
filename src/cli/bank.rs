//! Bank connection CLI commands
//!
//! Drives the scripted bank-connect flow: pick a bank from the catalog,
//! pass the pretend OTP check, consent, import the sample statement. The
//! prompts can all be skipped with flags for non-interactive use.

use std::io::{self, Write};

use chrono::Local;
use clap::Subcommand;

use crate::error::{PocketFinError, PocketFinResult};
use crate::services::bank::{find_bank, BankConnectService, BANKS};
use crate::storage::Storage;

/// Bank subcommands
#[derive(Subcommand)]
pub enum BankCommands {
    /// List the banks available to connect
    List,
    /// Connect a bank account and import its statement
    Connect {
        /// Bank id or name (see 'bank list')
        bank: String,
        /// One-time passcode (any 4 digits; prompted when omitted)
        #[arg(long)]
        otp: Option<String>,
        /// Skip the consent prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Handle a bank command
pub fn handle_bank_command(storage: &Storage, cmd: BankCommands) -> PocketFinResult<()> {
    match cmd {
        BankCommands::List => {
            println!("Available banks:");
            for bank in BANKS {
                println!("  {:8} {}", bank.id, bank.name);
            }
        }

        BankCommands::Connect { bank, otp, yes } => {
            let bank = find_bank(&bank).ok_or_else(|| PocketFinError::bank_not_found(&bank))?;

            println!("Connecting to {}...", bank.name);
            println!("A one-time passcode has been sent to your registered phone.");

            let otp = match otp {
                Some(code) => code,
                None => prompt_string("Enter the 4-digit OTP: ")?,
            };

            if !yes {
                println!();
                println!(
                    "{} will share your account transactions with PocketFin.",
                    bank.name
                );
                let consent = prompt_string("Do you consent? (yes/no) [yes]: ")?;
                if !consent.is_empty()
                    && consent.to_lowercase() != "yes"
                    && consent.to_lowercase() != "y"
                {
                    println!("Connection cancelled.");
                    return Ok(());
                }
            }

            let today = Local::now().date_naive();
            let count = BankConnectService::new(storage).connect(bank, &otp, today)?;

            println!("Connected to {}.", bank.name);
            println!(
                "Imported {} transactions. Run 'pocketfin transaction list' to see them.",
                count
            );
        }
    }

    Ok(())
}

/// Read a trimmed line from stdin after printing a prompt
fn prompt_string(prompt: &str) -> PocketFinResult<String> {
    print!("{}", prompt);
    io::stdout()
        .flush()
        .map_err(|e| PocketFinError::Io(format!("Failed to flush stdout: {}", e)))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| PocketFinError::Io(format!("Failed to read input: {}", e)))?;

    Ok(input.trim().to_string())
}
