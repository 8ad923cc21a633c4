//! Export CLI commands
//!
//! Implements CLI commands for exporting transaction data.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Subcommand;

use crate::error::{PocketFinError, PocketFinResult};
use crate::export::{export_transactions_csv, export_transactions_json};
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export transactions to a CSV file
    Csv {
        /// Output file path
        path: PathBuf,
    },
    /// Export transactions to a JSON file
    Json {
        /// Output file path
        path: PathBuf,
    },
}

/// Handle an export command
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> PocketFinResult<()> {
    match cmd {
        ExportCommands::Csv { path } => {
            let file = File::create(&path).map_err(|e| {
                PocketFinError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            export_transactions_csv(storage, &mut writer)?;
            println!("Exported transactions to {}", path.display());
        }

        ExportCommands::Json { path } => {
            let file = File::create(&path).map_err(|e| {
                PocketFinError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            export_transactions_json(storage, &mut writer)?;
            println!("Exported transactions to {}", path.display());
        }
    }

    Ok(())
}
