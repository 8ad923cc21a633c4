//! JSON export functionality

use std::io::Write;

use crate::error::{PocketFinError, PocketFinResult};
use crate::storage::Storage;

/// Export all transactions to pretty-printed JSON, newest first
pub fn export_transactions_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
) -> PocketFinResult<()> {
    let transactions = storage.transactions.all()?;

    serde_json::to_writer_pretty(&mut *writer, &transactions)
        .map_err(|e| PocketFinError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| PocketFinError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::PocketFinPaths;
    use crate::models::{Money, Transaction, TransactionKind};
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    #[test]
    fn test_export_json() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketFinPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        let txn = Transaction::with_details(
            TransactionKind::Income,
            Money::from_cents(10000),
            Utc.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).unwrap(),
            "Salary Deposit",
            "Salary",
        );
        storage.transactions.add(txn).unwrap();

        let mut buffer = Vec::new();
        export_transactions_json(&storage, &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let parsed: Vec<Transaction> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].description, "Salary Deposit");
    }
}
