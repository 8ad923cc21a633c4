//! CSV export functionality

use std::io::Write;

use crate::error::{PocketFinError, PocketFinResult};
use crate::storage::Storage;

/// Export all transactions to CSV, newest first
pub fn export_transactions_csv<W: Write>(storage: &Storage, writer: &mut W) -> PocketFinResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["ID", "Date", "Kind", "Description", "Category", "Amount"])
        .map_err(|e| PocketFinError::Export(e.to_string()))?;

    let transactions = storage.transactions.all()?;
    for txn in transactions {
        csv_writer
            .write_record([
                txn.id.to_string(),
                txn.date.to_rfc3339(),
                txn.kind.to_string(),
                txn.description.clone(),
                txn.category.clone(),
                format!("{:.2}", txn.amount.cents() as f64 / 100.0),
            ])
            .map_err(|e| PocketFinError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| PocketFinError::Export(e.to_string()))?;

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
    fn test_export_csv() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketFinPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        let txn = Transaction::with_details(
            TransactionKind::Expense,
            Money::from_cents(4550),
            Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
            "Grocery, with comma",
            "Groceries",
        );
        storage.transactions.add(txn).unwrap();

        let mut buffer = Vec::new();
        export_transactions_csv(&storage, &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with("ID,Date,Kind,Description,Category,Amount"));
        assert!(output.contains("Expense"));
        // The comma-bearing field comes out quoted
        assert!(output.contains("\"Grocery, with comma\""));
        assert!(output.contains("45.50"));
    }

    #[test]
    fn test_export_csv_empty() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketFinPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        let mut buffer = Vec::new();
        export_transactions_csv(&storage, &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output.lines().count(), 1); // header only
    }
}
