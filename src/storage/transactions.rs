//! Transaction store for JSON persistence
//!
//! Manages loading and saving the transaction collection to
//! transactions.json. The collection mirrors the transaction lifecycle:
//! records are appended by manual entry, replaced wholesale by a bank
//! import, or cleared entirely. There is no per-record removal.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::PocketFinError;
use crate::models::Transaction;

use super::file_io::{read_json, write_json_atomic};

/// Serializable transaction data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Store for transaction persistence
pub struct TransactionStore {
    path: PathBuf,
    data: RwLock<Vec<Transaction>>,
}

impl TransactionStore {
    /// Create a new transaction store
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load transactions from disk
    ///
    /// A malformed file (including unparseable dates) surfaces as a storage
    /// error; nothing is silently skipped.
    pub fn load(&self) -> Result<(), PocketFinError> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| PocketFinError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = file_data.transactions;

        Ok(())
    }

    /// Save transactions to disk
    pub fn save(&self) -> Result<(), PocketFinError> {
        let data = self
            .data
            .read()
            .map_err(|e| PocketFinError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = TransactionData {
            transactions: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get all transactions, newest first
    pub fn all(&self) -> Result<Vec<Transaction>, PocketFinError> {
        let data = self
            .data
            .read()
            .map_err(|e| PocketFinError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut transactions = data.clone();
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(transactions)
    }

    /// Number of stored transactions
    pub fn len(&self) -> Result<usize, PocketFinError> {
        let data = self
            .data
            .read()
            .map_err(|e| PocketFinError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }

    /// Check whether the store holds no transactions
    pub fn is_empty(&self) -> Result<bool, PocketFinError> {
        Ok(self.len()? == 0)
    }

    /// Append a transaction
    pub fn add(&self, txn: Transaction) -> Result<(), PocketFinError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| PocketFinError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        data.push(txn);
        Ok(())
    }

    /// Replace the whole collection (bank import)
    pub fn replace_all(&self, transactions: Vec<Transaction>) -> Result<(), PocketFinError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| PocketFinError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = transactions;
        Ok(())
    }

    /// Remove every transaction
    pub fn clear(&self) -> Result<(), PocketFinError> {
        self.replace_all(Vec::new())
    }
}
