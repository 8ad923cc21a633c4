//! Transaction service
//!
//! Provides business logic for recording and listing transactions. Records
//! are immutable once written; the only destructive operations are the bulk
//! replacement performed by a bank import and the explicit full clear.

use chrono::{DateTime, Utc};

use crate::audit::{EntityType, Operation};
use crate::error::{PocketFinError, PocketFinResult};
use crate::models::{Money, Transaction, TransactionKind};
use crate::storage::Storage;

/// Input for recording a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub kind: TransactionKind,
    pub amount: Money,
    pub description: String,
    pub category: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new transaction
    pub fn add(&self, input: CreateTransactionInput) -> PocketFinResult<Transaction> {
        let date = input.date.unwrap_or_else(Utc::now);
        let txn = Transaction::with_details(
            input.kind,
            input.amount,
            date,
            input.description.trim(),
            input.category.unwrap_or_default(),
        );

        txn.validate()
            .map_err(|e| PocketFinError::Validation(e.to_string()))?;

        self.storage.transactions.add(txn.clone())?;
        self.storage.transactions.save()?;

        self.storage.log_mutation(
            Operation::Create,
            EntityType::Transaction,
            txn.id.to_string(),
            Some(format!("{} {}", txn.date.format("%Y-%m-%d"), txn.description)),
        )?;

        Ok(txn)
    }

    /// List transactions, newest first, optionally limited
    pub fn list(&self, limit: Option<usize>) -> PocketFinResult<Vec<Transaction>> {
        let mut transactions = self.storage.transactions.all()?;
        if let Some(limit) = limit {
            transactions.truncate(limit);
        }
        Ok(transactions)
    }

    /// Replace the whole collection with imported records
    pub fn import(&self, transactions: Vec<Transaction>) -> PocketFinResult<usize> {
        for txn in &transactions {
            txn.validate()
                .map_err(|e| PocketFinError::Import(e.to_string()))?;
        }

        let count = transactions.len();
        self.storage.transactions.replace_all(transactions)?;
        self.storage.transactions.save()?;

        self.storage.log_collection_mutation(
            Operation::Import,
            EntityType::Transaction,
            Some(format!("imported {} records", count)),
        )?;

        Ok(count)
    }

    /// Remove every transaction
    pub fn clear_all(&self) -> PocketFinResult<usize> {
        let count = self.storage.transactions.len()?;
        self.storage.transactions.clear()?;
        self.storage.transactions.save()?;

        self.storage.log_collection_mutation(
            Operation::Clear,
            EntityType::Transaction,
            Some(format!("cleared {} records", count)),
        )?;

        Ok(count)
    }
}
