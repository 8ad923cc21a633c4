//! Storage layer for PocketFin
//!
//! JSON file storage with atomic writes. The browser-style fixed keys become
//! fixed files: the transaction collection lives in data/transactions.json
//! and the goal collection in data/goals.json, each a JSON array wrapped in
//! a small document. Calculation code never touches this layer; it receives
//! already-decoded records from the services.

pub mod file_io;
pub mod goals;
pub mod transactions;

pub use file_io::{read_json, write_json_atomic};
pub use goals::GoalStore;
pub use transactions::TransactionStore;

use crate::audit::{AuditEntry, AuditLogger, EntityType, Operation};
use crate::config::paths::PocketFinPaths;
use crate::error::PocketFinError;

/// Main storage coordinator that provides access to all stores
pub struct Storage {
    paths: PocketFinPaths,
    pub transactions: TransactionStore,
    pub goals: GoalStore,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: PocketFinPaths) -> Result<Self, PocketFinError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionStore::new(paths.transactions_file()),
            goals: GoalStore::new(paths.goals_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &PocketFinPaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), PocketFinError> {
        self.transactions.load()?;
        self.goals.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), PocketFinError> {
        self.transactions.save()?;
        self.goals.save()?;
        Ok(())
    }

    /// Record a mutation against a single entity in the audit log
    pub fn log_mutation(
        &self,
        operation: Operation,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        detail: Option<String>,
    ) -> Result<(), PocketFinError> {
        self.audit
            .log(&AuditEntry::new(operation, entity_type, entity_id, detail))
    }

    /// Record a collection-wide mutation in the audit log
    pub fn log_collection_mutation(
        &self,
        operation: Operation,
        entity_type: EntityType,
        detail: Option<String>,
    ) -> Result<(), PocketFinError> {
        self.audit
            .log(&AuditEntry::collection(operation, entity_type, detail))
    }
}
