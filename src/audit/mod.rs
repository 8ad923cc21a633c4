//! Audit logging for PocketFin
//!
//! Records every data mutation (entry, contribution, import, clear) to an
//! append-only JSONL log so the history of a dataset can be reconstructed.

pub mod entry;
pub mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
