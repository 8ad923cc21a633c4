//! Service layer for PocketFin
//!
//! Business logic between the CLI handlers and the storage layer: validation,
//! persistence, audit logging, and the join between stored records and the
//! derived metrics in [`crate::insights`].

pub mod bank;
pub mod goal;
pub mod transaction;

pub use bank::{Bank, BankConnectService, BANKS};
pub use goal::{CreateGoalInput, GoalOverview, GoalService};
pub use transaction::{CreateTransactionInput, TransactionService};
