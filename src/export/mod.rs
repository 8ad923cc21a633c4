//! Export module for PocketFin
//!
//! Writes the transaction collection out in CSV or JSON format.

pub mod csv;
pub mod json;

pub use self::csv::export_transactions_csv;
pub use self::json::export_transactions_json;
