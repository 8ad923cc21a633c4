//! Simulated bank connection
//!
//! A scripted stand-in for a real account-aggregation flow: a fixed bank
//! catalog, an OTP check that accepts any 4-digit code, and a deterministic
//! sample statement that replaces the stored transaction collection on
//! import. Nothing here talks to a network.

use chrono::{Duration, NaiveDate};

use crate::error::{PocketFinError, PocketFinResult};
use crate::models::{Money, Transaction, TransactionKind};
use crate::storage::Storage;

use super::transaction::TransactionService;

/// A bank in the connect catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bank {
    pub id: &'static str,
    pub name: &'static str,
}

/// The fixed catalog offered by the connect flow
pub const BANKS: &[Bank] = &[
    Bank { id: "hdfc", name: "HDFC Bank" },
    Bank { id: "sbi", name: "State Bank of India" },
    Bank { id: "icici", name: "ICICI Bank" },
    Bank { id: "axis", name: "Axis Bank" },
    Bank { id: "kotak", name: "Kotak Mahindra Bank" },
    Bank { id: "yes", name: "Yes Bank" },
];

/// Look up a bank by id or name (case-insensitive)
pub fn find_bank(identifier: &str) -> Option<&'static Bank> {
    let needle = identifier.trim().to_lowercase();
    BANKS
        .iter()
        .find(|b| b.id == needle || b.name.to_lowercase() == needle)
}

/// Check a one-time passcode
///
/// Any 4-digit code passes; the step is theater, the shape check is real.
pub fn verify_otp(otp: &str) -> PocketFinResult<()> {
    let otp = otp.trim();
    if otp.len() == 4 && otp.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(PocketFinError::Validation(
            "OTP must be exactly 4 digits".to_string(),
        ))
    }
}

/// One row of the sample statement catalog
struct SampleRecord {
    kind: TransactionKind,
    cents: i64,
    description: &'static str,
    category: &'static str,
    days_ago: i64,
    hour: u32,
}

/// The sample statement: roughly 30% income, realistic labels, dates spread
/// over the 30 days before `today`
const SAMPLE_RECORDS: &[SampleRecord] = &[
    SampleRecord { kind: TransactionKind::Income, cents: 250000, description: "Salary Deposit", category: "Salary", days_ago: 28, hour: 9 },
    SampleRecord { kind: TransactionKind::Expense, cents: 8240, description: "Grocery Shopping", category: "Groceries", days_ago: 27, hour: 18 },
    SampleRecord { kind: TransactionKind::Expense, cents: 1599, description: "Netflix Subscription", category: "Entertainment", days_ago: 25, hour: 7 },
    SampleRecord { kind: TransactionKind::Expense, cents: 6420, description: "Dinner at Restaurant", category: "Dining", days_ago: 22, hour: 20 },
    SampleRecord { kind: TransactionKind::Expense, cents: 1875, description: "Uber Ride", category: "Transport", days_ago: 20, hour: 23 },
    SampleRecord { kind: TransactionKind::Income, cents: 60000, description: "Freelance Payment", category: "Freelance", days_ago: 18, hour: 11 },
    SampleRecord { kind: TransactionKind::Expense, cents: 9630, description: "Electricity Bill", category: "Utilities", days_ago: 16, hour: 8 },
    SampleRecord { kind: TransactionKind::Expense, cents: 12345, description: "Amazon Purchase", category: "Shopping", days_ago: 14, hour: 15 },
    SampleRecord { kind: TransactionKind::Expense, cents: 560, description: "Coffee Shop", category: "Food", days_ago: 12, hour: 8 },
    SampleRecord { kind: TransactionKind::Expense, cents: 4500, description: "Gym Membership", category: "Health", days_ago: 10, hour: 6 },
    SampleRecord { kind: TransactionKind::Income, cents: 12050, description: "Dividend Payment", category: "Investment", days_ago: 9, hour: 10 },
    SampleRecord { kind: TransactionKind::Expense, cents: 4210, description: "Phone Bill", category: "Utilities", days_ago: 7, hour: 9 },
    SampleRecord { kind: TransactionKind::Expense, cents: 2850, description: "Movie Tickets", category: "Entertainment", days_ago: 4, hour: 19 },
    SampleRecord { kind: TransactionKind::Income, cents: 3575, description: "Interest", category: "Savings", days_ago: 2, hour: 0 },
    SampleRecord { kind: TransactionKind::Expense, cents: 7685, description: "Grocery Shopping", category: "Groceries", days_ago: 1, hour: 17 },
];

/// Materialize the sample statement relative to `today`
pub fn sample_transactions(today: NaiveDate) -> Vec<Transaction> {
    SAMPLE_RECORDS
        .iter()
        .map(|r| {
            let date = (today - Duration::days(r.days_ago))
                .and_hms_opt(r.hour, 30, 0)
                .unwrap_or_else(|| today.and_hms_opt(12, 0, 0).unwrap())
                .and_utc();
            Transaction::with_details(
                r.kind,
                Money::from_cents(r.cents),
                date,
                r.description,
                r.category,
            )
        })
        .collect()
}

/// Service driving the simulated connect flow
pub struct BankConnectService<'a> {
    storage: &'a Storage,
}

impl<'a> BankConnectService<'a> {
    /// Create a new bank connect service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Complete a connection: verify the OTP, then import the bank's sample
    /// statement, replacing the stored transaction collection
    ///
    /// Returns the number of imported records.
    pub fn connect(&self, bank: &Bank, otp: &str, today: NaiveDate) -> PocketFinResult<usize> {
        verify_otp(otp)?;

        let transactions = sample_transactions(today);
        TransactionService::new(self.storage)
            .import(transactions)
            .map_err(|e| {
                PocketFinError::Import(format!(
                    "Failed to import statement from {}: {}",
                    bank.name, e
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::PocketFinPaths;
    use crate::insights;
    use tempfile::TempDir;

    #[test]
    fn test_find_bank() {
        assert_eq!(find_bank("hdfc").unwrap().name, "HDFC Bank");
        assert_eq!(find_bank("Axis Bank").unwrap().id, "axis");
        assert_eq!(find_bank("YES BANK").unwrap().id, "yes");
        assert!(find_bank("monzo").is_none());
    }

    #[test]
    fn test_verify_otp() {
        assert!(verify_otp("1234").is_ok());
        assert!(verify_otp(" 0000 ").is_ok());
        assert!(verify_otp("123").is_err());
        assert!(verify_otp("12345").is_err());
        assert!(verify_otp("12a4").is_err());
        assert!(verify_otp("").is_err());
    }

    #[test]
    fn test_sample_transactions_shape() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let txns = sample_transactions(today);

        assert_eq!(txns.len(), 15);
        assert!(txns.iter().all(|t| t.validate().is_ok()));

        // Roughly 30% income, as in the generator this mirrors
        let income_count = txns.iter().filter(|t| t.is_income()).count();
        assert_eq!(income_count, 4);

        // All dates fall inside the 30 days before `today`
        let earliest = today - Duration::days(30);
        for t in &txns {
            let d = t.date.date_naive();
            assert!(d >= earliest && d < today, "date {} outside window", d);
        }
    }

    #[test]
    fn test_sample_transactions_deterministic() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let a = sample_transactions(today);
        let b = sample_transactions(today);

        let amounts_a: Vec<_> = a.iter().map(|t| (t.amount, t.date)).collect();
        let amounts_b: Vec<_> = b.iter().map(|t| (t.amount, t.date)).collect();
        assert_eq!(amounts_a, amounts_b);
    }

    #[test]
    fn test_sample_statement_aggregates_cleanly() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let txns = sample_transactions(today);
        let totals = insights::totals(&txns);

        assert!(totals.income.is_positive());
        assert!(totals.expense.is_positive());
        assert_eq!(totals.balance, totals.income - totals.expense);

        let by_category = insights::group_by_category(&txns);
        assert!(by_category.contains_key("Groceries"));
        assert!(!by_category.contains_key("Salary"));
    }

    #[test]
    fn test_connect_replaces_collection() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketFinPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        let service = BankConnectService::new(&storage);
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let count = service.connect(&BANKS[0], "1234", today).unwrap();
        assert_eq!(count, 15);
        assert_eq!(storage.transactions.len().unwrap(), 15);
    }

    #[test]
    fn test_connect_rejects_bad_otp() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketFinPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        let service = BankConnectService::new(&storage);
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let result = service.connect(&BANKS[0], "12", today);
        assert!(result.is_err());
        assert_eq!(storage.transactions.len().unwrap(), 0);
    }
}
