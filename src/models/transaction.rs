//! Transaction model
//!
//! Represents a single recorded income or expense event. Amounts are always
//! positive; whether a transaction adds to or subtracts from the balance is
//! derived from its kind, never stored as a signed amount.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// Category label applied when a transaction has none
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Whether a transaction adds to or subtracts from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A recorded income or expense event
///
/// Transactions are immutable once created: there is no edit operation, and
/// records leave the collection only through a bulk replacement (bank import)
/// or a full clear.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Income or expense
    pub kind: TransactionKind,

    /// Amount, always positive
    pub amount: Money,

    /// Free-text label ("Grocery Shopping", "Salary Deposit", ...)
    #[serde(default)]
    pub description: String,

    /// Category label; absent values default to "Uncategorized"
    #[serde(default = "default_category")]
    pub category: String,

    /// When the transaction occurred
    pub date: DateTime<Utc>,
}

fn default_category() -> String {
    UNCATEGORIZED.to_string()
}

impl Transaction {
    /// Create a new transaction
    pub fn new(kind: TransactionKind, amount: Money, date: DateTime<Utc>) -> Self {
        Self {
            id: TransactionId::new(),
            kind,
            amount,
            description: String::new(),
            category: default_category(),
            date,
        }
    }

    /// Create a transaction with all common fields
    pub fn with_details(
        kind: TransactionKind,
        amount: Money,
        date: DateTime<Utc>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        let mut txn = Self::new(kind, amount, date);
        txn.description = description.into();
        txn.set_category(category);
        txn
    }

    /// Set the category, normalizing blank labels to "Uncategorized"
    pub fn set_category(&mut self, category: impl Into<String>) {
        let category = category.into();
        self.category = if category.trim().is_empty() {
            default_category()
        } else {
            category
        };
    }

    /// Check if this is an income transaction
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Check if this is an expense transaction
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// The signed contribution of this transaction to the overall balance
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.signed_amount()
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Transaction amount must be positive, got {}", amount)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new(TransactionKind::Expense, Money::from_cents(5000), test_date());
        assert_eq!(txn.kind, TransactionKind::Expense);
        assert_eq!(txn.amount.cents(), 5000);
        assert_eq!(txn.category, UNCATEGORIZED);
        assert!(txn.description.is_empty());
    }

    #[test]
    fn test_signed_amount() {
        let income =
            Transaction::new(TransactionKind::Income, Money::from_cents(1000), test_date());
        assert!(income.is_income());
        assert_eq!(income.signed_amount().cents(), 1000);

        let expense =
            Transaction::new(TransactionKind::Expense, Money::from_cents(1000), test_date());
        assert!(expense.is_expense());
        assert_eq!(expense.signed_amount().cents(), -1000);
    }

    #[test]
    fn test_blank_category_normalized() {
        let txn = Transaction::with_details(
            TransactionKind::Expense,
            Money::from_cents(1000),
            test_date(),
            "Coffee",
            "   ",
        );
        assert_eq!(txn.category, UNCATEGORIZED);
    }

    #[test]
    fn test_validate_rejects_non_positive_amounts() {
        let zero = Transaction::new(TransactionKind::Income, Money::zero(), test_date());
        assert!(matches!(
            zero.validate(),
            Err(TransactionValidationError::NonPositiveAmount(_))
        ));

        let negative =
            Transaction::new(TransactionKind::Expense, Money::from_cents(-500), test_date());
        assert!(negative.validate().is_err());

        let positive =
            Transaction::new(TransactionKind::Expense, Money::from_cents(500), test_date());
        assert!(positive.validate().is_ok());
    }

    #[test]
    fn test_serialization() {
        let txn = Transaction::with_details(
            TransactionKind::Expense,
            Money::from_cents(3000),
            test_date(),
            "Dinner at Restaurant",
            "Dining",
        );

        let json = serde_json::to_string(&txn).unwrap();
        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn.id, deserialized.id);
        assert_eq!(txn.amount, deserialized.amount);
        assert_eq!(txn.category, deserialized.category);
        assert_eq!(txn.date, deserialized.date);
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TransactionKind::Income).unwrap(),
            "\"income\""
        );
        assert_eq!(
            serde_json::to_string(&TransactionKind::Expense).unwrap(),
            "\"expense\""
        );
    }

    #[test]
    fn test_missing_category_defaults_on_deserialize() {
        let json = format!(
            r#"{{"id":"{}","kind":"expense","amount":1500,"description":"Bus fare","date":"2024-01-15T12:00:00Z"}}"#,
            uuid::Uuid::new_v4()
        );
        let txn: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn.category, UNCATEGORIZED);
    }

    #[test]
    fn test_display() {
        let txn = Transaction::with_details(
            TransactionKind::Expense,
            Money::from_cents(5000),
            test_date(),
            "Groceries",
            "Groceries",
        );
        assert_eq!(format!("{}", txn), "2024-01-15 Groceries -$50.00");
    }
}
