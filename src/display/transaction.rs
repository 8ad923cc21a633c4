//! Transaction display formatting
//!
//! Formats the transaction register and the income/expense/balance summary.

use crate::insights::Totals;
use crate::models::Transaction;

use super::truncate;

/// Format a single transaction for display (register row)
pub fn format_register_row(txn: &Transaction) -> String {
    let kind_icon = if txn.is_income() { "+" } else { "-" };

    let description = if txn.description.is_empty() {
        "(no description)".to_string()
    } else {
        txn.description.clone()
    };

    format!(
        "{} {} {:24} {:14} {:>12}",
        kind_icon,
        txn.date.format("%Y-%m-%d"),
        truncate(&description, 24),
        truncate(&txn.category, 14),
        txn.amount.to_string()
    )
}

/// Format a list of transactions as a register
pub fn format_register(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "  {:10} {:24} {:14} {:>12}\n",
        "Date", "Description", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(68));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_register_row(txn));
        output.push('\n');
    }

    output
}

/// Format the income/expense/balance summary block
pub fn format_totals_summary(totals: &Totals, currency_symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Income:   {:>12}\n",
        totals.income.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "Expenses: {:>12}\n",
        totals.expense.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "Balance:  {:>12}\n",
        totals.balance.format_with_symbol(currency_symbol)
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights;
    use crate::models::{Money, TransactionKind};
    use chrono::{TimeZone, Utc};

    fn sample_txn() -> Transaction {
        Transaction::with_details(
            TransactionKind::Expense,
            Money::from_cents(4550),
            Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
            "Grocery Shopping",
            "Groceries",
        )
    }

    #[test]
    fn test_register_row() {
        let row = format_register_row(&sample_txn());
        assert!(row.starts_with("- 2024-01-15"));
        assert!(row.contains("Grocery Shopping"));
        assert!(row.contains("$45.50"));
    }

    #[test]
    fn test_register_empty() {
        assert_eq!(format_register(&[]), "No transactions found.\n");
    }

    #[test]
    fn test_register_has_header_and_rows() {
        let output = format_register(&[sample_txn()]);
        assert!(output.contains("Date"));
        assert!(output.contains("Amount"));
        assert!(output.contains("Grocery Shopping"));
    }

    #[test]
    fn test_totals_summary() {
        let txns = vec![
            Transaction::with_details(
                TransactionKind::Income,
                Money::from_cents(10000),
                Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap(),
                "Salary",
                "Salary",
            ),
            sample_txn(),
        ];
        let totals = insights::totals(&txns);
        let output = format_totals_summary(&totals, "$");

        assert!(output.contains("Income:"));
        assert!(output.contains("$100.00"));
        assert!(output.contains("$45.50"));
        assert!(output.contains("$54.50"));
    }
}
