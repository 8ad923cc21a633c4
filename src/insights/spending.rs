//! Transaction aggregation for summaries and charts
//!
//! Reduces a transaction list into overall totals, chart-ready time buckets,
//! and a per-category expense breakdown. Inputs are never mutated; the sort
//! for period grouping happens on a scratch list of references.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::transaction::UNCATEGORIZED;
use crate::models::{Money, Transaction};

/// Overall income, expense, and balance figures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub income: Money,
    pub expense: Money,
    pub balance: Money,
}

/// Sum income and expense amounts over the whole collection
///
/// The balance is income minus expense; amounts are stored unsigned, so the
/// kind decides the direction. An empty slice yields all zeros.
pub fn totals(transactions: &[Transaction]) -> Totals {
    let income: Money = transactions
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum();
    let expense: Money = transactions
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount)
        .sum();

    Totals {
        income,
        expense,
        balance: income - expense,
    }
}

/// Time resolution for period grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodMode {
    Weekly,
    Monthly,
}

impl PeriodMode {
    /// Parse a mode from user input (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "weekly" => Some(Self::Weekly),
            "monthly" => Some(Self::Monthly),
            _ => None,
        }
    }
}

impl std::fmt::Display for PeriodMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weekly => write!(f, "weekly"),
            Self::Monthly => write!(f, "monthly"),
        }
    }
}

/// Income and expense sums for one time bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodBucket {
    pub label: String,
    pub income: Money,
    pub expense: Money,
}

/// Bucket key: the week-start date, or the (year, month) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum PeriodKey {
    Week(NaiveDate),
    Month(i32, u32),
}

/// Group transactions into weekly or monthly buckets for charting
///
/// Transactions are stably sorted ascending by date first, so buckets come
/// out in chronological order of first appearance. Weeks start on Sunday;
/// the weekly label is `Week {day}/{month}` of the week-start date, the
/// monthly label is the short month name. Periods with no transactions are
/// simply absent from the output.
pub fn group_by_period(transactions: &[Transaction], mode: PeriodMode) -> Vec<PeriodBucket> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by_key(|t| t.date);

    let mut buckets: Vec<PeriodBucket> = Vec::new();
    let mut index: HashMap<PeriodKey, usize> = HashMap::new();

    for txn in sorted {
        let date = txn.date.date_naive();
        let (key, label) = match mode {
            PeriodMode::Weekly => {
                let week_start =
                    date - Duration::days(date.weekday().num_days_from_sunday() as i64);
                (
                    PeriodKey::Week(week_start),
                    format!("Week {}/{}", week_start.day(), week_start.month()),
                )
            }
            PeriodMode::Monthly => (
                PeriodKey::Month(date.year(), date.month()),
                date.format("%b").to_string(),
            ),
        };

        let slot = *index.entry(key).or_insert_with(|| {
            buckets.push(PeriodBucket {
                label,
                income: Money::zero(),
                expense: Money::zero(),
            });
            buckets.len() - 1
        });

        match txn.kind {
            crate::models::TransactionKind::Income => buckets[slot].income += txn.amount,
            crate::models::TransactionKind::Expense => buckets[slot].expense += txn.amount,
        }
    }

    buckets
}

/// Sum expense amounts per category
///
/// Income records are excluded by design; the breakdown answers "where did
/// the money go". Blank category labels count under "Uncategorized". The
/// returned map carries no ordering; callers sort for display.
pub fn group_by_category(transactions: &[Transaction]) -> HashMap<String, Money> {
    let mut by_category: HashMap<String, Money> = HashMap::new();

    for txn in transactions.iter().filter(|t| t.is_expense()) {
        let label = if txn.category.trim().is_empty() {
            UNCATEGORIZED.to_string()
        } else {
            txn.category.clone()
        };
        *by_category.entry(label).or_insert(Money::zero()) += txn.amount;
    }

    by_category
}
