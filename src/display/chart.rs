//! Terminal charts for spending analysis
//!
//! Renders the weekly/monthly buckets and the category breakdown as
//! horizontal bar charts, scaled to the largest value on screen.

use crate::insights::PeriodBucket;
use crate::models::Money;

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

const BAR_WIDTH: usize = 24;

/// Render period buckets as paired income/expense bars
pub fn format_period_chart(buckets: &[PeriodBucket]) -> String {
    if buckets.is_empty() {
        return "No data available.\n".to_string();
    }

    let max_cents = buckets
        .iter()
        .flat_map(|b| [b.income.cents(), b.expense.cents()])
        .max()
        .unwrap_or(0) as f64;

    let mut output = String::new();
    for bucket in buckets {
        output.push_str(&format!("{}\n", bucket.label));
        output.push_str(&format!(
            "  in  {} {:>12}\n",
            format_bar(bucket.income.cents() as f64, max_cents, BAR_WIDTH),
            bucket.income.to_string()
        ));
        output.push_str(&format!(
            "  out {} {:>12}\n",
            format_bar(bucket.expense.cents() as f64, max_cents, BAR_WIDTH),
            bucket.expense.to_string()
        ));
    }

    output
}

/// Render the category breakdown as bars, largest spend first
///
/// The insight map is unordered; display imposes the descending sort.
pub fn format_category_breakdown(breakdown: &std::collections::HashMap<String, Money>) -> String {
    if breakdown.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut entries: Vec<(&String, &Money)> = breakdown.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    let max_cents = entries
        .first()
        .map(|(_, m)| m.cents())
        .unwrap_or(0) as f64;

    let mut output = String::new();
    for (category, amount) in entries {
        output.push_str(&format!(
            "{:16} {} {:>12}\n",
            super::truncate(category, 16),
            format_bar(amount.cents() as f64, max_cents, BAR_WIDTH),
            amount.to_string()
        ));
    }

    output
}
