//! Display formatting for terminal output
//!
//! Renders stored records and derived metrics as plain text. All layout is
//! manual column alignment; nothing here computes, it only formats what the
//! insight functions return.

pub mod chart;
pub mod goal;
pub mod transaction;

pub use chart::{format_bar, format_category_breakdown, format_period_chart};
pub use goal::format_goal_overview;
pub use transaction::{format_register, format_totals_summary};

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Truncate a string to a maximum length with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
