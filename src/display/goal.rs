//! Goal display formatting
//!
//! Renders the goal list with progress bars and suggested contributions.

use crate::services::GoalOverview;

use super::chart::format_bar;
use super::{format_percentage, truncate};

const PROGRESS_WIDTH: usize = 20;

/// Format a single goal with its metrics
pub fn format_goal_entry(entry: &GoalOverview) -> String {
    let goal = &entry.goal;

    let mut output = String::new();
    output.push_str(&format!(
        "{}  [{}] {}\n",
        goal.id,
        goal.priority,
        truncate(&goal.name, 40)
    ));
    output.push_str(&format!(
        "  {} {:>6}  {} of {}\n",
        format_bar(entry.progress, 100.0, PROGRESS_WIDTH),
        format_percentage(entry.progress),
        goal.current_amount,
        goal.target_amount
    ));

    let status = if goal.is_met() {
        "goal met".to_string()
    } else {
        format!("save {}/month", entry.suggested_monthly)
    };
    output.push_str(&format!(
        "  due {}  ({})\n",
        goal.deadline.format("%Y-%m-%d"),
        status
    ));

    output
}

/// Format the full goal overview list
pub fn format_goal_overview(entries: &[GoalOverview]) -> String {
    if entries.is_empty() {
        return "No goals yet. Create one with 'pocketfin goal add'.\n".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format_goal_entry(entry));
        output.push('\n');
    }

    output
}
