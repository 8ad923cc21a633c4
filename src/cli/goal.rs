//! Goal CLI commands
//!
//! Implements CLI commands for savings goal management.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::display::goal::format_goal_overview;
use crate::error::{PocketFinError, PocketFinResult};
use crate::models::{Money, Priority};
use crate::services::{CreateGoalInput, GoalService};
use crate::storage::Storage;

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a new savings goal
    Add {
        /// Goal name
        name: String,
        /// Target amount (e.g., "1200.00" or "1200")
        target: String,
        /// Deadline (YYYY-MM-DD)
        deadline: String,
        /// Priority (low, medium, high)
        #[arg(short, long, default_value = "medium")]
        priority: String,
    },
    /// List goals with progress and suggested contributions
    List,
    /// Add money to a goal
    Contribute {
        /// Goal ID (full UUID or short form like "goal-1234abcd")
        goal: String,
        /// Amount to add (e.g., "50.00")
        amount: String,
    },
    /// Delete a goal
    Delete {
        /// Goal ID (full UUID or short form like "goal-1234abcd")
        goal: String,
    },
}

/// Handle a goal command
pub fn handle_goal_command(storage: &Storage, cmd: GoalCommands) -> PocketFinResult<()> {
    let service = GoalService::new(storage);

    match cmd {
        GoalCommands::Add {
            name,
            target,
            deadline,
            priority,
        } => {
            let target_amount = Money::parse(&target).map_err(|e| {
                PocketFinError::Validation(format!(
                    "Invalid target amount: '{}'. Use format like '1200.00'. Error: {}",
                    target, e
                ))
            })?;

            let deadline = NaiveDate::parse_from_str(&deadline, "%Y-%m-%d").map_err(|e| {
                PocketFinError::Validation(format!(
                    "Invalid deadline: '{}'. Use YYYY-MM-DD. Error: {}",
                    deadline, e
                ))
            })?;

            let priority = Priority::parse(&priority).ok_or_else(|| {
                PocketFinError::Validation(format!(
                    "Invalid priority: '{}'. Valid priorities: low, medium, high",
                    priority
                ))
            })?;

            let goal = service.create(CreateGoalInput {
                name,
                target_amount,
                deadline,
                priority,
            })?;

            println!("Created goal: {}", goal.name);
            println!("  Target:   {}", goal.target_amount);
            println!("  Deadline: {}", goal.deadline.format("%Y-%m-%d"));
            println!("  Priority: {}", goal.priority);
            println!("  ID:       {}", goal.id);
        }

        GoalCommands::List => {
            let overview = service.overview()?;
            print!("{}", format_goal_overview(&overview));
        }

        GoalCommands::Contribute { goal, amount } => {
            let amount = Money::parse(&amount).map_err(|e| {
                PocketFinError::Validation(format!(
                    "Invalid amount: '{}'. Use format like '50.00'. Error: {}",
                    amount, e
                ))
            })?;

            let found = service
                .find(&goal)?
                .ok_or_else(|| PocketFinError::goal_not_found(&goal))?;

            let updated = service.contribute(found.id, amount)?;
            println!(
                "Added {} to '{}' ({} of {})",
                amount, updated.name, updated.current_amount, updated.target_amount
            );
            if updated.is_met() {
                println!("Goal met!");
            }
        }

        GoalCommands::Delete { goal } => {
            let found = service
                .find(&goal)?
                .ok_or_else(|| PocketFinError::goal_not_found(&goal))?;

            let removed = service.delete(found.id)?;
            println!("Deleted goal: {}", removed.name);
        }
    }

    Ok(())
}
