//! Savings goal model
//!
//! A goal is a savings target with a deadline and running progress. The
//! current amount is mutated only through contributions and is deliberately
//! not capped at the target: clamping is a display concern, storage keeps
//! what the user actually put in.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;

/// How urgent a goal is, for display ordering and emphasis
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Parse a priority from user input (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

/// A savings target with a deadline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier
    pub id: GoalId,

    /// Free-text label ("Emergency Fund", "Trip to Lisbon", ...)
    pub name: String,

    /// The amount to save
    pub target_amount: Money,

    /// Amount saved so far; may exceed the target
    #[serde(default)]
    pub current_amount: Money,

    /// Calendar date the goal should be met by (a date, not a datetime)
    pub deadline: NaiveDate,

    /// Urgency of the goal
    #[serde(default)]
    pub priority: Priority,

    /// When the goal was created (informational only)
    pub created_at: DateTime<Utc>,
}

impl Goal {
    /// Create a new goal
    pub fn new(
        name: impl Into<String>,
        target_amount: Money,
        deadline: NaiveDate,
        priority: Priority,
    ) -> Self {
        Self {
            id: GoalId::new(),
            name: name.into(),
            target_amount,
            current_amount: Money::zero(),
            deadline,
            priority,
            created_at: Utc::now(),
        }
    }

    /// Add a contribution to the goal
    ///
    /// The stored amount is allowed to pass the target; progress display
    /// clamps, storage does not.
    pub fn contribute(&mut self, amount: Money) {
        self.current_amount += amount;
    }

    /// The amount still needed to reach the target (negative when overfunded)
    pub fn remaining(&self) -> Money {
        self.target_amount - self.current_amount
    }

    /// Check whether the saved amount has reached the target
    pub fn is_met(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    /// Validate the goal
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }
        if self.name.len() > 256 {
            return Err(GoalValidationError::NameTooLong(self.name.len()));
        }
        if !self.target_amount.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget(self.target_amount));
        }
        if self.current_amount.is_negative() {
            return Err(GoalValidationError::NegativeCurrent(self.current_amount));
        }
        Ok(())
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} of {} by {}",
            self.name,
            self.current_amount,
            self.target_amount,
            self.deadline.format("%Y-%m-%d")
        )
    }
}

/// Validation errors for goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyName,
    NameTooLong(usize),
    NonPositiveTarget(Money),
    NegativeCurrent(Money),
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Goal name cannot exceed 256 characters (got {})", len)
            }
            Self::NonPositiveTarget(amount) => {
                write!(f, "Goal target amount must be positive, got {}", amount)
            }
            Self::NegativeCurrent(amount) => {
                write!(f, "Goal saved amount cannot be negative, got {}", amount)
            }
        }
    }
}

impl std::error::Error for GoalValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_goal() -> Goal {
        Goal::new(
            "Emergency Fund",
            Money::from_cents(120000),
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            Priority::High,
        )
    }

    #[test]
    fn test_new_goal() {
        let goal = sample_goal();
        assert_eq!(goal.name, "Emergency Fund");
        assert_eq!(goal.target_amount.cents(), 120000);
        assert!(goal.current_amount.is_zero());
        assert_eq!(goal.priority, Priority::High);
        assert!(goal.validate().is_ok());
    }

    #[test]
    fn test_contribute_accumulates() {
        let mut goal = sample_goal();
        goal.contribute(Money::from_cents(30000));
        goal.contribute(Money::from_cents(20000));
        assert_eq!(goal.current_amount.cents(), 50000);
        assert_eq!(goal.remaining().cents(), 70000);
        assert!(!goal.is_met());
    }

    #[test]
    fn test_contribution_may_exceed_target() {
        let mut goal = sample_goal();
        goal.contribute(Money::from_cents(150000));
        assert_eq!(goal.current_amount.cents(), 150000);
        assert!(goal.is_met());
        assert!(goal.remaining().is_negative());
        // Overfunding is not a validation failure
        assert!(goal.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let mut goal = sample_goal();
        goal.name = "  ".to_string();
        assert_eq!(goal.validate(), Err(GoalValidationError::EmptyName));

        let mut goal = sample_goal();
        goal.name = "x".repeat(300);
        assert!(matches!(
            goal.validate(),
            Err(GoalValidationError::NameTooLong(300))
        ));

        let mut goal = sample_goal();
        goal.target_amount = Money::zero();
        assert!(matches!(
            goal.validate(),
            Err(GoalValidationError::NonPositiveTarget(_))
        ));

        let mut goal = sample_goal();
        goal.current_amount = Money::from_cents(-1);
        assert!(matches!(
            goal.validate(),
            Err(GoalValidationError::NegativeCurrent(_))
        ));
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!(Priority::parse("low"), Some(Priority::Low));
        assert_eq!(Priority::parse("MEDIUM"), Some(Priority::Medium));
        assert_eq!(Priority::parse("High"), Some(Priority::High));
        assert_eq!(Priority::parse("urgent"), None);
    }

    #[test]
    fn test_priority_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
    }

    #[test]
    fn test_serialization() {
        let goal = sample_goal();
        let json = serde_json::to_string(&goal).unwrap();
        let deserialized: Goal = serde_json::from_str(&json).unwrap();

        assert_eq!(goal.id, deserialized.id);
        assert_eq!(goal.target_amount, deserialized.target_amount);
        assert_eq!(goal.deadline, deserialized.deadline);
        assert_eq!(goal.priority, deserialized.priority);
    }

    #[test]
    fn test_display() {
        let mut goal = sample_goal();
        goal.contribute(Money::from_cents(45000));
        assert_eq!(
            format!("{}", goal),
            "Emergency Fund: $450.00 of $1200.00 by 2025-06-01"
        );
    }
}
