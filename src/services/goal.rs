//! Goal service
//!
//! Business logic for savings goals: creation, contributions, deletion, and
//! the overview that joins each stored goal with its derived metrics. The
//! current date enters the calculation only here, so the metric functions
//! stay deterministic under test.

use chrono::{Local, NaiveDate};

use crate::audit::{EntityType, Operation};
use crate::error::{PocketFinError, PocketFinResult};
use crate::insights::{progress_percentage, suggested_monthly_contribution};
use crate::models::{Goal, GoalId, Money, Priority};
use crate::storage::Storage;

/// Input for creating a new goal
#[derive(Debug, Clone)]
pub struct CreateGoalInput {
    pub name: String,
    pub target_amount: Money,
    pub deadline: NaiveDate,
    pub priority: Priority,
}

/// A goal joined with its derived display metrics
#[derive(Debug, Clone)]
pub struct GoalOverview {
    pub goal: Goal,
    /// Progress toward the target, clamped to [0, 100]
    pub progress: f64,
    /// Suggested contribution per remaining month
    pub suggested_monthly: Money,
}

/// Service for goal management
pub struct GoalService<'a> {
    storage: &'a Storage,
}

impl<'a> GoalService<'a> {
    /// Create a new goal service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new goal
    pub fn create(&self, input: CreateGoalInput) -> PocketFinResult<Goal> {
        let goal = Goal::new(
            input.name.trim(),
            input.target_amount,
            input.deadline,
            input.priority,
        );

        goal.validate()
            .map_err(|e| PocketFinError::Validation(e.to_string()))?;

        self.storage.goals.upsert(goal.clone())?;
        self.storage.goals.save()?;

        self.storage.log_mutation(
            Operation::Create,
            EntityType::Goal,
            goal.id.to_string(),
            Some(goal.name.clone()),
        )?;

        Ok(goal)
    }

    /// Add a contribution to a goal
    ///
    /// The stored amount may pass the target; only progress display clamps.
    pub fn contribute(&self, id: GoalId, amount: Money) -> PocketFinResult<Goal> {
        if !amount.is_positive() {
            return Err(PocketFinError::Validation(format!(
                "Contribution amount must be positive, got {}",
                amount
            )));
        }

        let mut goal = self
            .storage
            .goals
            .get(id)?
            .ok_or_else(|| PocketFinError::goal_not_found(id.to_string()))?;

        goal.contribute(amount);
        self.storage.goals.upsert(goal.clone())?;
        self.storage.goals.save()?;

        self.storage.log_mutation(
            Operation::Update,
            EntityType::Goal,
            goal.id.to_string(),
            Some(format!("contributed {}", amount)),
        )?;

        Ok(goal)
    }

    /// Delete a goal
    pub fn delete(&self, id: GoalId) -> PocketFinResult<Goal> {
        let removed = self
            .storage
            .goals
            .remove(id)?
            .ok_or_else(|| PocketFinError::goal_not_found(id.to_string()))?;
        self.storage.goals.save()?;

        self.storage.log_mutation(
            Operation::Delete,
            EntityType::Goal,
            removed.id.to_string(),
            Some(removed.name.clone()),
        )?;

        Ok(removed)
    }

    /// Find a goal by ID string (full UUID or prefixed short form)
    pub fn find(&self, identifier: &str) -> PocketFinResult<Option<Goal>> {
        if let Ok(id) = identifier.parse::<GoalId>() {
            return self.storage.goals.get(id);
        }
        // Fall back to matching the short display form
        let goals = self.storage.goals.all()?;
        Ok(goals.into_iter().find(|g| g.id.to_string() == identifier))
    }

    /// All goals joined with their metrics, as of today
    pub fn overview(&self) -> PocketFinResult<Vec<GoalOverview>> {
        self.overview_as_of(Local::now().date_naive())
    }

    /// All goals joined with their metrics, as of the given date
    pub fn overview_as_of(&self, today: NaiveDate) -> PocketFinResult<Vec<GoalOverview>> {
        let goals = self.storage.goals.all()?;
        Ok(goals
            .into_iter()
            .map(|goal| {
                let progress = progress_percentage(goal.current_amount, goal.target_amount);
                let suggested_monthly = suggested_monthly_contribution(
                    goal.current_amount,
                    goal.target_amount,
                    goal.deadline,
                    today,
                );
                GoalOverview {
                    goal,
                    progress,
                    suggested_monthly,
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::PocketFinPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketFinPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn goal_input(name: &str, target_cents: i64) -> CreateGoalInput {
        CreateGoalInput {
            name: name.to_string(),
            target_amount: Money::from_cents(target_cents),
            deadline: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            priority: Priority::Medium,
        }
    }

    #[test]
    fn test_create_goal() {
        let (_temp_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);

        let goal = service.create(goal_input("Vacation", 120000)).unwrap();
        assert_eq!(goal.name, "Vacation");
        assert!(goal.current_amount.is_zero());
    }

    #[test]
    fn test_create_goal_validation() {
        let (_temp_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);

        let result = service.create(goal_input("  ", 120000));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("cannot be empty"));

        let result = service.create(goal_input("Vacation", 0));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("must be positive"));
    }

    #[test]
    fn test_contribute() {
        let (_temp_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);

        let goal = service.create(goal_input("Vacation", 120000)).unwrap();
        let updated = service.contribute(goal.id, Money::from_cents(30000)).unwrap();
        assert_eq!(updated.current_amount.cents(), 30000);

        // Contributions past the target are stored as entered
        let updated = service.contribute(goal.id, Money::from_cents(100000)).unwrap();
        assert_eq!(updated.current_amount.cents(), 130000);
        assert!(updated.is_met());
    }

    #[test]
    fn test_contribute_rejects_non_positive() {
        let (_temp_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);

        let goal = service.create(goal_input("Vacation", 120000)).unwrap();
        assert!(service.contribute(goal.id, Money::zero()).is_err());
        assert!(service.contribute(goal.id, Money::from_cents(-100)).is_err());
    }

    #[test]
    fn test_contribute_unknown_goal() {
        let (_temp_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);

        let result = service.contribute(GoalId::new(), Money::from_cents(100));
        assert!(matches!(result, Err(PocketFinError::NotFound { .. })));
    }

    #[test]
    fn test_delete_goal() {
        let (_temp_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);

        let goal = service.create(goal_input("Vacation", 120000)).unwrap();
        let removed = service.delete(goal.id).unwrap();
        assert_eq!(removed.id, goal.id);

        assert!(matches!(
            service.delete(goal.id),
            Err(PocketFinError::NotFound { .. })
        ));
    }

    #[test]
    fn test_find_by_short_form() {
        let (_temp_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);

        let goal = service.create(goal_input("Vacation", 120000)).unwrap();
        let found = service.find(&goal.id.to_string()).unwrap();
        assert_eq!(found.unwrap().id, goal.id);

        assert!(service.find("goal-00000000").unwrap().is_none());
    }

    #[test]
    fn test_overview_metrics() {
        let (_temp_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);

        // $1200 target, deadline 12 months after the injected "today"
        let input = CreateGoalInput {
            name: "Emergency Fund".to_string(),
            target_amount: Money::from_cents(120000),
            deadline: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            priority: Priority::High,
        };
        let goal = service.create(input).unwrap();
        service.contribute(goal.id, Money::from_cents(30000)).unwrap();

        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let overview = service.overview_as_of(today).unwrap();
        assert_eq!(overview.len(), 1);

        let entry = &overview[0];
        assert!((entry.progress - 25.0).abs() < f64::EPSILON);
        // $900 remaining over 12 months
        assert_eq!(entry.suggested_monthly.cents(), 7500);
    }

    #[test]
    fn test_goal_mutations_are_audited() {
        let (_temp_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);

        let goal = service.create(goal_input("Vacation", 120000)).unwrap();
        service.contribute(goal.id, Money::from_cents(100)).unwrap();
        service.delete(goal.id).unwrap();

        let ops: Vec<_> = storage
            .audit()
            .read_all()
            .unwrap()
            .into_iter()
            .map(|e| e.operation)
            .collect();
        assert_eq!(ops, vec![Operation::Create, Operation::Update, Operation::Delete]);
    }
}
