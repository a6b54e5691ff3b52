//! Goal service

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{NestEggError, NestEggResult};
use crate::models::{Goal, Money};
use crate::storage::Storage;

pub struct GoalService<'a> {
    storage: &'a Storage,
}

impl<'a> GoalService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn add(
        &self,
        name: &str,
        target: Money,
        deadline: Option<NaiveDate>,
    ) -> NestEggResult<Goal> {
        let name = name.trim();
        if name.is_empty() {
            return Err(NestEggError::Validation("Goal name cannot be empty".into()));
        }
        if !target.is_positive() {
            return Err(NestEggError::Validation(format!(
                "Goal target must be positive: {}",
                target
            )));
        }
        if self.storage.goals.find(name)?.is_some() {
            return Err(NestEggError::Validation(format!(
                "A goal named '{}' already exists",
                name
            )));
        }

        let mut goal = Goal::new(name, target);
        goal.deadline = deadline;

        self.storage.goals.upsert(goal.clone())?;
        self.storage.goals.save()?;
        self.storage.log_create(
            EntityType::Goal,
            goal.id.to_string(),
            Some(goal.name.clone()),
            &goal,
        )?;

        Ok(goal)
    }

    pub fn find(&self, reference: &str) -> NestEggResult<Goal> {
        self.storage
            .goals
            .find(reference)?
            .ok_or_else(|| NestEggError::goal_not_found(reference))
    }

    pub fn list(&self) -> NestEggResult<Vec<Goal>> {
        self.storage.goals.get_all()
    }

    /// Add `amount` to what has been saved toward the goal
    pub fn contribute(&self, reference: &str, amount: Money) -> NestEggResult<Goal> {
        self.modify(reference, |goal| goal.contribute(amount))
    }

    pub fn set_current(&self, reference: &str, amount: Money) -> NestEggResult<Goal> {
        if amount.is_negative() {
            return Err(NestEggError::Validation(format!(
                "Goal balance cannot be negative: {}",
                amount
            )));
        }
        self.modify(reference, |goal| goal.set_current(amount))
    }

    pub fn remove(&self, reference: &str) -> NestEggResult<Goal> {
        let goal = self.find(reference)?;
        self.storage.goals.delete(goal.id)?;
        self.storage.goals.save()?;
        self.storage.log_delete(
            EntityType::Goal,
            goal.id.to_string(),
            Some(goal.name.clone()),
            &goal,
        )?;
        Ok(goal)
    }

    fn modify(&self, reference: &str, change: impl FnOnce(&mut Goal)) -> NestEggResult<Goal> {
        let before = self.find(reference)?;
        let mut updated = before.clone();
        change(&mut updated);

        self.storage.goals.upsert(updated.clone())?;
        self.storage.goals.save()?;
        self.storage.log_update(
            EntityType::Goal,
            updated.id.to_string(),
            Some(updated.name.clone()),
            &before,
            &updated,
        )?;

        Ok(updated)
    }
}
