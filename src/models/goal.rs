//! Financial goal model
//!
//! A goal is a target amount the user is saving toward. The deadline is
//! informational; progress estimates never compare against it.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,
    pub name: String,
    pub target: Money,
    #[serde(default)]
    pub current: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Goal {
    pub fn new(name: impl Into<String>, target: Money) -> Self {
        let now = Utc::now();
        Self {
            id: GoalId::new(),
            name: name.into(),
            target,
            current: Money::zero(),
            deadline: None,
            notes: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Add `amount` to the saved-so-far balance
    pub fn contribute(&mut self, amount: Money) {
        self.current += amount;
        self.updated_at = Utc::now();
    }

    pub fn set_current(&mut self, amount: Money) {
        self.current = amount;
        self.updated_at = Utc::now();
    }

    /// Amount still missing; zero once the goal is met
    pub fn remaining(&self) -> Money {
        let remaining = self.target - self.current;
        if remaining.is_negative() {
            Money::zero()
        } else {
            remaining
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} of {})", self.name, self.current, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contribute() {
        let mut goal = Goal::new("Emergency fund", Money::from_dollars(1000));
        goal.contribute(Money::from_dollars(250));
        goal.contribute(Money::from_dollars(100));

        assert_eq!(goal.current, Money::from_dollars(350));
        assert_eq!(goal.remaining(), Money::from_dollars(650));
    }

    #[test]
    fn test_remaining_never_negative() {
        let mut goal = Goal::new("Laptop", Money::from_dollars(1500));
        goal.set_current(Money::from_dollars(1800));
        assert!(goal.remaining().is_zero());
    }

    #[test]
    fn test_serialization_skips_empty_deadline() {
        let goal = Goal::new("Trip", Money::from_dollars(2000));
        let json = serde_json::to_string(&goal).unwrap();
        assert!(!json.contains("deadline"));

        let dated = goal.with_deadline(NaiveDate::from_ymd_opt(2026, 6, 1).unwrap());
        let json = serde_json::to_string(&dated).unwrap();
        let back: Goal = serde_json::from_str(&json).unwrap();
        assert_eq!(back.deadline, dated.deadline);
    }
}
