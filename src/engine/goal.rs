//! Goal progress and time-to-goal estimates

use serde::Serialize;
use std::fmt;

use crate::models::{Goal, GoalId, Money, MonthPeriod};

/// How far away a goal is at the current savings rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "months", rename_all = "snake_case")]
pub enum GoalHorizon {
    /// Reached after this many more months (0 = already met)
    Months(u32),
    /// Never reached: nothing is being saved
    Unreachable,
}

impl GoalHorizon {
    pub fn months(&self) -> Option<u32> {
        match self {
            Self::Months(n) => Some(*n),
            Self::Unreachable => None,
        }
    }

    /// Month the goal is expected to be met, counting from `from`
    pub fn completion_period(&self, from: MonthPeriod) -> Option<MonthPeriod> {
        self.months().map(|n| from.plus_months(n))
    }
}

impl fmt::Display for GoalHorizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Months(0) => f.pad("reached"),
            Self::Months(1) => f.pad("1 month"),
            Self::Months(n) => f.pad(&format!("{} months", n)),
            Self::Unreachable => f.pad("never"),
        }
    }
}

/// Percent of `target` covered by `current`, capped at 100; 0 for a zero target
pub fn progress_percent(current: Money, target: Money) -> f64 {
    if target.is_zero() {
        return 0.0;
    }
    (current.ratio_of(target) * 100.0).clamp(0.0, 100.0)
}

/// Months of saving `monthly_savings` needed to close the gap
///
/// Zero (or negative) savings means the goal is unreachable, even when it is
/// already met.
pub fn months_to_goal(current: Money, target: Money, monthly_savings: Money) -> GoalHorizon {
    if !monthly_savings.is_positive() {
        return GoalHorizon::Unreachable;
    }

    let remaining = (target - current).cents();
    if remaining <= 0 {
        return GoalHorizon::Months(0);
    }

    let per_month = monthly_savings.cents();
    let months = (remaining + per_month - 1) / per_month;
    GoalHorizon::Months(u32::try_from(months).unwrap_or(u32::MAX))
}

/// Derived progress for one goal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    pub goal_id: GoalId,
    pub name: String,
    pub target: Money,
    pub current: Money,
    pub remaining: Money,
    pub percent_complete: f64,
    pub horizon: GoalHorizon,
}

pub fn goal_progress(goal: &Goal, monthly_savings: Money) -> GoalProgress {
    GoalProgress {
        goal_id: goal.id,
        name: goal.name.clone(),
        target: goal.target,
        current: goal.current,
        remaining: goal.remaining(),
        percent_complete: progress_percent(goal.current, goal.target),
        horizon: months_to_goal(goal.current, goal.target, monthly_savings),
    }
}
