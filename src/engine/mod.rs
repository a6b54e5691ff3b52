//! Derivation engine
//!
//! Pure functions that turn income, savings and goal records into the
//! figures every report shows. Nothing here reads storage or the clock;
//! callers hand over fully loaded snapshots and get plain result records
//! back, so calls are cheap to repeat and safe to run in parallel.
//!
//! - `frequency`: monthly/yearly equivalents of a recurring amount
//! - `income`: monthly and yearly income from sources or entries
//! - `breakdown`: income grouped by category with percentage shares
//! - `savings`: savings targets, flat projections, actual savings lookups
//! - `scenario`: what-if projections across savings percentages
//! - `goal`: goal progress and months-to-goal
//! - `composer`: the combined dashboard result

pub mod breakdown;
pub mod composer;
pub mod frequency;
pub mod goal;
pub mod income;
pub mod savings;
pub mod scenario;

pub use breakdown::{category_breakdown, sorted_by_amount, CategoryBreakdown};
pub use composer::{compose, CalculationInput, CalculationResult, IncomeBasis};
pub use frequency::{to_monthly, to_yearly};
pub use goal::{goal_progress, months_to_goal, progress_percent, GoalHorizon, GoalProgress};
pub use income::{
    active_monthly_total, entries_for_month, monthly_income_from_entries,
    monthly_income_from_sources, monthly_income_series, yearly_income_from_entries, IncomeRecord,
};
pub use savings::{
    actual_savings_rate, monthly_savings_target, projection, projections, saved_in_month,
    saved_in_year, total_saved, yearly_savings_target, Projection, PROJECTION_HORIZONS,
};
pub use scenario::{what_if_scenarios, WhatIfScenario, DEFAULT_SCENARIO_PERCENTAGES};
