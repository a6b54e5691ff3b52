//! What-if scenarios
//!
//! Each candidate percentage is evaluated on its own against the same
//! income and baseline; scenarios never build on one another.

use serde::Serialize;

use super::savings::{monthly_savings_target, projection};
use crate::models::{Money, SavingsBaseline, SavingsPercentage};

pub const DEFAULT_SCENARIO_PERCENTAGES: [f64; 6] = [10.0, 15.0, 20.0, 30.0, 40.0, 50.0];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WhatIfScenario {
    pub savings_percentage: SavingsPercentage,
    pub monthly_income: Money,
    pub monthly_savings: Money,
    pub projection_5_years: Money,
    pub projection_10_years: Money,
}

impl WhatIfScenario {
    pub fn evaluate(
        monthly_income: Money,
        baseline: SavingsBaseline,
        savings_percentage: SavingsPercentage,
    ) -> Self {
        Self {
            savings_percentage,
            monthly_income,
            monthly_savings: monthly_savings_target(monthly_income, savings_percentage),
            projection_5_years: projection(baseline, monthly_income, savings_percentage, 5),
            projection_10_years: projection(baseline, monthly_income, savings_percentage, 10),
        }
    }
}

/// One scenario per percentage, in the order given
pub fn what_if_scenarios(
    monthly_income: Money,
    baseline: SavingsBaseline,
    percentages: &[SavingsPercentage],
) -> Vec<WhatIfScenario> {
    percentages
        .iter()
        .map(|&percentage| WhatIfScenario::evaluate(monthly_income, baseline, percentage))
        .collect()
}

/// The default percentage list as typed values
pub fn default_percentages() -> Vec<SavingsPercentage> {
    DEFAULT_SCENARIO_PERCENTAGES
        .iter()
        .map(|&p| SavingsPercentage::new(p))
        .collect()
}
