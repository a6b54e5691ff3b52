//! Savings targets and flat savings projections
//!
//! Projections hold the savings rate constant and apply no interest or
//! growth: the total after `n` years is the baseline plus `n` years of the
//! yearly savings target.

use serde::Serialize;

use super::frequency::MONTHS_PER_YEAR;
use crate::models::{Money, MonthPeriod, MonthlySavingsRecord, SavingsBaseline, SavingsPercentage};

/// Horizons (in years) every calculation result is projected over
pub const PROJECTION_HORIZONS: [i32; 4] = [1, 3, 5, 10];

/// One point of a savings projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Projection {
    pub years_ahead: i32,
    /// Baseline plus savings over the horizon
    pub projected_total: Money,
    /// Savings over the horizon alone, without the baseline
    pub projected_saved: Money,
}

pub fn monthly_savings_target(monthly_income: Money, percentage: SavingsPercentage) -> Money {
    monthly_income.percent(percentage.value())
}

pub fn yearly_savings_target(monthly_income: Money, percentage: SavingsPercentage) -> Money {
    monthly_savings_target(monthly_income, percentage) * MONTHS_PER_YEAR
}

/// Savings produced by the target rate over `years`; zero for `years <= 0`
fn saved_over(monthly_income: Money, percentage: SavingsPercentage, years: i32) -> Money {
    yearly_savings_target(monthly_income, percentage) * i64::from(years.max(0))
}

/// Total savings expected `years` from now
pub fn projection(
    baseline: SavingsBaseline,
    monthly_income: Money,
    percentage: SavingsPercentage,
    years: i32,
) -> Money {
    baseline.total() + saved_over(monthly_income, percentage, years)
}

/// One projection per entry of [`PROJECTION_HORIZONS`]
pub fn projections(
    baseline: SavingsBaseline,
    monthly_income: Money,
    percentage: SavingsPercentage,
) -> Vec<Projection> {
    PROJECTION_HORIZONS
        .iter()
        .map(|&years| Projection {
            years_ahead: years,
            projected_total: projection(baseline, monthly_income, percentage, years),
            projected_saved: saved_over(monthly_income, percentage, years),
        })
        .collect()
}

/// Amount recorded as saved in `period`; zero when nothing was recorded
///
/// Relies on there being at most one record per month.
pub fn saved_in_month(records: &[MonthlySavingsRecord], period: MonthPeriod) -> Money {
    records
        .iter()
        .find(|r| r.period() == period)
        .map(|r| r.saved)
        .unwrap_or_default()
}

pub fn saved_in_year(records: &[MonthlySavingsRecord], year: i32) -> Money {
    records
        .iter()
        .filter(|r| r.year == year)
        .map(|r| r.saved)
        .sum()
}

pub fn total_saved(records: &[MonthlySavingsRecord]) -> Money {
    records.iter().map(|r| r.saved).sum()
}

/// Share of `income` actually saved, in percent; 0 when there was no income
pub fn actual_savings_rate(saved: Money, income: Money) -> f64 {
    saved.ratio_of(income) * 100.0
}
