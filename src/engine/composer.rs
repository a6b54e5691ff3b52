//! Results composer
//!
//! Assembles the dashboard's `CalculationResult` from one snapshot of
//! income records and the savings configuration. Calling it twice with the
//! same input yields equal results; the only notion of "now" is the
//! caller-supplied period.

use serde::Serialize;

use super::breakdown::{category_breakdown, CategoryBreakdown};
use super::frequency::MONTHS_PER_YEAR;
use super::income::{
    entries_for_month, monthly_income_from_entries, monthly_income_from_sources,
    yearly_income_from_entries,
};
use super::savings::{monthly_savings_target, projections, yearly_savings_target, Projection};
use crate::models::{
    IncomeSource, Money, MonthPeriod, MonthlyIncomeEntry, SavingsBaseline, SavingsPercentage,
};

/// Which income records a calculation is based on
#[derive(Debug, Clone, Copy)]
pub enum IncomeBasis<'a> {
    /// Recurring source definitions, normalized by frequency
    Sources(&'a [IncomeSource]),
    /// Recorded entries; should cover the whole year of the requested period
    Entries(&'a [MonthlyIncomeEntry]),
}

/// Everything a calculation depends on
#[derive(Debug, Clone, Copy)]
pub struct CalculationInput<'a> {
    pub period: MonthPeriod,
    pub income: IncomeBasis<'a>,
    pub baseline: SavingsBaseline,
    pub savings_percentage: SavingsPercentage,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    pub period: MonthPeriod,
    pub monthly_income: Money,
    pub yearly_income: Money,
    pub monthly_savings_target: Money,
    pub yearly_savings_target: Money,
    pub projections: Vec<Projection>,
    /// Snapshot of the requested month only
    pub breakdown: Vec<CategoryBreakdown>,
}

impl CalculationResult {
    pub fn projection_for(&self, years_ahead: i32) -> Option<&Projection> {
        self.projections.iter().find(|p| p.years_ahead == years_ahead)
    }
}

/// Monthly and yearly income plus the category breakdown for the basis
fn income_figures(
    income: IncomeBasis<'_>,
    period: MonthPeriod,
) -> (Money, Money, Vec<CategoryBreakdown>) {
    match income {
        IncomeBasis::Sources(sources) => {
            let monthly = monthly_income_from_sources(sources);
            (monthly, monthly * MONTHS_PER_YEAR, category_breakdown(sources))
        }
        IncomeBasis::Entries(entries) => (
            monthly_income_from_entries(entries_for_month(entries, period)),
            yearly_income_from_entries(entries, period.year),
            category_breakdown(entries_for_month(entries, period)),
        ),
    }
}

pub fn compose(input: &CalculationInput<'_>) -> CalculationResult {
    let (monthly_income, yearly_income, breakdown) = income_figures(input.income, input.period);
    let percentage = input.savings_percentage;

    tracing::debug!(
        period = %input.period,
        monthly_income = monthly_income.cents(),
        "composed calculation result"
    );

    CalculationResult {
        period: input.period,
        monthly_income,
        yearly_income,
        monthly_savings_target: monthly_savings_target(monthly_income, percentage),
        yearly_savings_target: yearly_savings_target(monthly_income, percentage),
        projections: projections(input.baseline, monthly_income, percentage),
        breakdown,
    }
}
