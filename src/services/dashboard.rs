//! Dashboard service
//!
//! Takes a snapshot of the stored records plus the current settings and
//! hands it to the engine. Nothing is cached: every call recomputes.

use serde::Serialize;

use crate::config::{IncomeMode, Settings};
use crate::engine::{
    actual_savings_rate, compose, goal_progress, monthly_income_series, saved_in_month,
    what_if_scenarios, CalculationInput, CalculationResult, GoalProgress, IncomeBasis,
    WhatIfScenario,
};
use crate::error::NestEggResult;
use crate::models::{Money, MonthPeriod};
use crate::storage::Storage;

/// Recorded income against recorded savings for one month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthSummary {
    pub period: MonthPeriod,
    pub income: Money,
    pub saved: Money,
    /// Percent of income saved; 0 for a month without income
    pub savings_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsSummary {
    pub year: i32,
    pub months: Vec<MonthSummary>,
    pub total_income: Money,
    pub total_saved: Money,
    pub savings_rate: f64,
}

pub struct DashboardService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> DashboardService<'a> {
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    pub fn calculate(&self, period: MonthPeriod, mode: IncomeMode) -> NestEggResult<CalculationResult> {
        let result = match mode {
            IncomeMode::Sources => {
                let sources = self.storage.income_sources.get_all()?;
                compose(&self.input(period, IncomeBasis::Sources(&sources)))
            }
            IncomeMode::Entries => {
                let entries = self.storage.income_entries.get_for_year(period.year)?;
                compose(&self.input(period, IncomeBasis::Entries(&entries)))
            }
        };

        tracing::debug!(%period, ?mode, "calculated dashboard");
        Ok(result)
    }

    /// Scenarios for the configured percentage list, against this month's income
    pub fn what_if(&self, period: MonthPeriod, mode: IncomeMode) -> NestEggResult<Vec<WhatIfScenario>> {
        Ok(self.what_if_for(&self.calculate(period, mode)?))
    }

    /// Scenarios for an already calculated month
    pub fn what_if_for(&self, result: &CalculationResult) -> Vec<WhatIfScenario> {
        what_if_scenarios(
            result.monthly_income,
            self.settings.baseline,
            &self.settings.scenario_percentages,
        )
    }

    /// Progress of every goal at this month's savings target
    pub fn goal_progress(&self, period: MonthPeriod, mode: IncomeMode) -> NestEggResult<Vec<GoalProgress>> {
        self.goal_progress_for(&self.calculate(period, mode)?)
    }

    /// Goal progress at the savings target of an already calculated month
    pub fn goal_progress_for(&self, result: &CalculationResult) -> NestEggResult<Vec<GoalProgress>> {
        let monthly_savings = result.monthly_savings_target;
        Ok(self
            .storage
            .goals
            .get_all()?
            .iter()
            .map(|goal| goal_progress(goal, monthly_savings))
            .collect())
    }

    pub fn savings_summary(&self, year: i32) -> NestEggResult<SavingsSummary> {
        let entries = self.storage.income_entries.get_for_year(year)?;
        let records = self.storage.savings.get_for_year(year)?;

        let months: Vec<MonthSummary> = monthly_income_series(&entries, year)
            .into_iter()
            .map(|(period, income)| {
                let saved = saved_in_month(&records, period);
                MonthSummary {
                    period,
                    income,
                    saved,
                    savings_rate: actual_savings_rate(saved, income),
                }
            })
            .collect();

        let total_income: Money = months.iter().map(|m| m.income).sum();
        let total_saved: Money = months.iter().map(|m| m.saved).sum();

        Ok(SavingsSummary {
            year,
            savings_rate: actual_savings_rate(total_saved, total_income),
            months,
            total_income,
            total_saved,
        })
    }

    fn input<'b>(&self, period: MonthPeriod, income: IncomeBasis<'b>) -> CalculationInput<'b> {
        CalculationInput {
            period,
            income,
            baseline: self.settings.baseline,
            savings_percentage: self.settings.savings_percentage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::NestEggPaths;
    use crate::engine::GoalHorizon;
    use crate::models::{Frequency, IncomeCategory, SavingsBaseline, SavingsPercentage};
    use crate::services::{GoalService, IncomeService, SavingsService};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = NestEggPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn settings(percent: f64) -> Settings {
        Settings {
            savings_percentage: SavingsPercentage::new(percent),
            baseline: SavingsBaseline::new(Money::from_dollars(1000), Money::zero()),
            ..Settings::default()
        }
    }

    #[test]
    fn test_sources_and_entries_modes_agree_after_materialize() {
        let (_temp_dir, storage) = create_test_storage();
        let income = IncomeService::new(&storage);
        let period = MonthPeriod::new(2025, 3);

        income
            .add_source("Job", Money::from_dollars(3000), Frequency::Monthly, IncomeCategory::Salary)
            .unwrap();
        income
            .add_source("Dividends", Money::from_dollars(1200), Frequency::Yearly, IncomeCategory::Investment)
            .unwrap();

        let settings = settings(20.0);
        let dashboard = DashboardService::new(&storage, &settings);

        let from_sources = dashboard.calculate(period, IncomeMode::Sources).unwrap();
        assert_eq!(from_sources.monthly_income, Money::from_dollars(3100));
        assert_eq!(from_sources.monthly_savings_target, Money::from_dollars(620));

        assert!(dashboard
            .calculate(period, IncomeMode::Entries)
            .unwrap()
            .monthly_income
            .is_zero());

        income.materialize_month(period).unwrap();
        let from_entries = dashboard.calculate(period, IncomeMode::Entries).unwrap();
        assert_eq!(from_entries.monthly_income, from_sources.monthly_income);
        assert_eq!(from_entries.yearly_income, Money::from_dollars(3100));
    }

    #[test]
    fn test_what_if_uses_configured_percentages() {
        let (_temp_dir, storage) = create_test_storage();
        IncomeService::new(&storage)
            .add_source("Job", Money::from_dollars(4000), Frequency::Monthly, IncomeCategory::Salary)
            .unwrap();

        let mut settings = settings(20.0);
        settings.scenario_percentages = vec![SavingsPercentage::new(10.0), SavingsPercentage::new(25.0)];
        let dashboard = DashboardService::new(&storage, &settings);

        let scenarios = dashboard.what_if(MonthPeriod::new(2025, 1), IncomeMode::Sources).unwrap();
        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[1].monthly_savings, Money::from_dollars(1000));
        // 1000 baseline + 1000 * 12 * 5
        assert_eq!(scenarios[1].projection_5_years, Money::from_dollars(61000));
    }

    #[test]
    fn test_goal_progress_without_income_is_unreachable() {
        let (_temp_dir, storage) = create_test_storage();
        GoalService::new(&storage)
            .add("Laptop", Money::from_dollars(2000), None)
            .unwrap();

        let settings = settings(20.0);
        let dashboard = DashboardService::new(&storage, &settings);
        let progress = dashboard
            .goal_progress(MonthPeriod::new(2025, 1), IncomeMode::Entries)
            .unwrap();

        assert_eq!(progress.len(), 1);
        assert_eq!(progress[0].horizon, GoalHorizon::Unreachable);
    }

    #[test]
    fn test_savings_summary() {
        let (_temp_dir, storage) = create_test_storage();
        let income = IncomeService::new(&storage);
        let savings = SavingsService::new(&storage);
        let jan = MonthPeriod::new(2025, 1);

        income
            .add_one_off(jan, "Pay", Money::from_dollars(2000), IncomeCategory::Salary)
            .unwrap();
        savings.record(jan, Money::from_dollars(500), None).unwrap();
        savings
            .record(MonthPeriod::new(2025, 2), Money::from_dollars(100), None)
            .unwrap();

        let settings = settings(20.0);
        let summary = DashboardService::new(&storage, &settings)
            .savings_summary(2025)
            .unwrap();

        assert_eq!(summary.months.len(), 12);
        assert_eq!(summary.months[0].savings_rate, 25.0);
        assert_eq!(summary.months[1].savings_rate, 0.0);
        assert_eq!(summary.total_income, Money::from_dollars(2000));
        assert_eq!(summary.total_saved, Money::from_dollars(600));
        assert!((summary.savings_rate - 30.0).abs() < 1e-9);
    }
}
