//! Goal progress report

use crate::config::{IncomeMode, Settings};
use crate::display::{format_bar, format_percentage, separator, truncate};
use crate::engine::{GoalHorizon, GoalProgress};
use crate::error::NestEggResult;
use crate::models::{Money, MonthPeriod};
use crate::services::DashboardService;
use crate::storage::Storage;

const BAR_WIDTH: usize = 20;

#[derive(Debug, Clone)]
pub struct GoalReport {
    pub period: MonthPeriod,
    /// Savings target the estimates assume
    pub monthly_savings: Money,
    pub goals: Vec<GoalProgress>,
    pub currency_symbol: String,
}

impl GoalReport {
    pub fn generate(
        storage: &Storage,
        settings: &Settings,
        period: MonthPeriod,
        mode: IncomeMode,
    ) -> NestEggResult<Self> {
        let service = DashboardService::new(storage, settings);
        let result = service.calculate(period, mode)?;
        let goals = service.goal_progress_for(&result)?;

        Ok(Self {
            period,
            monthly_savings: result.monthly_savings_target,
            goals,
            currency_symbol: settings.currency_symbol.clone(),
        })
    }

    pub fn format_terminal(&self) -> String {
        let money = |m: Money| m.format_with_symbol(&self.currency_symbol);
        let mut output = format!(
            "Goals at {} saved per month (from {})\n",
            money(self.monthly_savings),
            self.period.display_long()
        );
        output.push_str(&separator(72));
        output.push('\n');

        if self.goals.is_empty() {
            output.push_str("No goals found.\n");
            return output;
        }

        for goal in &self.goals {
            let eta = match goal.horizon {
                GoalHorizon::Months(0) => "reached".to_string(),
                GoalHorizon::Unreachable => "never at this rate".to_string(),
                horizon => match horizon.completion_period(self.period) {
                    Some(done) => format!("{} ({})", horizon, done.display_long()),
                    None => horizon.to_string(),
                },
            };

            output.push_str(&format!(
                "{:<20} {} {:>5}  {} of {}\n",
                truncate(&goal.name, 20),
                format_bar(goal.percent_complete, 100.0, BAR_WIDTH),
                format_percentage(goal.percent_complete),
                money(goal.current),
                money(goal.target),
            ));
            output.push_str(&format!(
                "{:<20} remaining {}, {}\n",
                "",
                money(goal.remaining),
                eta
            ));
        }

        output
    }
}
