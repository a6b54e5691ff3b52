//! What-if scenario report

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::config::{IncomeMode, Settings};
use crate::engine::WhatIfScenario;
use crate::error::NestEggResult;
use crate::models::{Money, MonthPeriod, SavingsPercentage};
use crate::services::DashboardService;
use crate::storage::Storage;

#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub period: MonthPeriod,
    pub monthly_income: Money,
    /// The configured percentage, marked in the table
    pub current_percentage: SavingsPercentage,
    pub scenarios: Vec<WhatIfScenario>,
    pub currency_symbol: String,
}

#[derive(Tabled)]
struct ScenarioRow {
    #[tabled(rename = "Save")]
    percentage: String,
    #[tabled(rename = "Per month")]
    monthly: String,
    #[tabled(rename = "Per year")]
    yearly: String,
    #[tabled(rename = "In 5 years")]
    five_years: String,
    #[tabled(rename = "In 10 years")]
    ten_years: String,
}

impl ScenarioReport {
    pub fn generate(
        storage: &Storage,
        settings: &Settings,
        period: MonthPeriod,
        mode: IncomeMode,
    ) -> NestEggResult<Self> {
        let service = DashboardService::new(storage, settings);
        let result = service.calculate(period, mode)?;
        let scenarios = service.what_if_for(&result);

        Ok(Self {
            period,
            monthly_income: result.monthly_income,
            current_percentage: settings.savings_percentage,
            scenarios,
            currency_symbol: settings.currency_symbol.clone(),
        })
    }

    fn rows(&self) -> Vec<ScenarioRow> {
        let money = |m: Money| m.format_with_symbol(&self.currency_symbol);

        self.scenarios
            .iter()
            .map(|s| {
                let marker = if s.savings_percentage == self.current_percentage {
                    " *"
                } else {
                    ""
                };
                ScenarioRow {
                    percentage: format!("{}{}", s.savings_percentage, marker),
                    monthly: money(s.monthly_savings),
                    yearly: money(s.monthly_savings * 12),
                    five_years: money(s.projection_5_years),
                    ten_years: money(s.projection_10_years),
                }
            })
            .collect()
    }

    pub fn format_terminal(&self) -> String {
        let mut output = format!(
            "What-if scenarios for {} (monthly income {})\n\n",
            self.period.display_long(),
            self.monthly_income.format_with_symbol(&self.currency_symbol)
        );

        if self.scenarios.is_empty() {
            output.push_str("No scenario percentages configured.\n");
            return output;
        }

        let table = Table::new(self.rows())
            .with(Style::rounded())
            .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
            .to_string();

        output.push_str(&table);
        output.push_str("\n* current savings percentage\n");
        output
    }
}
