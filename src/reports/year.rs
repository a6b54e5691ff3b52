//! Year in review: recorded income against recorded savings, per month

use crate::config::Settings;
use crate::display::{double_separator, format_bar, format_header, format_percentage, separator};
use crate::error::NestEggResult;
use crate::models::Money;
use crate::services::{DashboardService, SavingsSummary};
use crate::storage::Storage;

const BAR_WIDTH: usize = 20;

#[derive(Debug, Clone)]
pub struct YearReport {
    pub summary: SavingsSummary,
    pub currency_symbol: String,
}

impl YearReport {
    pub fn generate(storage: &Storage, settings: &Settings, year: i32) -> NestEggResult<Self> {
        Ok(Self {
            summary: DashboardService::new(storage, settings).savings_summary(year)?,
            currency_symbol: settings.currency_symbol.clone(),
        })
    }

    pub fn format_terminal(&self) -> String {
        let money = |m: Money| m.format_with_symbol(&self.currency_symbol);
        let s = &self.summary;
        let max_income = s
            .months
            .iter()
            .map(|m| m.income.as_f64())
            .fold(0.0_f64, f64::max);

        let mut output = format_header(&format!("Savings in {}", s.year), 76);
        output.push('\n');
        output.push_str(&double_separator(76));
        output.push('\n');
        output.push_str(&format!(
            "{:<10} {:>12} {:>12} {:>7}  {}\n",
            "Month", "Income", "Saved", "Rate", "Income"
        ));
        output.push_str(&separator(76));
        output.push('\n');

        for month in &s.months {
            output.push_str(&format!(
                "{:<10} {:>12} {:>12} {:>7}  {}\n",
                month.period.to_string(),
                money(month.income),
                money(month.saved),
                format_percentage(month.savings_rate),
                format_bar(month.income.as_f64(), max_income, BAR_WIDTH),
            ));
        }

        output.push_str(&separator(76));
        output.push('\n');
        output.push_str(&format!(
            "{:<10} {:>12} {:>12} {:>7}\n",
            "Total",
            money(s.total_income),
            money(s.total_saved),
            format_percentage(s.savings_rate),
        ));

        output
    }
}
