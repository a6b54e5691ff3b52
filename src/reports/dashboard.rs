//! Dashboard report
//!
//! The month's income, savings targets, projections and category breakdown.

use std::io::Write;

use serde::Serialize;

use crate::config::{IncomeMode, Settings};
use crate::display::{format_bar, format_money, format_percentage, separator};
use crate::engine::{sorted_by_amount, CalculationResult};
use crate::error::{NestEggError, NestEggResult};
use crate::models::{MonthPeriod, SavingsBaseline, SavingsPercentage};
use crate::services::DashboardService;
use crate::storage::Storage;

const WIDTH: usize = 60;
const BAR_WIDTH: usize = 20;

#[derive(Debug, Clone)]
pub struct DashboardReport {
    pub result: CalculationResult,
    pub mode: IncomeMode,
    pub savings_percentage: SavingsPercentage,
    pub baseline: SavingsBaseline,
    pub currency_symbol: String,
}

/// One CSV row; every figure of the report flattened to `metric,value`
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    period: String,
    section: &'a str,
    metric: String,
    amount: String,
    percentage: String,
}

impl DashboardReport {
    pub fn generate(
        storage: &Storage,
        settings: &Settings,
        period: MonthPeriod,
        mode: IncomeMode,
    ) -> NestEggResult<Self> {
        let result = DashboardService::new(storage, settings).calculate(period, mode)?;

        Ok(Self {
            result,
            mode,
            savings_percentage: settings.savings_percentage,
            baseline: settings.baseline,
            currency_symbol: settings.currency_symbol.clone(),
        })
    }

    fn money(&self, amount: crate::models::Money) -> String {
        format_money(amount, &self.currency_symbol)
    }

    pub fn format_terminal(&self) -> String {
        let r = &self.result;
        let mut output = String::new();

        output.push_str(&format!(
            "Dashboard: {} (income from {})\n",
            r.period.display_long(),
            match self.mode {
                IncomeMode::Sources => "sources",
                IncomeMode::Entries => "entries",
            }
        ));
        output.push_str(&"=".repeat(WIDTH));
        output.push('\n');

        output.push_str(&format!("{:<32} {:>16}\n", "Monthly income", self.money(r.monthly_income)));
        output.push_str(&format!("{:<32} {:>16}\n", "Yearly income", self.money(r.yearly_income)));
        output.push_str(&format!(
            "{:<32} {:>16}\n",
            format!("Monthly savings ({})", self.savings_percentage),
            self.money(r.monthly_savings_target)
        ));
        output.push_str(&format!(
            "{:<32} {:>16}\n",
            "Yearly savings",
            self.money(r.yearly_savings_target)
        ));
        output.push_str(&format!(
            "{:<32} {:>16}\n",
            "Savings baseline",
            self.money(self.baseline.total())
        ));

        output.push_str("\nProjections\n");
        output.push_str(&separator(WIDTH));
        output.push('\n');
        for projection in &r.projections {
            let label = if projection.years_ahead == 1 {
                "In 1 year".to_string()
            } else {
                format!("In {} years", projection.years_ahead)
            };
            output.push_str(&format!(
                "{:<32} {:>16}\n",
                label,
                self.money(projection.projected_total)
            ));
        }

        output.push_str("\nIncome by category\n");
        output.push_str(&separator(WIDTH));
        output.push('\n');
        if r.breakdown.is_empty() {
            output.push_str("No income recorded for this month.\n");
        }
        for row in sorted_by_amount(r.breakdown.clone()) {
            output.push_str(&format!(
                "{:<14} {:>12} {:>6} {}\n",
                row.category,
                self.money(row.amount),
                format_percentage(row.percentage_of_total),
                format_bar(row.percentage_of_total, 100.0, BAR_WIDTH),
            ));
        }

        output
    }

    pub fn export_csv<W: Write>(&self, writer: W) -> NestEggResult<()> {
        let r = &self.result;
        let period = r.period.to_string();
        let mut wtr = csv::Writer::from_writer(writer);

        let row = |section: &'static str, metric: String, amount: crate::models::Money, percentage: Option<f64>| CsvRow {
            period: period.clone(),
            section,
            metric,
            amount: format!("{:.2}", amount.as_f64()),
            percentage: percentage.map(|p| format!("{:.2}", p)).unwrap_or_default(),
        };

        let mut rows = vec![
            row("summary", "monthly_income".into(), r.monthly_income, None),
            row("summary", "yearly_income".into(), r.yearly_income, None),
            row(
                "summary",
                "monthly_savings_target".into(),
                r.monthly_savings_target,
                Some(self.savings_percentage.value()),
            ),
            row("summary", "yearly_savings_target".into(), r.yearly_savings_target, None),
        ];
        rows.extend(r.projections.iter().map(|p| {
            row("projection", format!("{}_years", p.years_ahead), p.projected_total, None)
        }));
        rows.extend(r.breakdown.iter().map(|b| {
            row("category", b.category.as_str().to_string(), b.amount, Some(b.percentage_of_total))
        }));

        for record in rows {
            wtr.serialize(record)
                .map_err(|e| NestEggError::Export(e.to_string()))?;
        }
        wtr.flush().map_err(|e| NestEggError::Export(e.to_string()))?;

        Ok(())
    }
}
