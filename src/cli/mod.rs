//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. Handlers print
//! their results to stdout; errors bubble up to `main`.

pub mod config;
pub mod export;
pub mod goal;
pub mod income;
pub mod report;
pub mod savings;

pub use config::{handle_config_command, ConfigCommands};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use goal::{handle_goal_command, GoalCommands};
pub use income::{handle_income_command, IncomeCommands};
pub use report::{handle_report_command, ReportCommands};
pub use savings::{handle_savings_command, SavingsCommands};

use crate::error::{NestEggError, NestEggResult};
use crate::models::{Money, MonthPeriod};

/// Parse a "YYYY-MM" argument, defaulting to the current month
pub fn parse_period_or_current(period: Option<&str>) -> NestEggResult<MonthPeriod> {
    match period {
        Some(s) => MonthPeriod::parse(s)
            .map_err(|e| NestEggError::Validation(format!("Invalid period '{}': {}", s, e))),
        None => Ok(MonthPeriod::current()),
    }
}

pub fn parse_money(amount: &str) -> NestEggResult<Money> {
    Money::parse(amount)
        .map_err(|e| NestEggError::Validation(format!("Invalid amount: {}", e)))
}
