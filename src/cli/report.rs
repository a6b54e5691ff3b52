//! Report CLI commands

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Subcommand;

use crate::config::{IncomeMode, Settings};
use crate::error::{NestEggError, NestEggResult};
use crate::models::MonthPeriod;
use crate::reports::{DashboardReport, GoalReport, ScenarioReport, YearReport};
use crate::storage::Storage;

use super::parse_period_or_current;

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Income, savings targets, projections and category breakdown
    Dashboard {
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        period: Option<String>,
        /// Income basis (defaults to the configured mode)
        #[arg(short, long, value_enum)]
        mode: Option<IncomeMode>,
        /// Also write the dashboard as CSV to this file
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Compare savings percentages side by side
    WhatIf {
        #[arg(short, long)]
        period: Option<String>,
        #[arg(short, long, value_enum)]
        mode: Option<IncomeMode>,
    },

    /// Progress and time-to-goal for every goal
    Goals {
        #[arg(short, long)]
        period: Option<String>,
        #[arg(short, long, value_enum)]
        mode: Option<IncomeMode>,
    },

    /// Month-by-month income and savings for a year
    Year {
        /// Defaults to the current year
        #[arg(short, long)]
        year: Option<i32>,
    },
}

pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> NestEggResult<()> {
    match cmd {
        ReportCommands::Dashboard { period, mode, csv } => {
            let period = parse_period_or_current(period.as_deref())?;
            let mode = mode.unwrap_or(settings.income_mode);
            let report = DashboardReport::generate(storage, settings, period, mode)?;
            print!("{}", report.format_terminal());

            if let Some(path) = csv {
                let file = File::create(&path)
                    .map_err(|e| NestEggError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
                report.export_csv(BufWriter::new(file))?;
                println!("\nCSV written to {}", path.display());
            }
        }

        ReportCommands::WhatIf { period, mode } => {
            let period = parse_period_or_current(period.as_deref())?;
            let mode = mode.unwrap_or(settings.income_mode);
            print!(
                "{}",
                ScenarioReport::generate(storage, settings, period, mode)?.format_terminal()
            );
        }

        ReportCommands::Goals { period, mode } => {
            let period = parse_period_or_current(period.as_deref())?;
            let mode = mode.unwrap_or(settings.income_mode);
            print!(
                "{}",
                GoalReport::generate(storage, settings, period, mode)?.format_terminal()
            );
        }

        ReportCommands::Year { year } => {
            let year = year.unwrap_or_else(|| MonthPeriod::current().year);
            print!("{}", YearReport::generate(storage, settings, year)?.format_terminal());
        }
    }

    Ok(())
}
