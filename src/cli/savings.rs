//! Savings CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_money, format_savings_list};
use crate::error::NestEggResult;
use crate::models::MonthPeriod;
use crate::services::SavingsService;
use crate::storage::Storage;

use super::{parse_money, parse_period_or_current};

#[derive(Subcommand)]
pub enum SavingsCommands {
    /// Record what was saved in a month (replaces an earlier record)
    Record {
        amount: String,
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        period: Option<String>,
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Show the savings recorded for a month
    Show {
        #[arg(short, long)]
        period: Option<String>,
    },

    /// List savings records for a year
    List {
        /// Defaults to the current year
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Remove a month's savings record
    Remove {
        #[arg(short, long)]
        period: Option<String>,
    },
}

pub fn handle_savings_command(
    storage: &Storage,
    settings: &Settings,
    cmd: SavingsCommands,
) -> NestEggResult<()> {
    let service = SavingsService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        SavingsCommands::Record {
            amount,
            period,
            note,
        } => {
            let period = parse_period_or_current(period.as_deref())?;
            let record = service.record(period, parse_money(&amount)?, note)?;
            println!(
                "Recorded {} saved in {}",
                format_money(record.saved, symbol),
                period.display_long()
            );
        }

        SavingsCommands::Show { period } => {
            let period = parse_period_or_current(period.as_deref())?;
            match service.get(period) {
                Some(record) => {
                    println!("{}: {}", period.display_long(), format_money(record.saved, symbol));
                    if let Some(note) = record.note {
                        println!("Note: {}", note);
                    }
                }
                None => println!("No savings recorded for {}", period.display_long()),
            }
        }

        SavingsCommands::List { year } => {
            let year = year.unwrap_or_else(|| MonthPeriod::current().year);
            println!("{}", format_savings_list(&service.list_year(year)?, symbol).trim_end());
        }

        SavingsCommands::Remove { period } => {
            let period = parse_period_or_current(period.as_deref())?;
            if service.remove(period)? {
                println!("Removed savings record for {}", period.display_long());
            } else {
                println!("No savings recorded for {}", period.display_long());
            }
        }
    }

    Ok(())
}
