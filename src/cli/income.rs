//! Income CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_entry_list, format_money, format_source_list};
use crate::error::{NestEggError, NestEggResult};
use crate::models::{Frequency, IncomeCategory};
use crate::services::IncomeService;
use crate::storage::Storage;

use super::{parse_money, parse_period_or_current};

#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Add a recurring income source
    Add {
        /// Source name
        name: String,
        /// Amount per frequency period (e.g. "3000" or "3,000.00")
        amount: String,
        /// monthly, weekly, yearly or one-time
        #[arg(short, long, default_value = "monthly")]
        frequency: String,
        /// salary, freelance, side-hustle, investment, passive or other
        #[arg(short, long, default_value = "other")]
        category: String,
    },

    /// List income sources
    #[command(alias = "ls")]
    List,

    /// Remove an income source (its recorded entries are kept)
    Remove {
        /// Source name or ID
        source: String,
    },

    /// Stop counting a source without removing it
    Pause {
        source: String,
    },

    /// Count a paused source again
    Resume {
        source: String,
    },

    /// Change a source's amount
    SetAmount {
        source: String,
        amount: String,
    },

    /// Record this month's entries from the active recurring sources
    Materialize {
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Record a one-off income entry
    OneOff {
        name: String,
        amount: String,
        #[arg(short, long, default_value = "other")]
        category: String,
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        period: Option<String>,
    },

    /// List income entries for a month, or a whole year
    Entries {
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(short, long, conflicts_with = "year")]
        period: Option<String>,
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Remove an income entry
    RemoveEntry {
        /// Entry ID
        entry: String,
    },
}

fn parse_frequency(s: &str) -> NestEggResult<Frequency> {
    s.parse().map_err(NestEggError::Validation)
}

fn parse_category(s: &str) -> NestEggResult<IncomeCategory> {
    s.parse().map_err(NestEggError::Validation)
}

pub fn handle_income_command(
    storage: &Storage,
    settings: &Settings,
    cmd: IncomeCommands,
) -> NestEggResult<()> {
    let service = IncomeService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        IncomeCommands::Add {
            name,
            amount,
            frequency,
            category,
        } => {
            let source = service.add_source(
                &name,
                parse_money(&amount)?,
                parse_frequency(&frequency)?,
                parse_category(&category)?,
            )?;
            println!("Added income source: {}", source.name);
            println!("  ID:        {}", source.id);
            println!("  Amount:    {} {}", format_money(source.amount, symbol), source.frequency);
            println!("  Category:  {}", source.category);
        }

        IncomeCommands::List => {
            println!("{}", format_source_list(&service.list_sources()?, symbol).trim_end());
        }

        IncomeCommands::Remove { source } => {
            let removed = service.remove_source(&source)?;
            println!("Removed income source: {}", removed.name);
        }

        IncomeCommands::Pause { source } => {
            let source = service.set_active(&source, false)?;
            println!("Paused income source: {}", source.name);
        }

        IncomeCommands::Resume { source } => {
            let source = service.set_active(&source, true)?;
            println!("Resumed income source: {}", source.name);
        }

        IncomeCommands::SetAmount { source, amount } => {
            let source = service.update_amount(&source, parse_money(&amount)?)?;
            println!(
                "Updated {}: {} {}",
                source.name,
                format_money(source.amount, symbol),
                source.frequency
            );
        }

        IncomeCommands::Materialize { period } => {
            let period = parse_period_or_current(period.as_deref())?;
            let created = service.materialize_month(period)?;
            if created.is_empty() {
                println!("Nothing to add for {}.", period.display_long());
            } else {
                println!("Added {} entries for {}:", created.len(), period.display_long());
                for entry in &created {
                    println!("  {:<24} {:>12}", entry.name, format_money(entry.amount, symbol));
                }
            }
        }

        IncomeCommands::OneOff {
            name,
            amount,
            category,
            period,
        } => {
            let period = parse_period_or_current(period.as_deref())?;
            let entry =
                service.add_one_off(period, &name, parse_money(&amount)?, parse_category(&category)?)?;
            println!(
                "Recorded {} for {}: {} ({})",
                entry.name,
                period.display_long(),
                format_money(entry.amount, symbol),
                entry.id
            );
        }

        IncomeCommands::Entries { period, year } => {
            let entries = match year {
                Some(year) => service.entries_for_year(year)?,
                None => service.entries_for_month(parse_period_or_current(period.as_deref())?)?,
            };
            println!("{}", format_entry_list(&entries, symbol).trim_end());
        }

        IncomeCommands::RemoveEntry { entry } => {
            let removed = service.remove_entry(&entry)?;
            println!(
                "Removed entry {} from {}",
                removed.name,
                removed.period().display_long()
            );
        }
    }

    Ok(())
}
