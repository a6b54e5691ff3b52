//! Goal CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_goal_list, format_money};
use crate::error::{NestEggError, NestEggResult};
use crate::services::GoalService;
use crate::storage::Storage;

use super::parse_money;

#[derive(Subcommand)]
pub enum GoalCommands {
    /// Add a savings goal
    Add {
        name: String,
        /// Target amount
        target: String,
        /// Optional deadline (YYYY-MM-DD)
        #[arg(short, long)]
        deadline: Option<String>,
    },

    /// Add to what has been saved toward a goal
    Contribute {
        /// Goal name or ID
        goal: String,
        amount: String,
    },

    /// Overwrite what has been saved toward a goal
    SetCurrent {
        goal: String,
        amount: String,
    },

    #[command(alias = "ls")]
    List,

    Remove {
        goal: String,
    },
}

pub fn handle_goal_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GoalCommands,
) -> NestEggResult<()> {
    let service = GoalService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        GoalCommands::Add {
            name,
            target,
            deadline,
        } => {
            let deadline = deadline
                .map(|d| {
                    NaiveDate::parse_from_str(&d, "%Y-%m-%d").map_err(|_| {
                        NestEggError::Validation(format!(
                            "Invalid deadline '{}'. Use YYYY-MM-DD",
                            d
                        ))
                    })
                })
                .transpose()?;

            let goal = service.add(&name, parse_money(&target)?, deadline)?;
            println!("Added goal: {} ({})", goal.name, format_money(goal.target, symbol));
            println!("  ID: {}", goal.id);
        }

        GoalCommands::Contribute { goal, amount } => {
            let goal = service.contribute(&goal, parse_money(&amount)?)?;
            println!(
                "{}: {} of {}",
                goal.name,
                format_money(goal.current, symbol),
                format_money(goal.target, symbol)
            );
        }

        GoalCommands::SetCurrent { goal, amount } => {
            let goal = service.set_current(&goal, parse_money(&amount)?)?;
            println!(
                "{}: {} of {}",
                goal.name,
                format_money(goal.current, symbol),
                format_money(goal.target, symbol)
            );
        }

        GoalCommands::List => {
            println!("{}", format_goal_list(&service.list()?, symbol).trim_end());
        }

        GoalCommands::Remove { goal } => {
            let removed = service.remove(&goal)?;
            println!("Removed goal: {}", removed.name);
        }
    }

    Ok(())
}
