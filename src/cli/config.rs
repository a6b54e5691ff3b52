//! Settings CLI commands

use clap::Subcommand;

use crate::audit::EntityType;
use crate::config::{IncomeMode, NestEggPaths, Settings};
use crate::display::format_money;
use crate::error::{NestEggError, NestEggResult};
use crate::models::{SavingsBaseline, SavingsPercentage};
use crate::storage::Storage;

use super::parse_money;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show paths and settings
    Show,

    /// Set the target savings percentage (0-100)
    SetPercentage {
        percent: f64,
    },

    /// Set the savings held outside the tracked months
    SetBaseline {
        /// Liquid savings on hand today
        #[arg(long, default_value = "0")]
        current: String,
        /// Savings accumulated before tracking started
        #[arg(long, default_value = "0")]
        already_saved: String,
    },

    /// Set the percentages compared by `report what-if`
    SetScenarios {
        #[arg(required = true, num_args = 1..)]
        percentages: Vec<f64>,
    },

    /// Choose whether reports use income sources or recorded entries
    SetMode {
        #[arg(value_enum)]
        mode: IncomeMode,
    },
}

fn validate_percentage(percent: f64) -> NestEggResult<SavingsPercentage> {
    if !(0.0..=100.0).contains(&percent) {
        return Err(NestEggError::Validation(format!(
            "Savings percentage must be between 0 and 100, got {}",
            percent
        )));
    }
    Ok(SavingsPercentage::new(percent))
}

pub fn handle_config_command(
    storage: &Storage,
    paths: &NestEggPaths,
    settings: &Settings,
    cmd: ConfigCommands,
) -> NestEggResult<()> {
    let mut updated = settings.clone();

    match cmd {
        ConfigCommands::Show => {
            let symbol = settings.currency_symbol.as_str();
            println!("NestEgg Configuration");
            println!("=====================");
            println!("Base directory:     {}", paths.base_dir().display());
            println!("Data directory:     {}", paths.data_dir().display());
            println!("Initialized:        {}", paths.is_initialized());
            println!();
            println!("Savings percentage: {}", settings.savings_percentage);
            println!(
                "Baseline:           {} current + {} already saved",
                format_money(settings.baseline.current_savings, symbol),
                format_money(settings.baseline.already_saved, symbol)
            );
            let scenarios: Vec<String> = settings
                .scenario_percentages
                .iter()
                .map(ToString::to_string)
                .collect();
            println!("What-if scenarios:  {}", scenarios.join(", "));
            println!(
                "Income mode:        {}",
                match settings.income_mode {
                    IncomeMode::Sources => "sources",
                    IncomeMode::Entries => "entries",
                }
            );
            return Ok(());
        }

        ConfigCommands::SetPercentage { percent } => {
            updated.savings_percentage = validate_percentage(percent)?;
            println!("Savings percentage set to {}", updated.savings_percentage);
        }

        ConfigCommands::SetBaseline {
            current,
            already_saved,
        } => {
            let baseline = SavingsBaseline::new(parse_money(&current)?, parse_money(&already_saved)?);
            if baseline.current_savings.is_negative() || baseline.already_saved.is_negative() {
                return Err(NestEggError::Validation(
                    "Baseline amounts cannot be negative".into(),
                ));
            }
            updated.baseline = baseline;
            println!(
                "Savings baseline set to {}",
                format_money(baseline.total(), &settings.currency_symbol)
            );
        }

        ConfigCommands::SetScenarios { percentages } => {
            updated.scenario_percentages = percentages
                .into_iter()
                .map(validate_percentage)
                .collect::<NestEggResult<_>>()?;
            println!("What-if scenarios updated");
        }

        ConfigCommands::SetMode { mode } => {
            updated.income_mode = mode;
            println!("Income mode updated");
        }
    }

    updated.save(paths)?;
    storage.log_update(EntityType::Settings, "settings", None, settings, &updated)?;
    Ok(())
}
