//! User settings for NestEgg
//!
//! Holds the savings configuration the dashboard is computed from: target
//! savings percentage, savings baseline, the what-if percentage list, and
//! which income basis (recurring sources or recorded entries) to use.

use serde::{Deserialize, Serialize};

use super::paths::NestEggPaths;
use crate::engine::scenario::default_percentages;
use crate::error::NestEggError;
use crate::models::{SavingsBaseline, SavingsPercentage};

/// Which records the dashboard derives monthly income from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum IncomeMode {
    /// Normalize the configured recurring income sources
    Sources,
    /// Sum the income entries recorded for the month (default)
    #[default]
    Entries,
}

/// User settings for NestEgg
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Target share of monthly income to save
    #[serde(default = "default_savings_percentage")]
    pub savings_percentage: SavingsPercentage,

    /// Savings held before (or outside of) the tracked months
    #[serde(default)]
    pub baseline: SavingsBaseline,

    /// Percentages compared in the what-if report
    #[serde(default = "default_scenario_percentages")]
    pub scenario_percentages: Vec<SavingsPercentage>,

    /// Income basis used by the dashboard
    #[serde(default)]
    pub income_mode: IncomeMode,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_savings_percentage() -> SavingsPercentage {
    SavingsPercentage::new(20.0)
}

fn default_scenario_percentages() -> Vec<SavingsPercentage> {
    default_percentages()
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            savings_percentage: default_savings_percentage(),
            baseline: SavingsBaseline::default(),
            scenario_percentages: default_scenario_percentages(),
            income_mode: IncomeMode::default(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &NestEggPaths) -> Result<Self, NestEggError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| NestEggError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| NestEggError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &NestEggPaths) -> Result<(), NestEggError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| NestEggError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| NestEggError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
