//! Full data snapshot in JSON

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::error::{NestEggError, NestEggResult};
use crate::models::{Goal, IncomeSource, MonthPeriod, MonthlyIncomeEntry, MonthlySavingsRecord};
use crate::storage::Storage;

pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Everything NestEgg stores, in one document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    pub settings: Settings,
    pub income_sources: Vec<IncomeSource>,
    pub income_entries: Vec<MonthlyIncomeEntry>,
    pub savings: Vec<MonthlySavingsRecord>,
    pub goals: Vec<Goal>,
    pub metadata: ExportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub income_source_count: usize,
    pub income_entry_count: usize,
    pub savings_record_count: usize,
    pub goal_count: usize,
    /// First and last month with any entry or savings record
    pub earliest_month: Option<MonthPeriod>,
    pub latest_month: Option<MonthPeriod>,
}

impl FullExport {
    pub fn from_storage(storage: &Storage, settings: &Settings) -> NestEggResult<Self> {
        let income_sources = storage.income_sources.get_all()?;
        let income_entries = storage.income_entries.get_all()?;
        let savings = storage.savings.get_all()?;
        let goals = storage.goals.get_all()?;

        let months = || {
            income_entries
                .iter()
                .map(|e| e.period())
                .chain(savings.iter().map(|r| r.period()))
        };

        let metadata = ExportMetadata {
            income_source_count: income_sources.len(),
            income_entry_count: income_entries.len(),
            savings_record_count: savings.len(),
            goal_count: goals.len(),
            earliest_month: months().min(),
            latest_month: months().max(),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            settings: settings.clone(),
            income_sources,
            income_entries,
            savings,
            goals,
            metadata,
        })
    }
}

pub fn export_full_json<W: Write>(
    storage: &Storage,
    settings: &Settings,
    writer: &mut W,
    pretty: bool,
) -> NestEggResult<()> {
    let export = FullExport::from_storage(storage, settings)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| NestEggError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::NestEggPaths;
    use crate::models::{IncomeCategory, Money};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = NestEggPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_full_export_metadata() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .income_sources
            .upsert(IncomeSource::monthly("Job", Money::from_dollars(3000), IncomeCategory::Salary))
            .unwrap();
        storage
            .income_entries
            .upsert(MonthlyIncomeEntry::one_off(
                MonthPeriod::new(2025, 4),
                "Gift",
                Money::from_dollars(50),
                IncomeCategory::Other,
            ))
            .unwrap();
        storage
            .savings
            .upsert(MonthlySavingsRecord::new(MonthPeriod::new(2024, 12), Money::from_dollars(10)))
            .unwrap();

        let export = FullExport::from_storage(&storage, &Settings::default()).unwrap();

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.metadata.income_source_count, 1);
        assert_eq!(export.metadata.goal_count, 0);
        assert_eq!(export.metadata.earliest_month, Some(MonthPeriod::new(2024, 12)));
        assert_eq!(export.metadata.latest_month, Some(MonthPeriod::new(2025, 4)));
    }

    #[test]
    fn test_json_output_parses_back() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .goals
            .upsert(Goal::new("Car", Money::from_dollars(8000)))
            .unwrap();

        let mut output = Vec::new();
        export_full_json(&storage, &Settings::default(), &mut output, true).unwrap();

        let parsed: FullExport = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed.goals.len(), 1);
        assert_eq!(parsed.goals[0].name, "Car");
        assert_eq!(parsed.settings.savings_percentage.value(), 20.0);
    }
}
