//! Monthly income entry repository

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::NestEggError;
use crate::models::{IncomeEntryId, IncomeSourceId, MonthPeriod, MonthlyIncomeEntry};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct IncomeEntryData {
    #[serde(default)]
    entries: Vec<MonthlyIncomeEntry>,
}

pub struct IncomeEntryRepository {
    path: PathBuf,
    entries: RwLock<HashMap<IncomeEntryId, MonthlyIncomeEntry>>,
}

impl IncomeEntryRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn load(&self) -> Result<(), NestEggError> {
        let file_data: IncomeEntryData = read_json(&self.path)?;

        let mut entries = self
            .entries
            .write()
            .map_err(|e| NestEggError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        entries.clear();
        for entry in file_data.entries {
            entries.insert(entry.id, entry);
        }

        Ok(())
    }

    pub fn save(&self) -> Result<(), NestEggError> {
        let file_data = IncomeEntryData {
            entries: self.get_all()?,
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn upsert(&self, entry: MonthlyIncomeEntry) -> Result<(), NestEggError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| NestEggError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        entries.insert(entry.id, entry);
        Ok(())
    }

    pub fn delete(&self, id: IncomeEntryId) -> Result<Option<MonthlyIncomeEntry>, NestEggError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| NestEggError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(entries.remove(&id))
    }

    /// Find an entry by its short or full id
    pub fn find(&self, reference: &str) -> Result<Option<MonthlyIncomeEntry>, NestEggError> {
        Ok(self
            .get_all()?
            .into_iter()
            .find(|e| e.id.matches_reference(reference)))
    }

    /// All entries sorted by month, then name
    pub fn get_all(&self) -> Result<Vec<MonthlyIncomeEntry>, NestEggError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| NestEggError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = entries.values().cloned().collect();
        list.sort_by(|a, b| a.period().cmp(&b.period()).then_with(|| a.name.cmp(&b.name)));
        Ok(list)
    }

    pub fn get_for_period(&self, period: MonthPeriod) -> Result<Vec<MonthlyIncomeEntry>, NestEggError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|e| e.is_in(period))
            .collect())
    }

    pub fn get_for_year(&self, year: i32) -> Result<Vec<MonthlyIncomeEntry>, NestEggError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|e| e.year == year)
            .collect())
    }

    /// True when `source_id` already has an entry in `period`
    pub fn has_materialized(
        &self,
        source_id: IncomeSourceId,
        period: MonthPeriod,
    ) -> Result<bool, NestEggError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| NestEggError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entries
            .values()
            .any(|e| e.source_id == Some(source_id) && e.is_in(period)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IncomeCategory, IncomeSource, Money};
    use tempfile::TempDir;

    fn repo(temp_dir: &TempDir) -> IncomeEntryRepository {
        IncomeEntryRepository::new(temp_dir.path().join("income_entries.json"))
    }

    #[test]
    fn test_multiple_entries_per_month() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo(&temp_dir);
        let period = MonthPeriod::new(2025, 3);

        for name in ["A", "B", "C"] {
            repo.upsert(MonthlyIncomeEntry::one_off(period, name, Money::from_dollars(10), IncomeCategory::Other))
                .unwrap();
        }
        repo.upsert(MonthlyIncomeEntry::one_off(period.next(), "D", Money::from_dollars(10), IncomeCategory::Other))
            .unwrap();

        assert_eq!(repo.get_for_period(period).unwrap().len(), 3);
        assert_eq!(repo.get_for_year(2025).unwrap().len(), 4);
        assert!(repo.get_for_year(2024).unwrap().is_empty());
    }

    #[test]
    fn test_has_materialized() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo(&temp_dir);
        let source = IncomeSource::monthly("Job", Money::from_dollars(3000), IncomeCategory::Salary);
        let period = MonthPeriod::new(2025, 1);

        assert!(!repo.has_materialized(source.id, period).unwrap());
        repo.upsert(MonthlyIncomeEntry::from_source(&source, period, source.amount))
            .unwrap();
        assert!(repo.has_materialized(source.id, period).unwrap());
        assert!(!repo.has_materialized(source.id, period.next()).unwrap());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let entry = MonthlyIncomeEntry::one_off(
            MonthPeriod::new(2025, 8),
            "Refund",
            Money::from_dollars(120),
            IncomeCategory::Other,
        );

        {
            let repo = repo(&temp_dir);
            repo.upsert(entry.clone()).unwrap();
            repo.save().unwrap();
        }

        let repo = repo(&temp_dir);
        repo.load().unwrap();
        assert_eq!(repo.find(&entry.id.to_string()).unwrap(), Some(entry));
    }
}
