//! Monthly savings repository
//!
//! Keyed by month, so a month can never hold two savings records.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::NestEggError;
use crate::models::{MonthPeriod, MonthlySavingsRecord};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct SavingsData {
    #[serde(default)]
    records: Vec<MonthlySavingsRecord>,
}

pub struct SavingsRepository {
    path: PathBuf,
    records: RwLock<HashMap<MonthPeriod, MonthlySavingsRecord>>,
}

impl SavingsRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Load records; a later duplicate for the same month wins
    pub fn load(&self) -> Result<(), NestEggError> {
        let file_data: SavingsData = read_json(&self.path)?;

        let mut records = self
            .records
            .write()
            .map_err(|e| NestEggError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        records.clear();
        for record in file_data.records {
            records.insert(record.period(), record);
        }

        Ok(())
    }

    pub fn save(&self) -> Result<(), NestEggError> {
        let file_data = SavingsData {
            records: self.get_all()?,
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get_for_period(&self, period: MonthPeriod) -> Option<MonthlySavingsRecord> {
        let records = self.records.read().ok()?;
        records.get(&period).cloned()
    }

    /// Insert or replace the record for its month, returning the replaced one
    pub fn upsert(
        &self,
        record: MonthlySavingsRecord,
    ) -> Result<Option<MonthlySavingsRecord>, NestEggError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| NestEggError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(records.insert(record.period(), record))
    }

    pub fn delete_for_period(&self, period: MonthPeriod) -> Option<MonthlySavingsRecord> {
        let mut records = self.records.write().ok()?;
        records.remove(&period)
    }

    /// All records in chronological order
    pub fn get_all(&self) -> Result<Vec<MonthlySavingsRecord>, NestEggError> {
        let records = self
            .records
            .read()
            .map_err(|e| NestEggError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = records.values().cloned().collect();
        list.sort_by_key(|r| r.period());
        Ok(list)
    }

    pub fn get_for_year(&self, year: i32) -> Result<Vec<MonthlySavingsRecord>, NestEggError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|r| r.year == year)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    #[test]
    fn test_one_record_per_month() {
        let temp_dir = TempDir::new().unwrap();
        let repo = SavingsRepository::new(temp_dir.path().join("savings.json"));
        let period = MonthPeriod::new(2025, 1);

        let first = MonthlySavingsRecord::new(period, Money::from_dollars(300));
        assert!(repo.upsert(first.clone()).unwrap().is_none());

        let replaced = repo
            .upsert(MonthlySavingsRecord::new(period, Money::from_dollars(450)))
            .unwrap();
        assert_eq!(replaced, Some(first));

        assert_eq!(repo.get_all().unwrap().len(), 1);
        assert_eq!(repo.get_for_period(period).unwrap().saved, Money::from_dollars(450));
    }

    #[test]
    fn test_save_and_load_sorted() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("savings.json");

        {
            let repo = SavingsRepository::new(path.clone());
            repo.upsert(MonthlySavingsRecord::new(MonthPeriod::new(2025, 3), Money::from_dollars(3)))
                .unwrap();
            repo.upsert(MonthlySavingsRecord::new(MonthPeriod::new(2024, 11), Money::from_dollars(1)))
                .unwrap();
            repo.save().unwrap();
        }

        let repo = SavingsRepository::new(path);
        repo.load().unwrap();
        let periods: Vec<_> = repo.get_all().unwrap().iter().map(|r| r.period()).collect();
        assert_eq!(periods, vec![MonthPeriod::new(2024, 11), MonthPeriod::new(2025, 3)]);
        assert_eq!(repo.get_for_year(2025).unwrap().len(), 1);
    }

    #[test]
    fn test_delete_for_period() {
        let temp_dir = TempDir::new().unwrap();
        let repo = SavingsRepository::new(temp_dir.path().join("savings.json"));
        let period = MonthPeriod::new(2025, 5);
        repo.upsert(MonthlySavingsRecord::new(period, Money::from_dollars(10)))
            .unwrap();

        assert!(repo.delete_for_period(period).is_some());
        assert!(repo.get_for_period(period).is_none());
    }
}
