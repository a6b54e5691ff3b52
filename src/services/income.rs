//! Income service
//!
//! Manages recurring income sources and the per-month income entries the
//! dashboard is computed from.

use crate::audit::EntityType;
use crate::engine::to_monthly;
use crate::error::{NestEggError, NestEggResult};
use crate::models::{
    Frequency, IncomeCategory, IncomeSource, Money, MonthPeriod, MonthlyIncomeEntry,
};
use crate::storage::Storage;

pub struct IncomeService<'a> {
    storage: &'a Storage,
}

impl<'a> IncomeService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn add_source(
        &self,
        name: &str,
        amount: Money,
        frequency: Frequency,
        category: IncomeCategory,
    ) -> NestEggResult<IncomeSource> {
        let name = name.trim();
        if name.is_empty() {
            return Err(NestEggError::Validation(
                "Income source name cannot be empty".into(),
            ));
        }
        validate_amount(amount)?;
        if self
            .storage
            .income_sources
            .get_all()?
            .iter()
            .any(|s| s.name.eq_ignore_ascii_case(name))
        {
            return Err(NestEggError::Validation(format!(
                "An income source named '{}' already exists",
                name
            )));
        }

        let source = IncomeSource::new(name, amount, category, frequency);
        self.storage.income_sources.upsert(source.clone())?;
        self.storage.income_sources.save()?;

        self.storage.log_create(
            EntityType::IncomeSource,
            source.id.to_string(),
            Some(source.name.clone()),
            &source,
        )?;

        tracing::info!(id = %source.id, frequency = %source.frequency, "added income source");
        Ok(source)
    }

    /// Find a source by id or name
    pub fn find_source(&self, reference: &str) -> NestEggResult<IncomeSource> {
        self.storage
            .income_sources
            .find(reference)?
            .ok_or_else(|| NestEggError::income_source_not_found(reference))
    }

    pub fn list_sources(&self) -> NestEggResult<Vec<IncomeSource>> {
        self.storage.income_sources.get_all()
    }

    pub fn update_amount(&self, reference: &str, amount: Money) -> NestEggResult<IncomeSource> {
        validate_amount(amount)?;
        self.modify_source(reference, |source| source.set_amount(amount))
    }

    /// Pause (`false`) or resume (`true`) a source
    pub fn set_active(&self, reference: &str, active: bool) -> NestEggResult<IncomeSource> {
        self.modify_source(reference, |source| source.set_active(active))
    }

    pub fn remove_source(&self, reference: &str) -> NestEggResult<IncomeSource> {
        let source = self.find_source(reference)?;
        self.storage.income_sources.delete(source.id)?;
        self.storage.income_sources.save()?;

        self.storage.log_delete(
            EntityType::IncomeSource,
            source.id.to_string(),
            Some(source.name.clone()),
            &source,
        )?;

        Ok(source)
    }

    fn modify_source(
        &self,
        reference: &str,
        change: impl FnOnce(&mut IncomeSource),
    ) -> NestEggResult<IncomeSource> {
        let before = self.find_source(reference)?;
        let mut updated = before.clone();
        change(&mut updated);

        self.storage.income_sources.upsert(updated.clone())?;
        self.storage.income_sources.save()?;

        self.storage.log_update(
            EntityType::IncomeSource,
            updated.id.to_string(),
            Some(updated.name.clone()),
            &before,
            &updated,
        )?;

        Ok(updated)
    }

    /// Create this month's recurring entries from the active sources
    ///
    /// One entry per active recurring source, skipping sources that already
    /// have an entry in `period`; running it twice adds nothing.
    pub fn materialize_month(&self, period: MonthPeriod) -> NestEggResult<Vec<MonthlyIncomeEntry>> {
        let mut created = Vec::new();

        for source in self.storage.income_sources.get_all()? {
            if !source.active || !source.frequency.is_recurring() {
                continue;
            }
            if self.storage.income_entries.has_materialized(source.id, period)? {
                tracing::debug!(source = %source.id, %period, "already materialized");
                continue;
            }

            let entry = MonthlyIncomeEntry::from_source(
                &source,
                period,
                to_monthly(source.amount, source.frequency),
            );
            self.storage.income_entries.upsert(entry.clone())?;
            created.push(entry);
        }

        if !created.is_empty() {
            self.storage.income_entries.save()?;
            for entry in &created {
                self.storage.log_create(
                    EntityType::IncomeEntry,
                    entry.id.to_string(),
                    Some(entry.name.clone()),
                    entry,
                )?;
            }
        }

        tracing::info!(%period, created = created.len(), "materialized income entries");
        Ok(created)
    }

    pub fn add_one_off(
        &self,
        period: MonthPeriod,
        name: &str,
        amount: Money,
        category: IncomeCategory,
    ) -> NestEggResult<MonthlyIncomeEntry> {
        let name = name.trim();
        if name.is_empty() {
            return Err(NestEggError::Validation("Entry name cannot be empty".into()));
        }
        validate_amount(amount)?;

        let entry = MonthlyIncomeEntry::one_off(period, name, amount, category);
        self.storage.income_entries.upsert(entry.clone())?;
        self.storage.income_entries.save()?;

        self.storage.log_create(
            EntityType::IncomeEntry,
            entry.id.to_string(),
            Some(entry.name.clone()),
            &entry,
        )?;

        Ok(entry)
    }

    pub fn remove_entry(&self, reference: &str) -> NestEggResult<MonthlyIncomeEntry> {
        let entry = self
            .storage
            .income_entries
            .find(reference)?
            .ok_or_else(|| NestEggError::income_entry_not_found(reference))?;

        self.storage.income_entries.delete(entry.id)?;
        self.storage.income_entries.save()?;

        self.storage.log_delete(
            EntityType::IncomeEntry,
            entry.id.to_string(),
            Some(entry.name.clone()),
            &entry,
        )?;

        Ok(entry)
    }

    pub fn entries_for_month(&self, period: MonthPeriod) -> NestEggResult<Vec<MonthlyIncomeEntry>> {
        self.storage.income_entries.get_for_period(period)
    }

    pub fn entries_for_year(&self, year: i32) -> NestEggResult<Vec<MonthlyIncomeEntry>> {
        self.storage.income_entries.get_for_year(year)
    }
}

fn validate_amount(amount: Money) -> NestEggResult<()> {
    if amount.is_negative() {
        return Err(NestEggError::Validation(format!(
            "Income amount cannot be negative: {}",
            amount
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::NestEggPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = NestEggPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_add_and_find_source() {
        let (_temp_dir, storage) = create_test_storage();
        let service = IncomeService::new(&storage);

        let source = service
            .add_source("Day Job", Money::from_dollars(3000), Frequency::Monthly, IncomeCategory::Salary)
            .unwrap();

        assert_eq!(service.find_source("day job").unwrap().id, source.id);
        assert_eq!(service.list_sources().unwrap().len(), 1);
    }

    #[test]
    fn test_add_source_validation() {
        let (_temp_dir, storage) = create_test_storage();
        let service = IncomeService::new(&storage);

        let empty = service.add_source("  ", Money::from_dollars(1), Frequency::Monthly, IncomeCategory::Other);
        assert!(matches!(empty, Err(NestEggError::Validation(_))));

        let negative = service.add_source("X", Money::from_cents(-1), Frequency::Monthly, IncomeCategory::Other);
        assert!(matches!(negative, Err(NestEggError::Validation(_))));
    }

    #[test]
    fn test_duplicate_source_name_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = IncomeService::new(&storage);

        service
            .add_source("Job", Money::from_dollars(3000), Frequency::Monthly, IncomeCategory::Salary)
            .unwrap();
        let duplicate =
            service.add_source(" job ", Money::from_dollars(500), Frequency::Weekly, IncomeCategory::Other);
        assert!(matches!(duplicate, Err(NestEggError::Validation(_))));

        assert_eq!(service.list_sources().unwrap().len(), 1);
        assert_eq!(service.remove_source("job").unwrap().amount, Money::from_dollars(3000));
    }

    #[test]
    fn test_update_pause_and_remove() {
        let (_temp_dir, storage) = create_test_storage();
        let service = IncomeService::new(&storage);
        service
            .add_source("Rent", Money::from_dollars(800), Frequency::Monthly, IncomeCategory::Passive)
            .unwrap();

        let updated = service.update_amount("Rent", Money::from_dollars(850)).unwrap();
        assert_eq!(updated.amount, Money::from_dollars(850));

        let paused = service.set_active("Rent", false).unwrap();
        assert!(!paused.active);

        service.remove_source("Rent").unwrap();
        assert!(service.find_source("Rent").unwrap_err().is_not_found());
    }

    #[test]
    fn test_materialize_month_is_idempotent() {
        let (_temp_dir, storage) = create_test_storage();
        let service = IncomeService::new(&storage);
        let period = MonthPeriod::new(2025, 4);

        service
            .add_source("Job", Money::from_dollars(3000), Frequency::Monthly, IncomeCategory::Salary)
            .unwrap();
        service
            .add_source("Tutoring", Money::from_dollars(100), Frequency::Weekly, IncomeCategory::SideHustle)
            .unwrap();
        service
            .add_source("Gift", Money::from_dollars(500), Frequency::OneTime, IncomeCategory::Other)
            .unwrap();
        service
            .add_source("Old gig", Money::from_dollars(200), Frequency::Monthly, IncomeCategory::Freelance)
            .unwrap();
        service.set_active("Old gig", false).unwrap();

        let created = service.materialize_month(period).unwrap();
        assert_eq!(created.len(), 2);

        let tutoring = created.iter().find(|e| e.name == "Tutoring").unwrap();
        assert_eq!(tutoring.amount, Money::from_cents(43333));
        assert!(tutoring.recurring);

        assert!(service.materialize_month(period).unwrap().is_empty());
        assert_eq!(service.entries_for_month(period).unwrap().len(), 2);
    }

    #[test]
    fn test_one_off_entries() {
        let (_temp_dir, storage) = create_test_storage();
        let service = IncomeService::new(&storage);
        let period = MonthPeriod::new(2025, 12);

        let entry = service
            .add_one_off(period, "Bonus", Money::from_dollars(1000), IncomeCategory::Salary)
            .unwrap();
        assert!(!entry.recurring);
        assert_eq!(service.entries_for_year(2025).unwrap().len(), 1);

        service.remove_entry(&entry.id.to_string()).unwrap();
        assert!(service.entries_for_month(period).unwrap().is_empty());
        assert!(service.remove_entry(&entry.id.to_string()).unwrap_err().is_not_found());
    }
}
