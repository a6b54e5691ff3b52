//! Savings service
//!
//! Records how much was actually saved each month. Recording a month that
//! already has a record replaces it.

use crate::audit::EntityType;
use crate::error::{NestEggError, NestEggResult};
use crate::models::{Money, MonthPeriod, MonthlySavingsRecord};
use crate::storage::Storage;

pub struct SavingsService<'a> {
    storage: &'a Storage,
}

impl<'a> SavingsService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn record(
        &self,
        period: MonthPeriod,
        saved: Money,
        note: Option<String>,
    ) -> NestEggResult<MonthlySavingsRecord> {
        if saved.is_negative() {
            return Err(NestEggError::Validation(format!(
                "Saved amount cannot be negative: {}",
                saved
            )));
        }

        let existing = self.storage.savings.get_for_period(period);

        let mut record = MonthlySavingsRecord::new(period, saved);
        if let Some(before) = &existing {
            record.id = before.id;
        }
        if let Some(note) = note.filter(|n| !n.trim().is_empty()) {
            record = record.with_note(note);
        }

        self.storage.savings.upsert(record.clone())?;
        self.storage.savings.save()?;

        let label = Some(period.display_long());
        match existing {
            Some(before) => {
                tracing::info!(%period, "replaced savings record");
                self.storage.log_update(
                    EntityType::SavingsRecord,
                    record.id.to_string(),
                    label,
                    &before,
                    &record,
                )?;
            }
            None => {
                self.storage.log_create(
                    EntityType::SavingsRecord,
                    record.id.to_string(),
                    label,
                    &record,
                )?;
            }
        }

        Ok(record)
    }

    pub fn get(&self, period: MonthPeriod) -> Option<MonthlySavingsRecord> {
        self.storage.savings.get_for_period(period)
    }

    pub fn list_year(&self, year: i32) -> NestEggResult<Vec<MonthlySavingsRecord>> {
        self.storage.savings.get_for_year(year)
    }

    pub fn list_all(&self) -> NestEggResult<Vec<MonthlySavingsRecord>> {
        self.storage.savings.get_all()
    }

    /// Remove the month's record; `false` when there was none
    pub fn remove(&self, period: MonthPeriod) -> NestEggResult<bool> {
        match self.storage.savings.delete_for_period(period) {
            Some(removed) => {
                self.storage.savings.save()?;
                self.storage.log_delete(
                    EntityType::SavingsRecord,
                    removed.id.to_string(),
                    Some(period.display_long()),
                    &removed,
                )?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
