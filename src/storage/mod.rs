//! Storage layer for NestEgg
//!
//! JSON file storage with atomic writes, one file per record kind, plus the
//! append-only audit log.

pub mod file_io;
pub mod goals;
pub mod income_entries;
pub mod income_sources;
pub mod init;
pub mod savings;

pub use file_io::{read_json, write_json_atomic};
pub use goals::GoalRepository;
pub use income_entries::IncomeEntryRepository;
pub use income_sources::IncomeSourceRepository;
pub use init::{initialize_storage, needs_initialization};
pub use savings::SavingsRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::NestEggPaths;
use crate::error::NestEggError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: NestEggPaths,
    pub income_sources: IncomeSourceRepository,
    pub income_entries: IncomeEntryRepository,
    pub savings: SavingsRepository,
    pub goals: GoalRepository,
    audit: AuditLogger,
}

impl Storage {
    pub fn new(paths: NestEggPaths) -> Result<Self, NestEggError> {
        paths.ensure_directories()?;

        Ok(Self {
            income_sources: IncomeSourceRepository::new(paths.income_sources_file()),
            income_entries: IncomeEntryRepository::new(paths.income_entries_file()),
            savings: SavingsRepository::new(paths.savings_file()),
            goals: GoalRepository::new(paths.goals_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &NestEggPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    pub fn load_all(&mut self) -> Result<(), NestEggError> {
        self.income_sources.load()?;
        self.income_entries.load()?;
        self.savings.load()?;
        self.goals.load()?;
        tracing::debug!(base_dir = %self.paths.base_dir().display(), "storage loaded");
        Ok(())
    }

    pub fn save_all(&self) -> Result<(), NestEggError> {
        self.income_sources.save()?;
        self.income_entries.save()?;
        self.savings.save()?;
        self.goals.save()?;
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), NestEggError> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Result<(), NestEggError> {
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
        ))
    }

    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), NestEggError> {
        self.audit
            .log(&AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }
}
