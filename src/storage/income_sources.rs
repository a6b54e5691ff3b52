//! Income source repository
//!
//! Handles persistence of income source definitions to JSON files.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::NestEggError;
use crate::models::{IncomeSource, IncomeSourceId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct IncomeSourceData {
    #[serde(default)]
    sources: Vec<IncomeSource>,
}

pub struct IncomeSourceRepository {
    path: PathBuf,
    sources: RwLock<HashMap<IncomeSourceId, IncomeSource>>,
}

impl IncomeSourceRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            sources: RwLock::new(HashMap::new()),
        }
    }

    pub fn load(&self) -> Result<(), NestEggError> {
        let file_data: IncomeSourceData = read_json(&self.path)?;

        let mut sources = self
            .sources
            .write()
            .map_err(|e| NestEggError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        sources.clear();
        for source in file_data.sources {
            sources.insert(source.id, source);
        }

        Ok(())
    }

    pub fn save(&self) -> Result<(), NestEggError> {
        let file_data = IncomeSourceData {
            sources: self.get_all()?,
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, id: IncomeSourceId) -> Result<Option<IncomeSource>, NestEggError> {
        let sources = self
            .sources
            .read()
            .map_err(|e| NestEggError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(sources.get(&id).cloned())
    }

    /// Find by short id, full id, or case-insensitive name
    pub fn find(&self, reference: &str) -> Result<Option<IncomeSource>, NestEggError> {
        let all = self.get_all()?;
        let by_id = all.iter().find(|s| s.id.matches_reference(reference)).cloned();
        Ok(by_id.or_else(|| {
            all.into_iter()
                .find(|s| s.name.eq_ignore_ascii_case(reference.trim()))
        }))
    }

    pub fn upsert(&self, source: IncomeSource) -> Result<(), NestEggError> {
        let mut sources = self
            .sources
            .write()
            .map_err(|e| NestEggError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        sources.insert(source.id, source);
        Ok(())
    }

    pub fn delete(&self, id: IncomeSourceId) -> Result<Option<IncomeSource>, NestEggError> {
        let mut sources = self
            .sources
            .write()
            .map_err(|e| NestEggError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(sources.remove(&id))
    }

    /// All sources, oldest first
    pub fn get_all(&self) -> Result<Vec<IncomeSource>, NestEggError> {
        let sources = self
            .sources
            .read()
            .map_err(|e| NestEggError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = sources.values().cloned().collect();
        list.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.name.cmp(&b.name)));
        Ok(list)
    }
}
