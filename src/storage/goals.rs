//! Goal repository

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::NestEggError;
use crate::models::{Goal, GoalId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct GoalData {
    #[serde(default)]
    goals: Vec<Goal>,
}

pub struct GoalRepository {
    path: PathBuf,
    goals: RwLock<HashMap<GoalId, Goal>>,
}

impl GoalRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            goals: RwLock::new(HashMap::new()),
        }
    }

    pub fn load(&self) -> Result<(), NestEggError> {
        let file_data: GoalData = read_json(&self.path)?;

        let mut goals = self
            .goals
            .write()
            .map_err(|e| NestEggError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        goals.clear();
        for goal in file_data.goals {
            goals.insert(goal.id, goal);
        }

        Ok(())
    }

    pub fn save(&self) -> Result<(), NestEggError> {
        let file_data = GoalData {
            goals: self.get_all()?,
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Find by short id, full id, or case-insensitive name
    pub fn find(&self, reference: &str) -> Result<Option<Goal>, NestEggError> {
        let all = self.get_all()?;
        let by_id = all.iter().find(|g| g.id.matches_reference(reference)).cloned();
        Ok(by_id.or_else(|| {
            all.into_iter()
                .find(|g| g.name.eq_ignore_ascii_case(reference.trim()))
        }))
    }

    pub fn upsert(&self, goal: Goal) -> Result<(), NestEggError> {
        let mut goals = self
            .goals
            .write()
            .map_err(|e| NestEggError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        goals.insert(goal.id, goal);
        Ok(())
    }

    pub fn delete(&self, id: GoalId) -> Result<Option<Goal>, NestEggError> {
        let mut goals = self
            .goals
            .write()
            .map_err(|e| NestEggError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(goals.remove(&id))
    }

    /// All goals, oldest first
    pub fn get_all(&self) -> Result<Vec<Goal>, NestEggError> {
        let goals = self
            .goals
            .read()
            .map_err(|e| NestEggError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = goals.values().cloned().collect();
        list.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.name.cmp(&b.name)));
        Ok(list)
    }
}
