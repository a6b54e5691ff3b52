//! Path management for NestEgg
//!
//! ## Path Resolution Order
//!
//! 1. `NESTEGG_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory joined with `nestegg`
//!    (`~/.config/nestegg` on Linux, `%APPDATA%\nestegg` on Windows)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::NestEggError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "NESTEGG_DATA_DIR";

/// Manages all paths used by NestEgg
#[derive(Debug, Clone)]
pub struct NestEggPaths {
    base_dir: PathBuf,
}

impl NestEggPaths {
    /// Resolve the base directory from the environment or the platform default
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, NestEggError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding the JSON data files
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    pub fn income_sources_file(&self) -> PathBuf {
        self.data_dir().join("income_sources.json")
    }

    pub fn income_entries_file(&self) -> PathBuf {
        self.data_dir().join("income_entries.json")
    }

    pub fn savings_file(&self) -> PathBuf {
        self.data_dir().join("savings.json")
    }

    pub fn goals_file(&self) -> PathBuf {
        self.data_dir().join("goals.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), NestEggError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| NestEggError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| NestEggError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if NestEgg has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, NestEggError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| NestEggError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("nestegg"))
}
