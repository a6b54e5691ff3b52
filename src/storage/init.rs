//! First-run setup

use crate::config::paths::NestEggPaths;
use crate::config::settings::Settings;
use crate::error::NestEggError;

/// Create the directory layout and a default `config.json`
///
/// Existing settings are left untouched and returned as loaded.
pub fn initialize_storage(paths: &NestEggPaths) -> Result<Settings, NestEggError> {
    paths.ensure_directories()?;

    if needs_initialization(paths) {
        let settings = Settings::default();
        settings.save(paths)?;
        tracing::info!(base_dir = %paths.base_dir().display(), "initialized data directory");
        return Ok(settings);
    }

    Settings::load_or_create(paths)
}

pub fn needs_initialization(paths: &NestEggPaths) -> bool {
    !paths.is_initialized()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SavingsPercentage;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_storage() {
        let temp_dir = TempDir::new().unwrap();
        let paths = NestEggPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(needs_initialization(&paths));
        initialize_storage(&paths).unwrap();

        assert!(!needs_initialization(&paths));
        assert!(paths.settings_file().exists());
        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_doesnt_overwrite_existing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = NestEggPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = initialize_storage(&paths).unwrap();
        settings.savings_percentage = SavingsPercentage::new(42.0);
        settings.save(&paths).unwrap();

        let again = initialize_storage(&paths).unwrap();
        assert_eq!(again.savings_percentage.value(), 42.0);
    }
}
