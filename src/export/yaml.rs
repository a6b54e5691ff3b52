//! Full data snapshot in YAML

use std::io::Write;

use crate::config::Settings;
use crate::error::{NestEggError, NestEggResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

pub fn export_full_yaml<W: Write>(
    storage: &Storage,
    settings: &Settings,
    writer: &mut W,
) -> NestEggResult<()> {
    let export = FullExport::from_storage(storage, settings)?;
    let export_err = |e: std::io::Error| NestEggError::Export(e.to_string());

    writeln!(writer, "# NestEgg data export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| NestEggError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::NestEggPaths;
    use crate::models::{IncomeCategory, IncomeSource, Money};
    use tempfile::TempDir;

    #[test]
    fn test_yaml_export() {
        let temp_dir = TempDir::new().unwrap();
        let paths = NestEggPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        storage
            .income_sources
            .upsert(IncomeSource::weekly("Tutoring", Money::from_dollars(80), IncomeCategory::SideHustle))
            .unwrap();

        let mut output = Vec::new();
        export_full_yaml(&storage, &Settings::default(), &mut output).unwrap();
        let yaml = String::from_utf8(output).unwrap();

        assert!(yaml.starts_with("# NestEgg data export"));
        assert!(yaml.contains("Tutoring"));
        assert!(yaml.contains("side-hustle"));

        let parsed: FullExport = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.income_sources.len(), 1);
    }
}
