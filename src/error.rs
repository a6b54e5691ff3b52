//! Custom error types for NestEgg
//!
//! The derivation engine never fails; these errors come from the layers
//! around it (configuration, storage, CLI argument parsing, export).

use thiserror::Error;

/// The main error type for NestEgg operations
#[derive(Error, Debug)]
pub enum NestEggError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A user-supplied value could not be understood
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl NestEggError {
    pub fn income_source_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Income source",
            identifier: identifier.into(),
        }
    }

    pub fn income_entry_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Income entry",
            identifier: identifier.into(),
        }
    }

    pub fn goal_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Goal",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<std::io::Error> for NestEggError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for NestEggError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for NestEgg operations
pub type NestEggResult<T> = Result<T, NestEggError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NestEggError::Config("bad percentage".into());
        assert_eq!(err.to_string(), "Configuration error: bad percentage");
    }

    #[test]
    fn test_not_found_error() {
        let err = NestEggError::goal_not_found("Emergency fund");
        assert_eq!(err.to_string(), "Goal not found: Emergency fund");
        assert!(err.is_not_found());
        assert!(!NestEggError::Storage("x".into()).is_not_found());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: NestEggError = io_err.into();
        assert!(matches!(err, NestEggError::Io(_)));
    }
}
