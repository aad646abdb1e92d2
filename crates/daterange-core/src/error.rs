//! Core error types for daterange-core.
//!
//! Picker commands never fail: an invalid draft or an unknown shortcut is
//! declined silently. The types here cover the construction boundaries
//! instead (configuration files, caller-supplied shortcut lists, text input).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for daterange-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML decoding errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown dot-path key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Home/config directory could not be determined or created
    #[error("Configuration directory unavailable: {0}")]
    DirUnavailable(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Two shortcuts in one catalog share a label
    #[error("Duplicate predefined range label: '{0}'")]
    DuplicateLabel(String),

    /// A shortcut value is incomplete or reversed
    #[error("Predefined range '{label}' is not a valid date range")]
    InvalidRange { label: String },

    /// Text could not be read as a date or date-time
    #[error("Unparseable date: '{0}'")]
    UnparseableDate(String),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl From<toml::ser::Error> for CoreError {
    fn from(err: toml::ser::Error) -> Self {
        CoreError::Custom(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_converts_into_core_error() {
        let err: CoreError = ValidationError::DuplicateLabel("Today".into()).into();
        assert_eq!(
            err.to_string(),
            "Validation error: Duplicate predefined range label: 'Today'"
        );
    }

    #[test]
    fn config_error_mentions_key() {
        let err = ConfigError::InvalidValue {
            key: "picker.number_of_months".into(),
            message: "must be 1 or 2".into(),
        };
        assert!(err.to_string().contains("picker.number_of_months"));
    }
}
