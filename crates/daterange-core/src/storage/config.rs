//! TOML-based picker configuration.
//!
//! Stores:
//! - Picker options (placeholder, behavior flags, calendar bounds, layout hints)
//! - Custom shortcut ranges, as relative specs resolved at load time
//!
//! Configuration is stored at `~/.config/daterange/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use super::data_dir;
use crate::catalog::{PredefinedRangeCatalog, PresetEntry};
use crate::clock::{Clock, SystemClock};
use crate::error::{ConfigError, CoreError, Result, ValidationError};
use crate::picker::PickerOptions;

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/daterange/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_picker")]
    pub picker: PickerOptions,
    /// Custom shortcuts. Empty means the built-in list.
    #[serde(default)]
    pub presets: Vec<PresetEntry>,
}

/// Picker defaults without a frozen `max_date`, so "today" is read at load time.
fn default_picker() -> PickerOptions {
    PickerOptions {
        max_date: None,
        ..PickerOptions::with_clock(&SystemClock)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            picker: default_picker(),
            presets: Vec::new(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_some() {
                current = current.get_mut(part).ok_or_else(unknown)?;
                continue;
            }

            let obj = current.as_object_mut().ok_or_else(unknown)?;
            let existing = obj.get(part).ok_or_else(unknown)?;

            let new_value = match existing {
                _ if value == "null" => serde_json::Value::Null,
                serde_json::Value::Bool(_) => serde_json::Value::Bool(
                    value
                        .parse::<bool>()
                        .map_err(|_| invalid(format!("cannot parse '{value}' as bool")))?,
                ),
                serde_json::Value::Number(_) => value
                    .parse::<u64>()
                    .map(|n| serde_json::Value::Number(n.into()))
                    .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?,
                serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                    serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                }
                _ => serde_json::Value::String(value.into()),
            };

            obj.insert(part.to_string(), new_value);
            return Ok(());
        }

        Err(unknown())
    }

    /// Default location of the config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be created.
    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults if the file is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            let cfg = Self::default();
            cfg.save_to(&path)?;
            Ok(cfg)
        }
    }

    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let cfg: Config =
            toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Ok(cfg)
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!(error = %e, "falling back to default config");
            Self::default()
        })
    }

    /// Persist to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key, in memory only.
    ///
    /// The value is parsed according to the current type of the field;
    /// `"null"` unsets an optional field.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the resulting config fails validation.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the picker options are out of range.
    pub fn validate(&self) -> Result<()> {
        self.picker.validate().map_err(|e| {
            let (key, message) = match e {
                ValidationError::InvalidValue { field, message } => {
                    (format!("picker.{field}"), message)
                }
                other => ("picker".to_string(), other.to_string()),
            };
            CoreError::Config(ConfigError::InvalidValue { key, message })
        })
    }

    /// Picker options with `max_date` defaulted to the clock's current day.
    ///
    /// # Errors
    ///
    /// Returns an error if the picker options are out of range.
    pub fn picker_options(&self, clock: &impl Clock) -> Result<PickerOptions> {
        self.validate()?;
        let mut options = self.picker.clone();
        if options.max_date.is_none() {
            options.max_date = Some(clock.now().date());
        }
        Ok(options)
    }

    /// The shortcut catalog, resolved once against `clock`.
    ///
    /// # Errors
    ///
    /// Returns an error if custom presets have duplicate labels or
    /// unresolvable ranges.
    pub fn catalog(&self, clock: &impl Clock) -> Result<PredefinedRangeCatalog> {
        let now = clock.now();
        if self.presets.is_empty() {
            return Ok(PredefinedRangeCatalog::defaults(now));
        }
        Ok(PredefinedRangeCatalog::from_entries(&self.presets, now)?)
    }
}
