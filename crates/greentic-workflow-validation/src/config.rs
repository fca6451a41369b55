use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported config format '{0}' (expected .toml or .json)")]
    UnsupportedFormat(String),
}

/// Settings bound to one required-when-checked rule.
///
/// Keys are camelCase. The property names used by exported workflow
/// definitions (`CheckboxField`, `ToValidate`, `ErrorMessage`) are accepted as
/// aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RuleConfig {
    #[serde(alias = "CheckboxField")]
    pub trigger_field: String,
    #[serde(alias = "ToValidate")]
    pub dependent_fields: String,
    #[serde(alias = "ErrorMessage")]
    pub error_message: String,
}

impl RuleConfig {
    pub fn new(
        trigger_field: impl Into<String>,
        dependent_fields: impl Into<String>,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            trigger_field: trigger_field.into(),
            dependent_fields: dependent_fields.into(),
            error_message: error_message.into(),
        }
    }

    /// Names listed in `dependent_fields`, trimmed and in order.
    ///
    /// Duplicates and empty names (for example from a trailing comma) are
    /// kept as-is.
    pub fn dependent_field_names(&self) -> Vec<String> {
        parse_field_list(&self.dependent_fields)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Loads a config file, choosing the format from its extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        if extension != "toml" && extension != "json" {
            return Err(ConfigError::UnsupportedFormat(extension));
        }
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if extension == "toml" {
            Self::from_toml_str(&raw)
        } else {
            Self::from_json_str(&raw)
        }
    }
}

pub fn parse_field_list(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|name| name.trim().to_string()).collect()
}
