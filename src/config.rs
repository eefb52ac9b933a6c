//! Engine configuration
//!
//! Loaded from a JSON file. Every field has a default, so an empty object
//! is a valid configuration.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid configuration document
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// What the resolver does when a path segment does not exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingPropertyPolicy {
    /// Abort the query with a resolution error
    #[default]
    Fail,
    /// Treat the missing property as null
    Null,
}

/// Query engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Policy for missing properties (default: fail)
    #[serde(default)]
    pub missing_properties: MissingPropertyPolicy,

    /// Extra method-name suffixes, mapped to built-in operator names
    #[serde(default)]
    pub operator_aliases: BTreeMap<String, String>,
}

impl EngineConfig {
    /// Config that resolves missing properties to null
    pub fn lenient() -> Self {
        Self {
            missing_properties: MissingPropertyPolicy::Null,
            ..Self::default()
        }
    }

    /// Parse a configuration document
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&contents)
    }
}
