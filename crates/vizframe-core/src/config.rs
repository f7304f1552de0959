//! Configuration for vizframe-core
//!
//! Groups the knobs for column type inference and for the human-readable
//! table summary. Loadable from TOML or JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Column type inference settings
    pub inference: InferenceConfig,
    /// Table summary settings
    pub summary: SummaryConfig,
}

/// Column type inference configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Store floating point columns as f64 instead of f32
    pub double_precision: bool,
    /// Number of leading rows used to guess column types when reading files
    pub sample_rows: usize,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            double_precision: false,
            sample_rows: 100,
        }
    }
}

/// Table summary configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Above this many columns the listing is abbreviated
    pub max_columns: usize,
    /// Number of columns listed when abbreviated
    pub abbreviated_columns: usize,
    /// Character budget for the category preview of a categorical column
    pub category_preview_chars: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_columns: 20,
            abbreviated_columns: 10,
            category_preview_chars: 50,
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to write TOML: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FrameConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.inference.sample_rows == 0 {
            return Err(ConfigError::OutOfRange(
                "sample_rows must be positive".to_string(),
            ));
        }

        if self.summary.abbreviated_columns == 0 {
            return Err(ConfigError::OutOfRange(
                "abbreviated_columns must be positive".to_string(),
            ));
        }

        if self.summary.abbreviated_columns > self.summary.max_columns {
            return Err(ConfigError::InvalidSettings(
                "abbreviated_columns must not exceed max_columns".to_string(),
            ));
        }

        if self.summary.category_preview_chars == 0 {
            return Err(ConfigError::OutOfRange(
                "category_preview_chars must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
