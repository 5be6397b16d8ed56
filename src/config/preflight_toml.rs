//! Parsing and validation for preflight.toml configuration files

use crate::error::ConfigError;
use crate::types::RuleId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Main configuration struct for preflight.toml
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preflight metadata
    #[serde(default)]
    pub preflight: PreflightMeta,

    /// Cross-field rule toggles
    #[serde(default)]
    pub rules: RulesConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<(), ConfigError> {
        if self.preflight.version != "1" {
            return Err(ConfigError::Validation(format!(
                "Unsupported configuration version '{}'. Expected '1'",
                self.preflight.version
            )));
        }
        Ok(())
    }
}

/// Preflight metadata section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreflightMeta {
    /// Configuration version (must be "1")
    #[serde(default = "default_version")]
    pub version: String,
}

impl Default for PreflightMeta {
    fn default() -> Self {
        Self {
            version: default_version(),
        }
    }
}

fn default_version() -> String {
    "1".to_string()
}

/// Rules section: `rule-id = true | false`
///
/// Rules not mentioned are enabled.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RulesConfig {
    toggles: BTreeMap<RuleId, bool>,
}

impl RulesConfig {
    /// Enable or disable a rule
    pub fn set(&mut self, rule_id: RuleId, enabled: bool) {
        self.toggles.insert(rule_id, enabled);
    }

    /// Returns false only for rules explicitly disabled
    pub fn is_enabled(&self, rule_id: &str) -> bool {
        self.toggles
            .iter()
            .find(|(id, _)| id.as_str() == rule_id)
            .is_none_or(|(_, enabled)| *enabled)
    }

    /// Rule IDs mentioned in the configuration
    pub fn rule_ids(&self) -> impl Iterator<Item = &RuleId> {
        self.toggles.keys()
    }
}

/// Output configuration section
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Color output setting
    #[serde(default)]
    pub color: ColorOption,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON Lines format
    Jsonl,
}

/// Color output options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorOption {
    /// Auto-detect based on terminal capabilities
    #[default]
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}
