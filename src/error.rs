//! Error types for appd-preflight
//!
//! Validation findings are never errors; they are reported as result
//! records. The types here cover genuine faults around the engine: reading
//! and parsing files, malformed overrides, and inconsistent rule sets.

use std::path::PathBuf;

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid TOML
    #[error("Invalid configuration syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration parsed but holds unsupported values
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Rule-related errors
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// A second rule was registered under an existing identifier
    #[error("Duplicate rule for '{0}'")]
    Duplicate(String),

    /// Configuration refers to a rule that does not exist
    #[error("Rule not found: {0}")]
    NotFound(String),
}

/// Errors loading field values from profiles and overrides
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// Profile file could not be read
    #[error("Failed to read profile {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML profile could not be parsed
    #[error("Invalid TOML profile {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// JSON profile could not be parsed
    #[error("Invalid JSON profile {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A `FIELD=VALUE` override was malformed
    #[error("Invalid override '{0}': expected FIELD=VALUE")]
    InvalidOverride(String),
}

/// Top-level error type for appd-preflight
#[derive(Debug, thiserror::Error)]
pub enum PreflightError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rule error
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    /// Profile error
    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
