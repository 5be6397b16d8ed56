//! Initialize a preflight project
//!
//! Creates preflight.toml and a profile template in the current directory.

use std::fs;
use std::path::Path;

/// Default content for preflight.toml
const DEFAULT_PREFLIGHT_TOML: &str = r#"[preflight]
version = "1"

[rules]
# Cross-field rules are enabled by default
# Disable a rule: rule-name = false
# app-name-matches-tier-name = true
# node-name-matches-tier-name = true

[output]
format = "human"
color = "auto"
"#;

/// Default content for the profile template
const DEFAULT_PROFILE_TOML: &str = r#"# Controller connection
controller-host = "example.saas.appdynamics.com"
controller-port = "443"

# Account credentials
account-name = "example"
access-key = ""

# Agent naming
app-name = "my-application"
tier-name = "web"
node-name = "web-1"
"#;

/// Template profile file name
pub const PROFILE_TEMPLATE: &str = "preflight-profile.toml";

/// Error type for init command
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Path error
    #[error("Path error: {0}")]
    Path(String),
}

/// Result of init command
#[derive(Debug, Default, PartialEq, Eq)]
pub struct InitResult {
    /// Files that were created
    pub created: Vec<String>,
    /// Files that were skipped (already existed)
    pub skipped: Vec<String>,
    /// Files that were overwritten
    pub overwritten: Vec<String>,
}

/// Run the init command
///
/// Creates the following files:
/// - preflight.toml (tool configuration)
/// - preflight-profile.toml (field values to fill in)
///
/// # Arguments
/// * `force` - If true, overwrite existing files. If false, skip existing files.
///
/// # Returns
/// * `Ok(InitResult)` - Summary of created/skipped/overwritten files
/// * `Err(InitError)` - If an I/O error occurred
pub fn run_init(force: bool) -> Result<InitResult, InitError> {
    let mut result = InitResult::default();

    handle_file(
        Path::new(super::common::CONFIG_FILE),
        DEFAULT_PREFLIGHT_TOML,
        force,
        &mut result,
    )?;

    handle_file(
        Path::new(PROFILE_TEMPLATE),
        DEFAULT_PROFILE_TOML,
        force,
        &mut result,
    )?;

    Ok(result)
}

/// Handle creation of a single file
fn handle_file(
    path: &Path,
    content: &str,
    force: bool,
    result: &mut InitResult,
) -> Result<(), InitError> {
    let path_str = path_to_string(path)?;

    if path.is_dir() {
        return Err(InitError::Path(format!(
            "Path '{}' exists but is a directory",
            path_str
        )));
    }

    if path.exists() {
        if force {
            fs::write(path, content)?;
            result.overwritten.push(path_str);
        } else {
            result.skipped.push(path_str);
        }
    } else {
        fs::write(path, content)?;
        result.created.push(path_str);
    }

    Ok(())
}

/// Convert a path to a string representation
fn path_to_string(path: &Path) -> Result<String, InitError> {
    path.to_str()
        .map(|s| s.to_string())
        .ok_or_else(|| InitError::Path(format!("Invalid UTF-8 in path: {:?}", path)))
}
