//! Check command implementation
//!
//! This module implements the `appd-preflight check` command, which:
//! - Loads configuration from preflight.toml
//! - Loads each profile and applies `--set` overrides
//! - Evaluates all profiles in parallel
//! - Formats output (human or JSONL)
//! - Returns an exit code reflecting whether deployment can proceed

use crate::cli::args::{ColorChoice, OutputFormat};
use crate::cli::common::{EXIT_BLOCKED, EXIT_ERROR, EXIT_PARSE_ERROR, EXIT_SUCCESS};
use crate::config::Override;
use crate::engine::ProfileReport;
use crate::error::{ConfigError, ProfileError, RuleError};
use crate::output::{HumanFormatter, JsonlFormatter};
use std::io::Write;
use std::path::{Path, PathBuf};
use termcolor::StandardStream;

/// Error type specific to check command
#[derive(Debug, thiserror::Error)]
pub(crate) enum CheckError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    #[error("{0}")]
    Profile(#[from] ProfileError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CheckError {
    fn exit_code(&self) -> i32 {
        match self {
            CheckError::Config(ConfigError::Parse(_)) => EXIT_PARSE_ERROR,
            CheckError::Profile(ProfileError::Toml { .. } | ProfileError::Json { .. }) => {
                EXIT_PARSE_ERROR
            }
            _ => EXIT_ERROR,
        }
    }
}

/// Run the check command
///
/// # Arguments
///
/// * `profiles` - Profile files to evaluate; empty means inline values only
/// * `overrides` - `FIELD=VALUE` pairs applied on top of every profile
/// * `format` - Output format, or None to use preflight.toml
/// * `config_path` - Explicit preflight.toml path
/// * `color` - Color choice, or None to use preflight.toml
///
/// # Returns
///
/// Exit code:
/// - 0: Every profile can proceed (warnings allowed)
/// - 1: At least one profile has errors
/// - 2: Error (configuration/I/O error)
/// - 3: Parse error (invalid TOML or JSON)
pub fn run_check(
    profiles: &[PathBuf],
    overrides: &[Override],
    format: Option<OutputFormat>,
    config_path: Option<&Path>,
    color: Option<ColorChoice>,
) -> i32 {
    match run_check_inner(profiles, overrides, format, config_path, color) {
        Ok(true) => EXIT_SUCCESS,
        Ok(false) => EXIT_BLOCKED,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

/// Internal implementation of check command
fn run_check_inner(
    profile_paths: &[PathBuf],
    overrides: &[Override],
    format: Option<OutputFormat>,
    config_path: Option<&Path>,
    color: Option<ColorChoice>,
) -> Result<bool, CheckError> {
    let config = super::common::load_config(config_path)?;
    let evaluator = super::common::build_evaluator(&config)?;

    if profile_paths.is_empty() && overrides.is_empty() {
        tracing::warn!("No profiles or --set values given. Nothing to check.");
    }

    let profiles = super::common::load_profiles(profile_paths, overrides)?;
    tracing::debug!(
        profiles = profiles.len(),
        cross_field_rules = evaluator.cross_field().len(),
        "evaluating"
    );

    let reports = evaluator.evaluate_batch(&profiles);

    match super::common::resolve_format(format, &config) {
        OutputFormat::Human => {
            let mut stdout = StandardStream::stdout(super::common::resolve_color(color, &config));
            HumanFormatter::new().write(&mut stdout, &reports)?;
            stdout.flush()?;
        }
        OutputFormat::Jsonl => print!("{}", JsonlFormatter::new().format(&reports)),
    }

    Ok(all_can_proceed(&reports))
}

fn all_can_proceed(reports: &[ProfileReport]) -> bool {
    reports.iter().all(|report| report.summary.can_proceed())
}
