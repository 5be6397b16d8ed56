//! Common helper functions shared across CLI commands
//!
//! This module provides shared functionality for loading configuration and
//! profiles, building the evaluator, and resolving output settings.

use crate::cli::args::{ColorChoice, OutputFormat};
use crate::config::{self, ColorOption, Config, Override, Profile};
use crate::engine::Evaluator;
use crate::error::{ConfigError, ProfileError, RuleError};
use crate::rules::{CrossFieldRuleSet, RuleRegistry};
use crate::types::FieldValues;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_BLOCKED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;
pub const EXIT_PARSE_ERROR: i32 = 3;

/// Default configuration file name
pub const CONFIG_FILE: &str = "preflight.toml";

/// Profile name used when only `--set` values are given
pub const INLINE_PROFILE: &str = "<command line>";

/// Load preflight.toml configuration
///
/// With no explicit path, `preflight.toml` in the current directory is used
/// if present and defaults apply otherwise. An explicit path must exist.
///
/// # Errors
///
/// Returns `ConfigError::Io` if an explicit path cannot be read.
/// Returns `ConfigError::Parse` if the file is invalid TOML.
pub(crate) fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => Config::load(path),
        None => {
            let default_path = Path::new(CONFIG_FILE);
            if default_path.exists() {
                Config::load(default_path)
            } else {
                tracing::debug!("{} not found, using default configuration", CONFIG_FILE);
                Ok(Config::default())
            }
        }
    }
}

/// Build the evaluator, applying cross-field toggles from configuration
///
/// # Errors
///
/// Returns `RuleError::NotFound` if the configuration names an unknown rule.
pub(crate) fn build_evaluator(config: &Config) -> Result<Evaluator, RuleError> {
    let mut cross_field = CrossFieldRuleSet::with_builtins();
    cross_field.filter_by_config(&config.rules)?;
    Ok(Evaluator::new(RuleRegistry::with_builtins(), cross_field))
}

/// Load profiles and apply overrides to each
///
/// With no paths, a single inline profile is built from the overrides.
///
/// # Errors
///
/// Returns `ProfileError` if any profile cannot be read or parsed.
pub(crate) fn load_profiles(
    paths: &[PathBuf],
    overrides: &[Override],
) -> Result<Vec<Profile>, ProfileError> {
    let mut profiles = if paths.is_empty() {
        vec![Profile::new(INLINE_PROFILE, FieldValues::new())]
    } else {
        paths
            .iter()
            .map(Profile::load)
            .collect::<Result<Vec<_>, _>>()?
    };

    for profile in &mut profiles {
        profile.apply_overrides(overrides);
    }

    Ok(profiles)
}

/// Pick the output format: command line first, then preflight.toml
pub(crate) fn resolve_format(cli: Option<OutputFormat>, config: &Config) -> OutputFormat {
    cli.unwrap_or(match config.output.format {
        config::OutputFormat::Human => OutputFormat::Human,
        config::OutputFormat::Jsonl => OutputFormat::Jsonl,
    })
}

/// Pick the terminal color mode: command line first, then preflight.toml
pub(crate) fn resolve_color(cli: Option<ColorChoice>, config: &Config) -> termcolor::ColorChoice {
    let choice = cli.unwrap_or(match config.output.color {
        ColorOption::Auto => ColorChoice::Auto,
        ColorOption::Always => ColorChoice::Always,
        ColorOption::Never => ColorChoice::Never,
    });

    match choice {
        ColorChoice::Always => termcolor::ColorChoice::Always,
        ColorChoice::Never => termcolor::ColorChoice::Never,
        ColorChoice::Auto if std::io::stdout().is_terminal() => termcolor::ColorChoice::Auto,
        ColorChoice::Auto => termcolor::ColorChoice::Never,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_exit_codes() {
        assert_eq!(EXIT_SUCCESS, 0);
        assert_eq!(EXIT_BLOCKED, 1);
        assert_eq!(EXIT_ERROR, 2);
        assert_eq!(EXIT_PARSE_ERROR, 3);
    }

    #[test]
    fn test_load_config_explicit_missing_path() {
        let result = load_config(Some(Path::new("/nonexistent/preflight.toml")));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.toml");
        fs::write(&path, "[output]\nformat = \"jsonl\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.output.format, config::OutputFormat::Jsonl);
    }

    #[test]
    fn test_build_evaluator_applies_toggles() {
        let config =
            Config::parse("[rules]\napp-name-matches-tier-name = false\n").unwrap();
        let evaluator = build_evaluator(&config).unwrap();
        assert_eq!(evaluator.cross_field().len(), 1);
        assert_eq!(evaluator.registry().len(), 7);
    }

    #[test]
    fn test_build_evaluator_unknown_rule() {
        let config = Config::parse("[rules]\nmystery-rule = false\n").unwrap();
        assert!(matches!(
            build_evaluator(&config),
            Err(RuleError::NotFound(_))
        ));
    }

    #[test]
    fn test_load_profiles_inline() {
        let overrides = vec![Override::parse("app-name=shop").unwrap()];
        let profiles = load_profiles(&[], &overrides).unwrap();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].name, INLINE_PROFILE);
        assert_eq!(profiles[0].values.get("app-name"), Some("shop"));
    }

    #[test]
    fn test_load_profiles_applies_overrides_to_each() {
        let temp_dir = TempDir::new().unwrap();
        let a = temp_dir.path().join("a.toml");
        let b = temp_dir.path().join("b.json");
        fs::write(&a, "tier-name = \"web\"\n").unwrap();
        fs::write(&b, r#"{"tier-name": "api"}"#).unwrap();

        let overrides = vec![Override::parse("node-name=n1").unwrap()];
        let profiles = load_profiles(&[a, b], &overrides).unwrap();
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].values.get("tier-name"), Some("web"));
        assert_eq!(profiles[1].values.get("tier-name"), Some("api"));
        assert!(profiles.iter().all(|p| p.values.get("node-name") == Some("n1")));
    }

    #[test]
    fn test_resolve_format_prefers_cli() {
        let config = Config::parse("[output]\nformat = \"jsonl\"\n").unwrap();
        assert_eq!(resolve_format(None, &config), OutputFormat::Jsonl);
        assert_eq!(
            resolve_format(Some(OutputFormat::Human), &config),
            OutputFormat::Human
        );
    }

    #[test]
    fn test_resolve_color_explicit() {
        let config = Config::default();
        assert_eq!(
            resolve_color(Some(ColorChoice::Never), &config),
            termcolor::ColorChoice::Never
        );
        assert_eq!(
            resolve_color(Some(ColorChoice::Always), &config),
            termcolor::ColorChoice::Always
        );
    }
}
