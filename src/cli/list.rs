//! List command implementation
//!
//! This module implements the `appd-preflight list` command, which lists
//! every field rule and every cross-field rule, marking cross-field rules
//! disabled in preflight.toml.

use crate::cli::args::OutputFormat;
use crate::cli::common::{EXIT_ERROR, EXIT_PARSE_ERROR, EXIT_SUCCESS};
use crate::config::Config;
use crate::error::{ConfigError, RuleError};
use crate::output::{RuleKind, RuleListing, RuleListingHumanFormatter, RuleListingJsonlFormatter};
use crate::rules::{CrossFieldRuleSet, RuleRegistry};
use std::path::Path;

/// Error type specific to list command
#[derive(Debug, thiserror::Error)]
enum ListError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),
}

/// Run the list command
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 2: Error
/// - 3: Parse error in preflight.toml
pub fn run_list(format: Option<OutputFormat>, config_path: Option<&Path>) -> i32 {
    match run_list_inner(format, config_path) {
        Ok(()) => EXIT_SUCCESS,
        Err(ListError::Config(ConfigError::Parse(e))) => {
            eprintln!("Error: Configuration error: {}", e);
            EXIT_PARSE_ERROR
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

/// Internal implementation of list command
fn run_list_inner(format: Option<OutputFormat>, config_path: Option<&Path>) -> Result<(), ListError> {
    let config = super::common::load_config(config_path)?;
    let listings = build_listings(&config)?;

    match super::common::resolve_format(format, &config) {
        OutputFormat::Human => RuleListingHumanFormatter::new().write_to_stdout(&listings),
        OutputFormat::Jsonl => RuleListingJsonlFormatter::new().write_to_stdout(&listings),
    }

    Ok(())
}

/// Build listing entries for every rule, in evaluation order
fn build_listings(config: &Config) -> Result<Vec<RuleListing>, RuleError> {
    let all_cross_field = CrossFieldRuleSet::with_builtins();
    let mut enabled = all_cross_field.clone();
    enabled.filter_by_config(&config.rules)?;

    let field_rules = RuleRegistry::with_builtins()
        .iter()
        .map(|rule| RuleListing {
            id: rule.field().to_string(),
            kind: RuleKind::Field,
            description: rule.description().to_string(),
            required: rule.is_required(),
            enabled: true,
        })
        .collect::<Vec<_>>();

    let cross_rules = all_cross_field.iter().map(|rule| RuleListing {
        id: rule.id().to_string(),
        kind: RuleKind::CrossField,
        description: rule.description().to_string(),
        required: false,
        enabled: enabled.get(rule.id()).is_some(),
    });

    Ok(field_rules.into_iter().chain(cross_rules).collect())
}
