#![forbid(unsafe_code)]

//! Cross-field consistency rules
//!
//! These rules see the whole snapshot of field values and report
//! relationships no single-field rule can detect. Each rule either stays
//! silent or produces one record attributed to a specific field.

use crate::config::RulesConfig;
use crate::error::RuleError;
use crate::types::{FieldValues, ResultRecord};

/// Check over the full snapshot; `None` means the rule does not apply
pub type CrossFieldCheck = fn(&FieldValues) -> Option<ResultRecord>;

/// A named rule spanning two or more fields
#[derive(Debug, Clone)]
pub struct CrossFieldRule {
    id: &'static str,
    description: &'static str,
    check: CrossFieldCheck,
}

impl CrossFieldRule {
    pub fn new(id: &'static str, description: &'static str, check: CrossFieldCheck) -> Self {
        Self {
            id,
            description,
            check,
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn evaluate(&self, values: &FieldValues) -> Option<ResultRecord> {
        (self.check)(values)
    }
}

/// Returns true if both fields hold the same non-empty raw value
pub fn values_match(values: &FieldValues, a: &str, b: &str) -> bool {
    match (values.get(a), values.get(b)) {
        (Some(left), Some(right)) => !left.is_empty() && left == right,
        _ => false,
    }
}

/// Ordered collection of cross-field rules
///
/// Rules are evaluated independently in registration order; every rule
/// that applies contributes its record.
#[derive(Debug, Clone, Default)]
pub struct CrossFieldRuleSet {
    rules: Vec<CrossFieldRule>,
}

impl CrossFieldRuleSet {
    /// Create an empty rule set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a rule set holding the built-in cross-field rules
    pub fn with_builtins() -> Self {
        Self {
            rules: super::builtin::cross_field_rules(),
        }
    }

    /// Append a rule, rejecting a second rule with the same ID
    pub fn register(&mut self, rule: CrossFieldRule) -> Result<(), RuleError> {
        if self.get(rule.id()).is_some() {
            return Err(RuleError::Duplicate(rule.id().to_string()));
        }
        self.rules.push(rule);
        Ok(())
    }

    /// Remove rules disabled in configuration
    ///
    /// # Errors
    ///
    /// Returns `RuleError::NotFound` if the configuration names a rule that
    /// is not part of this set.
    pub fn filter_by_config(&mut self, config: &RulesConfig) -> Result<(), RuleError> {
        for rule_id in config.rule_ids() {
            if self.get(rule_id.as_str()).is_none() {
                return Err(RuleError::NotFound(rule_id.to_string()));
            }
        }

        self.rules.retain(|rule| {
            let enabled = config.is_enabled(rule.id());
            if !enabled {
                tracing::debug!(rule = rule.id(), "cross-field rule disabled by configuration");
            }
            enabled
        });
        Ok(())
    }

    /// Look up a rule by ID
    pub fn get(&self, id: &str) -> Option<&CrossFieldRule> {
        self.rules.iter().find(|rule| rule.id() == id)
    }

    /// Run every rule against the snapshot, in registration order
    pub fn evaluate(&self, values: &FieldValues) -> Vec<ResultRecord> {
        self.rules
            .iter()
            .filter_map(|rule| rule.evaluate(values))
            .collect()
    }

    /// Iterate over rules in registration order
    pub fn iter(&self) -> impl Iterator<Item = &CrossFieldRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
