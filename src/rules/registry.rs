#![forbid(unsafe_code)]

//! Rule registry for single-field validation
//!
//! The RuleRegistry holds exactly one [`FieldRule`] per field identifier
//! and answers `validate_field` lookups. Fields without a rule are not an
//! error: they receive an informational result and pass through.

use crate::error::RuleError;
use crate::rules::FieldRule;
use crate::types::{FieldResult, Severity};

/// Message reported for field identifiers with no registered rule
pub const NO_RULES_MESSAGE: &str = "No validation rules for this field";

/// Registry mapping field identifiers to their validation rule
///
/// Rules are kept in registration order so listings are stable.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: Vec<FieldRule>,
}

impl RuleRegistry {
    /// Create a new empty RuleRegistry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in field catalogue
    pub fn with_builtins() -> Self {
        Self {
            rules: super::builtin::field_rules(),
        }
    }

    /// Register a rule for its field
    ///
    /// # Errors
    ///
    /// Returns `RuleError::Duplicate` if the field already has a rule.
    pub fn register(&mut self, rule: FieldRule) -> Result<(), RuleError> {
        if self.get(rule.field()).is_some() {
            return Err(RuleError::Duplicate(rule.field().to_string()));
        }
        self.rules.push(rule);
        Ok(())
    }

    /// Get the rule for a field
    pub fn get(&self, field: &str) -> Option<&FieldRule> {
        self.rules.iter().find(|rule| rule.field() == field)
    }

    /// Validate one field value
    ///
    /// Unknown fields yield a single `info` result. Known fields return the
    /// registered rule's results unmodified.
    pub fn validate_field(&self, field: &str, value: Option<&str>) -> Vec<FieldResult> {
        match self.get(field) {
            Some(rule) => rule.evaluate(value),
            None => vec![FieldResult::new(Severity::Info, NO_RULES_MESSAGE)],
        }
    }

    /// Iterate over all rules in registration order
    pub fn iter(&self) -> impl Iterator<Item = &FieldRule> {
        self.rules.iter()
    }

    /// Get the number of rules in the registry
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
