#![forbid(unsafe_code)]

//! Rule listing formatters
//!
//! This module provides formatters for displaying the rule catalogue from
//! the `list` command. It supports both human-readable and JSONL output.

use serde::Serialize;

/// Kind of rule being listed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Field,
    CrossField,
}

/// Listing entry for a single rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleListing {
    /// Field identifier for field rules, rule ID for cross-field rules
    pub id: String,
    pub kind: RuleKind,
    pub description: String,
    pub required: bool,
    pub enabled: bool,
}

/// Human-readable formatter for rule listings
pub struct RuleListingHumanFormatter;

impl RuleListingHumanFormatter {
    /// Create a new human formatter
    pub fn new() -> Self {
        RuleListingHumanFormatter
    }

    /// Format a list of rules for human consumption
    pub fn format(&self, rules: &[RuleListing]) -> String {
        let mut output = String::new();

        let field_rules: Vec<&RuleListing> =
            rules.iter().filter(|r| r.kind == RuleKind::Field).collect();
        let cross_rules: Vec<&RuleListing> = rules
            .iter()
            .filter(|r| r.kind == RuleKind::CrossField)
            .collect();

        output.push_str(&format!("Field rules ({}):\n", field_rules.len()));
        for rule in field_rules {
            let required = if rule.required { " (required)" } else { "" };
            output.push_str(&format!("  {}{}\n", rule.id, required));
            output.push_str(&format!("    {}\n", rule.description));
        }

        output.push('\n');
        output.push_str(&format!("Cross-field rules ({}):\n", cross_rules.len()));
        for rule in cross_rules {
            let status = if rule.enabled { "✓" } else { "✗ disabled" };
            output.push_str(&format!("  {} {}\n", rule.id, status));
            output.push_str(&format!("    {}\n", rule.description));
        }

        output
    }

    /// Write the formatted output to stdout
    pub fn write_to_stdout(&self, rules: &[RuleListing]) {
        print!("{}", self.format(rules));
    }
}

impl Default for RuleListingHumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// JSONL formatter for rule listings
pub struct RuleListingJsonlFormatter;

impl RuleListingJsonlFormatter {
    /// Create a new JSONL formatter
    pub fn new() -> Self {
        RuleListingJsonlFormatter
    }

    /// Format a list of rules as JSONL, one object per rule
    pub fn format(&self, rules: &[RuleListing]) -> String {
        let mut output = String::new();

        for rule in rules {
            if let Ok(json) = serde_json::to_string(rule) {
                output.push_str(&json);
                output.push('\n');
            }
        }

        output
    }

    /// Write the formatted output to stdout
    pub fn write_to_stdout(&self, rules: &[RuleListing]) {
        print!("{}", self.format(rules));
    }
}

impl Default for RuleListingJsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}
