#![forbid(unsafe_code)]

//! Rule definitions and registry

pub mod builtin;
mod cross_field;
mod field_rule;
mod registry;

// Re-export core types
pub use cross_field::{CrossFieldCheck, CrossFieldRule, CrossFieldRuleSet, values_match};
pub use field_rule::{Check, FieldRule, Predicate};
pub use registry::{NO_RULES_MESSAGE, RuleRegistry};
