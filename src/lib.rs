#![forbid(unsafe_code)]

//! appd-preflight: pre-deployment validation of AppDynamics settings
//!
//! The library evaluates a snapshot of controller and agent naming fields
//! against a fixed rule catalogue, adds cross-field consistency checks, and
//! reduces the results to a single readiness verdict.
//!
//! ```
//! use appd_preflight::engine::{Evaluator, summarize};
//! use appd_preflight::types::{FieldValues, Severity};
//!
//! let values: FieldValues = [("controller-port", "8080")].into_iter().collect();
//! let records = Evaluator::with_builtins().evaluate_all(&values);
//! let summary = summarize(&records);
//!
//! assert_eq!(summary.severity, Severity::Warning);
//! assert!(summary.can_proceed());
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod rules;
pub mod types;

// Re-export error types for convenient access
pub use error::{ConfigError, PreflightError, ProfileError, RuleError};

// Re-export core domain types for convenient access
pub use engine::{Evaluator, Summary, summarize};
pub use types::{FieldResult, FieldValues, ResultRecord, RuleId, Severity};
