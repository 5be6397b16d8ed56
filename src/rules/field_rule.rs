#![forbid(unsafe_code)]

//! Single-field validation rules
//!
//! A [`FieldRule`] is an ordered list of stages. Evaluation walks the
//! stages in order and stops at the first one in which any check fires,
//! reporting every check of that stage that fired. When no stage fires the
//! rule reports its success message.
//!
//! Required-ness is always checked before any stage, so an empty value is
//! reported as missing rather than as failing a length or format check.

use crate::types::{FieldResult, Severity};

/// Predicate over a raw field value; returns true when the check fires
pub type Predicate = fn(&str) -> bool;

/// A single predicate paired with the outcome it reports
#[derive(Debug, Clone, Copy)]
pub struct Check {
    pub severity: Severity,
    pub message: &'static str,
    pub fires: Predicate,
}

impl Check {
    pub fn error(message: &'static str, fires: Predicate) -> Self {
        Self {
            severity: Severity::Error,
            message,
            fires,
        }
    }

    pub fn warning(message: &'static str, fires: Predicate) -> Self {
        Self {
            severity: Severity::Warning,
            message,
            fires,
        }
    }

    fn to_result(self) -> FieldResult {
        FieldResult::new(self.severity, self.message)
    }
}

/// Validation logic for one field identifier
#[derive(Debug, Clone)]
pub struct FieldRule {
    field: &'static str,
    description: &'static str,
    required: Option<&'static str>,
    stages: Vec<Vec<Check>>,
    success: &'static str,
}

impl FieldRule {
    /// Starts a rule for `field` with no checks and a generic success message
    pub fn new(field: &'static str, description: &'static str) -> Self {
        Self {
            field,
            description,
            required: None,
            stages: Vec::new(),
            success: "Valid",
        }
    }

    /// Marks the field as required, reporting `message` when it is empty
    pub fn required(mut self, message: &'static str) -> Self {
        self.required = Some(message);
        self
    }

    /// Appends a stage holding a single error check
    pub fn error(self, message: &'static str, fires: Predicate) -> Self {
        self.stage([Check::error(message, fires)])
    }

    /// Appends a stage holding a single warning check
    pub fn warning(self, message: &'static str, fires: Predicate) -> Self {
        self.stage([Check::warning(message, fires)])
    }

    /// Appends a stage whose checks are all reported when they fire together
    pub fn stage(mut self, checks: impl IntoIterator<Item = Check>) -> Self {
        self.stages.push(checks.into_iter().collect());
        self
    }

    /// Sets the message reported when no check fires
    pub fn success(mut self, message: &'static str) -> Self {
        self.success = message;
        self
    }

    /// Field identifier this rule validates
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Human-readable description of what the rule checks
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Returns true if an empty value is an error
    pub fn is_required(&self) -> bool {
        self.required.is_some()
    }

    /// Evaluates the rule against a raw value
    ///
    /// The returned list is never empty. Absent and empty values count as
    /// empty; whitespace is a value like any other and reaches the stages.
    pub fn evaluate(&self, value: Option<&str>) -> Vec<FieldResult> {
        let value = value.unwrap_or("");

        if let Some(message) = self.required
            && value.is_empty()
        {
            return vec![FieldResult::new(Severity::Error, message)];
        }

        for stage in &self.stages {
            let fired: Vec<FieldResult> = stage
                .iter()
                .filter(|check| (check.fires)(value))
                .map(|check| check.to_result())
                .collect();
            if !fired.is_empty() {
                return fired;
            }
        }

        vec![FieldResult::new(Severity::Success, self.success)]
    }
}
