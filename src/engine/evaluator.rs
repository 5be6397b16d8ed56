#![forbid(unsafe_code)]

//! Evaluation of field snapshots into ordered result lists
//!
//! The Evaluator runs the single-field rules over every key of a snapshot,
//! then the cross-field rules, and flattens everything into one list of
//! [`ResultRecord`]s. It never stops early: a malformed value in one field
//! does not prevent the others from being checked.

use crate::config::Profile;
use crate::engine::summary::{Summary, summarize};
use crate::rules::{CrossFieldRuleSet, RuleRegistry};
use crate::types::{FieldValues, ResultRecord};
use rayon::prelude::*;
use serde::Serialize;

/// Records and verdict for one evaluated profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileReport {
    /// Profile name (file path, or a label for inline values)
    pub name: String,
    /// Every result record, in evaluation order
    pub records: Vec<ResultRecord>,
    /// Aggregate verdict over `records`
    pub summary: Summary,
}

/// Stateless evaluator over an immutable rule set
///
/// The evaluator holds no mutable state and is `Send + Sync`, so a single
/// instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct Evaluator {
    registry: RuleRegistry,
    cross_field: CrossFieldRuleSet,
}

impl Evaluator {
    /// Creates an evaluator from a field rule registry and cross-field rules
    pub fn new(registry: RuleRegistry, cross_field: CrossFieldRuleSet) -> Self {
        Self {
            registry,
            cross_field,
        }
    }

    /// Creates an evaluator with every built-in rule
    pub fn with_builtins() -> Self {
        Self::new(
            RuleRegistry::with_builtins(),
            CrossFieldRuleSet::with_builtins(),
        )
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    pub fn cross_field(&self) -> &CrossFieldRuleSet {
        &self.cross_field
    }

    /// Evaluates one snapshot
    ///
    /// Field-rule records come first, in the snapshot's key order, followed
    /// by cross-field records in rule registration order. Calling this twice
    /// with the same snapshot yields identical output.
    pub fn evaluate_all(&self, values: &FieldValues) -> Vec<ResultRecord> {
        let mut records: Vec<ResultRecord> = values
            .iter()
            .flat_map(|(field, value)| {
                self.registry
                    .validate_field(field, value)
                    .into_iter()
                    .map(move |result| ResultRecord::from_field_result(field, result))
            })
            .collect();

        records.extend(self.cross_field.evaluate(values));
        records
    }

    /// Evaluates one profile and summarizes it
    pub fn evaluate_profile(&self, profile: &Profile) -> ProfileReport {
        let records = self.evaluate_all(&profile.values);
        let summary = summarize(&records);
        tracing::debug!(
            profile = %profile.name,
            records = records.len(),
            errors = summary.error_count,
            warnings = summary.warning_count,
            "evaluated profile"
        );
        ProfileReport {
            name: profile.name.clone(),
            records,
            summary,
        }
    }

    /// Evaluates independent profiles in parallel
    ///
    /// Reports are returned in the same order as `profiles`.
    pub fn evaluate_batch(&self, profiles: &[Profile]) -> Vec<ProfileReport> {
        profiles
            .par_iter()
            .map(|profile| self.evaluate_profile(profile))
            .collect()
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::NO_RULES_MESSAGE;
    use crate::rules::builtin::{ACCESS_KEY, APP_NAME, CONTROLLER_PORT, TIER_NAME};
    use crate::types::Severity;

    #[test]
    fn test_empty_snapshot_yields_no_records() {
        let evaluator = Evaluator::with_builtins();
        assert!(evaluator.evaluate_all(&FieldValues::new()).is_empty());
    }

    #[test]
    fn test_records_follow_key_order() {
        let values: FieldValues = [
            (TIER_NAME, "web"),
            ("foo", "bar"),
            (CONTROLLER_PORT, "8080"),
        ]
        .into_iter()
        .collect();

        let records = Evaluator::with_builtins().evaluate_all(&values);
        let fields: Vec<&str> = records.iter().map(|r| r.field.as_str()).collect();
        assert_eq!(fields, vec![TIER_NAME, "foo", CONTROLLER_PORT]);
        assert_eq!(records[1].severity, Severity::Info);
        assert_eq!(records[1].message, NO_RULES_MESSAGE);
        assert_eq!(records[2].severity, Severity::Warning);
    }

    #[test]
    fn test_cross_field_records_follow_field_records() {
        let values: FieldValues = [(APP_NAME, "svc1"), (TIER_NAME, "svc1")]
            .into_iter()
            .collect();

        let records = Evaluator::with_builtins().evaluate_all(&values);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].field, APP_NAME);
        assert_eq!(records[0].severity, Severity::Success);
        assert_eq!(records[1].field, TIER_NAME);
        assert_eq!(records[1].severity, Severity::Success);
        assert_eq!(records[2].field, TIER_NAME);
        assert_eq!(records[2].severity, Severity::Warning);
    }

    #[test]
    fn test_multiple_warnings_become_multiple_records() {
        let values: FieldValues = [(ACCESS_KEY, "abcdefghijklmnopqrst")].into_iter().collect();

        let records = Evaluator::with_builtins().evaluate_all(&values);
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.field == ACCESS_KEY));
        assert!(records.iter().all(|r| r.severity == Severity::Warning));
    }

    #[test]
    fn test_error_in_one_field_does_not_stop_others() {
        let mut values = FieldValues::new();
        values.insert(CONTROLLER_PORT, "not-a-port");
        values.set(ACCESS_KEY, None);
        values.insert(APP_NAME, "shop");

        let records = Evaluator::with_builtins().evaluate_all(&values);
        let severities: Vec<Severity> = records.iter().map(|r| r.severity).collect();
        assert_eq!(
            severities,
            vec![Severity::Error, Severity::Error, Severity::Success]
        );
    }

    #[test]
    fn test_evaluate_batch_preserves_order() {
        let profiles: Vec<Profile> = (0..16)
            .map(|i| {
                let port = if i % 2 == 0 { "443" } else { "0" };
                Profile::new(
                    format!("profile-{i}"),
                    [(CONTROLLER_PORT, port)].into_iter().collect(),
                )
            })
            .collect();

        let reports = Evaluator::with_builtins().evaluate_batch(&profiles);
        assert_eq!(reports.len(), 16);
        for (i, report) in reports.iter().enumerate() {
            assert_eq!(report.name, format!("profile-{i}"));
            assert_eq!(report.summary.can_proceed(), i % 2 == 0);
        }
    }

    #[test]
    fn test_evaluator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Evaluator>();
    }
}
