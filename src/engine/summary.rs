#![forbid(unsafe_code)]

//! Reduction of result records into a deployment-readiness verdict

use crate::types::{ResultRecord, Severity};
use serde::{Deserialize, Serialize};

/// Message reported when nothing needs attention
pub const READY_MESSAGE: &str = "Configuration valid! Ready for deployment";

/// Aggregate verdict over one evaluation pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub severity: Severity,
    pub message: String,
    pub error_count: usize,
    pub warning_count: usize,
}

impl Summary {
    /// True when no error blocks deployment; warnings are advisory
    pub fn can_proceed(&self) -> bool {
        self.error_count == 0
    }
}

/// Summarize a list of records
///
/// Any single error outranks any number of warnings.
pub fn summarize(results: &[ResultRecord]) -> Summary {
    let error_count = results
        .iter()
        .filter(|r| r.severity == Severity::Error)
        .count();
    let warning_count = results
        .iter()
        .filter(|r| r.severity == Severity::Warning)
        .count();

    let highest = results
        .iter()
        .map(|r| r.severity)
        .max_by_key(|severity| severity.rank())
        .unwrap_or(Severity::Success);

    let (severity, message) = match highest {
        Severity::Error => (Severity::Error, format!("{} error(s) must be fixed", error_count)),
        Severity::Warning => (
            Severity::Warning,
            format!("{} warning(s) - review recommended", warning_count),
        ),
        Severity::Success | Severity::Info => (Severity::Success, READY_MESSAGE.to_string()),
    };

    Summary {
        severity,
        message,
        error_count,
        warning_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(severity: Severity) -> ResultRecord {
        ResultRecord::new("field", severity, "message")
    }

    #[test]
    fn test_empty_results_are_ready() {
        let summary = summarize(&[]);
        assert_eq!(summary.severity, Severity::Success);
        assert_eq!(summary.message, READY_MESSAGE);
        assert_eq!(summary.error_count, 0);
        assert_eq!(summary.warning_count, 0);
        assert!(summary.can_proceed());
    }

    #[test]
    fn test_info_and_success_do_not_count() {
        let summary = summarize(&[record(Severity::Info), record(Severity::Success)]);
        assert_eq!(summary.severity, Severity::Success);
        assert_eq!(summary.error_count, 0);
        assert_eq!(summary.warning_count, 0);
    }

    #[test]
    fn test_warnings_only() {
        let summary = summarize(&[
            record(Severity::Warning),
            record(Severity::Success),
            record(Severity::Warning),
        ]);
        assert_eq!(summary.severity, Severity::Warning);
        assert_eq!(summary.message, "2 warning(s) - review recommended");
        assert_eq!(summary.warning_count, 2);
        assert!(summary.can_proceed());
    }

    #[test]
    fn test_single_error_outranks_warnings() {
        let mut results = vec![record(Severity::Warning); 10];
        results.push(record(Severity::Error));

        let summary = summarize(&results);
        assert_eq!(summary.severity, Severity::Error);
        assert_eq!(summary.message, "1 error(s) must be fixed");
        assert_eq!(summary.error_count, 1);
        assert_eq!(summary.warning_count, 10);
        assert!(!summary.can_proceed());
    }

    #[test]
    fn test_verdict_follows_highest_rank() {
        let summary = summarize(&[record(Severity::Info)]);
        assert_eq!(summary.severity, Severity::Success);
        assert_eq!(summary.message, READY_MESSAGE);

        let summary = summarize(&[
            record(Severity::Error),
            record(Severity::Info),
            record(Severity::Warning),
        ]);
        assert_eq!(summary.severity, Severity::Error);
        assert_eq!(summary.error_count, 1);
        assert_eq!(summary.warning_count, 1);
    }
}
