#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per line in a deterministic order:
//! 1. For each profile, its result records in evaluation order
//! 2. For each profile, one summary record after its results
//! 3. One status record for the whole run

use crate::engine::ProfileReport;
use crate::types::Severity;
use serde::Serialize;

/// JSONL output formatter
///
/// Formats evaluation reports as JSON Lines (one JSON object per line).
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format the reports as JSONL
    pub fn format(&self, reports: &[ProfileReport]) -> String {
        let mut output = String::new();

        for report in reports {
            for record in &report.records {
                push_line(
                    &mut output,
                    &ResultLine {
                        record_type: "result",
                        profile: &report.name,
                        field: &record.field,
                        severity: record.severity,
                        message: &record.message,
                    },
                );
            }

            push_line(
                &mut output,
                &SummaryLine {
                    record_type: "summary",
                    profile: &report.name,
                    severity: report.summary.severity,
                    message: &report.summary.message,
                    error_count: report.summary.error_count,
                    warning_count: report.summary.warning_count,
                    can_proceed: report.summary.can_proceed(),
                },
            );
        }

        let profiles_blocked = reports
            .iter()
            .filter(|r| !r.summary.can_proceed())
            .count();
        push_line(
            &mut output,
            &StatusLine {
                record_type: "status",
                passed: profiles_blocked == 0,
                profiles_checked: reports.len(),
                profiles_blocked,
            },
        );

        output
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn push_line<T: Serialize>(output: &mut String, line: &T) {
    if let Ok(json) = serde_json::to_string(line) {
        output.push_str(&json);
        output.push('\n');
    }
}

/// Result record for JSONL output
#[derive(Debug, Serialize)]
struct ResultLine<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    profile: &'a str,
    field: &'a str,
    severity: Severity,
    message: &'a str,
}

/// Summary record for JSONL output
#[derive(Debug, Serialize)]
struct SummaryLine<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    profile: &'a str,
    severity: Severity,
    message: &'a str,
    error_count: usize,
    warning_count: usize,
    can_proceed: bool,
}

/// Status record for JSONL output
#[derive(Debug, Serialize)]
struct StatusLine {
    #[serde(rename = "type")]
    record_type: &'static str,
    passed: bool,
    profiles_checked: usize,
    profiles_blocked: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::summarize;
    use crate::types::ResultRecord;
    use serde_json::Value;

    fn report(name: &str, records: Vec<ResultRecord>) -> ProfileReport {
        let summary = summarize(&records);
        ProfileReport {
            name: name.to_string(),
            records,
            summary,
        }
    }

    fn parse_lines(output: &str) -> Vec<Value> {
        output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_empty_reports_emit_status_only() {
        let output = JsonlFormatter::new().format(&[]);
        let lines = parse_lines(&output);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["type"], "status");
        assert_eq!(lines[0]["passed"], true);
        assert_eq!(lines[0]["profiles_checked"], 0);
    }

    #[test]
    fn test_line_order_and_fields() {
        let reports = vec![
            report(
                "prod.toml",
                vec![
                    ResultRecord::new("controller-port", Severity::Warning, "Non-standard port"),
                    ResultRecord::new("tier-name", Severity::Success, "Valid tier name"),
                ],
            ),
            report(
                "dev.toml",
                vec![ResultRecord::new("access-key", Severity::Error, "Access key is required")],
            ),
        ];

        let lines = parse_lines(&JsonlFormatter::new().format(&reports));
        let types: Vec<&str> = lines.iter().map(|l| l["type"].as_str().unwrap()).collect();
        assert_eq!(
            types,
            vec!["result", "result", "summary", "result", "summary", "status"]
        );

        assert_eq!(lines[0]["profile"], "prod.toml");
        assert_eq!(lines[0]["field"], "controller-port");
        assert_eq!(lines[0]["severity"], "warning");

        assert_eq!(lines[2]["severity"], "warning");
        assert_eq!(lines[2]["warning_count"], 1);
        assert_eq!(lines[2]["can_proceed"], true);

        assert_eq!(lines[4]["profile"], "dev.toml");
        assert_eq!(lines[4]["error_count"], 1);
        assert_eq!(lines[4]["can_proceed"], false);

        assert_eq!(lines[5]["passed"], false);
        assert_eq!(lines[5]["profiles_checked"], 2);
        assert_eq!(lines[5]["profiles_blocked"], 1);
    }
}
