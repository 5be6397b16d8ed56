//! Shared fixtures for appd-preflight integration tests

#![allow(dead_code)]

use appd_preflight::types::{FieldValues, ResultRecord, Severity};

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// A snapshot in which every catalogue field passes
pub fn valid_values() -> FieldValues {
    snapshot(&[
        ("controller-host", "acme.saas.appdynamics.com"),
        ("controller-port", "443"),
        ("account-name", "acme"),
        ("access-key", "ABCDEFGHIJ1234567890"),
        ("app-name", "checkout"),
        ("tier-name", "web"),
        ("node-name", "web-1"),
    ])
}

/// Build a snapshot from literal pairs, keeping their order
pub fn snapshot(pairs: &[(&str, &str)]) -> FieldValues {
    pairs.iter().copied().collect()
}

/// `(field, severity)` view of records, for order-sensitive assertions
pub fn outcomes(records: &[ResultRecord]) -> Vec<(&str, Severity)> {
    records
        .iter()
        .map(|r| (r.field.as_str(), r.severity))
        .collect()
}

/// Unwrap a parse result, naming the input that failed
#[macro_export]
macro_rules! assert_parses {
    ($expr:expr, $input:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("failed to parse {:?}: {}", $input, e),
        }
    };
}
