#![forbid(unsafe_code)]

//! Built-in rule catalogue
//!
//! The seven controller and agent naming fields, and the cross-field checks
//! relating the application, tier and node names.

use crate::rules::cross_field::{CrossFieldRule, values_match};
use crate::rules::field_rule::{Check, FieldRule};
use crate::types::{FieldValues, ResultRecord, Severity};
use regex::Regex;
use std::num::IntErrorKind;
use std::sync::LazyLock;

pub const CONTROLLER_HOST: &str = "controller-host";
pub const CONTROLLER_PORT: &str = "controller-port";
pub const ACCOUNT_NAME: &str = "account-name";
pub const ACCESS_KEY: &str = "access-key";
pub const APP_NAME: &str = "app-name";
pub const TIER_NAME: &str = "tier-name";
pub const NODE_NAME: &str = "node-name";

/// Every built-in field identifier, in catalogue order
pub const FIELDS: [&str; 7] = [
    CONTROLLER_HOST,
    CONTROLLER_PORT,
    ACCOUNT_NAME,
    ACCESS_KEY,
    APP_NAME,
    TIER_NAME,
    NODE_NAME,
];

const SAAS_DOMAIN: &str = ".appdynamics.com";
const MIN_ACCOUNT_NAME_LEN: usize = 3;
const MIN_ACCESS_KEY_LEN: usize = 20;
const MAX_APP_NAME_LEN: usize = 50;
const MAX_TIER_NAME_LEN: usize = 30;
const MAX_NODE_NAME_LEN: usize = 40;

static APP_NAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]*$").expect("valid regex"));

/// How a raw port value reads once parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PortValue {
    NotANumber,
    OutOfRange,
    Port(u16),
}

fn classify_port(raw: &str) -> PortValue {
    match raw.trim().parse::<i64>() {
        Ok(n) => match u16::try_from(n) {
            Ok(port) if port >= 1 => PortValue::Port(port),
            _ => PortValue::OutOfRange,
        },
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => PortValue::OutOfRange,
            _ => PortValue::NotANumber,
        },
    }
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Returns the built-in field rules in catalogue order
pub fn field_rules() -> Vec<FieldRule> {
    vec![
        FieldRule::new(CONTROLLER_HOST, "Controller hostname")
            .required("Controller host is required")
            .error("Controller host cannot contain spaces", |v| v.contains(' '))
            .warning(
                "Host is not an AppDynamics SaaS controller (*.appdynamics.com); verify on-premises hostname",
                |v| !v.contains(SAAS_DOMAIN),
            )
            .success("Valid controller host"),
        FieldRule::new(CONTROLLER_PORT, "Controller port (1-65535, usually 80 or 443)")
            .required("Controller port is required")
            .error("Port must be a number", |v| {
                classify_port(v) == PortValue::NotANumber
            })
            .error("Port must be between 1 and 65535", |v| {
                classify_port(v) == PortValue::OutOfRange
            })
            .warning("Non-standard port; SaaS controllers use 443 (HTTPS) or 80 (HTTP)", |v| {
                !matches!(classify_port(v), PortValue::Port(80 | 443))
            })
            .success("Valid controller port"),
        FieldRule::new(ACCOUNT_NAME, "Controller account name")
            .required("Account name is required")
            .error("Account name is too short (minimum 3 characters)", |v| {
                char_len(v) < MIN_ACCOUNT_NAME_LEN
            })
            .warning("Account name contains spaces", |v| v.contains(' '))
            .success("Valid account name"),
        FieldRule::new(ACCESS_KEY, "Controller account access key")
            .required("Access key is required")
            .error("Access key is too short (minimum 20 characters)", |v| {
                char_len(v) < MIN_ACCESS_KEY_LEN
            })
            .error("Access key cannot contain spaces", |v| v.contains(' '))
            .stage([
                Check::warning("Access key has no uppercase letters", |v| {
                    !v.chars().any(|c| c.is_ascii_uppercase())
                }),
                Check::warning("Access key has no digits", |v| {
                    !v.chars().any(|c| c.is_ascii_digit())
                }),
            ])
            .success("Access key format looks valid"),
        FieldRule::new(APP_NAME, "Business application name")
            .required("Application name is required")
            .warning("Application name is longer than 50 characters", |v| {
                char_len(v) > MAX_APP_NAME_LEN
            })
            .warning(
                "Application name should only contain letters, digits, hyphens and underscores",
                |v| !APP_NAME_CHARS.is_match(v),
            )
            .success("Valid application name"),
        FieldRule::new(TIER_NAME, "Tier name")
            .required("Tier name is required")
            .warning("Tier name is longer than 30 characters", |v| {
                char_len(v) > MAX_TIER_NAME_LEN
            })
            .success("Valid tier name"),
        FieldRule::new(NODE_NAME, "Node name")
            .required("Node name is required")
            .warning("Node name is longer than 40 characters", |v| {
                char_len(v) > MAX_NODE_NAME_LEN
            })
            .success("Valid node name"),
    ]
}

fn app_name_matches_tier_name(values: &FieldValues) -> Option<ResultRecord> {
    values_match(values, APP_NAME, TIER_NAME).then(|| {
        ResultRecord::new(
            TIER_NAME,
            Severity::Warning,
            "Tier name is the same as the application name; name the tier after the service it runs",
        )
    })
}

fn node_name_matches_tier_name(values: &FieldValues) -> Option<ResultRecord> {
    values_match(values, NODE_NAME, TIER_NAME).then(|| {
        ResultRecord::new(
            NODE_NAME,
            Severity::Warning,
            "Node name is the same as the tier name; node names should identify a single instance",
        )
    })
}

/// Returns the built-in cross-field rules in evaluation order
pub fn cross_field_rules() -> Vec<CrossFieldRule> {
    vec![
        CrossFieldRule::new(
            "app-name-matches-tier-name",
            "Warns when the tier name repeats the application name",
            app_name_matches_tier_name,
        ),
        CrossFieldRule::new(
            "node-name-matches-tier-name",
            "Warns when the node name repeats the tier name",
            node_name_matches_tier_name,
        ),
    ]
}
