#![forbid(unsafe_code)]

//! Core domain types for appd-preflight
//!
//! This module defines the values that flow through the rule engine: the
//! severity scale, the snapshot of field values being validated, and the
//! result records produced by an evaluation pass.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Outcome classification for a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Error,
    Info,
}

impl Severity {
    /// Aggregation rank: error outranks warning, which outranks success and info
    pub fn rank(self) -> u8 {
        match self {
            Severity::Error => 2,
            Severity::Warning => 1,
            Severity::Success | Severity::Info => 0,
        }
    }

    /// Returns the severity as a lowercase string slice
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated rule identifier
///
/// Rule IDs must be non-empty and contain only alphanumeric characters, hyphens, and underscores.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RuleId(String);

impl RuleId {
    /// Creates a new RuleId, validating the input
    ///
    /// Returns None if the input is empty or contains invalid characters
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.is_empty() {
            return None;
        }
        if !id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return None;
        }
        Some(RuleId(id))
    }

    /// Returns the rule ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for RuleId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        RuleId::new(value.clone()).ok_or_else(|| format!("Invalid rule ID '{}'", value))
    }
}

impl From<RuleId> for String {
    fn from(rule_id: RuleId) -> Self {
        rule_id.0
    }
}

/// Snapshot of field values supplied for one evaluation pass
///
/// Keys keep their insertion order, which is also the order in which
/// results are reported. A value of `None` marks a field that is present
/// but has no value at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    entries: Vec<(String, Option<String>)>,
}

impl FieldValues {
    /// Creates an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field to a value
    ///
    /// An existing key keeps its position and has its value replaced.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.set(field, Some(value.into()));
    }

    /// Sets a field, allowing the value to be absent
    pub fn set(&mut self, field: impl Into<String>, value: Option<String>) {
        let field = field.into();
        match self.entries.iter_mut().find(|(key, _)| *key == field) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((field, value)),
        }
    }

    /// Returns the raw value for a field, or None if it is missing or absent
    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == field)
            .and_then(|(_, value)| value.as_deref())
    }

    /// Returns true if the field identifier is present, even without a value
    pub fn contains_key(&self, field: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == field)
    }

    /// Iterates over `(field, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_deref()))
    }

    /// Number of fields in the snapshot
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no fields are present
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FieldValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = FieldValues::new();
        for (field, value) in iter {
            values.insert(field, value);
        }
        values
    }
}

/// Scalar accepted as a field value in profile documents
#[derive(Deserialize)]
#[serde(untagged)]
enum ScalarValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl ScalarValue {
    fn into_text(self) -> String {
        match self {
            ScalarValue::Text(text) => text,
            ScalarValue::Integer(n) => n.to_string(),
            ScalarValue::Float(n) => n.to_string(),
            ScalarValue::Boolean(b) => b.to_string(),
        }
    }
}

impl<'de> Deserialize<'de> for FieldValues {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FieldValuesVisitor;

        impl<'de> Visitor<'de> for FieldValuesVisitor {
            type Value = FieldValues;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table mapping field identifiers to scalar values")
            }

            fn visit_map<A>(self, mut map: A) -> Result<FieldValues, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut values = FieldValues::new();
                while let Some((field, value)) =
                    map.next_entry::<String, Option<ScalarValue>>()?
                {
                    values.set(field, value.map(ScalarValue::into_text));
                }
                Ok(values)
            }
        }

        deserializer.deserialize_map(FieldValuesVisitor)
    }
}

/// Severity and message produced by a single-field rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldResult {
    pub severity: Severity,
    pub message: String,
}

impl FieldResult {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

/// One entry of a full evaluation pass, attributed to a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub field: String,
    pub severity: Severity,
    pub message: String,
}

impl ResultRecord {
    pub fn new(field: impl Into<String>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            severity,
            message: message.into(),
        }
    }

    /// Attaches a field-rule result to the field it was produced for
    pub fn from_field_result(field: impl Into<String>, result: FieldResult) -> Self {
        Self {
            field: field.into(),
            severity: result.severity,
            message: result.message,
        }
    }
}
