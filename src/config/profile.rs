//! Loading field values from profile files and command-line overrides
//!
//! A profile is a flat TOML or JSON table of field identifiers. Files ending
//! in `.json` are read as JSON; everything else is read as TOML. Keys keep
//! their document order.

use crate::error::ProfileError;
use crate::types::FieldValues;
use std::fs;
use std::path::Path;

/// A named snapshot of field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub values: FieldValues,
}

impl Profile {
    pub fn new(name: impl Into<String>, values: FieldValues) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Load a profile from disk, naming it after its path
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ProfileError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let values = if is_json {
            serde_json::from_str(&content).map_err(|source| ProfileError::Json {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            toml::from_str(&content).map_err(|source| ProfileError::Toml {
                path: path.to_path_buf(),
                source,
            })?
        };

        Ok(Self::new(path.display().to_string(), values))
    }

    /// Apply `FIELD=VALUE` overrides in order
    pub fn apply_overrides(&mut self, overrides: &[Override]) {
        for item in overrides {
            self.values.insert(item.field.clone(), item.value.clone());
        }
    }
}

/// A single `--set FIELD=VALUE` override
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Override {
    pub field: String,
    pub value: String,
}

impl Override {
    /// Parse `FIELD=VALUE`, splitting at the first `=`
    ///
    /// The value may be empty or contain further `=` characters; the field
    /// may not be empty.
    pub fn parse(raw: &str) -> Result<Self, ProfileError> {
        match raw.split_once('=') {
            Some((field, value)) if !field.trim().is_empty() => Ok(Self {
                field: field.trim().to_string(),
                value: value.to_string(),
            }),
            _ => Err(ProfileError::InvalidOverride(raw.to_string())),
        }
    }
}

impl std::str::FromStr for Override {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_toml_profile() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prod.toml");
        fs::write(
            &path,
            "tier-name = \"web\"\ncontroller-port = 443\napp-name = \"shop\"\n",
        )
        .unwrap();

        let profile = Profile::load(&path).unwrap();
        assert!(profile.name.ends_with("prod.toml"));
        let entries: Vec<(&str, Option<&str>)> = profile.values.iter().collect();
        assert_eq!(
            entries,
            vec![
                ("tier-name", Some("web")),
                ("controller-port", Some("443")),
                ("app-name", Some("shop")),
            ]
        );
    }

    #[test]
    fn test_load_json_profile() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prod.JSON");
        fs::write(&path, r#"{"access-key": null, "account-name": "acme"}"#).unwrap();

        let profile = Profile::load(&path).unwrap();
        assert!(profile.values.contains_key("access-key"));
        assert_eq!(profile.values.get("access-key"), None);
        assert_eq!(profile.values.get("account-name"), Some("acme"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Profile::load("/nonexistent/profile.toml");
        assert!(matches!(result, Err(ProfileError::Io { .. })));
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.toml");
        fs::write(&path, "app-name = ").unwrap();

        let err = Profile::load(&path).unwrap_err();
        assert!(matches!(err, ProfileError::Toml { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_load_rejects_nested_tables() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested.toml");
        fs::write(&path, "[controller]\nhost = \"x\"\n").unwrap();

        assert!(matches!(
            Profile::load(&path),
            Err(ProfileError::Toml { .. })
        ));
    }

    #[test]
    fn test_override_parse() {
        let item = Override::parse("controller-port=8090").unwrap();
        assert_eq!(item.field, "controller-port");
        assert_eq!(item.value, "8090");

        let item = Override::parse("access-key=abc=def").unwrap();
        assert_eq!(item.value, "abc=def");

        let item = Override::parse("node-name=").unwrap();
        assert_eq!(item.value, "");

        assert!(Override::parse("no-equals").is_err());
        assert!(Override::parse("=value").is_err());
    }

    #[test]
    fn test_apply_overrides_replaces_in_place() {
        let mut profile = Profile::new(
            "inline",
            [("app-name", "shop"), ("tier-name", "web")]
                .into_iter()
                .collect(),
        );
        profile.apply_overrides(&[
            Override::parse("app-name=store").unwrap(),
            Override::parse("node-name=web-1").unwrap(),
        ]);

        let entries: Vec<(&str, Option<&str>)> = profile.values.iter().collect();
        assert_eq!(
            entries,
            vec![
                ("app-name", Some("store")),
                ("tier-name", Some("web")),
                ("node-name", Some("web-1")),
            ]
        );
    }
}
