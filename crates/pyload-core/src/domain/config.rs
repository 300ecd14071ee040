//! Server configuration tree and value validation.
//!
//! `get_config` and `get_plugin_config` both return a mapping of
//! category → section, where each section lists typed items. Values are
//! always carried as strings; the declared [`ConfigType`] decides what a
//! valid string looks like.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Declared type of a configuration option.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigType {
    #[default]
    Str,
    Int,
    Bool,
    Folder,
    Password,
    /// Enumerated choices, written as `a;b;c` on the wire.
    Choice(Vec<String>),
    /// Any other tag (`file`, `time`, `ip`, ...), treated as a free string.
    Other(String),
}

impl ConfigType {
    /// Parse a wire type tag.
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        if tag.contains(';') {
            return Self::Choice(
                tag.split(';')
                    .filter(|c| !c.is_empty())
                    .map(str::to_string)
                    .collect(),
            );
        }
        match tag.to_ascii_lowercase().as_str() {
            "str" | "" => Self::Str,
            "int" => Self::Int,
            "bool" => Self::Bool,
            "folder" => Self::Folder,
            "password" => Self::Password,
            _ => Self::Other(tag.to_string()),
        }
    }

    /// Check that `value` is acceptable for this type.
    pub fn validate(&self, option: &str, value: &str) -> Result<(), ValidationError> {
        let reject = |reason: String| ValidationError::InvalidValue {
            option: option.to_string(),
            value: value.to_string(),
            reason,
        };
        match self {
            Self::Int => value
                .trim()
                .parse::<i64>()
                .map(|_| ())
                .map_err(|_| reject("expected an integer".to_string())),
            Self::Bool => {
                if parse_bool(value).is_some() {
                    Ok(())
                } else {
                    Err(reject("expected True or False".to_string()))
                }
            }
            Self::Choice(choices) => {
                if choices.iter().any(|c| c == value) {
                    Ok(())
                } else {
                    Err(reject(format!("allowed: {}", choices.join(", "))))
                }
            }
            Self::Str | Self::Folder | Self::Password | Self::Other(_) => Ok(()),
        }
    }

    /// Canonical wire form of an already validated value.
    #[must_use]
    pub fn normalize(&self, value: &str) -> String {
        match self {
            Self::Bool => match parse_bool(value) {
                Some(true) => "True".to_string(),
                Some(false) => "False".to_string(),
                None => value.to_string(),
            },
            Self::Int => value.trim().to_string(),
            _ => value.to_string(),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "True" | "true" | "1" => Some(true),
        "False" | "false" | "0" => Some(false),
        _ => None,
    }
}

impl fmt::Display for ConfigType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str => f.write_str("str"),
            Self::Int => f.write_str("int"),
            Self::Bool => f.write_str("bool"),
            Self::Folder => f.write_str("folder"),
            Self::Password => f.write_str("password"),
            Self::Choice(choices) => f.write_str(&choices.join(";")),
            Self::Other(tag) => f.write_str(tag),
        }
    }
}

impl FromStr for ConfigType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Serialize for ConfigType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ConfigType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::parse(&tag))
    }
}

/// One configuration option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigItem {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "value_as_string")]
    pub value: String,
    #[serde(rename = "type", default)]
    pub kind: ConfigType,
    #[serde(default)]
    pub readonly: bool,
}

impl ConfigItem {
    /// Description if present, option name otherwise.
    #[must_use]
    pub fn label(&self) -> &str {
        if self.description.is_empty() {
            &self.name
        } else {
            &self.description
        }
    }
}

/// Accept strings, numbers, booleans and null for an option value.
fn value_as_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Bool(true) => "True".to_string(),
        serde_json::Value::Bool(false) => "False".to_string(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// A category of options (`general`, `webui`, a plugin name, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigSection {
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "desc")]
    pub description: String,
    #[serde(default)]
    pub items: Vec<ConfigItem>,
}

impl ConfigSection {
    #[must_use]
    pub fn item(&self, option: &str) -> Option<&ConfigItem> {
        self.items.iter().find(|it| it.name == option)
    }

    pub fn item_mut(&mut self, option: &str) -> Option<&mut ConfigItem> {
        self.items.iter_mut().find(|it| it.name == option)
    }
}

/// Category name → section.
pub type ConfigTree = BTreeMap<String, ConfigSection>;

/// Which configuration a change targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConfigScope {
    Core,
    Plugin,
}

impl ConfigScope {
    /// The `section` argument expected by `set_config_value`.
    #[must_use]
    pub const fn as_section(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Plugin => "plugin",
        }
    }
}

impl fmt::Display for ConfigScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_section())
    }
}

/// Core and plugin configuration fetched together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullConfig {
    pub core: ConfigTree,
    pub plugins: ConfigTree,
}

impl FullConfig {
    #[must_use]
    pub const fn tree(&self, scope: ConfigScope) -> &ConfigTree {
        match scope {
            ConfigScope::Core => &self.core,
            ConfigScope::Plugin => &self.plugins,
        }
    }

    pub const fn tree_mut(&mut self, scope: ConfigScope) -> &mut ConfigTree {
        match scope {
            ConfigScope::Core => &mut self.core,
            ConfigScope::Plugin => &mut self.plugins,
        }
    }

    /// Look up a single option.
    #[must_use]
    pub fn item(&self, scope: ConfigScope, category: &str, option: &str) -> Option<&ConfigItem> {
        self.tree(scope).get(category)?.item(option)
    }
}

/// A value rejected before it was sent to the server.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid value for {option}: {value} ({reason})")]
    InvalidValue {
        option: String,
        value: String,
        reason: String,
    },

    #[error("Unknown option {option} in {category}")]
    UnknownOption { category: String, option: String },

    #[error("Option {option} in {category} is read-only")]
    ReadOnly { category: String, option: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_type_tags() {
        assert_eq!(ConfigType::parse("int"), ConfigType::Int);
        assert_eq!(ConfigType::parse("Bool"), ConfigType::Bool);
        assert_eq!(ConfigType::parse("folder"), ConfigType::Folder);
        assert_eq!(
            ConfigType::parse("debug;info;warning;"),
            ConfigType::Choice(vec![
                "debug".to_string(),
                "info".to_string(),
                "warning".to_string()
            ])
        );
        assert_eq!(ConfigType::parse("time"), ConfigType::Other("time".to_string()));
    }

    #[test]
    fn test_validate_int() {
        assert!(ConfigType::Int.validate("port", "8000").is_ok());
        assert!(ConfigType::Int.validate("port", "-3").is_ok());
        let err = ConfigType::Int.validate("port", "80x").unwrap_err();
        assert!(err.to_string().contains("port"));
    }

    #[test]
    fn test_validate_bool_and_normalize() {
        assert!(ConfigType::Bool.validate("ssl", "true").is_ok());
        assert!(ConfigType::Bool.validate("ssl", "yes").is_err());
        assert_eq!(ConfigType::Bool.normalize("1"), "True");
        assert_eq!(ConfigType::Bool.normalize("false"), "False");
    }

    #[test]
    fn test_validate_choice() {
        let kind = ConfigType::parse("en;de;fr");
        assert!(kind.validate("language", "de").is_ok());
        let err = kind.validate("language", "es").unwrap_err();
        assert!(err.to_string().contains("en, de, fr"));
    }

    #[test]
    fn test_free_string_types_accept_anything() {
        assert!(ConfigType::Folder.validate("storage", "/tmp/x").is_ok());
        assert!(ConfigType::Other("ip".into()).validate("host", "::1").is_ok());
    }

    #[test]
    fn test_item_value_normalized_from_json() {
        let section: ConfigSection = serde_json::from_value(json!({
            "name": "Web Interface",
            "items": [
                {"name": "port", "description": "Port", "value": 8000, "type": "int"},
                {"name": "develop", "description": "Dev", "value": false, "type": "bool"},
                {"name": "theme", "value": null, "type": "classic;modern", "readonly": true}
            ]
        }))
        .unwrap();

        assert_eq!(section.item("port").unwrap().value, "8000");
        assert_eq!(section.item("develop").unwrap().value, "False");
        let theme = section.item("theme").unwrap();
        assert_eq!(theme.value, "");
        assert!(theme.readonly);
        assert_eq!(theme.label(), "theme");
        assert!(matches!(theme.kind, ConfigType::Choice(_)));
    }

    #[test]
    fn test_type_serializes_as_wire_tag() {
        let value = serde_json::to_value(ConfigType::parse("a;b")).unwrap();
        assert_eq!(value, json!("a;b"));
    }

    #[test]
    fn test_scope_sections() {
        assert_eq!(ConfigScope::Core.as_section(), "core");
        assert_eq!(ConfigScope::Plugin.to_string(), "plugin");
    }
}
