//! Portfolio/resume profile as an untyped tree
//!
//! Profiles come from the portfolio backend or a local file and follow no
//! fixed schema. They are modelled as a small sum type so that every
//! traversal is total: each node is text, a sequence, a mapping, or some
//! other scalar that carries no words.

use crate::error::{Result, MatcherError};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub enum ProfileValue {
    Text(String),
    Sequence(Vec<ProfileValue>),
    Mapping(BTreeMap<String, ProfileValue>),
    /// Numbers, booleans, null and dates; kept so the profile can be saved back.
    Other(JsonValue),
}

/// Receives every string leaf of a profile, keys excluded.
pub trait ProfileVisitor {
    fn visit_text(&mut self, text: &str);
}

impl ProfileValue {
    pub fn walk<V: ProfileVisitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            ProfileValue::Text(text) => visitor.visit_text(text),
            ProfileValue::Sequence(items) => {
                for item in items {
                    item.walk(visitor);
                }
            }
            ProfileValue::Mapping(entries) => {
                for value in entries.values() {
                    value.walk(visitor);
                }
            }
            ProfileValue::Other(_) => {}
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ProfileValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn to_json(&self) -> JsonValue {
        match self {
            ProfileValue::Text(text) => JsonValue::String(text.clone()),
            ProfileValue::Sequence(items) => {
                JsonValue::Array(items.iter().map(ProfileValue::to_json).collect())
            }
            ProfileValue::Mapping(entries) => JsonValue::Object(
                entries
                    .iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
            ProfileValue::Other(value) => value.clone(),
        }
    }
}

impl From<JsonValue> for ProfileValue {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::String(text) => ProfileValue::Text(text),
            JsonValue::Array(items) => {
                ProfileValue::Sequence(items.into_iter().map(ProfileValue::from).collect())
            }
            JsonValue::Object(entries) => ProfileValue::Mapping(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, ProfileValue::from(value)))
                    .collect(),
            ),
            other => ProfileValue::Other(other),
        }
    }
}

impl From<toml::Value> for ProfileValue {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::String(text) => ProfileValue::Text(text),
            toml::Value::Array(items) => {
                ProfileValue::Sequence(items.into_iter().map(ProfileValue::from).collect())
            }
            toml::Value::Table(entries) => ProfileValue::Mapping(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, ProfileValue::from(value)))
                    .collect(),
            ),
            toml::Value::Integer(n) => ProfileValue::Other(JsonValue::from(n)),
            toml::Value::Float(f) => ProfileValue::Other(JsonValue::from(f)),
            toml::Value::Boolean(b) => ProfileValue::Other(JsonValue::Bool(b)),
            // Dates are not words; keep the literal for round-tripping only
            toml::Value::Datetime(dt) => ProfileValue::Other(JsonValue::String(dt.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    root: ProfileValue,
}

impl Profile {
    pub fn new(root: ProfileValue) -> Self {
        Self { root }
    }

    pub fn from_json(value: JsonValue) -> Self {
        Self::new(ProfileValue::from(value))
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: JsonValue = serde_json::from_str(content)
            .map_err(|e| MatcherError::ProfileParse(format!("Invalid JSON profile: {}", e)))?;
        Ok(Self::from_json(value))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let value: toml::Value = toml::from_str(content)
            .map_err(|e| MatcherError::ProfileParse(format!("Invalid TOML profile: {}", e)))?;
        Ok(Self::new(ProfileValue::from(value)))
    }

    /// Load a profile file, choosing the parser from the extension.
    pub async fn load(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "json" => {
                let content = tokio::fs::read_to_string(path).await?;
                Self::from_json_str(&content)
            }
            "toml" => {
                let content = tokio::fs::read_to_string(path).await?;
                Self::from_toml_str(&content)
            }
            _ => Err(MatcherError::UnsupportedFormat(format!(
                "Profile must be .json or .toml: {}",
                path.display()
            ))),
        }
    }

    /// Top-level field lookup; `None` when the root is not a mapping.
    pub fn get(&self, key: &str) -> Option<&ProfileValue> {
        match &self.root {
            ProfileValue::Mapping(entries) => entries.get(key),
            _ => None,
        }
    }

    /// String entries of the top-level `skills` sequence.
    pub fn skills(&self) -> Vec<&str> {
        match self.get("skills") {
            Some(ProfileValue::Sequence(items)) => {
                items.iter().filter_map(ProfileValue::as_text).collect()
            }
            _ => Vec::new(),
        }
    }

    pub fn walk<V: ProfileVisitor + ?Sized>(&self, visitor: &mut V) {
        self.root.walk(visitor);
    }

    pub fn to_json(&self) -> JsonValue {
        self.root.to_json()
    }
}
