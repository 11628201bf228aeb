//! Plugin setting schema and values.
//!
//! The schema ([`PluginSettingsConfig`]) describes what a plugin's options
//! page looks like; the values ([`PluginSettings`]) are a flat key-to-JSON
//! map persisted by the host per plugin. The two meet only at the merge
//! contract: loaded values win per key, missing keys fall back to the
//! declared default.

use crate::error::SdkResult;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// One choice in a dropdown setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
}

impl DropdownOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A single configurable option, tagged by input kind.
///
/// The `key` is unique within its group. Uniqueness across groups is NOT
/// enforced here; the host resolves collisions at registration time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SettingDefinition {
    Text {
        key: String,
        name: String,
        #[serde(default)]
        description: Option<String>,
        default: String,
        #[serde(default)]
        placeholder: Option<String>,
        #[serde(default)]
        max_length: Option<usize>,
    },
    Password {
        key: String,
        name: String,
        #[serde(default)]
        description: Option<String>,
        default: String,
        #[serde(default)]
        placeholder: Option<String>,
    },
    Number {
        key: String,
        name: String,
        #[serde(default)]
        description: Option<String>,
        default: f64,
        #[serde(default)]
        min: Option<f64>,
        #[serde(default)]
        max: Option<f64>,
        #[serde(default)]
        step: Option<f64>,
    },
    Slider {
        key: String,
        name: String,
        #[serde(default)]
        description: Option<String>,
        default: f64,
        min: f64,
        max: f64,
        step: f64,
    },
    Boolean {
        key: String,
        name: String,
        #[serde(default)]
        description: Option<String>,
        default: bool,
    },
    Dropdown {
        key: String,
        name: String,
        #[serde(default)]
        description: Option<String>,
        default: String,
        options: Vec<DropdownOption>,
    },
    Textarea {
        key: String,
        name: String,
        #[serde(default)]
        description: Option<String>,
        default: String,
        #[serde(default)]
        placeholder: Option<String>,
        #[serde(default)]
        rows: Option<u16>,
    },
    Color {
        key: String,
        name: String,
        #[serde(default)]
        description: Option<String>,
        default: String,
    },
    File {
        key: String,
        name: String,
        #[serde(default)]
        description: Option<String>,
        default: String,
        #[serde(default)]
        extensions: Vec<String>,
    },
    Folder {
        key: String,
        name: String,
        #[serde(default)]
        description: Option<String>,
        default: String,
    },
}

impl SettingDefinition {
    /// The setting key.
    pub fn key(&self) -> &str {
        match self {
            SettingDefinition::Text { key, .. }
            | SettingDefinition::Password { key, .. }
            | SettingDefinition::Number { key, .. }
            | SettingDefinition::Slider { key, .. }
            | SettingDefinition::Boolean { key, .. }
            | SettingDefinition::Dropdown { key, .. }
            | SettingDefinition::Textarea { key, .. }
            | SettingDefinition::Color { key, .. }
            | SettingDefinition::File { key, .. }
            | SettingDefinition::Folder { key, .. } => key,
        }
    }

    /// The display name.
    pub fn name(&self) -> &str {
        match self {
            SettingDefinition::Text { name, .. }
            | SettingDefinition::Password { name, .. }
            | SettingDefinition::Number { name, .. }
            | SettingDefinition::Slider { name, .. }
            | SettingDefinition::Boolean { name, .. }
            | SettingDefinition::Dropdown { name, .. }
            | SettingDefinition::Textarea { name, .. }
            | SettingDefinition::Color { name, .. }
            | SettingDefinition::File { name, .. }
            | SettingDefinition::Folder { name, .. } => name,
        }
    }

    /// The declared default as a JSON value, typed per variant.
    pub fn default_value(&self) -> Value {
        match self {
            SettingDefinition::Text { default, .. }
            | SettingDefinition::Password { default, .. }
            | SettingDefinition::Dropdown { default, .. }
            | SettingDefinition::Textarea { default, .. }
            | SettingDefinition::Color { default, .. }
            | SettingDefinition::File { default, .. }
            | SettingDefinition::Folder { default, .. } => Value::from(default.clone()),
            SettingDefinition::Number { default, .. }
            | SettingDefinition::Slider { default, .. } => Value::from(*default),
            SettingDefinition::Boolean { default, .. } => Value::from(*default),
        }
    }
}

/// An ordered group of setting definitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingGroup {
    /// Identifier, unique within the config.
    pub id: String,

    /// Heading shown above the group.
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Whether the group renders collapsed by default.
    #[serde(default)]
    pub collapsible: bool,

    pub settings: Vec<SettingDefinition>,
}

/// The full settings schema of one plugin: an ordered list of groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginSettingsConfig {
    pub groups: Vec<SettingGroup>,
}

impl PluginSettingsConfig {
    /// Iterate every definition across all groups, in order.
    pub fn definitions(&self) -> impl Iterator<Item = &SettingDefinition> {
        self.groups.iter().flat_map(|g| g.settings.iter())
    }

    /// Find a group by id.
    pub fn group(&self, id: &str) -> Option<&SettingGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// Find the first definition with the given key.
    pub fn definition(&self, key: &str) -> Option<&SettingDefinition> {
        self.definitions().find(|d| d.key() == key)
    }
}

/// Persisted setting values of one plugin: a flat key-to-value map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginSettings {
    values: HashMap<String, Value>,
}

impl PluginSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value for a key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Typed value for a key. A missing key or a value of the wrong shape
    /// both read as `None`, so callers fall back to their default.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.values
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Typed value with a fallback.
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.get_as(key).unwrap_or(default)
    }

    /// Set a value. Does not persist; use the host's save call for that.
    pub fn set<T: Serialize>(&mut self, key: impl Into<String>, value: T) -> SdkResult<()> {
        self.values.insert(key.into(), serde_json::to_value(value)?);
        Ok(())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }

    /// Fill gaps from the schema's declared defaults. Loaded values win per
    /// key; only missing keys are filled.
    pub fn merge_defaults(&mut self, config: &PluginSettingsConfig) {
        for definition in config.definitions() {
            if !self.values.contains_key(definition.key()) {
                self.values
                    .insert(definition.key().to_string(), definition.default_value());
            }
        }
    }
}
