//! Fluent construction of a plugin settings schema.
//!
//! [`SettingsBuilder`] removes the need to hand-assemble the tagged
//! variant records of [`PluginSettingsConfig`]. The builder moves through
//! the chain: `add_group` seals the previous group and opens the next,
//! `build` seals the last group and returns the finished config.
//!
//! The builder performs no key-uniqueness validation, across groups or
//! within one; duplicate keys are surfaced by the host at registration
//! time. Rejecting them here would break previously-accepted configs.

use markforge_sdk_core::{
    DropdownOption, PluginSettingsConfig, SettingDefinition, SettingGroup,
};

/// Optional attributes for text and password settings.
#[derive(Debug, Clone, Default)]
pub struct TextOptions {
    pub description: Option<String>,
    pub placeholder: Option<String>,
    /// Ignored for passwords.
    pub max_length: Option<usize>,
}

/// Optional attributes for number settings.
#[derive(Debug, Clone, Default)]
pub struct NumberOptions {
    pub description: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
}

/// Optional attributes for slider settings.
#[derive(Debug, Clone, Default)]
pub struct SliderOptions {
    pub description: Option<String>,
    /// Defaults to 1.
    pub step: Option<f64>,
}

/// Optional attributes for textarea settings.
#[derive(Debug, Clone, Default)]
pub struct TextareaOptions {
    pub description: Option<String>,
    pub placeholder: Option<String>,
    pub rows: Option<u16>,
}

/// Optional attributes for file settings.
#[derive(Debug, Clone, Default)]
pub struct FileOptions {
    pub description: Option<String>,
    /// Allowed extensions without the leading dot.
    pub extensions: Vec<String>,
}

/// Builder for a [`PluginSettingsConfig`].
#[derive(Debug, Clone, Default)]
pub struct SettingsBuilder {
    groups: Vec<SettingGroup>,
}

impl SettingsBuilder {
    /// Start an empty config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new group; subsequent `add_*` calls append to it.
    pub fn add_group(self, id: impl Into<String>, name: impl Into<String>) -> GroupBuilder {
        GroupBuilder {
            groups: self.groups,
            current: SettingGroup {
                id: id.into(),
                name: name.into(),
                description: None,
                collapsible: false,
                settings: Vec::new(),
            },
        }
    }

    /// Finish the config.
    pub fn build(self) -> PluginSettingsConfig {
        PluginSettingsConfig {
            groups: self.groups,
        }
    }
}

/// Group-scoped part of the settings chain.
#[derive(Debug, Clone)]
pub struct GroupBuilder {
    groups: Vec<SettingGroup>,
    current: SettingGroup,
}

impl GroupBuilder {
    /// Describe the current group.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.current.description = Some(description.into());
        self
    }

    /// Render the current group collapsed by default.
    pub fn collapsible(mut self) -> Self {
        self.current.collapsible = true;
        self
    }

    /// Append a prebuilt definition to the current group.
    pub fn add(mut self, definition: SettingDefinition) -> Self {
        self.current.settings.push(definition);
        self
    }

    pub fn add_text(
        self,
        key: impl Into<String>,
        name: impl Into<String>,
        default: impl Into<String>,
        options: TextOptions,
    ) -> Self {
        self.add(SettingDefinition::Text {
            key: key.into(),
            name: name.into(),
            description: options.description,
            default: default.into(),
            placeholder: options.placeholder,
            max_length: options.max_length,
        })
    }

    pub fn add_password(
        self,
        key: impl Into<String>,
        name: impl Into<String>,
        default: impl Into<String>,
        options: TextOptions,
    ) -> Self {
        self.add(SettingDefinition::Password {
            key: key.into(),
            name: name.into(),
            description: options.description,
            default: default.into(),
            placeholder: options.placeholder,
        })
    }

    pub fn add_number(
        self,
        key: impl Into<String>,
        name: impl Into<String>,
        default: f64,
        options: NumberOptions,
    ) -> Self {
        self.add(SettingDefinition::Number {
            key: key.into(),
            name: name.into(),
            description: options.description,
            default,
            min: options.min,
            max: options.max,
            step: options.step,
        })
    }

    pub fn add_slider(
        self,
        key: impl Into<String>,
        name: impl Into<String>,
        default: f64,
        min: f64,
        max: f64,
        options: SliderOptions,
    ) -> Self {
        self.add(SettingDefinition::Slider {
            key: key.into(),
            name: name.into(),
            description: options.description,
            default,
            min,
            max,
            step: options.step.unwrap_or(1.0),
        })
    }

    pub fn add_boolean(
        self,
        key: impl Into<String>,
        name: impl Into<String>,
        default: bool,
    ) -> Self {
        self.add(SettingDefinition::Boolean {
            key: key.into(),
            name: name.into(),
            description: None,
            default,
        })
    }

    pub fn add_dropdown(
        self,
        key: impl Into<String>,
        name: impl Into<String>,
        default: impl Into<String>,
        options: Vec<DropdownOption>,
    ) -> Self {
        self.add(SettingDefinition::Dropdown {
            key: key.into(),
            name: name.into(),
            description: None,
            default: default.into(),
            options,
        })
    }

    pub fn add_textarea(
        self,
        key: impl Into<String>,
        name: impl Into<String>,
        default: impl Into<String>,
        options: TextareaOptions,
    ) -> Self {
        self.add(SettingDefinition::Textarea {
            key: key.into(),
            name: name.into(),
            description: options.description,
            default: default.into(),
            placeholder: options.placeholder,
            rows: options.rows,
        })
    }

    pub fn add_color(
        self,
        key: impl Into<String>,
        name: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        self.add(SettingDefinition::Color {
            key: key.into(),
            name: name.into(),
            description: None,
            default: default.into(),
        })
    }

    pub fn add_file(
        self,
        key: impl Into<String>,
        name: impl Into<String>,
        default: impl Into<String>,
        options: FileOptions,
    ) -> Self {
        self.add(SettingDefinition::File {
            key: key.into(),
            name: name.into(),
            description: options.description,
            default: default.into(),
            extensions: options.extensions,
        })
    }

    pub fn add_folder(
        self,
        key: impl Into<String>,
        name: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        self.add(SettingDefinition::Folder {
            key: key.into(),
            name: name.into(),
            description: None,
            default: default.into(),
        })
    }

    /// Seal the current group and open the next.
    pub fn add_group(self, id: impl Into<String>, name: impl Into<String>) -> GroupBuilder {
        self.seal().add_group(id, name)
    }

    /// Seal the current group and finish the config.
    pub fn build(self) -> PluginSettingsConfig {
        self.seal().build()
    }

    fn seal(self) -> SettingsBuilder {
        let GroupBuilder { mut groups, current } = self;
        groups.push(current);
        SettingsBuilder { groups }
    }
}
