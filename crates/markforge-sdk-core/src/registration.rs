//! Registration entities: commands, shortcuts, menu items, status bar items.
//!
//! Each entity carries a caller-assigned identifier, unique within its
//! category. Identifier collisions are resolved by the host (last write
//! wins); this layer does not police them.

use std::fmt;
use std::sync::Arc;

/// Action callback invoked when a command executes.
pub type CommandAction = Arc<dyn Fn() -> anyhow::Result<()> + Send + Sync>;

/// Guard predicate deciding whether an entity is currently available.
pub type ConditionFn = Arc<dyn Fn() -> bool + Send + Sync>;

/// Click callback for menu and status bar items.
pub type ClickHandler = Arc<dyn Fn() + Send + Sync>;

/// A command exposed in the command palette.
#[derive(Clone)]
pub struct Command {
    /// Identifier, unique among commands.
    pub id: String,

    /// Display name.
    pub name: String,

    pub description: Option<String>,
    pub category: Option<String>,

    /// Suggested hotkey, e.g. `"Ctrl+Shift+P"`.
    pub hotkey: Option<String>,

    pub icon: Option<String>,

    /// Invoked when the command runs.
    pub action: CommandAction,

    /// When present, the command is offered only while this returns true.
    pub condition: Option<ConditionFn>,
}

impl Command {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        action: impl Fn() -> anyhow::Result<()> + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            category: None,
            hotkey: None,
            icon: None,
            action: Arc::new(action),
            condition: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_hotkey(mut self, hotkey: impl Into<String>) -> Self {
        self.hotkey = Some(hotkey.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_condition(mut self, condition: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        self.condition = Some(Arc::new(condition));
        self
    }

    /// Whether the guard predicate (if any) currently allows the command.
    pub fn is_available(&self) -> bool {
        self.condition.as_ref().map_or(true, |c| c())
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("hotkey", &self.hotkey)
            .finish_non_exhaustive()
    }
}

/// A key chord bound to a command.
#[derive(Clone)]
pub struct KeyboardShortcut {
    /// Identifier, unique among shortcuts.
    pub id: String,

    /// Key chord, e.g. `"Ctrl+B"`.
    pub keys: String,

    /// Identifier of the command to execute.
    pub command: String,

    /// When present, the chord fires only while this returns true.
    pub condition: Option<ConditionFn>,
}

impl KeyboardShortcut {
    pub fn new(
        id: impl Into<String>,
        keys: impl Into<String>,
        command: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            keys: keys.into(),
            command: command.into(),
            condition: None,
        }
    }

    pub fn with_condition(mut self, condition: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        self.condition = Some(Arc::new(condition));
        self
    }
}

impl fmt::Debug for KeyboardShortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyboardShortcut")
            .field("id", &self.id)
            .field("keys", &self.keys)
            .field("command", &self.command)
            .finish_non_exhaustive()
    }
}

/// Where a menu item is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuLocation {
    /// Application menu bar.
    Main,
    /// Right-click context menu.
    Context,
    /// Editor gutter/toolbar menu.
    Editor,
}

/// An entry in one of the application menus.
#[derive(Clone)]
pub struct MenuItem {
    /// Identifier, unique among menu items.
    pub id: String,

    pub label: String,
    pub icon: Option<String>,

    /// Shortcut hint rendered next to the label.
    pub shortcut: Option<String>,

    /// Renders as a separator line; label and callbacks are ignored.
    pub separator: bool,

    pub submenu: Vec<MenuItem>,
    pub on_click: Option<ClickHandler>,
    pub condition: Option<ConditionFn>,
}

impl MenuItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            shortcut: None,
            separator: false,
            submenu: Vec::new(),
            on_click: None,
            condition: None,
        }
    }

    /// A separator line.
    pub fn separator(id: impl Into<String>) -> Self {
        let mut item = Self::new(id, "");
        item.separator = true;
        item
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }

    pub fn with_submenu(mut self, submenu: Vec<MenuItem>) -> Self {
        self.submenu = submenu;
        self
    }

    pub fn on_click(mut self, handler: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_click = Some(Arc::new(handler));
        self
    }

    pub fn with_condition(mut self, condition: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        self.condition = Some(Arc::new(condition));
        self
    }
}

impl fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("separator", &self.separator)
            .field("submenu", &self.submenu)
            .finish_non_exhaustive()
    }
}

/// An item rendered in the status bar.
#[derive(Clone)]
pub struct StatusBarItem {
    /// Identifier, unique among status bar items.
    pub id: String,

    /// Text shown in the bar.
    pub text: String,

    pub tooltip: Option<String>,

    /// Higher priority sorts closer to the start of the bar.
    pub priority: Option<i32>,

    pub on_click: Option<ClickHandler>,
}

impl StatusBarItem {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            tooltip: None,
            priority: None,
            on_click: None,
        }
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn on_click(mut self, handler: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_click = Some(Arc::new(handler));
        self
    }
}

impl fmt::Debug for StatusBarItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatusBarItem")
            .field("id", &self.id)
            .field("text", &self.text)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}
