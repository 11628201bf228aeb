//! Permission model for plugins.
//!
//! Plugins declare the permissions they need in their manifest. The host
//! checks declared permissions before exposing the matching capabilities to
//! a plugin.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A permission a plugin can request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Permission {
    /// Read and write files in the workspace.
    Files,

    /// Open external URLs.
    Network,

    /// Read and write the clipboard.
    Clipboard,

    /// Show notifications and toasts.
    Notifications,

    /// Persist plugin settings.
    Storage,

    /// Host-specific permission for extension.
    Custom(String),
}

impl Permission {
    /// Parse a permission from its manifest string.
    pub fn parse(s: &str) -> Self {
        match s {
            "files" => Permission::Files,
            "network" => Permission::Network,
            "clipboard" => Permission::Clipboard,
            "notifications" => Permission::Notifications,
            "storage" => Permission::Storage,
            other => Permission::Custom(other.to_string()),
        }
    }

    /// Manifest string representation.
    pub fn as_str(&self) -> &str {
        match self {
            Permission::Files => "files",
            Permission::Network => "network",
            Permission::Clipboard => "clipboard",
            Permission::Notifications => "notifications",
            Permission::Storage => "storage",
            Permission::Custom(s) => s,
        }
    }
}

impl From<String> for Permission {
    fn from(s: String) -> Self {
        Permission::parse(&s)
    }
}

impl From<Permission> for String {
    fn from(p: Permission) -> Self {
        p.as_str().to_string()
    }
}

/// A permission entry as declared in a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionGrant {
    /// The requested permission.
    #[serde(rename = "type")]
    pub permission: Permission,

    /// Why the plugin needs it, shown to the user.
    #[serde(default)]
    pub description: Option<String>,

    /// Optional permissions may be denied without failing the load.
    #[serde(default)]
    pub optional: bool,
}

/// A set of permissions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PermissionSet {
    permissions: HashSet<Permission>,
}

impl PermissionSet {
    /// Create an empty permission set.
    pub fn new() -> Self {
        Self {
            permissions: HashSet::new(),
        }
    }

    /// Create a permission set from a list of manifest strings.
    pub fn from_strings<I, S>(strings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let permissions = strings
            .into_iter()
            .map(|s| Permission::parse(s.as_ref()))
            .collect();
        Self { permissions }
    }

    /// Add a permission to the set.
    pub fn add(&mut self, permission: Permission) {
        self.permissions.insert(permission);
    }

    /// Check if the set contains a permission.
    pub fn has(&self, permission: &Permission) -> bool {
        self.permissions.contains(permission)
    }

    /// Check if this set is a superset of another.
    pub fn contains_all(&self, other: &PermissionSet) -> bool {
        other.permissions.is_subset(&self.permissions)
    }

    /// Get all permissions in the set.
    pub fn iter(&self) -> impl Iterator<Item = &Permission> {
        self.permissions.iter()
    }

    /// Get the number of permissions.
    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = Permission>>(iter: T) -> Self {
        Self {
            permissions: iter.into_iter().collect(),
        }
    }
}
