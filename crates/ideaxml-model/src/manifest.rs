//! Plugin identity records.

use serde::{Deserialize, Serialize};

use crate::version::VersionConstraint;

/// The vendor of the plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vendor {
    /// Vendor name (required)
    pub name: String,

    /// Vendor homepage
    #[serde(default)]
    pub url: Option<String>,

    /// Contact email
    #[serde(default)]
    pub email: Option<String>,

    /// Path of the 16x16 vendor logo inside the plugin
    #[serde(default, alias = "logo")]
    pub logo_path: Option<String>,
}

impl Vendor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Another plugin or IDE module this plugin depends on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// Plugin or module id
    pub name: String,

    /// Whether the plugin still loads when the dependency is missing
    #[serde(default)]
    pub optional: bool,

    /// Extra descriptor loaded only when the dependency is present
    #[serde(default)]
    pub config_file: Option<String>,
}

impl Dependency {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Top-level plugin identity record.
///
/// `id` and `url` are required by the descriptor schema. Everything else
/// may be omitted; blank strings are treated the same as omitted ones when
/// the configuration file is generated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginManifest {
    pub url: String,

    pub id: String,

    /// Display name
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub vendor: Vendor,

    /// IDE build range (since/until)
    #[serde(default, alias = "idea_version")]
    pub version_constraint: Option<VersionConstraint>,

    /// Release notes for this version
    #[serde(default)]
    pub change_notes: Option<String>,

    /// Dependencies in declaration order
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

impl PluginManifest {
    pub fn new(url: impl Into<String>, id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// The build range, only when both bounds are set.
    pub fn complete_version_constraint(&self) -> Option<VersionConstraint> {
        self.version_constraint.filter(VersionConstraint::is_complete)
    }
}
