//! Descriptor files declaring plugin metadata.
//!
//! A descriptor holds at most one `[plugin]` table and any number of
//! `[[actions]]` entries. Several descriptors can be merged the way
//! metadata discovery works: the first plugin record found wins and
//! actions accumulate in file order.

use anyhow::{Context, Result, anyhow};
use ideaxml_model::{ActionBinding, PluginManifest, is_blank};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Plugin metadata gathered from one or more descriptor files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    #[serde(default)]
    pub plugin: Option<PluginManifest>,

    #[serde(default)]
    pub actions: Vec<ActionBinding>,
}

impl Descriptor {
    /// Load a descriptor, choosing the format from the file extension.
    ///
    /// `.json` files are read as JSON, everything else as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read descriptor: {}", path.display()))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let descriptor = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        };

        descriptor.with_context(|| format!("Invalid descriptor: {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load and merge every descriptor in `paths`, in order.
    pub fn load_all<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let descriptors = paths
            .iter()
            .map(|path| Self::load(path.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::merge(descriptors))
    }

    /// Merge descriptors: the first plugin record wins, actions are concatenated.
    pub fn merge(descriptors: impl IntoIterator<Item = Descriptor>) -> Self {
        let mut merged = Self::default();
        for descriptor in descriptors {
            if let Some(plugin) = descriptor.plugin {
                match merged.plugin {
                    None => merged.plugin = Some(plugin),
                    Some(ref kept) => tracing::warn!(
                        "Ignoring plugin '{}': '{}' was declared first",
                        plugin.id,
                        kept.id
                    ),
                }
            }
            merged.actions.extend(descriptor.actions);
        }
        merged
    }

    /// Check for problems that would make the generated file invalid.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref plugin) = self.plugin
            && is_blank(Some(plugin.id.as_str()))
        {
            return Err(anyhow!("Plugin id cannot be blank"));
        }

        let mut seen = HashSet::new();
        for (index, action) in self.actions.iter().enumerate() {
            if is_blank(Some(action.id.as_str())) {
                return Err(anyhow!("Action #{} has a blank id", index));
            }
            if is_blank(Some(action.class_name.as_str())) {
                return Err(anyhow!("Action '{}' has a blank class", action.id));
            }
            if !seen.insert(action.id.as_str()) {
                return Err(anyhow!("Duplicate action id '{}'", action.id));
            }
        }

        Ok(())
    }

    /// Findings that do not stop generation but are probably mistakes.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        match self.plugin {
            None if !self.actions.is_empty() => warnings.push(format!(
                "{} action(s) declared but no plugin; nothing will be generated",
                self.actions.len()
            )),
            None => {}
            Some(ref plugin) => warnings.extend(plugin_warnings(plugin)),
        }

        for action in &self.actions {
            for shortcut in &action.shortcuts {
                if is_blank(Some(shortcut.first_keystroke.as_str())) {
                    warnings.push(format!(
                        "Action '{}' has a shortcut without a first keystroke",
                        action.id
                    ));
                }
            }
        }

        warnings
    }
}

fn plugin_warnings(plugin: &PluginManifest) -> Vec<String> {
    let mut warnings = Vec::new();

    if is_blank(Some(plugin.url.as_str())) {
        warnings.push("Plugin url is blank; the url attribute will be omitted".to_string());
    }

    if is_blank(Some(plugin.vendor.name.as_str())) {
        warnings.push("Vendor name is blank".to_string());
    }

    for dependency in &plugin.dependencies {
        if is_blank(Some(dependency.name.as_str())) {
            warnings.push("Dependency with a blank name will be omitted".to_string());
        }
    }

    if let Some(ref version) = plugin.version
        && !is_blank(Some(version.as_str()))
        && semver::Version::parse(version.trim()).is_err()
    {
        warnings.push(format!("Version '{}' is not valid semver", version));
    }

    if let Some(constraint) = plugin.version_constraint
        && constraint.is_partial()
    {
        warnings.push(format!(
            "Version constraint needs both since_build and until_build (got {} / {}); it will be omitted",
            constraint.since_build, constraint.until_build
        ));
    }

    warnings
}
