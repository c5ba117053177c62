//! Generates `META-INF/plugin.xml` from plugin records.
//!
//! The emitter is a single pass over a [`PluginManifest`] and a list of
//! [`ActionBinding`]s. Optional values that are missing or blank never
//! produce an attribute or element, element and attribute order is fixed,
//! and the same input always produces the same bytes.
//!
//! Reference: <https://plugins.jetbrains.com/docs/intellij/plugin-configuration-file.html>

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use ideaxml_model::{ActionBinding, KeyboardShortcut, PluginManifest, is_blank};

use crate::sink::ResourceSink;
use crate::xml::{Element, to_xml_string};

/// Location of the generated file relative to the resources root.
pub const PLUGIN_XML_PATH: &str = "META-INF/plugin.xml";

/// Outcome of an emission pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emission {
    /// No manifest was supplied, nothing was written.
    NoOp,
    /// The document was published to the sink.
    Written { path: PathBuf, bytes: usize },
}

/// Error raised while emitting the configuration file.
#[derive(Debug)]
pub enum EmitError {
    /// An action is missing a value the file cannot be written without.
    MalformedAction {
        /// Position of the action in the input list
        index: usize,
        /// Id of the action, possibly blank
        id: String,
        /// What is wrong with it
        reason: &'static str,
    },
    /// The sink refused the document.
    Sink { path: PathBuf, source: io::Error },
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmitError::MalformedAction { index, id, reason } if id.trim().is_empty() => {
                write!(f, "Action #{} is malformed: {}", index, reason)
            }
            EmitError::MalformedAction { index, id, reason } => {
                write!(f, "Action #{} ('{}') is malformed: {}", index, id, reason)
            }
            EmitError::Sink { path, source } => {
                write!(f, "Failed to write {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for EmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EmitError::Sink { source, .. } => Some(source),
            EmitError::MalformedAction { .. } => None,
        }
    }
}

/// Writes the plugin configuration file into a [`ResourceSink`].
#[derive(Debug)]
pub struct ConfigEmitter<S> {
    sink: S,
}

impl<S: ResourceSink> ConfigEmitter<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Builds, serializes and publishes the configuration file.
    ///
    /// Without a manifest this is a no-op. The document is fully serialized
    /// before the sink is touched, so a malformed action never leaves a
    /// partial file behind.
    pub fn emit(
        &mut self,
        manifest: Option<&PluginManifest>,
        actions: &[ActionBinding],
    ) -> Result<Emission, EmitError> {
        let Some(xml) = render_document(manifest, actions)? else {
            tracing::debug!("No plugin manifest found, skipping {}", PLUGIN_XML_PATH);
            return Ok(Emission::NoOp);
        };

        let path = Path::new(PLUGIN_XML_PATH);
        self.sink
            .publish(path, xml.as_bytes())
            .map_err(|source| EmitError::Sink {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::info!("Wrote {} ({} actions)", PLUGIN_XML_PATH, actions.len());
        Ok(Emission::Written {
            path: path.to_path_buf(),
            bytes: xml.len(),
        })
    }
}

/// Serializes the configuration document, or `None` without a manifest.
pub fn render_document(
    manifest: Option<&PluginManifest>,
    actions: &[ActionBinding],
) -> Result<Option<String>, EmitError> {
    match manifest {
        Some(manifest) => Ok(Some(to_xml_string(&build_document(manifest, actions)?))),
        None => Ok(None),
    }
}

/// Builds the `idea-plugin` element tree.
pub fn build_document(
    manifest: &PluginManifest,
    actions: &[ActionBinding],
) -> Result<Element, EmitError> {
    let mut root = Element::new("idea-plugin");
    root.attr_non_blank("url", Some(manifest.url.as_str()))
        .text_child_non_blank("name", Some(manifest.name.as_str()))
        .text_child_non_blank("id", Some(manifest.id.as_str()))
        .text_child_non_blank("description", manifest.description.as_deref())
        .text_child_non_blank("change-notes", manifest.change_notes.as_deref())
        .text_child_non_blank("version", manifest.version.as_deref());

    root.push_child(vendor_element(manifest));

    for dependency in &manifest.dependencies {
        let Some(mut depends) = Element::text_non_blank("depends", Some(dependency.name.as_str()))
        else {
            continue;
        };
        depends
            .attr("optional", if dependency.optional { "true" } else { "false" })
            .attr_non_blank("config-file", dependency.config_file.as_deref());
        root.push_child(depends);
    }

    if let Some(constraint) = manifest.complete_version_constraint() {
        let mut idea_version = Element::new("idea-version");
        idea_version
            .attr("since-build", constraint.since_build.to_string())
            .attr("until-build", constraint.until_build.to_string());
        root.push_child(idea_version);
    }

    let mut actions_element = Element::new("actions");
    for (index, action) in actions.iter().enumerate() {
        actions_element.push_child(action_element(index, action)?);
    }
    root.push_child(actions_element);

    Ok(root)
}

fn vendor_element(manifest: &PluginManifest) -> Element {
    let vendor = &manifest.vendor;
    // The vendor name is required by the schema, so the element is always present
    let mut element = Element::text_non_blank("vendor", Some(vendor.name.as_str()))
        .unwrap_or_else(|| Element::new("vendor"));
    element
        .attr_non_blank("url", vendor.url.as_deref())
        .attr_non_blank("email", vendor.email.as_deref())
        .attr_non_blank("logo", vendor.logo_path.as_deref());
    element
}

fn action_element(index: usize, action: &ActionBinding) -> Result<Element, EmitError> {
    let malformed = |reason: &'static str| EmitError::MalformedAction {
        index,
        id: action.id.clone(),
        reason,
    };
    if is_blank(Some(action.id.as_str())) {
        return Err(malformed("id must not be blank"));
    }
    if is_blank(Some(action.class_name.as_str())) {
        return Err(malformed("class must not be blank"));
    }

    tracing::info!(id = %action.id, "Detected action {}", action.class_name);

    let mut element = Element::new("action");
    element
        .attr("id", &action.id)
        .attr_non_blank("description", action.description.as_deref())
        .attr_non_blank("text", Some(action.text.as_str()))
        .attr("class", &action.class_name);

    for shortcut in &action.shortcuts {
        element.push_child(shortcut_element(shortcut));
    }
    Ok(element)
}

fn shortcut_element(shortcut: &KeyboardShortcut) -> Element {
    let mut element = Element::new("keyboard-shortcut");
    element
        .attr_non_blank("first-keystroke", Some(shortcut.first_keystroke.as_str()))
        .attr_non_blank("second-keystroke", shortcut.second_keystroke.as_deref())
        .attr_non_blank("keymap", Some(shortcut.keymap.as_str()));
    element
}
