//! Plain value records describing an IDE plugin.
//!
//! These records are what a metadata discovery step hands to the emitter.
//! They carry no behaviour beyond small accessors, so they can be built by
//! hand in tests, deserialized from descriptor files, or produced by any
//! other front end.

pub mod action;
pub mod manifest;
pub mod version;

pub use action::{ActionBinding, DEFAULT_KEYMAP, KeyboardShortcut};
pub use manifest::{Dependency, PluginManifest, Vendor};
pub use version::{UNSET_BUILD, VersionConstraint};

/// Returns true when `value` is absent, empty, or only whitespace.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}
