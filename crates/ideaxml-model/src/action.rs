//! UI action records.

use serde::{Deserialize, Serialize};

/// Keymap used when a shortcut does not name one.
pub const DEFAULT_KEYMAP: &str = "$default";

fn default_keymap() -> String {
    DEFAULT_KEYMAP.to_string()
}

/// A keyboard shortcut bound to an action.
///
/// Keystrokes use the IDE's own notation, e.g. `"ctrl alt X"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardShortcut {
    pub first_keystroke: String,

    /// Second keystroke of a chord
    #[serde(default)]
    pub second_keystroke: Option<String>,

    #[serde(default = "default_keymap")]
    pub keymap: String,
}

impl KeyboardShortcut {
    pub fn new(first_keystroke: impl Into<String>) -> Self {
        Self {
            first_keystroke: first_keystroke.into(),
            second_keystroke: None,
            keymap: default_keymap(),
        }
    }
}

/// An action registered with the IDE.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionBinding {
    /// Unique action id (required, must not be blank)
    pub id: String,

    /// Menu/toolbar text
    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Fully-qualified name of the class implementing the action
    #[serde(rename = "class")]
    pub class_name: String,

    /// Shortcuts in declaration order
    #[serde(default, alias = "keyboard_shortcuts")]
    pub shortcuts: Vec<KeyboardShortcut>,
}

impl ActionBinding {
    pub fn new(id: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            class_name: class_name.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcut_keymap_defaults() {
        let shortcut: KeyboardShortcut = toml::from_str(r#"first_keystroke = "ctrl alt X""#).unwrap();
        assert_eq!(shortcut.keymap, DEFAULT_KEYMAP);
        assert!(shortcut.second_keystroke.is_none());
        assert_eq!(KeyboardShortcut::new("ctrl A").keymap, "$default");
    }

    #[test]
    fn test_parse_action_with_shortcuts() {
        let toml = r#"
id = "MyAction"
text = "My Action"
class = "com.example.MyAction"

[[shortcuts]]
first_keystroke = "ctrl alt X"

[[shortcuts]]
first_keystroke = "ctrl K"
second_keystroke = "ctrl X"
keymap = "Emacs"
"#;
        let action: ActionBinding = toml::from_str(toml).unwrap();
        assert_eq!(action.id, "MyAction");
        assert_eq!(action.class_name, "com.example.MyAction");
        assert_eq!(action.shortcuts.len(), 2);
        assert_eq!(action.shortcuts[0].first_keystroke, "ctrl alt X");
        assert_eq!(action.shortcuts[1].second_keystroke.as_deref(), Some("ctrl X"));
        assert_eq!(action.shortcuts[1].keymap, "Emacs");
    }

    #[test]
    fn test_action_requires_class() {
        let result: Result<ActionBinding, _> = toml::from_str(r#"id = "MyAction""#);
        assert!(result.is_err());
    }
}
