//! Indented XML serialization.

use std::fmt::Write;

use super::{Element, Node};

const INDENT: &str = "  ";

/// Serializes `root` without an XML declaration.
///
/// Elements holding only text are written on one line, elements without
/// children are self-closing, and nested elements are indented by two
/// spaces per level. The output ends with a newline.
pub fn to_xml_string(root: &Element) -> String {
    let mut out = String::new();
    write_element(&mut out, root, 0);
    out
}

fn write_element(out: &mut String, element: &Element, depth: usize) {
    let indent = INDENT.repeat(depth);
    out.push_str(&indent);
    out.push('<');
    out.push_str(element.name());
    for (name, value) in element.attributes() {
        // Writing into a String cannot fail
        let _ = write!(out, " {}=\"{}\"", name, escape_attribute(value));
    }

    let children = element.children();
    if children.is_empty() {
        out.push_str("/>\n");
        return;
    }

    if children.iter().all(|node| matches!(node, Node::Text(_))) {
        out.push('>');
        out.push_str(&escape_text(&element.text()));
        let _ = writeln!(out, "</{}>", element.name());
        return;
    }

    out.push_str(">\n");
    for child in children {
        match child {
            Node::Element(child) => write_element(out, child, depth + 1),
            Node::Text(text) => {
                out.push_str(&indent);
                out.push_str(INDENT);
                out.push_str(&escape_text(text));
                out.push('\n');
            }
        }
    }
    out.push_str(&indent);
    let _ = writeln!(out, "</{}>", element.name());
}

/// Escapes character data.
pub fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escapes a double-quoted attribute value.
///
/// Tabs and line breaks are written as character references so attribute
/// value normalization does not turn them into spaces.
pub fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\t' => escaped.push_str("&#9;"),
            '\n' => escaped.push_str("&#10;"),
            '\r' => escaped.push_str("&#13;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_element_is_self_closing() {
        assert_eq!(to_xml_string(&Element::new("actions")), "<actions/>\n");
    }

    #[test]
    fn test_text_element_is_inline() {
        let mut element = Element::with_text("depends", "com.intellij.java");
        element.attr("optional", "true");
        assert_eq!(
            to_xml_string(&element),
            "<depends optional=\"true\">com.intellij.java</depends>\n"
        );
    }

    #[test]
    fn test_nested_elements_are_indented() {
        let mut shortcut = Element::new("keyboard-shortcut");
        shortcut.attr("first-keystroke", "ctrl alt X");
        let mut action = Element::new("action");
        action.attr("id", "MyAction").push_child(shortcut);
        let mut actions = Element::new("actions");
        actions.push_child(action);
        let mut root = Element::new("idea-plugin");
        root.push_child(Element::with_text("id", "sample"))
            .push_child(actions);

        let expected = "\
<idea-plugin>
  <id>sample</id>
  <actions>
    <action id=\"MyAction\">
      <keyboard-shortcut first-keystroke=\"ctrl alt X\"/>
    </action>
  </actions>
</idea-plugin>
";
        assert_eq!(to_xml_string(&root), expected);
    }

    #[test]
    fn test_mixed_content_puts_text_on_its_own_line() {
        let mut element = Element::new("notes");
        element.push_text("intro").push_child(Element::new("br"));
        assert_eq!(to_xml_string(&element), "<notes>\n  intro\n  <br/>\n</notes>\n");
    }

    #[test]
    fn test_escaping() {
        assert_eq!(escape_text("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
        assert_eq!(escape_text("say \"hi\""), "say \"hi\"");
        assert_eq!(
            escape_attribute("<a href=\"x\">\n"),
            "&lt;a href=&quot;x&quot;&gt;&#10;"
        );
    }

    #[test]
    fn test_escaped_values_in_document() {
        let mut element = Element::with_text("description", "Fast & <safe>");
        element.attr("title", "\"quoted\"");
        assert_eq!(
            to_xml_string(&element),
            "<description title=\"&quot;quoted&quot;\">Fast &amp; &lt;safe&gt;</description>\n"
        );
    }
}
