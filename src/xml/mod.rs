//! A small XML element tree.
//!
//! Only what the plugin configuration file needs: elements with ordered
//! attributes, child elements and text. Attribute order is insertion order
//! so output is stable across runs.

mod writer;

pub use writer::{escape_attribute, escape_text, to_xml_string};

use ideaxml_model::is_blank;

/// A node inside an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An XML element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Value of the attribute `name`, if set.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Child elements, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// First child element called `name`.
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.child_elements().find(|element| element.name == name)
    }

    /// Concatenated text of the direct text children.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text(text) => Some(text.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    /// Sets an attribute unconditionally.
    pub fn attr(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Sets an attribute only when `value` is present and not blank.
    pub fn attr_non_blank(&mut self, name: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value
            && !is_blank(Some(value))
        {
            self.attr(name, value);
        }
        self
    }

    /// Appends a text node.
    pub fn push_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Appends a child element.
    pub fn push_child(&mut self, child: Element) -> &mut Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Appends `<name>text</name>` only when `text` is present and not blank.
    pub fn text_child_non_blank(&mut self, name: &str, text: Option<&str>) -> &mut Self {
        if let Some(child) = Element::text_non_blank(name, text) {
            self.push_child(child);
        }
        self
    }

    /// Builds `<name>text</name>`.
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        let mut element = Element::new(name);
        element.push_text(text);
        element
    }

    /// Builds `<name>text</name>`, or nothing when `text` is blank.
    pub fn text_non_blank(name: &str, text: Option<&str>) -> Option<Self> {
        match text {
            Some(text) if !is_blank(Some(text)) => Some(Element::with_text(name, text)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_non_blank_skips_blank_values() {
        let mut element = Element::new("vendor");
        element
            .attr_non_blank("url", Some("https://example.com"))
            .attr_non_blank("email", Some("   "))
            .attr_non_blank("logo", None)
            .attr_non_blank("extra", Some(""));

        assert_eq!(
            element.attributes(),
            &[("url".to_string(), "https://example.com".to_string())]
        );
    }

    #[test]
    fn test_text_child_non_blank() {
        let mut root = Element::new("idea-plugin");
        root.text_child_non_blank("description", Some(" \t"))
            .text_child_non_blank("version", None)
            .text_child_non_blank("name", Some("Sample"));

        assert_eq!(root.child_elements().count(), 1);
        assert_eq!(root.find("name").unwrap().text(), "Sample");
        assert!(Element::text_non_blank("id", Some("")).is_none());
    }

    #[test]
    fn test_attributes_keep_insertion_order() {
        let mut element = Element::new("action");
        element.attr("id", "A").attr("text", "B").attr("class", "C");
        let names: Vec<&str> = element.attributes().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, vec!["id", "text", "class"]);
    }
}
