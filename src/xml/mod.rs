//! Minimal ordered XML element tree.
//!
//! The stylesheet serializer works over an already-materialized element
//! tree rather than a token stream: section order is a schema contract,
//! several apply flags distinguish an absent attribute from a
//! present-but-`"0"` one, and unknown subtrees (`extLst`) must pass
//! through a read/write cycle untouched. Both child order and attribute
//! order are preserved exactly.

mod reader;
mod writer;

use crate::error::Result;

/// A single XML element: name, ordered attributes, ordered children and
/// optional text content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XmlNode {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
    text: Option<String>,
}

impl XmlNode {
    /// Create an element with no attributes or children.
    pub fn new(name: impl Into<String>) -> Self {
        XmlNode {
            name: name.into(),
            ..XmlNode::default()
        }
    }

    /// Element name (namespace prefix stripped on parse).
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute value, or `None` when the attribute is absent.
    ///
    /// Absent is distinguishable from present-but-falsy; apply-flag
    /// semantics depend on that distinction.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Attribute value with a default for the absent case.
    pub fn attribute_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.attribute(name).unwrap_or(default)
    }

    /// Whether the attribute is present at all.
    #[inline]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Boolean attribute: absent is false, `"1"` and `"true"` are true.
    pub fn bool_attribute(&self, name: &str) -> bool {
        matches!(self.attribute(name), Some("1") | Some("true"))
    }

    /// Set or replace an attribute, keeping first-set order.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.attributes.iter_mut().find(|(key, _)| *key == name) {
            slot.1 = value;
        } else {
            self.attributes.push((name, value));
        }
    }

    /// All attributes in document order.
    #[inline]
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// First child with the given name.
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|child| child.name == name)
    }

    /// All children in document order.
    #[inline]
    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// Children with the given name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Append a child in caller-specified order.
    pub fn append_child(&mut self, child: XmlNode) {
        self.children.push(child);
    }

    /// Append an empty child element and return it for population.
    pub fn append_element(&mut self, name: impl Into<String>) -> &mut XmlNode {
        self.children.push(XmlNode::new(name));
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Text content, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Set the text content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub(crate) fn push_text(&mut self, text: &str) {
        match &mut self.text {
            Some(existing) => existing.push_str(text),
            None => self.text = Some(text.to_string()),
        }
    }
}

/// A parsed XML document: a root element plus the standard declaration
/// on output.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlDocument {
    root: XmlNode,
}

impl XmlDocument {
    /// Wrap a root element as a document.
    pub fn new(root: XmlNode) -> Self {
        XmlDocument { root }
    }

    /// Parse a document from XML text.
    pub fn parse(content: &str) -> Result<Self> {
        reader::parse_document(content)
    }

    /// Root element.
    #[inline]
    pub fn root(&self) -> &XmlNode {
        &self.root
    }

    /// Mutable root element.
    #[inline]
    pub fn root_mut(&mut self) -> &mut XmlNode {
        &mut self.root
    }

    /// Print the document with an XML declaration.
    pub fn to_xml(&self) -> Result<String> {
        writer::write_document(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_attribute_differs_from_falsy() {
        let mut node = XmlNode::new("xf");
        node.set_attribute("applyFont", "0");

        assert!(node.has_attribute("applyFont"));
        assert!(!node.bool_attribute("applyFont"));
        assert!(!node.has_attribute("applyFill"));
        assert_eq!(node.attribute_or("fontId", "0"), "0");
    }

    #[test]
    fn children_keep_append_order() {
        let mut parent = XmlNode::new("fonts");
        parent.append_element("font").set_attribute("id", "a");
        parent.append_element("font").set_attribute("id", "b");
        parent.append_element("other");

        let ids: Vec<_> = parent
            .children_named("font")
            .filter_map(|font| font.attribute("id"))
            .collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(parent.children().len(), 3);
    }

    #[test]
    fn parse_then_print_round_trips_unknown_subtree() {
        let source = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><extLst><ext uri="{x}"><custom val="1">text</custom></ext></extLst>"#;
        let document = XmlDocument::parse(source).unwrap();

        let ext = document.root().child("ext").unwrap();
        assert_eq!(ext.attribute("uri"), Some("{x}"));
        assert_eq!(ext.child("custom").unwrap().text(), Some("text"));

        let printed = document.to_xml().unwrap();
        let reparsed = XmlDocument::parse(&printed).unwrap();
        assert_eq!(reparsed, document);
    }

    #[test]
    fn parse_strips_namespace_prefixes() {
        let source = r#"<x:styleSheet xmlns:x="urn:demo"><x:fonts count="0"/></x:styleSheet>"#;
        let document = XmlDocument::parse(source).unwrap();
        assert_eq!(document.root().name(), "styleSheet");
        assert!(document.root().child("fonts").is_some());
    }

    #[test]
    fn print_escapes_attribute_values_and_text() {
        let mut root = XmlNode::new("numFmt");
        root.set_attribute("formatCode", r#"0.0 "a<b>""#);
        root.append_element("note").set_text("x < y & z");

        let printed = XmlDocument::new(root).to_xml().unwrap();
        assert!(printed.contains("&lt;b&gt;"));
        assert!(printed.contains("x &lt; y &amp; z"));

        let reparsed = XmlDocument::parse(&printed).unwrap();
        assert_eq!(
            reparsed.root().attribute("formatCode"),
            Some(r#"0.0 "a<b>""#)
        );
    }
}
