//! Named styles.
//!
//! A named style is described by two separate file sections: the
//! `cellStyle` descriptor (name, builtinId, hidden, xfId) and the
//! `cellStyleXfs` record the xfId points at. The table keyed by the
//! small built-in id merges the two.

use super::cell_style::CellStyle;
use crate::xml::XmlNode;

/// A reusable, nameable style template.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedStyle {
    /// Display name ("Normal", "Heading 1", ...)
    pub name: String,
    /// Whether this is one of the application's built-in styles
    pub builtin: bool,
    /// Hidden from the style picker
    pub hidden: bool,
    /// The resolved style record
    pub style: CellStyle,
}

impl NamedStyle {
    /// Create a named style around a resolved record.
    pub fn new(name: impl Into<String>, style: CellStyle) -> Self {
        NamedStyle {
            name: name.into(),
            builtin: false,
            hidden: false,
            style,
        }
    }

    /// The "Normal" style every stylesheet starts with.
    pub fn normal() -> Self {
        NamedStyle {
            name: "Normal".to_string(),
            builtin: true,
            hidden: false,
            style: CellStyle::new(),
        }
    }

    /// Read a descriptor and dereference its `xfId` into the children of
    /// `style_parent` (the `cellStyleXfs` element itself). An xfId past
    /// the end of the section clamps to entry 0.
    pub fn read(name_node: &XmlNode, style_parent: &XmlNode) -> NamedStyle {
        let xf_id: usize = name_node
            .attribute("xfId")
            .and_then(|value| value.parse().ok())
            .unwrap_or(0);
        let style = style_parent
            .children_named("xf")
            .nth(xf_id)
            .or_else(|| style_parent.children_named("xf").next())
            .map(CellStyle::read)
            .unwrap_or_default();

        NamedStyle {
            name: name_node.attribute_or("name", "").to_string(),
            builtin: name_node.has_attribute("builtinId"),
            hidden: name_node.bool_attribute("hidden"),
            style,
        }
    }

    /// Write the descriptor half. `xf_id` is the record's position in
    /// the output `cellStyleXfs` section; `key` is the table key emitted
    /// as `builtinId` for built-in styles.
    pub(crate) fn write_descriptor(&self, key: u32, xf_id: usize) -> XmlNode {
        let mut node = XmlNode::new("cellStyle");
        let mut buffer = itoa::Buffer::new();
        node.set_attribute("name", self.name.clone());
        node.set_attribute("xfId", buffer.format(xf_id));
        if self.builtin {
            node.set_attribute("builtinId", buffer.format(key));
        }
        if self.hidden {
            node.set_attribute("hidden", "1");
        }
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style_parent(font_ids: &[u32]) -> XmlNode {
        let mut parent = XmlNode::new("cellStyleXfs");
        for font_id in font_ids {
            let xf = parent.append_element("xf");
            xf.set_attribute("fontId", itoa::Buffer::new().format(*font_id));
            xf.set_attribute("applyFont", "1");
        }
        parent
    }

    #[test]
    fn dereferences_xf_id_positionally() {
        let parent = style_parent(&[0, 7]);
        let mut descriptor = XmlNode::new("cellStyle");
        descriptor.set_attribute("name", "Accent");
        descriptor.set_attribute("xfId", "1");

        let named = NamedStyle::read(&descriptor, &parent);
        assert_eq!(named.name, "Accent");
        assert!(!named.builtin);
        assert_eq!(named.style.font_id, 7);
    }

    #[test]
    fn out_of_range_xf_id_clamps_to_first_record() {
        let parent = style_parent(&[4]);
        let mut descriptor = XmlNode::new("cellStyle");
        descriptor.set_attribute("name", "Ghost");
        descriptor.set_attribute("xfId", "9");

        let named = NamedStyle::read(&descriptor, &parent);
        assert_eq!(named.style.font_id, 4);
    }

    #[test]
    fn builtin_flag_follows_builtin_id_presence() {
        let parent = style_parent(&[0]);
        let mut descriptor = XmlNode::new("cellStyle");
        descriptor.set_attribute("name", "Normal");
        descriptor.set_attribute("xfId", "0");
        descriptor.set_attribute("builtinId", "0");

        assert!(NamedStyle::read(&descriptor, &parent).builtin);
    }

    #[test]
    fn descriptor_reconstructs_positional_fields() {
        let named = NamedStyle {
            hidden: true,
            ..NamedStyle::normal()
        };
        let node = named.write_descriptor(0, 0);
        assert_eq!(node.attribute("name"), Some("Normal"));
        assert_eq!(node.attribute("xfId"), Some("0"));
        assert_eq!(node.attribute("builtinId"), Some("0"));
        assert_eq!(node.attribute("hidden"), Some("1"));
    }
}
