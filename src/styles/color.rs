//! Color variants for style components.

use crate::xml::XmlNode;

/// A color reference, tagged by how the color is resolved.
///
/// The payloads are mutually exclusive by construction: a color is
/// exactly one of an ARGB literal, an index into the legacy palette, a
/// theme slot, or automatic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Color {
    /// ARGB hex literal (e.g. "FFFF0000")
    Rgb(String),
    /// Index into the legacy indexed palette
    Indexed(u32),
    /// Theme color slot
    Theme(u32),
    /// Automatic color
    Auto,
}

impl Color {
    /// Convenience constructor for an ARGB literal.
    pub fn rgb(value: impl Into<String>) -> Self {
        Color::Rgb(value.into())
    }

    pub(crate) fn read(node: &XmlNode) -> Option<Color> {
        if let Some(rgb) = node.attribute("rgb") {
            return Some(Color::Rgb(rgb.to_string()));
        }
        if let Some(indexed) = node.attribute("indexed") {
            return indexed.parse().ok().map(Color::Indexed);
        }
        if let Some(theme) = node.attribute("theme") {
            return theme.parse().ok().map(Color::Theme);
        }
        if node.bool_attribute("auto") {
            return Some(Color::Auto);
        }
        None
    }

    pub(crate) fn write(&self, element_name: &str) -> XmlNode {
        let mut node = XmlNode::new(element_name);
        let mut buffer = itoa::Buffer::new();
        match self {
            Color::Rgb(rgb) => node.set_attribute("rgb", rgb.clone()),
            Color::Indexed(index) => node.set_attribute("indexed", buffer.format(*index)),
            Color::Theme(slot) => node.set_attribute("theme", buffer.format(*slot)),
            Color::Auto => node.set_attribute("auto", "1"),
        }
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_round_trip() {
        for color in [
            Color::rgb("FF112233"),
            Color::Indexed(64),
            Color::Theme(1),
            Color::Auto,
        ] {
            let node = color.write("color");
            assert_eq!(Color::read(&node), Some(color));
        }
    }

    #[test]
    fn rgb_wins_over_other_attributes() {
        let mut node = XmlNode::new("color");
        node.set_attribute("rgb", "FF000000");
        node.set_attribute("indexed", "3");
        assert_eq!(Color::read(&node), Some(Color::rgb("FF000000")));
    }

    #[test]
    fn empty_color_element_is_none() {
        assert_eq!(Color::read(&XmlNode::new("color")), None);
    }
}
