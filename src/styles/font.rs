//! Font records.

use super::color::Color;
use crate::xml::XmlNode;

/// Font information for cell text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Font {
    /// Typeface name (e.g. "Calibri")
    pub name: Option<String>,
    /// Size in points
    pub size: Option<f64>,
    /// Bold flag
    pub bold: bool,
    /// Italic flag
    pub italic: bool,
    /// Underline style ("single", "double", ...)
    pub underline: Option<String>,
    /// Strike-through flag
    pub strike: bool,
    /// Text color
    pub color: Option<Color>,
}

impl Font {
    /// Create a default font.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn read(node: &XmlNode) -> Font {
        let mut font = Font::new();
        for child in node.children() {
            match child.name() {
                "name" => font.name = child.attribute("val").map(str::to_string),
                "sz" => font.size = child.attribute("val").and_then(|v| fast_float2::parse(v).ok()),
                "b" => font.bold = true,
                "i" => font.italic = true,
                "strike" => font.strike = true,
                "u" => font.underline = Some(child.attribute_or("val", "single").to_string()),
                "color" => font.color = Color::read(child),
                _ => {},
            }
        }
        font
    }

    pub(crate) fn write(&self) -> XmlNode {
        let mut node = XmlNode::new("font");
        if self.bold {
            node.append_element("b");
        }
        if self.italic {
            node.append_element("i");
        }
        if self.strike {
            node.append_element("strike");
        }
        if let Some(underline) = &self.underline {
            node.append_element("u").set_attribute("val", underline.clone());
        }
        if let Some(size) = self.size {
            node.append_element("sz")
                .set_attribute("val", ryu::Buffer::new().format(size));
        }
        if let Some(color) = &self.color {
            node.append_child(color.write("color"));
        }
        if let Some(name) = &self.name {
            node.append_element("name").set_attribute("val", name.clone());
        }
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_font_round_trips_as_empty_element() {
        let node = Font::new().write();
        assert!(node.children().is_empty());
        assert_eq!(Font::read(&node), Font::new());
    }

    #[test]
    fn populated_font_round_trips() {
        let font = Font {
            name: Some("Cambria".to_string()),
            size: Some(11.5),
            bold: true,
            italic: false,
            underline: Some("double".to_string()),
            strike: true,
            color: Some(Color::rgb("FF336699")),
        };
        assert_eq!(Font::read(&font.write()), font);
    }

    #[test]
    fn bare_underline_defaults_to_single() {
        let mut node = XmlNode::new("font");
        node.append_element("u");
        assert_eq!(Font::read(&node).underline.as_deref(), Some("single"));
    }
}
