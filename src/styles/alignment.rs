//! Cell content alignment.

use crate::xml::XmlNode;

/// Alignment of cell content within the cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alignment {
    /// Horizontal alignment ("left", "center", "right", "fill", ...)
    pub horizontal: Option<String>,
    /// Vertical alignment ("top", "center", "bottom", ...)
    pub vertical: Option<String>,
    /// Text rotation in degrees (255 = vertical)
    pub text_rotation: Option<u32>,
    /// Wrap long text onto multiple lines
    pub wrap_text: bool,
    /// Indent level
    pub indent: Option<u32>,
    /// Shrink text to fit the cell
    pub shrink_to_fit: bool,
}

impl Alignment {
    /// Create a default alignment.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any setting differs from the default.
    pub fn has_settings(&self) -> bool {
        *self != Alignment::new()
    }

    pub(crate) fn read(node: &XmlNode) -> Alignment {
        Alignment {
            horizontal: node.attribute("horizontal").map(str::to_string),
            vertical: node.attribute("vertical").map(str::to_string),
            text_rotation: node.attribute("textRotation").and_then(|v| v.parse().ok()),
            wrap_text: node.bool_attribute("wrapText"),
            indent: node.attribute("indent").and_then(|v| v.parse().ok()),
            shrink_to_fit: node.bool_attribute("shrinkToFit"),
        }
    }

    pub(crate) fn write(&self) -> XmlNode {
        let mut node = XmlNode::new("alignment");
        let mut buffer = itoa::Buffer::new();
        if let Some(horizontal) = &self.horizontal {
            node.set_attribute("horizontal", horizontal.clone());
        }
        if let Some(vertical) = &self.vertical {
            node.set_attribute("vertical", vertical.clone());
        }
        if let Some(rotation) = self.text_rotation {
            node.set_attribute("textRotation", buffer.format(rotation));
        }
        if self.wrap_text {
            node.set_attribute("wrapText", "1");
        }
        if let Some(indent) = self.indent {
            node.set_attribute("indent", buffer.format(indent));
        }
        if self.shrink_to_fit {
            node.set_attribute("shrinkToFit", "1");
        }
        node
    }
}
