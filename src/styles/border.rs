//! Border records.

use super::color::Color;
use crate::xml::XmlNode;

/// Style of one border side.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderSide {
    /// Line style name (e.g. "thin", "medium", "double")
    pub style: String,
    /// Line color
    pub color: Option<Color>,
}

impl BorderSide {
    /// Create a side with the given line style.
    pub fn new(style: impl Into<String>, color: Option<Color>) -> Self {
        BorderSide {
            style: style.into(),
            color,
        }
    }
}

/// Borders on all sides of a cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Border {
    /// Left side
    pub left: Option<BorderSide>,
    /// Right side
    pub right: Option<BorderSide>,
    /// Top side
    pub top: Option<BorderSide>,
    /// Bottom side
    pub bottom: Option<BorderSide>,
    /// Diagonal line
    pub diagonal: Option<BorderSide>,
    /// Diagonal runs bottom-left to top-right
    pub diagonal_up: bool,
    /// Diagonal runs top-left to bottom-right
    pub diagonal_down: bool,
}

impl Border {
    /// Create a border with no sides.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any side is set.
    pub fn has_borders(&self) -> bool {
        self.left.is_some()
            || self.right.is_some()
            || self.top.is_some()
            || self.bottom.is_some()
            || self.diagonal.is_some()
    }

    pub(crate) fn read(node: &XmlNode) -> Border {
        Border {
            left: node.child("left").and_then(read_side),
            right: node.child("right").and_then(read_side),
            top: node.child("top").and_then(read_side),
            bottom: node.child("bottom").and_then(read_side),
            diagonal: node.child("diagonal").and_then(read_side),
            diagonal_up: node.bool_attribute("diagonalUp"),
            diagonal_down: node.bool_attribute("diagonalDown"),
        }
    }

    pub(crate) fn write(&self) -> XmlNode {
        let mut node = XmlNode::new("border");
        if self.diagonal_up {
            node.set_attribute("diagonalUp", "1");
        }
        if self.diagonal_down {
            node.set_attribute("diagonalDown", "1");
        }
        // The schema expects every side element, empty when unset.
        write_side(&mut node, "left", self.left.as_ref());
        write_side(&mut node, "right", self.right.as_ref());
        write_side(&mut node, "top", self.top.as_ref());
        write_side(&mut node, "bottom", self.bottom.as_ref());
        write_side(&mut node, "diagonal", self.diagonal.as_ref());
        node
    }
}

fn read_side(node: &XmlNode) -> Option<BorderSide> {
    let style = node.attribute("style")?;
    if style == "none" {
        return None;
    }
    Some(BorderSide {
        style: style.to_string(),
        color: node.child("color").and_then(Color::read),
    })
}

fn write_side(border: &mut XmlNode, name: &str, side: Option<&BorderSide>) {
    let element = border.append_element(name);
    if let Some(side) = side {
        element.set_attribute("style", side.style.clone());
        if let Some(color) = &side.color {
            element.append_child(color.write("color"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_border_round_trips() {
        let border = Border::new();
        let node = border.write();
        assert_eq!(node.children().len(), 5);
        assert_eq!(Border::read(&node), border);
        assert!(!border.has_borders());
    }

    #[test]
    fn sides_and_diagonal_round_trip() {
        let border = Border {
            left: Some(BorderSide::new("thin", Some(Color::rgb("FF000000")))),
            bottom: Some(BorderSide::new("double", None)),
            diagonal: Some(BorderSide::new("dashed", Some(Color::Indexed(10)))),
            diagonal_up: true,
            ..Border::new()
        };
        assert_eq!(Border::read(&border.write()), border);
        assert!(border.has_borders());
    }

    #[test]
    fn explicit_none_style_reads_as_unset() {
        let mut node = XmlNode::new("border");
        node.append_element("top").set_attribute("style", "none");
        assert_eq!(Border::read(&node).top, None);
    }
}
