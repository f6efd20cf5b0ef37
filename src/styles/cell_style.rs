//! Cell style (xf) records.
//!
//! An xf record references style components positionally (fontId,
//! fillId, borderId, numFmtId) and carries one independent applied flag
//! per reference. Presence of an id attribute and presence of its
//! `applyXxx` sibling are orthogonal: an id can be stored without being
//! rendered, and id 0 with an explicit apply flag is distinct from an
//! absent id.

use super::alignment::Alignment;
use super::protection::Protection;
use crate::xml::XmlNode;

/// A cell style: component ids, per-attribute applied flags, and
/// embedded alignment/protection.
///
/// A missing id attribute reads as index 0 with its applied flag false;
/// the two fields are never collapsed into a single optional value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellStyle {
    /// Number format id (the `numFmtId` space)
    pub number_format_id: u32,
    /// Index into the font arena
    pub font_id: u32,
    /// Index into the fill arena
    pub fill_id: u32,
    /// Index into the border arena
    pub border_id: u32,
    /// Render the referenced number format
    pub number_format_applied: bool,
    /// Render the referenced font
    pub font_applied: bool,
    /// Render the referenced fill
    pub fill_applied: bool,
    /// Render the referenced border
    pub border_applied: bool,
    /// Embedded alignment record
    pub alignment: Alignment,
    /// Render the embedded alignment
    pub alignment_applied: bool,
    /// Embedded protection record
    pub protection: Protection,
    /// Render the embedded protection
    pub protection_applied: bool,
}

impl CellStyle {
    /// Create the default style: all ids 0, nothing applied.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read an xf element. Ids and apply flags are read independently;
    /// nested alignment/protection children are merged in.
    pub fn read(node: &XmlNode) -> CellStyle {
        let mut style = CellStyle {
            number_format_id: read_id(node, "numFmtId"),
            font_id: read_id(node, "fontId"),
            fill_id: read_id(node, "fillId"),
            border_id: read_id(node, "borderId"),
            number_format_applied: node.bool_attribute("applyNumberFormat"),
            font_applied: node.bool_attribute("applyFont"),
            fill_applied: node.bool_attribute("applyFill"),
            border_applied: node.bool_attribute("applyBorder"),
            alignment_applied: node.bool_attribute("applyAlignment"),
            protection_applied: node.bool_attribute("applyProtection"),
            ..CellStyle::new()
        };
        if let Some(child) = node.child("alignment") {
            style.alignment = Alignment::read(child);
        }
        if let Some(child) = node.child("protection") {
            style.protection = Protection::read(child);
        }
        style
    }

    /// Write this style into an xf element.
    ///
    /// An id attribute is emitted iff its value differs from 0 or its
    /// applied flag is set, so id 0 + applied survives a round trip
    /// distinctly from an absent id.
    pub fn write(&self, node: &mut XmlNode) {
        write_id(node, "numFmtId", self.number_format_id, self.number_format_applied);
        write_id(node, "fontId", self.font_id, self.font_applied);
        write_id(node, "fillId", self.fill_id, self.fill_applied);
        write_id(node, "borderId", self.border_id, self.border_applied);
        if self.number_format_applied {
            node.set_attribute("applyNumberFormat", "1");
        }
        if self.font_applied {
            node.set_attribute("applyFont", "1");
        }
        if self.fill_applied {
            node.set_attribute("applyFill", "1");
        }
        if self.border_applied {
            node.set_attribute("applyBorder", "1");
        }
        if self.alignment_applied {
            node.set_attribute("applyAlignment", "1");
        }
        if self.protection_applied {
            node.set_attribute("applyProtection", "1");
        }
        if self.alignment_applied || self.alignment.has_settings() {
            node.append_child(self.alignment.write());
        }
        if self.protection_applied || self.protection != Protection::new() {
            node.append_child(self.protection.write());
        }
    }
}

fn read_id(node: &XmlNode, attribute: &str) -> u32 {
    node.attribute(attribute)
        .and_then(|value| value.parse().ok())
        .unwrap_or(0)
}

fn write_id(node: &mut XmlNode, attribute: &str, id: u32, applied: bool) {
    if id != 0 || applied {
        node.set_attribute(attribute, itoa::Buffer::new().format(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(style: &CellStyle) -> CellStyle {
        let mut node = XmlNode::new("xf");
        style.write(&mut node);
        CellStyle::read(&node)
    }

    #[test]
    fn default_style_writes_bare_element() {
        let mut node = XmlNode::new("xf");
        CellStyle::new().write(&mut node);
        assert!(node.attributes().is_empty());
        assert!(node.children().is_empty());
    }

    #[test]
    fn applied_flags_are_isolated() {
        let style = CellStyle {
            font_id: 3,
            font_applied: true,
            ..CellStyle::new()
        };
        assert!(style.font_applied);
        assert!(!style.fill_applied);
        assert!(!style.border_applied);
        assert!(!style.number_format_applied);
        assert!(!style.alignment_applied);
        assert!(!style.protection_applied);
        assert_eq!(round_trip(&style), style);
    }

    #[test]
    fn id_zero_with_apply_flag_survives_round_trip() {
        let style = CellStyle {
            number_format_applied: true,
            ..CellStyle::new()
        };
        let mut node = XmlNode::new("xf");
        style.write(&mut node);
        assert_eq!(node.attribute("numFmtId"), Some("0"));
        assert_eq!(node.attribute("applyNumberFormat"), Some("1"));
        assert_eq!(CellStyle::read(&node), style);
    }

    #[test]
    fn absent_id_reads_as_zero_unapplied() {
        let style = CellStyle::read(&XmlNode::new("xf"));
        assert_eq!(style.number_format_id, 0);
        assert!(!style.number_format_applied);
    }

    #[test]
    fn id_without_apply_flag_is_kept_but_unapplied() {
        let mut node = XmlNode::new("xf");
        node.set_attribute("fontId", "5");
        node.set_attribute("applyFont", "0");
        let style = CellStyle::read(&node);
        assert_eq!(style.font_id, 5);
        assert!(!style.font_applied);
    }

    #[test]
    fn alignment_and_protection_merge_in() {
        let style = CellStyle {
            alignment: Alignment {
                wrap_text: true,
                ..Alignment::new()
            },
            alignment_applied: true,
            protection: Protection::unlocked(),
            protection_applied: true,
            ..CellStyle::new()
        };
        assert_eq!(round_trip(&style), style);
    }
}
