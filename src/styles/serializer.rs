//! Ordered multi-section read/write of the style document.
//!
//! Reading runs in dependency order (components before the records that
//! reference them, named styles last), so no forward references occur.
//! Writing reproduces the fixed section order the file schema mandates,
//! which is distinct from the dependency order. Section failures are
//! reported through the aggregate boolean; already-read sections are
//! never rolled back.

use super::cell_style::CellStyle;
use super::color::Color;
use super::fill::Fill;
use super::font::Font;
use super::named_style::NamedStyle;
use super::number_format::NumberFormat;
use super::{Border, Stylesheet};
use crate::xml::{XmlDocument, XmlNode};

const SPREADSHEET_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";

impl Stylesheet {
    /// Read a whole style document into this stylesheet.
    ///
    /// Returns the logical AND of the section results. `false` means
    /// some sections are default-valued; sections read before a failure
    /// remain valid (best-effort, no rollback).
    pub fn read_stylesheet(&mut self, document: &XmlDocument) -> bool {
        let root = document.root();
        if root.name() != "styleSheet" {
            return false;
        }

        // Component arenas first, then the records that reference them.
        let mut ok = self.read_number_formats(root.child("numFmts"));
        ok &= self.read_borders(root.child("borders"));
        ok &= self.read_fills(root.child("fills"));
        ok &= self.read_fonts(root.child("fonts"));
        ok &= self.read_colors(root.child("colors"));
        ok &= self.read_cell_styles(root.child("cellXfs"));
        ok &= self.read_named_styles(root.child("cellStyles"), root.child("cellStyleXfs"));
        self.read_conditional_formats(root.child("dxfs"));
        self.ext_list = root.child("extLst").cloned();
        ok
    }

    /// Write the style document.
    ///
    /// The section order is an external schema contract: numFmts, fonts,
    /// fills, borders, colors, cellStyleXfs, cellXfs, cellStyles, dxfs,
    /// extLst.
    pub fn write_stylesheet(&self) -> XmlDocument {
        let mut root = XmlNode::new("styleSheet");
        root.set_attribute("xmlns", SPREADSHEET_NS);

        self.write_number_formats(&mut root);
        self.write_fonts(&mut root);
        self.write_fills(&mut root);
        self.write_borders(&mut root);
        self.write_colors(&mut root);
        self.write_named_style_records(&mut root);
        self.write_cell_styles(&mut root);
        self.write_named_styles(&mut root);
        self.write_conditional_formats(&mut root);
        if let Some(ext_list) = &self.ext_list {
            root.append_child(ext_list.clone());
        }

        XmlDocument::new(root)
    }

    //
    // Section readers
    //

    /// Custom formats register by code, keeping their file-assigned ids;
    /// built-in ids stay implicit and are never expected here.
    fn read_number_formats(&mut self, section: Option<&XmlNode>) -> bool {
        let Some(section) = section else {
            return true;
        };
        let mut ok = true;
        for node in section.children_named("numFmt") {
            let id = node.attribute("numFmtId").and_then(|v| v.parse().ok());
            let code = node.attribute("formatCode");
            match (id, code) {
                (Some(id), Some(code)) => {
                    self.registry.register_number_format(NumberFormat::new(id, code));
                },
                _ => ok = false,
            }
        }
        ok
    }

    fn read_borders(&mut self, section: Option<&XmlNode>) -> bool {
        let Some(section) = section else {
            return false;
        };
        self.registry.clear_borders();
        for node in section.children_named("border") {
            self.registry.push_border(Border::read(node));
        }
        true
    }

    fn read_fills(&mut self, section: Option<&XmlNode>) -> bool {
        let Some(section) = section else {
            return false;
        };
        self.registry.clear_fills();
        for node in section.children_named("fill") {
            self.registry.push_fill(Fill::read(node));
        }
        true
    }

    fn read_fonts(&mut self, section: Option<&XmlNode>) -> bool {
        let Some(section) = section else {
            return false;
        };
        self.registry.clear_fonts();
        for node in section.children_named("font") {
            self.registry.push_font(Font::read(node));
        }
        true
    }

    fn read_colors(&mut self, section: Option<&XmlNode>) -> bool {
        let Some(section) = section else {
            return true;
        };
        self.registry.clear_colors();
        let mut ok = true;
        if let Some(indexed) = section.child("indexedColors") {
            for node in indexed.children_named("rgbColor") {
                match Color::read(node) {
                    Some(color) => self.registry.push_color(color),
                    None => ok = false,
                }
            }
        }
        ok
    }

    fn read_cell_styles(&mut self, section: Option<&XmlNode>) -> bool {
        let Some(section) = section else {
            return false;
        };
        self.cell_styles.clear();
        for node in section.children_named("xf") {
            let mut style = CellStyle::read(node);
            self.clamp_component_ids(&mut style);
            self.cell_styles.push(style);
        }
        true
    }

    fn read_named_styles(
        &mut self,
        names: Option<&XmlNode>,
        style_parent: Option<&XmlNode>,
    ) -> bool {
        let Some(names) = names else {
            // No descriptors: the seeded table stands.
            return true;
        };
        // Descriptors without their records can still be read best-effort
        // against an empty parent; the aggregate result reports it.
        let empty = XmlNode::new("cellStyleXfs");
        let (parent, ok) = match style_parent {
            Some(parent) => (parent, true),
            None => (&empty, false),
        };

        self.named_styles.clear();
        for node in names.children_named("cellStyle") {
            let mut named = NamedStyle::read(node, parent);
            self.clamp_component_ids(&mut named.style);
            let key = node
                .attribute("builtinId")
                .and_then(|value| value.parse().ok())
                .unwrap_or_else(|| self.next_named_style_key());
            self.named_styles.insert(key, named);
        }
        ok
    }

    fn read_conditional_formats(&mut self, section: Option<&XmlNode>) {
        // Conditional formats pass through unmodified.
        self.conditional_formats.clear();
        if let Some(section) = section {
            self.conditional_formats.extend(section.children().iter().cloned());
        }
    }

    /// An id referencing a missing registry entry is clamped to the
    /// default index 0 instead of failing the read.
    fn clamp_component_ids(&self, style: &mut CellStyle) {
        if !self.registry.knows_number_format_id(style.number_format_id) {
            style.number_format_id = 0;
        }
        if style.font_id as usize >= self.registry.fonts().len() {
            style.font_id = 0;
        }
        if style.fill_id as usize >= self.registry.fills().len() {
            style.fill_id = 0;
        }
        if style.border_id as usize >= self.registry.borders().len() {
            style.border_id = 0;
        }
    }

    fn next_named_style_key(&self) -> u32 {
        self.named_styles.keys().next_back().map_or(0, |key| key + 1)
    }

    //
    // Section writers
    //

    fn write_number_formats(&self, root: &mut XmlNode) {
        let custom: Vec<&NumberFormat> = self
            .registry
            .number_formats()
            .iter()
            .filter(|format| !format.has_implicit_code())
            .collect();
        if custom.is_empty() {
            return;
        }
        let mut buffer = itoa::Buffer::new();
        let section = root.append_element("numFmts");
        section.set_attribute("count", buffer.format(custom.len()));
        for format in custom {
            let node = section.append_element("numFmt");
            node.set_attribute("numFmtId", buffer.format(format.id));
            node.set_attribute("formatCode", format.code.clone());
        }
    }

    fn write_fonts(&self, root: &mut XmlNode) {
        let fonts = self.registry.fonts();
        let section = root.append_element("fonts");
        section.set_attribute("count", itoa::Buffer::new().format(fonts.len()));
        for font in fonts {
            section.append_child(font.write());
        }
    }

    fn write_fills(&self, root: &mut XmlNode) {
        let fills = self.registry.fills();
        let section = root.append_element("fills");
        section.set_attribute("count", itoa::Buffer::new().format(fills.len()));
        for fill in fills {
            section.append_child(fill.write());
        }
    }

    fn write_borders(&self, root: &mut XmlNode) {
        let borders = self.registry.borders();
        let section = root.append_element("borders");
        section.set_attribute("count", itoa::Buffer::new().format(borders.len()));
        for border in borders {
            section.append_child(border.write());
        }
    }

    fn write_colors(&self, root: &mut XmlNode) {
        let colors = self.registry.colors();
        if colors.is_empty() {
            return;
        }
        let indexed = root.append_element("colors").append_element("indexedColors");
        for color in colors {
            indexed.append_child(color.write("rgbColor"));
        }
    }

    /// The `cellStyleXfs` records, one per named style in ascending key
    /// order so positional xfIds can be reconstructed on both sides.
    fn write_named_style_records(&self, root: &mut XmlNode) {
        let section = root.append_element("cellStyleXfs");
        section.set_attribute("count", itoa::Buffer::new().format(self.named_styles.len()));
        for named in self.named_styles.values() {
            named.style.write(section.append_element("xf"));
        }
    }

    fn write_cell_styles(&self, root: &mut XmlNode) {
        let section = root.append_element("cellXfs");
        section.set_attribute("count", itoa::Buffer::new().format(self.cell_styles.len()));
        for style in &self.cell_styles {
            style.write(section.append_element("xf"));
        }
    }

    /// The `cellStyle` descriptors in ascending key order; the built-in
    /// style at key 0 is always written first.
    fn write_named_styles(&self, root: &mut XmlNode) {
        let section = root.append_element("cellStyles");
        section.set_attribute("count", itoa::Buffer::new().format(self.named_styles.len()));
        for (position, (key, named)) in self.named_styles.iter().enumerate() {
            section.append_child(named.write_descriptor(*key, position));
        }
    }

    fn write_conditional_formats(&self, root: &mut XmlNode) {
        if self.conditional_formats.is_empty() {
            return;
        }
        let section = root.append_element("dxfs");
        section.set_attribute(
            "count",
            itoa::Buffer::new().format(self.conditional_formats.len()),
        );
        for format in &self.conditional_formats {
            section.append_child(format.clone());
        }
    }
}
