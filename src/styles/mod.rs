//! The style document: component arenas, xf records, named styles and
//! the ordered stylesheet serializer.
//!
//! # Architecture
//!
//! - `registry`: deduplicated, order-stable component arenas
//! - `number_format` / `font` / `fill` / `border` / `color`: component
//!   records with their element readers and writers
//! - `alignment` / `protection`: records embedded in xf elements
//! - `cell_style`: the xf record with per-attribute applied flags
//! - `named_style`: the descriptor + record pair behind a named style
//! - `serializer`: the ordered multi-section read/write of `styles.xml`
//!
//! On read, the arenas fill first (no forward references), then the xf
//! records that reference them, then the named styles that reference xf
//! records. On write, the schema mandates its own fixed section order,
//! reproduced exactly by [`Stylesheet::write_stylesheet`].

mod alignment;
mod border;
mod cell_style;
mod color;
mod fill;
mod font;
mod named_style;
mod number_format;
mod protection;
mod registry;
mod serializer;

pub use alignment::Alignment;
pub use border::{Border, BorderSide};
pub use cell_style::CellStyle;
pub use color::Color;
pub use fill::Fill;
pub use font::Font;
pub use named_style::NamedStyle;
pub use number_format::{
    FIRST_CUSTOM_FORMAT_ID, NumberFormat, builtin_format_code, builtin_format_id, is_date_format,
};
pub use protection::Protection;
pub use registry::StyleRegistry;

use std::collections::BTreeMap;

use crate::xml::XmlNode;

/// A workbook's style document.
///
/// Owns the component arenas, the direct cell-style records (`cellXfs`),
/// the named-style table, and the pass-through sections. Registry
/// mutation is not synchronized; share across threads behind external
/// mutual exclusion.
#[derive(Debug, Clone, PartialEq)]
pub struct Stylesheet {
    pub(crate) registry: StyleRegistry,
    pub(crate) cell_styles: Vec<CellStyle>,
    pub(crate) named_styles: BTreeMap<u32, NamedStyle>,
    pub(crate) conditional_formats: Vec<XmlNode>,
    pub(crate) ext_list: Option<XmlNode>,
}

impl Stylesheet {
    /// Create a stylesheet seeded with the entries every workbook
    /// carries: the default font, the none/gray125 fill pair, the empty
    /// border, one default xf record and the built-in "Normal" style.
    pub fn new() -> Self {
        let mut registry = StyleRegistry::new();
        registry.register_number_format(NumberFormat::general());
        registry.register_font(Font::new());
        registry.register_fill(Fill::None);
        registry.register_fill(Fill::gray125());
        registry.register_border(Border::new());

        let mut named_styles = BTreeMap::new();
        named_styles.insert(0, NamedStyle::normal());

        Stylesheet {
            registry,
            cell_styles: vec![CellStyle::new()],
            named_styles,
            conditional_formats: Vec::new(),
            ext_list: None,
        }
    }

    /// The component arenas.
    #[inline]
    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    /// Mutable access to the component arenas.
    #[inline]
    pub fn registry_mut(&mut self) -> &mut StyleRegistry {
        &mut self.registry
    }

    /// Registered number formats, in registration order.
    #[inline]
    pub fn number_formats(&self) -> &[NumberFormat] {
        self.registry.number_formats()
    }

    /// Registered fonts, in registration order.
    #[inline]
    pub fn fonts(&self) -> &[Font] {
        self.registry.fonts()
    }

    /// Registered fills, in registration order.
    #[inline]
    pub fn fills(&self) -> &[Fill] {
        self.registry.fills()
    }

    /// Registered borders, in registration order.
    #[inline]
    pub fn borders(&self) -> &[Border] {
        self.registry.borders()
    }

    /// Registered colors, in registration order.
    #[inline]
    pub fn colors(&self) -> &[Color] {
        self.registry.colors()
    }

    /// Direct cell-style records (`cellXfs`), in file order.
    #[inline]
    pub fn cell_styles(&self) -> &[CellStyle] {
        &self.cell_styles
    }

    /// Cell-style record by positional id, used when a cell's effective
    /// formatting is resolved.
    pub fn cell_style(&self, id: usize) -> Option<&CellStyle> {
        self.cell_styles.get(id)
    }

    /// Append a direct cell-style record, returning its positional id.
    pub fn add_cell_style(&mut self, style: CellStyle) -> usize {
        if let Some(index) = self.cell_styles.iter().position(|existing| *existing == style) {
            return index;
        }
        self.cell_styles.push(style);
        self.cell_styles.len() - 1
    }

    /// The named-style table, in ascending key order.
    #[inline]
    pub fn named_styles(&self) -> &BTreeMap<u32, NamedStyle> {
        &self.named_styles
    }

    /// Insert or replace a named style under the given key.
    pub fn set_named_style(&mut self, key: u32, style: NamedStyle) {
        self.named_styles.insert(key, style);
    }

    /// Conditional-format (`dxf`) records, passed through unmodified.
    #[inline]
    pub fn conditional_formats(&self) -> &[XmlNode] {
        &self.conditional_formats
    }

    /// The opaque extension-list subtree, if the source document had one.
    pub fn ext_list(&self) -> Option<&XmlNode> {
        self.ext_list.as_ref()
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::new()
    }
}
