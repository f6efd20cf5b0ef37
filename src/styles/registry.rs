//! Deduplicated, order-stable component arenas.
//!
//! Each arena hands out dense indices 0..n-1 in registration order, and
//! that order is load-bearing: later style records reference entries
//! positionally. Entries are immutable once indexed; re-registering an
//! equal value returns the existing index.

use super::border::Border;
use super::color::Color;
use super::fill::Fill;
use super::font::Font;
use super::number_format::{FIRST_CUSTOM_FORMAT_ID, NumberFormat, builtin_format_code};

/// The five component arenas of a style document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleRegistry {
    number_formats: Vec<NumberFormat>,
    fonts: Vec<Font>,
    fills: Vec<Fill>,
    borders: Vec<Border>,
    colors: Vec<Color>,
}

fn register_or_get<T: PartialEq>(arena: &mut Vec<T>, value: T) -> usize {
    if let Some(index) = arena.iter().position(|existing| *existing == value) {
        return index;
    }
    arena.push(value);
    arena.len() - 1
}

impl StyleRegistry {
    /// Create empty arenas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a font, returning its arena index.
    pub fn register_font(&mut self, font: Font) -> usize {
        register_or_get(&mut self.fonts, font)
    }

    /// Register a fill, returning its arena index.
    pub fn register_fill(&mut self, fill: Fill) -> usize {
        register_or_get(&mut self.fills, fill)
    }

    /// Register a border, returning its arena index.
    pub fn register_border(&mut self, border: Border) -> usize {
        register_or_get(&mut self.borders, border)
    }

    /// Register a color, returning its arena index.
    pub fn register_color(&mut self, color: Color) -> usize {
        register_or_get(&mut self.colors, color)
    }

    /// Register a number format, returning its arena index.
    ///
    /// Formats deduplicate by code. A non-built-in format whose id
    /// collides with an already-registered one gets the next free id at
    /// or above the custom threshold; ids read from a file are kept.
    pub fn register_number_format(&mut self, mut format: NumberFormat) -> usize {
        if let Some(index) = self
            .number_formats
            .iter()
            .position(|existing| existing.code == format.code)
        {
            return index;
        }
        if self.number_formats.iter().any(|f| f.id == format.id) {
            format.id = self.next_custom_format_id();
        }
        self.number_formats.push(format);
        self.number_formats.len() - 1
    }

    fn next_custom_format_id(&self) -> u32 {
        self.number_formats
            .iter()
            .map(|format| format.id + 1)
            .max()
            .unwrap_or(FIRST_CUSTOM_FORMAT_ID)
            .max(FIRST_CUSTOM_FORMAT_ID)
    }

    /// All number formats, in registration order.
    #[inline]
    pub fn number_formats(&self) -> &[NumberFormat] {
        &self.number_formats
    }

    /// All fonts, in registration order.
    #[inline]
    pub fn fonts(&self) -> &[Font] {
        &self.fonts
    }

    /// All fills, in registration order.
    #[inline]
    pub fn fills(&self) -> &[Fill] {
        &self.fills
    }

    /// All borders, in registration order.
    #[inline]
    pub fn borders(&self) -> &[Border] {
        &self.borders
    }

    /// All colors, in registration order.
    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Look up a number format by its `numFmtId`, falling back to the
    /// implicit built-in table.
    pub fn number_format_by_id(&self, id: u32) -> Option<NumberFormat> {
        if let Some(format) = self.number_formats.iter().find(|format| format.id == id) {
            return Some(format.clone());
        }
        builtin_format_code(id).map(|code| NumberFormat::new(id, code))
    }

    /// Whether a `numFmtId` resolves to a registered or built-in format.
    pub(crate) fn knows_number_format_id(&self, id: u32) -> bool {
        builtin_format_code(id).is_some() || self.number_formats.iter().any(|f| f.id == id)
    }

    // The read pass appends without deduplication: positions in the file
    // are referenced by later records and must be preserved verbatim.

    pub(crate) fn push_font(&mut self, font: Font) {
        self.fonts.push(font);
    }

    pub(crate) fn push_fill(&mut self, fill: Fill) {
        self.fills.push(fill);
    }

    pub(crate) fn push_border(&mut self, border: Border) {
        self.borders.push(border);
    }

    pub(crate) fn push_color(&mut self, color: Color) {
        self.colors.push(color);
    }

    pub(crate) fn clear_fonts(&mut self) {
        self.fonts.clear();
    }

    pub(crate) fn clear_fills(&mut self) {
        self.fills.clear();
    }

    pub(crate) fn clear_borders(&mut self) {
        self.borders.clear();
    }

    pub(crate) fn clear_colors(&mut self) {
        self.colors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::border::BorderSide;

    #[test]
    fn equal_values_reuse_the_existing_index() {
        let mut registry = StyleRegistry::new();
        let bold = Font {
            bold: true,
            ..Font::new()
        };

        assert_eq!(registry.register_font(Font::new()), 0);
        assert_eq!(registry.register_font(bold.clone()), 1);
        assert_eq!(registry.register_font(bold), 1);
        assert_eq!(registry.register_font(Font::new()), 0);
        assert_eq!(registry.fonts().len(), 2);
    }

    #[test]
    fn indices_are_dense_and_ordered() {
        let mut registry = StyleRegistry::new();
        for (expected, style) in ["thin", "medium", "thick"].iter().enumerate() {
            let border = Border {
                top: Some(BorderSide::new(*style, None)),
                ..Border::new()
            };
            assert_eq!(registry.register_border(border), expected);
        }
        let styles: Vec<_> = registry
            .borders()
            .iter()
            .map(|border| border.top.as_ref().map(|side| side.style.as_str()))
            .collect();
        assert_eq!(styles, [Some("thin"), Some("medium"), Some("thick")]);
    }

    #[test]
    fn custom_number_formats_get_free_ids() {
        let mut registry = StyleRegistry::new();
        let first = registry.register_number_format(NumberFormat::from_code("yyyy-mm-dd"));
        let second = registry.register_number_format(NumberFormat::from_code("[hh]:mm:ss"));
        assert_ne!(first, second);

        let formats = registry.number_formats();
        assert_eq!(formats[first].id, FIRST_CUSTOM_FORMAT_ID);
        assert_eq!(formats[second].id, FIRST_CUSTOM_FORMAT_ID + 1);
    }

    #[test]
    fn number_formats_deduplicate_by_code() {
        let mut registry = StyleRegistry::new();
        let index = registry.register_number_format(NumberFormat::from_code("yyyy-mm-dd"));
        assert_eq!(
            registry.register_number_format(NumberFormat::from_code("yyyy-mm-dd")),
            index
        );
        assert_eq!(registry.number_formats().len(), 1);
    }

    #[test]
    fn file_assigned_custom_ids_are_kept() {
        let mut registry = StyleRegistry::new();
        registry.register_number_format(NumberFormat::new(200, "0.000"));
        assert_eq!(registry.number_formats()[0].id, 200);
        assert_eq!(registry.number_format_by_id(200).unwrap().code, "0.000");
    }

    #[test]
    fn builtin_ids_resolve_without_registration() {
        let registry = StyleRegistry::new();
        assert_eq!(registry.number_format_by_id(0).unwrap().code, "General");
        assert_eq!(registry.number_format_by_id(21).unwrap().code, "h:mm:ss");
        assert!(registry.number_format_by_id(163).is_none());
    }
}
