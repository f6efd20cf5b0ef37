//! Cell value model: tagged values, text classification, date/time
//! serials and the per-cell typing state.
//!
//! A [`Cell`] here carries no grid position; worksheet storage is the
//! layer above. What lives here is the typing behavior: how raw text
//! becomes a tagged value, how dates collapse to serial numbers, and
//! how `is_date` is derived from the effective number format.

mod comment;
mod datetime;
mod encoding;
mod value;

pub use comment::Comment;
pub use datetime::{Date, DateTime, Time, TimeDelta};
pub use encoding::CellEncoding;
pub use value::{CellType, CellValue};

use crate::error::Result;
use crate::styles::NumberFormat;

/// A single cell's value and typing state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cell {
    value: CellValue,
    number_format: Option<NumberFormat>,
    comment: Option<Comment>,
    encoding: CellEncoding,
    guess_types: bool,
}

impl Cell {
    /// An empty cell with type guessing enabled.
    pub fn new() -> Self {
        Cell {
            guess_types: true,
            ..Cell::default()
        }
    }

    /// The current value.
    #[inline]
    pub fn value(&self) -> &CellValue {
        &self.value
    }

    /// The current value's type tag.
    #[inline]
    pub fn cell_type(&self) -> CellType {
        self.value.type_tag()
    }

    /// Whether raw text input is classified or kept as a string.
    pub fn set_guess_types(&mut self, guess_types: bool) {
        self.guess_types = guess_types;
    }

    /// The declared encoding for byte input.
    pub fn set_encoding(&mut self, encoding: CellEncoding) {
        self.encoding = encoding;
    }

    /// Set the value from raw text.
    ///
    /// Rejects control characters first. With guessing enabled the text
    /// is classified in priority order (formula, error, boolean,
    /// numeric, time, string); otherwise everything is a string. A
    /// format implied by the input shape (a trailing `%`, a time) is
    /// only adopted when the cell has no explicit format yet.
    pub fn set_value(&mut self, raw: &str) -> Result<()> {
        check_string(raw)?;
        if !self.guess_types {
            self.value = CellValue::String(raw.to_string());
            return Ok(());
        }
        let inferred = value::infer(raw);
        if let Some(hint) = inferred.format_hint
            && self.number_format.is_none()
        {
            self.number_format = Some(NumberFormat::from_code(hint));
        }
        self.value = inferred.value;
        Ok(())
    }

    /// Decode bytes under the declared encoding, then set as text.
    pub fn set_value_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let text = self.encoding.decode(bytes)?;
        self.set_value(&text)
    }

    /// Set a boolean directly, bypassing text classification.
    pub fn set_bool(&mut self, value: bool) {
        self.value = CellValue::Bool(value);
    }

    /// Set a numeric value directly.
    pub fn set_number(&mut self, value: f64) {
        self.value = CellValue::Numeric(value);
    }

    /// Set a date. Stores the serial day count and assigns the date
    /// format when no explicit format is set.
    pub fn set_date(&mut self, date: Date) {
        self.set_serial(date.to_serial(), NumberFormat::default_date);
    }

    /// Set a date with a time of day.
    pub fn set_datetime(&mut self, datetime: DateTime) {
        self.set_serial(datetime.to_serial(), NumberFormat::default_datetime);
    }

    /// Set a time of day.
    pub fn set_time(&mut self, time: Time) {
        self.set_serial(time.to_serial(), NumberFormat::default_time);
    }

    /// Set a duration.
    pub fn set_timedelta(&mut self, delta: TimeDelta) {
        self.set_serial(delta.to_serial(), NumberFormat::default_duration);
    }

    fn set_serial(&mut self, serial: f64, default_format: fn() -> NumberFormat) {
        self.value = CellValue::Numeric(serial);
        if self.number_format.is_none() {
            self.number_format = Some(default_format());
        }
    }

    /// Reset the value to null. The number format is left as is.
    pub fn clear_value(&mut self) {
        self.value = CellValue::Null;
    }

    /// The effective number format: the explicit one, else `General`.
    pub fn number_format(&self) -> NumberFormat {
        self.number_format
            .clone()
            .unwrap_or_else(NumberFormat::general)
    }

    /// Assign an explicit number format.
    pub fn set_number_format(&mut self, format: NumberFormat) {
        self.number_format = Some(format);
    }

    /// Whether the cell currently displays as a date: the value must be
    /// numeric and the effective format must be a date format. Derived
    /// on every call, never stored.
    pub fn is_date(&self) -> bool {
        self.cell_type() == CellType::Numeric && self.number_format().is_date_format()
    }

    /// Attach a comment. A comment attached to another cell (or a clone
    /// of one) is refused with [`crate::Error::CommentReuse`].
    pub fn set_comment(&mut self, comment: Comment) -> Result<()> {
        comment.attach()?;
        if let Some(previous) = self.comment.take() {
            previous.detach();
        }
        self.comment = Some(comment);
        Ok(())
    }

    /// The attached comment, if any.
    pub fn comment(&self) -> Option<&Comment> {
        self.comment.as_ref()
    }

    /// Detach and drop the comment.
    pub fn clear_comment(&mut self) {
        if let Some(comment) = self.comment.take() {
            comment.detach();
        }
    }
}

/// Reject control characters the file format cannot carry. Tab, LF and
/// CR are legal, bytes 0x00-0x08 and 0x0B-0x1F are not.
pub fn check_string(text: &str) -> Result<()> {
    for byte in text.bytes() {
        if matches!(byte, 0x00..=0x08 | 0x0B..=0x0C | 0x0E..=0x1F) {
            return Err(crate::Error::IllegalCharacter { byte });
        }
    }
    Ok(())
}
