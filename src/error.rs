//! Error types for stylesheet and cell operations.
//!
//! Value-parsing and structural-misuse failures are surfaced as [`Error`]
//! values and propagate to the caller of the mutating operation.
//! Malformed-stylesheet conditions (out-of-range ids, missing sections)
//! are deliberately not errors; they reduce to the boolean result of
//! [`crate::styles::Stylesheet::read_stylesheet`].

use thiserror::Error;

/// Result type for stylesheet and cell operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for stylesheet and cell operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Control byte in cell string or formula text
    #[error("illegal character 0x{byte:02x} in cell text")]
    IllegalCharacter {
        /// The offending byte
        byte: u8,
    },

    /// Byte sequence invalid for the declared input encoding
    #[error("byte sequence is not valid {encoding}")]
    Decoding {
        /// Name of the declared encoding
        encoding: &'static str,
    },

    /// A comment was attached to more than one cell
    #[error("comment is already attached to a cell")]
    CommentReuse,

    /// XML parsing or printing error
    #[error("XML error: {0}")]
    Xml(String),
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}
