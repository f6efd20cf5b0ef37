//! Spreadsheet stylesheet engine and cell value-typing layer.
//!
//! This crate implements the style part of a spreadsheet file (the
//! `styles.xml` document of an OOXML workbook) together with the cell
//! value classification that depends on resolved styles:
//!
//! - [`styles`]: deduplicated component arenas (number formats, fonts,
//!   fills, borders, colors), cell-style (xf) records with per-attribute
//!   applied flags, named styles, and the ordered stylesheet serializer.
//! - [`cell`]: the tagged cell value, priority-ordered text type
//!   inference, serial-date conversion, and the `is_date` predicate.
//! - [`xml`]: a minimal ordered element tree used as the document
//!   boundary; archive packaging and worksheet storage live outside this
//!   crate.
//!
//! # Example
//!
//! ```rust
//! use sheetstyle::styles::Stylesheet;
//! use sheetstyle::xml::XmlDocument;
//!
//! let stylesheet = Stylesheet::new();
//! let document = stylesheet.write_stylesheet();
//! let xml = document.to_xml()?;
//! assert!(xml.contains("<styleSheet"));
//!
//! let mut reloaded = Stylesheet::new();
//! assert!(reloaded.read_stylesheet(&XmlDocument::parse(&xml)?));
//! # Ok::<(), sheetstyle::Error>(())
//! ```

pub mod cell;
pub mod error;
pub mod styles;
pub mod xml;

pub use cell::{Cell, CellEncoding, CellType, CellValue, Comment, Date, DateTime, Time, TimeDelta};
pub use error::{Error, Result};
pub use styles::{CellStyle, NamedStyle, NumberFormat, StyleRegistry, Stylesheet};
pub use xml::{XmlDocument, XmlNode};
