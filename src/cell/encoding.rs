//! Input-boundary byte decoding.
//!
//! Byte input is decoded exactly once, at the boundary, before any
//! classification runs. UTF-8 is strict: an invalid sequence is a
//! decoding error, never a replacement character. Latin-1 maps every
//! byte, so it cannot fail.

use encoding_rs::{UTF_8, WINDOWS_1252};

use crate::error::{Error, Result};

/// The declared encoding of a cell's byte input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellEncoding {
    #[default]
    Utf8,
    Latin1,
}

impl CellEncoding {
    /// Decode bytes under this encoding.
    pub fn decode(self, bytes: &[u8]) -> Result<String> {
        match self {
            CellEncoding::Utf8 => UTF_8
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(|text| text.into_owned())
                .ok_or(Error::Decoding { encoding: "UTF-8" }),
            CellEncoding::Latin1 => {
                let (text, _, _) = WINDOWS_1252.decode(bytes);
                Ok(text.into_owned())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_rejects_invalid_sequences() {
        assert_eq!(CellEncoding::Utf8.decode(b"plain").unwrap(), "plain");
        assert_eq!(
            CellEncoding::Utf8.decode("héllo".as_bytes()).unwrap(),
            "héllo"
        );
        assert!(matches!(
            CellEncoding::Utf8.decode(&[0x66, 0xFE, 0x67]),
            Err(Error::Decoding { encoding: "UTF-8" })
        ));
    }

    #[test]
    fn latin1_maps_every_byte() {
        assert_eq!(CellEncoding::Latin1.decode(&[0x68, 0xE9]).unwrap(), "hé");
        assert!(CellEncoding::Latin1.decode(&[0xFE, 0xFF]).is_ok());
    }
}
