//! Number format records and date-format detection.

/// First id available to custom (non-built-in) formats.
///
/// Ids below this threshold are reserved for built-in formats whose codes
/// are implicit and never serialized.
pub const FIRST_CUSTOM_FORMAT_ID: u32 = 164;

/// Built-in format codes, by id. The file schema leaves these implicit.
const BUILTIN_FORMATS: &[(u32, &str)] = &[
    (0, "General"),
    (1, "0"),
    (2, "0.00"),
    (3, "#,##0"),
    (4, "#,##0.00"),
    (9, "0%"),
    (10, "0.00%"),
    (11, "0.00E+00"),
    (12, "# ?/?"),
    (13, "# ??/??"),
    (14, "mm-dd-yy"),
    (15, "d-mmm-yy"),
    (16, "d-mmm"),
    (17, "mmm-yy"),
    (18, "h:mm AM/PM"),
    (19, "h:mm:ss AM/PM"),
    (20, "h:mm"),
    (21, "h:mm:ss"),
    (22, "m/d/yy h:mm"),
    (37, "#,##0 ;(#,##0)"),
    (38, "#,##0 ;[Red](#,##0)"),
    (39, "#,##0.00;(#,##0.00)"),
    (40, "#,##0.00;[Red](#,##0.00)"),
    (45, "mm:ss"),
    (46, "[h]:mm:ss"),
    (47, "mmss.0"),
    (48, "##0.0E+0"),
    (49, "@"),
];

/// A number format: id plus display format code.
///
/// Built-in formats (id below [`FIRST_CUSTOM_FORMAT_ID`]) carry their
/// implicit code in memory but are skipped when the stylesheet is
/// written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    /// Format id (the `numFmtId` space, not an arena index)
    pub id: u32,
    /// Display format code (e.g. "General", "0.00", "yyyy-mm-dd")
    pub code: String,
}

impl NumberFormat {
    /// Create a format with an explicit id.
    pub fn new(id: u32, code: impl Into<String>) -> Self {
        NumberFormat {
            id,
            code: code.into(),
        }
    }

    /// Create a format from a code alone; built-in codes get their
    /// reserved id, anything else starts at the custom threshold and is
    /// re-assigned a free id on registration.
    pub fn from_code(code: &str) -> Self {
        let id = builtin_format_id(code).unwrap_or(FIRST_CUSTOM_FORMAT_ID);
        NumberFormat::new(id, code)
    }

    /// The default "General" format.
    pub fn general() -> Self {
        NumberFormat::new(0, "General")
    }

    /// The built-in whole percentage format.
    pub fn percentage() -> Self {
        NumberFormat::new(9, "0%")
    }

    /// Default format assigned to date values.
    pub fn default_date() -> Self {
        NumberFormat::from_code("yyyy-mm-dd")
    }

    /// Default format assigned to datetime values.
    pub fn default_datetime() -> Self {
        NumberFormat::from_code("yyyy-mm-dd h:mm:ss")
    }

    /// Default format assigned to time-of-day values.
    pub fn default_time() -> Self {
        NumberFormat::from_code("h:mm:ss")
    }

    /// Default format assigned to duration values.
    pub fn default_duration() -> Self {
        NumberFormat::from_code("[hh]:mm:ss")
    }

    /// Whether this id is in the built-in range.
    #[inline]
    pub fn is_builtin(&self) -> bool {
        self.id < FIRST_CUSTOM_FORMAT_ID
    }

    /// Whether this format's code is implicit and never serialized.
    pub(crate) fn has_implicit_code(&self) -> bool {
        builtin_format_code(self.id) == Some(self.code.as_str())
    }

    /// Whether this format displays its value as a date or time.
    pub fn is_date_format(&self) -> bool {
        is_date_format(&self.code)
    }
}

/// Get the implicit format code for a built-in id.
pub fn builtin_format_code(id: u32) -> Option<&'static str> {
    BUILTIN_FORMATS
        .iter()
        .find(|(builtin_id, _)| *builtin_id == id)
        .map(|(_, code)| *code)
}

/// Get the reserved id for a built-in format code.
pub fn builtin_format_id(code: &str) -> Option<u32> {
    BUILTIN_FORMATS
        .iter()
        .find(|(_, builtin_code)| *builtin_code == code)
        .map(|(id, _)| *id)
}

/// Check whether a format code contains date/time placeholder tokens
/// outside quoted or escaped segments.
///
/// Bracketed elapsed-time tokens (`[h]`, `[mm]`, ...) mark a duration
/// format and are not dates. Only the first section (before `;`) counts.
pub fn is_date_format(code: &str) -> bool {
    let mut escaped = false;
    let mut in_quotes = false;
    let mut brackets = 0u8;
    let mut prev = ' ';
    let mut elapsed = false;
    let mut am_pm = false;

    for ch in code.chars() {
        match (ch, escaped, in_quotes, am_pm, brackets) {
            (_, true, ..) => escaped = false,
            ('_' | '\\', ..) => escaped = true,
            ('"', _, true, _, _) => in_quotes = false,
            (_, _, true, _, _) => {},
            ('"', ..) => in_quotes = true,
            (';', ..) => return false,
            ('[', ..) => brackets += 1,
            (']', .., 1) if elapsed => return false,
            (']', ..) => brackets = brackets.saturating_sub(1),
            ('a' | 'A', _, _, false, 0) => am_pm = true,
            ('p' | 'm' | '/' | 'P' | 'M', _, _, true, 0) => return true,
            ('d' | 'm' | 'h' | 'y' | 's' | 'D' | 'M' | 'H' | 'Y' | 'S', _, _, false, 0) => {
                return true;
            },
            _ => {
                if !(elapsed && ch.eq_ignore_ascii_case(&prev)) {
                    elapsed = prev == '[' && matches!(ch, 'm' | 'h' | 's' | 'M' | 'H' | 'S');
                }
            },
        }
        prev = ch;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_formats_detected() {
        assert!(is_date_format("yyyy-mm-dd"));
        assert!(is_date_format("yyyy-mm-dd h:mm:ss"));
        assert!(is_date_format("h:mm:ss"));
        assert!(is_date_format("mm-dd-yy"));
        assert!(is_date_format("h:mm AM/PM"));
        assert!(is_date_format("dd--hh--mm"));
    }

    #[test]
    fn non_date_formats_rejected() {
        assert!(!is_date_format("General"));
        assert!(!is_date_format("0.00"));
        assert!(!is_date_format("0%"));
        assert!(!is_date_format("#,##0 ;[Red](#,##0)"));
        // date letters inside quoted literals do not count
        assert!(!is_date_format("\"days\"0.0"));
        assert!(!is_date_format("\\y0"));
    }

    #[test]
    fn elapsed_time_formats_are_durations() {
        assert!(!is_date_format("[hh]:mm:ss"));
        assert!(!is_date_format("[h]:mm:ss"));
        assert!(!is_date_format("[ss]"));
    }

    #[test]
    fn builtin_table_lookups() {
        assert_eq!(builtin_format_code(0), Some("General"));
        assert_eq!(builtin_format_code(21), Some("h:mm:ss"));
        assert_eq!(builtin_format_code(163), None);
        assert_eq!(builtin_format_id("0%"), Some(9));
        assert_eq!(builtin_format_id("yyyy-mm-dd"), None);
    }

    #[test]
    fn from_code_uses_reserved_ids() {
        assert_eq!(NumberFormat::from_code("h:mm:ss").id, 21);
        assert!(NumberFormat::from_code("h:mm:ss").is_builtin());
        assert_eq!(NumberFormat::from_code("yyyy-mm-dd").id, FIRST_CUSTOM_FORMAT_ID);
        assert!(!NumberFormat::from_code("yyyy-mm-dd").is_builtin());
    }

    #[test]
    fn implicit_codes_only_for_matching_builtins() {
        assert!(NumberFormat::general().has_implicit_code());
        assert!(!NumberFormat::new(5, "0.00").has_implicit_code());
        assert!(!NumberFormat::new(164, "yyyy-mm-dd").has_implicit_code());
    }
}
