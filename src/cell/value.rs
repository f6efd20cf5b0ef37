//! Cell value model and text classification.
//!
//! Classification runs a fixed-priority list of pure matchers, stopping
//! at the first match: formula, error token, boolean, numeric, time of
//! day, then string. The priority order is observable (for example
//! `TRUE` must never reach the string fallback) and must not change.

use phf::{Set, phf_set};

use super::datetime::SECONDS_PER_DAY;

/// Spreadsheet error tokens, the closed set a cell can hold.
static ERROR_CODES: Set<&'static str> = phf_set! {
    "#DIV/0!",
    "#N/A",
    "#NAME?",
    "#NULL!",
    "#NUM!",
    "#REF!",
    "#VALUE!",
};

/// A cell's tagged value with its literal payload.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Empty cell
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Numeric value; dates and times store their serial here
    Numeric(f64),
    /// String value
    String(String),
    /// Formula text, including the leading `=`
    Formula(String),
    /// Error token (`#REF!`, ...)
    Error(String),
}

/// The type tag of a [`CellValue`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellType {
    Null,
    Boolean,
    Numeric,
    String,
    Formula,
    Error,
}

impl CellValue {
    /// The value's type tag.
    pub fn type_tag(&self) -> CellType {
        match self {
            CellValue::Null => CellType::Null,
            CellValue::Bool(_) => CellType::Boolean,
            CellValue::Numeric(_) => CellType::Numeric,
            CellValue::String(_) => CellType::String,
            CellValue::Formula(_) => CellType::Formula,
            CellValue::Error(_) => CellType::Error,
        }
    }
}

/// A classified value plus the number format its shape implies, if any.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Inferred {
    pub value: CellValue,
    pub format_hint: Option<&'static str>,
}

impl Inferred {
    fn plain(value: CellValue) -> Self {
        Inferred {
            value,
            format_hint: None,
        }
    }
}

/// The matchers, in priority order. First `Some` wins.
const MATCHERS: &[fn(&str) -> Option<Inferred>] = &[
    match_formula,
    match_error,
    match_bool,
    match_numeric,
    match_time,
];

/// Classify raw cell text. Falls through to `String` when no matcher
/// claims the input.
pub(crate) fn infer(raw: &str) -> Inferred {
    for matcher in MATCHERS {
        if let Some(inferred) = matcher(raw) {
            return inferred;
        }
    }
    Inferred::plain(CellValue::String(raw.to_string()))
}

/// A lone `=` is a string, anything longer is a formula.
fn match_formula(raw: &str) -> Option<Inferred> {
    if raw.starts_with('=') && raw.len() > 1 {
        return Some(Inferred::plain(CellValue::Formula(raw.to_string())));
    }
    None
}

fn match_error(raw: &str) -> Option<Inferred> {
    if ERROR_CODES.contains(raw) {
        return Some(Inferred::plain(CellValue::Error(raw.to_string())));
    }
    None
}

fn match_bool(raw: &str) -> Option<Inferred> {
    if raw.eq_ignore_ascii_case("TRUE") {
        return Some(Inferred::plain(CellValue::Bool(true)));
    }
    if raw.eq_ignore_ascii_case("FALSE") {
        return Some(Inferred::plain(CellValue::Bool(false)));
    }
    None
}

/// Numeric grammar: optional sign, digits with at most one decimal
/// point, optional exponent, optional trailing `%` scaling by 0.01.
/// The grammar is validated before the parse so inputs like `"0800"`
/// still reach here but `"1e"` or `"."` do not.
fn match_numeric(raw: &str) -> Option<Inferred> {
    let (body, percent) = match raw.strip_suffix('%') {
        Some(body) => (body, true),
        None => (raw, false),
    };
    if !is_numeric_literal(body) {
        return None;
    }
    let parsed: f64 = fast_float2::parse(body).ok()?;
    if percent {
        return Some(Inferred {
            value: CellValue::Numeric(parsed * 0.01),
            format_hint: Some("0%"),
        });
    }
    Some(Inferred::plain(CellValue::Numeric(parsed)))
}

fn is_numeric_literal(text: &str) -> bool {
    let text = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (mantissa, exponent) = match text.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (text, None),
    };

    let mut digits = 0usize;
    let mut dots = 0usize;
    for ch in mantissa.chars() {
        match ch {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return false,
        }
    }
    if digits == 0 || dots > 1 {
        return false;
    }

    match exponent {
        None => true,
        Some(exponent) => {
            let exponent = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
            !exponent.is_empty() && exponent.bytes().all(|b| b.is_ascii_digit())
        },
    }
}

/// Time grammar: `H:M:S[.fraction]`, or with exactly two fields
/// `M:S[.fraction]` read as minutes and seconds, never hours:minutes.
/// Produces the value as a day fraction.
fn match_time(raw: &str) -> Option<Inferred> {
    let fields: Vec<&str> = raw.split(':').collect();
    let (hours, minutes, seconds) = match fields.as_slice() {
        [minutes, seconds] => (0.0, parse_time_field(minutes, false)?, parse_time_field(seconds, true)?),
        [hours, minutes, seconds] => (
            parse_time_field(hours, false)?,
            parse_time_field(minutes, false)?,
            parse_time_field(seconds, true)?,
        ),
        _ => return None,
    };

    let day_fraction = (hours * 3600.0 + minutes * 60.0 + seconds) / SECONDS_PER_DAY;
    Some(Inferred {
        value: CellValue::Numeric(day_fraction),
        format_hint: Some("h:mm:ss"),
    })
}

fn parse_time_field(field: &str, fractional: bool) -> Option<f64> {
    if field.is_empty() {
        return None;
    }
    let digits_only = field.bytes().all(|b| b.is_ascii_digit());
    let valid = if fractional {
        digits_only
            || field
                .split_once('.')
                .is_some_and(|(whole, fraction)| {
                    !whole.is_empty()
                        && whole.bytes().all(|b| b.is_ascii_digit())
                        && fraction.bytes().all(|b| b.is_ascii_digit())
                })
    } else {
        digits_only
    };
    if !valid {
        return None;
    }
    fast_float2::parse(field).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of(raw: &str) -> CellValue {
        infer(raw).value
    }

    #[test]
    fn formulas_need_more_than_the_equals_sign() {
        assert_eq!(
            value_of("=SUM(A1:A2)"),
            CellValue::Formula("=SUM(A1:A2)".to_string())
        );
        assert_eq!(value_of("="), CellValue::String("=".to_string()));
    }

    #[test]
    fn error_tokens_classify_and_rerender_identically() {
        for token in ["#DIV/0!", "#N/A", "#NAME?", "#NULL!", "#NUM!", "#REF!", "#VALUE!"] {
            assert_eq!(value_of(token), CellValue::Error(token.to_string()));
        }
        assert_eq!(value_of("#BOGUS!"), CellValue::String("#BOGUS!".to_string()));
    }

    #[test]
    fn booleans_are_case_insensitive() {
        assert_eq!(value_of("TRUE"), CellValue::Bool(true));
        assert_eq!(value_of("true"), CellValue::Bool(true));
        assert_eq!(value_of("False"), CellValue::Bool(false));
        assert_eq!(value_of("truthy"), CellValue::String("truthy".to_string()));
    }

    #[test]
    fn numeric_grammar() {
        assert_eq!(value_of("4.2"), CellValue::Numeric(4.2));
        assert_eq!(value_of("-42.000"), CellValue::Numeric(-42.0));
        assert_eq!(value_of("99E-02"), CellValue::Numeric(0.99));
        assert_eq!(value_of("2e+2"), CellValue::Numeric(200.0));
        assert_eq!(value_of("0800"), CellValue::Numeric(800.0));
        assert_eq!(value_of("+5"), CellValue::Numeric(5.0));
        assert_eq!(value_of(".5"), CellValue::Numeric(0.5));
    }

    #[test]
    fn numeric_rejects_bad_shapes() {
        assert_eq!(value_of("."), CellValue::String(".".to_string()));
        assert_eq!(value_of("1e"), CellValue::String("1e".to_string()));
        assert_eq!(value_of("1.2.3"), CellValue::String("1.2.3".to_string()));
        assert_eq!(value_of("4 2"), CellValue::String("4 2".to_string()));
        assert_eq!(value_of(""), CellValue::String(String::new()));
    }

    #[test]
    fn percent_scales_and_hints_the_format() {
        let inferred = infer("3.1%");
        assert_eq!(inferred.value, CellValue::Numeric(3.1 * 0.01));
        assert_eq!(inferred.format_hint, Some("0%"));
        assert_eq!(infer("4.2").format_hint, None);
    }

    #[test]
    fn three_field_time() {
        let inferred = infer("03:40:16");
        let expected = (3.0 * 3600.0 + 40.0 * 60.0 + 16.0) / SECONDS_PER_DAY;
        assert_eq!(inferred.value, CellValue::Numeric(expected));
        assert_eq!(inferred.format_hint, Some("h:mm:ss"));
    }

    #[test]
    fn two_fields_are_minutes_and_seconds() {
        let expected = (30.0 * 60.0 + 33.865633336) / SECONDS_PER_DAY;
        assert_eq!(value_of("30:33.865633336"), CellValue::Numeric(expected));
        // no fraction, still minutes:seconds
        assert_eq!(
            value_of("03:40"),
            CellValue::Numeric((3.0 * 60.0 + 40.0) / SECONDS_PER_DAY)
        );
    }

    #[test]
    fn malformed_times_fall_through_to_string() {
        for raw in ["1:2:3:4", "a:b", "1:", ":30", "1:2.5:3", "12:-5"] {
            assert_eq!(value_of(raw), CellValue::String(raw.to_string()), "{raw}");
        }
    }

    #[test]
    fn type_tags() {
        assert_eq!(CellValue::Null.type_tag(), CellType::Null);
        assert_eq!(CellValue::Bool(true).type_tag(), CellType::Boolean);
        assert_eq!(CellValue::Numeric(1.0).type_tag(), CellType::Numeric);
        assert_eq!(
            CellValue::Formula("=A1".to_string()).type_tag(),
            CellType::Formula
        );
    }
}
