//! Thousands-separator formatting module
//!
//! This module renders numeric values as comma-grouped decimal strings and
//! parses such strings back. The main entry points are `format_number` and
//! `unformat_number`.

use crate::parser::{self, ParseNumberError};
use crate::types::NumericInput;

/// Character inserted every three digits of the integer part
pub const GROUPING_SEPARATOR: char = ',';
/// Character separating the integer and fractional parts
pub const DECIMAL_POINT: char = '.';

// Fractional digits beyond this carry no f64 precision anyway
const MAX_DECIMAL_PLACES: usize = 17;

/// Format a value as a comma-grouped decimal string
///
/// The value is rounded to `decimal_places` fractional digits,
/// half-away-from-zero. When the rounded fraction is all zeros it is
/// omitted together with the decimal point, so `10.00` formats as `"10"`.
/// Absent or non-numeric input yields an empty string; callers must treat
/// an empty string as "no value".
///
/// # Arguments
/// * `value` - The value to format; a number, raw text, or nothing
/// * `decimal_places` - Number of fractional digits to round to
///
/// # Examples
/// ```
/// use currency_format::format_number;
///
/// assert_eq!(format_number(1234567, 2), "1,234,567");
/// assert_eq!(format_number(1234.5, 2), "1,234.50");
/// assert_eq!(format_number(100, 2), "100");
/// assert_eq!(format_number("", 2), "");
/// ```
pub fn format_number<'a>(value: impl Into<NumericInput<'a>>, decimal_places: usize) -> String {
    let Some(number) = value.into().resolve() else {
        return String::new();
    };

    let (integer_part, fraction_digits) = split_fixed(number.abs(), decimal_places);

    let mut formatted = insert_grouping(&integer_part.to_string());
    if fraction_digits.bytes().any(|b| b != b'0') {
        formatted.push(DECIMAL_POINT);
        formatted.push_str(&fraction_digits);
    }
    if number < 0.0 {
        formatted.insert(0, '-');
    }
    formatted
}

/// Parse a comma-grouped string back to a number
///
/// Grouping separators are stripped and the remainder is read as a decimal
/// prefix. Returns `0.0` when nothing parses; this lenient contract cannot
/// distinguish "explicit zero" from "unparseable" — use
/// [`unformat_number_strict`] when that distinction matters.
///
/// # Examples
/// ```
/// use currency_format::unformat_number;
///
/// assert_eq!(unformat_number("1,234,567"), 1234567.0);
/// assert_eq!(unformat_number(""), 0.0);
/// ```
pub fn unformat_number(formatted: &str) -> f64 {
    let cleaned: String = formatted
        .chars()
        .filter(|c| *c != GROUPING_SEPARATOR)
        .collect();
    parser::lenient_decimal(&cleaned).unwrap_or(0.0)
}

/// Strict variant of [`unformat_number`]
///
/// The whole string must be a plain or correctly three-grouped decimal
/// numeral; anything else is an error instead of a silent zero.
pub fn unformat_number_strict(formatted: &str) -> Result<f64, ParseNumberError> {
    parser::strict_decimal(formatted)
}

/// Split a non-negative value into integer part and fixed-point fraction
/// digits, rounding half-away-from-zero at `decimal_places`.
pub(crate) fn split_fixed(magnitude: f64, decimal_places: usize) -> (u128, String) {
    let places = decimal_places.min(MAX_DECIMAL_PLACES);
    let scale = 10u128.pow(places as u32);

    // Float-to-int casts saturate, which also absorbs non-finite values
    let scaled = (magnitude * scale as f64).round() as u128;

    let integer_part = scaled / scale;
    let fraction_digits = if places == 0 {
        String::new()
    } else {
        format!("{:0width$}", scaled % scale, width = places)
    };
    (integer_part, fraction_digits)
}

/// Insert the grouping separator every three digits, scanning from the right
fn insert_grouping(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut grouped: Vec<char> =
        Vec::with_capacity(chars.len() + chars.len().saturating_sub(1) / 3);
    for (i, digit) in chars.iter().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(GROUPING_SEPARATOR);
        }
        grouped.push(*digit);
    }
    grouped.reverse();
    grouped.into_iter().collect()
}
