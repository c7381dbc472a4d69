//! Number-to-words conversion module
//!
//! This module renders numeric values as Persian phrases: sign word,
//! three-digit groups with scale units for the integer part, and a decimal
//! marker followed by the fractional digits read as an ordinary integer.
//! The main entry points are `to_words` and `to_words_with_unit`.

mod integer;

use std::fmt;

use crate::formatter::split_fixed;
use crate::types::NumericInput;
use crate::vocab::{Vocabulary, vocabulary};

// Fractional digits considered by the conversion; rounded away beyond this
const FRACTION_DIGITS: usize = 8;

/// Error type for words conversion
#[derive(Debug, Clone, PartialEq)]
pub enum WordsError {
    /// Input was absent or not parseable as a number
    NotNumeric,
    /// Integer magnitude needs a scale unit beyond the largest named one
    MagnitudeOverflow,
}

impl fmt::Display for WordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordsError::NotNumeric => write!(f, "Input is not a number"),
            WordsError::MagnitudeOverflow => {
                write!(f, "Magnitude exceeds the largest named scale unit")
            }
        }
    }
}

impl std::error::Error for WordsError {}

/// Convert a value to a Persian phrase, with explicit errors
///
/// The value is rounded to eight fractional digits. The sign word is taken
/// from the original value, independent of rounding, so `-1e-9` converts to
/// "منفی صفر". Magnitudes of `10^15` and above have no named scale unit and
/// are rejected rather than truncated.
pub fn try_to_words<'a>(value: impl Into<NumericInput<'a>>) -> Result<String, WordsError> {
    let Some(number) = value.into().resolve() else {
        return Err(WordsError::NotNumeric);
    };
    let vocab = vocabulary();

    if number == 0.0 {
        return Ok(vocab.zero.clone());
    }

    let (integer_part, fraction_digits) = split_fixed(number.abs(), FRACTION_DIGITS);
    let integer_part = u64::try_from(integer_part).map_err(|_| WordsError::MagnitudeOverflow)?;

    let mut words = integer::integer_words(integer_part, vocab)?;
    if let Some(fraction) = fraction_words(&fraction_digits, vocab)? {
        words.push(' ');
        words.push_str(&fraction);
    }
    if number < 0.0 {
        words = format!("{} {}", vocab.negative, words);
    }
    Ok(words)
}

/// Convert a value to a Persian phrase
///
/// Lenient counterpart of [`try_to_words`]: absent, non-numeric or
/// out-of-scale input yields an empty string.
///
/// # Examples
/// ```
/// use currency_format::to_words;
///
/// assert_eq!(to_words(0), "صفر");
/// assert_eq!(to_words(1001), "یک هزار و یک");
/// assert_eq!(to_words(-5.25), "منفی پنج ممیز بیست و پنج");
/// ```
pub fn to_words<'a>(value: impl Into<NumericInput<'a>>) -> String {
    try_to_words(value).unwrap_or_default()
}

/// Convert a value to a Persian phrase followed by a unit or currency name
///
/// Returns an empty string only when [`to_words`] does; zero itself reads
/// as the zero word plus the unit.
///
/// # Examples
/// ```
/// use currency_format::to_words_with_unit;
///
/// assert_eq!(to_words_with_unit(150000, "تومان"), "یکصد و پنجاه هزار تومان");
/// assert_eq!(to_words_with_unit(0, "دلار"), "صفر دلار");
/// ```
pub fn to_words_with_unit<'a>(value: impl Into<NumericInput<'a>>, unit_name: &str) -> String {
    let words = to_words(value);
    if words.is_empty() {
        return words;
    }
    format!("{} {}", words, unit_name)
}

/// Phrase for the fractional digits of a value, or `None` when zero.
///
/// Trailing zeros are stripped and the remaining digit string is read as an
/// ordinary integer, so the fraction of `1.50` reads "پنجاه" (fifty), not
/// digit-by-digit.
fn fraction_words(
    fraction_digits: &str,
    vocab: &Vocabulary,
) -> Result<Option<String>, WordsError> {
    let significant = fraction_digits.trim_end_matches('0');
    if significant.is_empty() {
        return Ok(None);
    }

    let value: u64 = significant.parse().map_err(|_| WordsError::NotNumeric)?;
    let words = integer::integer_words(value, vocab)?;
    Ok(Some(format!("{} {}", vocab.decimal_marker, words)))
}
