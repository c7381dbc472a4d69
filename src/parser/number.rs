use std::fmt;

use winnow::ascii::{digit0, digit1};
use winnow::combinator::{alt, opt, preceded, repeat};
use winnow::token::{one_of, take_while};
use winnow::{ModalResult, Parser};

/// Error type for strict numeric parsing
#[derive(Debug, Clone, PartialEq)]
pub enum ParseNumberError {
    /// The input was empty or all whitespace
    Empty,
    /// The input was not a plain or correctly grouped decimal numeral
    Invalid(String),
}

impl fmt::Display for ParseNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseNumberError::Empty => write!(f, "Empty numeric input"),
            ParseNumberError::Invalid(text) => write!(f, "Not a decimal numeral: '{}'", text),
        }
    }
}

impl std::error::Error for ParseNumberError {}

/// Parse a decimal literal: optional sign, digits, optional fraction.
///
/// `12`, `12.5`, `12.`, `.5` and `+3` are all accepted. Parsing stops at the
/// first character that cannot extend the literal, leaving it in the input.
pub fn decimal_literal(input: &mut &str) -> ModalResult<f64> {
    (
        opt(one_of(['+', '-'])),
        alt((
            (digit1, opt(('.', digit0))).void(),
            ('.', digit1).void(),
        )),
    )
        .take()
        .parse_to()
        .parse_next(input)
}

/// Shape of a numeral whose integer part may carry grouping separators.
///
/// Every piece is optional; the caller requires full input consumption, so
/// degenerate matches like a bare sign fall out as leftover input or as a
/// float parse failure.
fn separated_shape(input: &mut &str) -> ModalResult<()> {
    (
        opt(one_of(['+', '-'])),
        opt(alt((
            (
                take_while(1..=3, |c: char| c.is_ascii_digit()),
                repeat(1.., preceded(',', take_while(3..=3, |c: char| c.is_ascii_digit())))
                    .map(|_: Vec<&str>| ()),
            )
                .void(),
            digit1.void(),
        ))),
        opt(preceded('.', digit0)),
    )
        .void()
        .parse_next(input)
}

/// Lenient parse of a leading decimal prefix, after skipping whitespace.
///
/// Mirrors the forgiving coercion used by the sentinel-style API: `"12abc"`
/// yields `12.0`, while input with no usable prefix yields `None`.
pub fn lenient_decimal(text: &str) -> Option<f64> {
    let mut input = text.trim_start();
    decimal_literal(&mut input).ok()
}

/// Strict parse of a whole string as a plain or comma-grouped numeral.
///
/// Interior groups must be exactly three digits (`1,234,567`), and nothing
/// may remain after the numeral. Surrounding whitespace is tolerated.
pub fn strict_decimal(text: &str) -> Result<f64, ParseNumberError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseNumberError::Empty);
    }

    let matched = separated_shape
        .take()
        .parse(trimmed)
        .map_err(|_| ParseNumberError::Invalid(trimmed.to_string()))?;

    let plain: String = matched.chars().filter(|c| *c != ',').collect();
    plain
        .parse()
        .map_err(|_| ParseNumberError::Invalid(trimmed.to_string()))
}
