//! Core input and option types
//!
//! This module defines how numeric arguments enter the crate and the
//! configuration used by the live input binding.

use crate::parser;
use crate::vocab;

/// A numeric argument that may arrive as a number, as raw text, or not at all
///
/// All public conversion functions accept anything convertible into this
/// type, so a caller can pass an `f64`, an integer, a `&str` or an
/// `Option<f64>` directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericInput<'a> {
    /// An already-numeric value
    Number(f64),
    /// Raw text to be read as a decimal numeral
    Text(&'a str),
    /// No value supplied
    Empty,
}

impl NumericInput<'_> {
    /// Coerce the input to a concrete value, if possible.
    ///
    /// Text is read leniently as a leading decimal prefix after skipping
    /// whitespace, so `"12abc"` resolves to `12.0` and `"abc"` to nothing.
    /// Non-finite numbers resolve to nothing.
    pub fn resolve(&self) -> Option<f64> {
        match self {
            NumericInput::Number(n) if n.is_finite() => Some(*n),
            NumericInput::Number(_) => None,
            NumericInput::Text(text) => parser::lenient_decimal(text),
            NumericInput::Empty => None,
        }
    }
}

impl From<f64> for NumericInput<'static> {
    fn from(value: f64) -> Self {
        NumericInput::Number(value)
    }
}

impl From<f32> for NumericInput<'static> {
    fn from(value: f32) -> Self {
        NumericInput::Number(f64::from(value))
    }
}

impl From<i32> for NumericInput<'static> {
    fn from(value: i32) -> Self {
        NumericInput::Number(f64::from(value))
    }
}

impl From<u32> for NumericInput<'static> {
    fn from(value: u32) -> Self {
        NumericInput::Number(f64::from(value))
    }
}

impl From<i64> for NumericInput<'static> {
    fn from(value: i64) -> Self {
        NumericInput::Number(value as f64)
    }
}

impl From<u64> for NumericInput<'static> {
    fn from(value: u64) -> Self {
        NumericInput::Number(value as f64)
    }
}

impl<'a> From<&'a str> for NumericInput<'a> {
    fn from(value: &'a str) -> Self {
        NumericInput::Text(value)
    }
}

impl<'a> From<&'a String> for NumericInput<'a> {
    fn from(value: &'a String) -> Self {
        NumericInput::Text(value.as_str())
    }
}

impl From<Option<f64>> for NumericInput<'static> {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(n) => NumericInput::Number(n),
            None => NumericInput::Empty,
        }
    }
}

/// Configuration for a live currency input binding
#[derive(Debug, Clone, PartialEq)]
pub struct InputOptions {
    /// Number of fractional digits kept while editing and formatting
    pub decimal_places: usize,
    /// Currency or unit name appended to the words display
    pub unit_name: String,
    /// Whether a words rendition should be produced alongside the digits
    pub show_words: bool,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            decimal_places: 2,
            unit_name: vocab::vocabulary().default_unit.clone(),
            show_words: true,
        }
    }
}

impl InputOptions {
    /// Set the number of fractional digits
    pub fn with_decimal_places(mut self, decimal_places: usize) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    /// Set the unit name used by the words display
    pub fn with_unit_name(mut self, unit_name: String) -> Self {
        self.unit_name = unit_name;
        self
    }

    /// Enable or disable the words display
    pub fn with_show_words(mut self, show_words: bool) -> Self {
        self.show_words = show_words;
        self
    }
}
