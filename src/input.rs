//! Live-formatting glue for a currency input field
//!
//! This module keeps the pure formatting functions wired to an editable
//! text field without assuming any particular UI toolkit: the host
//! environment forwards each raw edit (text plus cursor position) and
//! applies the returned text, cursor and words display back to its widget.

use crate::formatter::{format_number, unformat_number};
use crate::parser;
use crate::types::InputOptions;
use crate::words::to_words_with_unit;

type ChangeCallback = Box<dyn FnMut(f64, &str)>;

/// Outcome of feeding one edit through the formatter
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputUpdate {
    /// Numeric value of the field after the edit
    pub value: f64,
    /// Text the field should now show
    pub text: String,
    /// Cursor position within `text`
    pub cursor: usize,
    /// Words display line; empty when disabled or the value is not positive
    pub words: String,
}

/// Live formatter state for one bound input field
pub struct CurrencyInput {
    options: InputOptions,
    last_emitted: String,
    on_change: Option<ChangeCallback>,
}

impl CurrencyInput {
    pub fn new(options: InputOptions) -> Self {
        Self {
            options,
            last_emitted: String::new(),
            on_change: None,
        }
    }

    /// Register a callback fired when the formatted text changes
    pub fn with_on_change(mut self, callback: impl FnMut(f64, &str) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Handle one raw edit of the field.
    ///
    /// Disallowed characters are stripped (including any minus sign — live
    /// input is non-negative by construction), extra decimal markers are
    /// collapsed, fractional digits are truncated to the configured count,
    /// and the remainder is reformatted. The cursor shifts by the change in
    /// text length, clamped to the new text.
    pub fn apply(&mut self, raw: &str, cursor: usize) -> InputUpdate {
        let cleaned = sanitize(raw, self.options.decimal_places);

        if cleaned.is_empty() {
            if let Some(callback) = self.on_change.as_mut() {
                callback(0.0, "");
            }
            return InputUpdate::default();
        }

        let Some(value) = parser::lenient_decimal(&cleaned) else {
            // A lone decimal marker parses to nothing; leave the field as-is
            return InputUpdate {
                value: 0.0,
                text: raw.to_string(),
                cursor,
                words: String::new(),
            };
        };

        let text = format_number(value, self.options.decimal_places);
        let cursor = shifted_cursor(cursor, raw.chars().count(), text.chars().count());
        let words = self.words_for(value);

        if text != self.last_emitted {
            self.last_emitted = text.clone();
            if let Some(callback) = self.on_change.as_mut() {
                callback(value, &text);
            }
        }

        InputUpdate {
            value,
            text,
            cursor,
            words,
        }
    }

    /// Settle the field when editing ends.
    ///
    /// Positive values are reparsed and reformatted; anything else leaves
    /// the text untouched.
    pub fn commit(&self, text: &str) -> String {
        let value = unformat_number(text);
        if value > 0.0 {
            format_number(value, self.options.decimal_places)
        } else {
            text.to_string()
        }
    }

    /// Words display line for the current field text
    pub fn words_text(&self, text: &str) -> String {
        self.words_for(unformat_number(text))
    }

    fn words_for(&self, value: f64) -> String {
        if self.options.show_words && value > 0.0 {
            to_words_with_unit(value, &self.options.unit_name)
        } else {
            String::new()
        }
    }
}

/// Strip characters outside `[0-9.]`, collapse to one decimal marker and
/// truncate fractional digits to `decimal_places`.
fn sanitize(raw: &str, decimal_places: usize) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    match cleaned.find('.') {
        Some(dot) => {
            let (head, tail) = cleaned.split_at(dot + 1);
            let mut rebuilt = head.to_string();
            rebuilt.extend(
                tail.chars()
                    .filter(|c| *c != '.')
                    .take(decimal_places),
            );
            rebuilt
        }
        None => cleaned,
    }
}

fn shifted_cursor(cursor: usize, old_len: usize, new_len: usize) -> usize {
    let shifted = cursor as isize + new_len as isize - old_len as isize;
    shifted.clamp(0, new_len as isize) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("1a2b.3c4", 2), "12.34");
        assert_eq!(sanitize("-12", 2), "12");
        assert_eq!(sanitize("1.2.3", 2), "1.23");
        assert_eq!(sanitize("1.23456", 2), "1.23");
        assert_eq!(sanitize("1.", 0), "1.");
        assert_eq!(sanitize("", 2), "");
    }

    #[test]
    fn test_cursor_shift_clamps() {
        assert_eq!(shifted_cursor(4, 4, 5), 5);
        assert_eq!(shifted_cursor(1, 5, 1), 0);
        assert_eq!(shifted_cursor(0, 0, 0), 0);
    }
}
