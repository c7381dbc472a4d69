//! Persian vocabulary for number-to-words conversion
//!
//! This module loads the fixed word tables (ones, teens, tens, hundreds,
//! scale units and connective words) from an embedded TOML file, once per
//! process.

use std::fmt;
use std::sync::OnceLock;

/// Error type for vocabulary loading
#[derive(Debug, Clone, PartialEq)]
pub enum VocabError {
    /// A required table or word is absent from the embedded data
    MissingEntry(String),
    /// An error occurred while parsing the vocabulary data
    ParseError(String),
}

impl fmt::Display for VocabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VocabError::MissingEntry(entry) => write!(f, "Vocabulary entry not found: {}", entry),
            VocabError::ParseError(msg) => write!(f, "Error parsing vocabulary data: {}", msg),
        }
    }
}

impl std::error::Error for VocabError {}

type Result<T> = std::result::Result<T, VocabError>;

/// The fixed Persian word tables
///
/// Digit tables are indexed by digit value (`ones[3]` is the word for 3,
/// `teens[3]` the word for 13). `scales` is indexed by the position of a
/// three-digit group: units, thousand, million, billion, trillion.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vocabulary {
    pub ones: [String; 10],
    pub teens: [String; 10],
    pub tens: [String; 10],
    pub hundreds: [String; 10],
    pub scales: Vec<String>,
    pub zero: String,
    pub negative: String,
    pub conjunction: String,
    pub decimal_marker: String,
    pub default_unit: String,
}

// Global singleton for the vocabulary tables
static VOCABULARY: OnceLock<Vocabulary> = OnceLock::new();

impl Vocabulary {
    /// Load the embedded vocabulary data from the TOML file
    fn load_embedded() -> Result<Self> {
        let raw = include_str!("vocab/persian.toml");
        let parsed: toml::Value =
            toml::from_str(raw).map_err(|e| VocabError::ParseError(e.to_string()))?;

        let root = parsed
            .as_table()
            .ok_or_else(|| VocabError::ParseError("Root is not a table".to_string()))?;

        let numerals = root
            .get("numerals")
            .and_then(|v| v.as_table())
            .ok_or_else(|| VocabError::MissingEntry("numerals".to_string()))?;
        let words = root
            .get("words")
            .and_then(|v| v.as_table())
            .ok_or_else(|| VocabError::MissingEntry("words".to_string()))?;

        Ok(Self {
            ones: digit_table(numerals, "ones")?,
            teens: digit_table(numerals, "teens")?,
            tens: digit_table(numerals, "tens")?,
            hundreds: digit_table(numerals, "hundreds")?,
            scales: string_list(numerals, "scales")?,
            zero: word(words, "zero")?,
            negative: word(words, "negative")?,
            conjunction: word(words, "conjunction")?,
            decimal_marker: word(words, "decimal_marker")?,
            default_unit: word(words, "default_unit")?,
        })
    }
}

fn string_list(table: &toml::value::Table, key: &str) -> Result<Vec<String>> {
    let entries = table
        .get(key)
        .and_then(|v| v.as_array())
        .ok_or_else(|| VocabError::MissingEntry(key.to_string()))?;

    entries
        .iter()
        .map(|entry| {
            entry
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| VocabError::ParseError(format!("{} has a non-string entry", key)))
        })
        .collect()
}

fn digit_table(table: &toml::value::Table, key: &str) -> Result<[String; 10]> {
    string_list(table, key)?.try_into().map_err(|entries: Vec<String>| {
        VocabError::ParseError(format!("{} must have 10 entries, found {}", key, entries.len()))
    })
}

fn word(table: &toml::value::Table, key: &str) -> Result<String> {
    table
        .get(key)
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| VocabError::MissingEntry(key.to_string()))
}

/// Get the process-wide vocabulary instance
pub fn vocabulary() -> &'static Vocabulary {
    VOCABULARY.get_or_init(|| {
        Vocabulary::load_embedded().unwrap_or_else(|e| {
            // Log the error and continue with empty tables
            eprintln!("Failed to load embedded vocabulary data: {}", e);
            Vocabulary::default()
        })
    })
}
