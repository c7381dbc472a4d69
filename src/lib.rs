pub mod formatter;
pub mod input;
pub mod parser;
pub mod types;
pub mod vocab;
pub mod words;

pub use formatter::{format_number, unformat_number, unformat_number_strict};
pub use input::{CurrencyInput, InputUpdate};
pub use types::*;
pub use words::{WordsError, to_words, to_words_with_unit, try_to_words};
