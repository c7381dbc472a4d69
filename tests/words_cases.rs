//! Fixture-driven conversion cases loaded from `words-cases.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use currency_format::{format_number, to_words};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct WordsCase {
    value: f64,
    words: String,
    formatted: String,
}

#[derive(Debug, Deserialize)]
struct WordsCases {
    cases: Vec<WordsCase>,
}

fn load_cases() -> WordsCases {
    let toml_path: PathBuf = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("words-cases.toml");

    let toml_content = fs::read_to_string(&toml_path)
        .unwrap_or_else(|e| panic!("Failed to read TOML file {}: {}", toml_path.display(), e));

    toml::from_str(&toml_content)
        .unwrap_or_else(|e| panic!("Failed to parse TOML file {}: {}", toml_path.display(), e))
}

#[test]
fn test_fixture_cases() {
    let suite = load_cases();
    let mut failures = Vec::new();

    for (i, case) in suite.cases.iter().enumerate() {
        let words = to_words(case.value);
        if words != case.words {
            failures.push(format!(
                "[case {}] to_words({}) = {:?}, expected {:?}",
                i + 1,
                case.value,
                words,
                case.words
            ));
        }

        let formatted = format_number(case.value, 2);
        if formatted != case.formatted {
            failures.push(format!(
                "[case {}] format_number({}, 2) = {:?}, expected {:?}",
                i + 1,
                case.value,
                formatted,
                case.formatted
            ));
        }
    }

    assert!(failures.is_empty(), "\n{}", failures.join("\n"));
}
