use crate::vocab::Vocabulary;
use crate::words::WordsError;

/// Convert a non-negative integer to a Persian phrase.
///
/// Three-digit groups are produced least-significant-first, each nonzero
/// group tagged with its scale unit, then reversed into reading order and
/// joined with the conjunction.
pub(super) fn integer_words(value: u64, vocab: &Vocabulary) -> Result<String, WordsError> {
    if value == 0 {
        return Ok(vocab.zero.clone());
    }

    let mut parts: Vec<String> = Vec::new();
    let mut remaining = value;
    let mut scale_index = 0usize;

    while remaining > 0 {
        let group = (remaining % 1000) as u16;
        if group > 0 {
            let Some(scale) = vocab.scales.get(scale_index) else {
                return Err(WordsError::MagnitudeOverflow);
            };
            let mut part = three_digit_group(group, vocab);
            if scale_index > 0 {
                part.push(' ');
                part.push_str(scale);
            }
            parts.push(part);
        }
        remaining /= 1000;
        scale_index += 1;
    }

    parts.reverse();
    let glue = format!(" {} ", vocab.conjunction);
    Ok(parts.join(&glue))
}

/// Phrase for a value in 0..=999; empty for 0, the caller owns the
/// all-zero case.
fn three_digit_group(value: u16, vocab: &Vocabulary) -> String {
    if value == 0 {
        return String::new();
    }

    let hundreds_digit = (value / 100) as usize;
    let remainder = (value % 100) as usize;
    let tens_digit = remainder / 10;
    let ones_digit = remainder % 10;

    let mut phrase = vocab.hundreds[hundreds_digit].clone();
    if remainder == 0 {
        return phrase;
    }
    if !phrase.is_empty() {
        phrase.push(' ');
        phrase.push_str(&vocab.conjunction);
        phrase.push(' ');
    }

    if remainder < 10 {
        phrase.push_str(&vocab.ones[ones_digit]);
    } else if remainder < 20 {
        phrase.push_str(&vocab.teens[remainder - 10]);
    } else {
        phrase.push_str(&vocab.tens[tens_digit]);
        if ones_digit > 0 {
            phrase.push(' ');
            phrase.push_str(&vocab.conjunction);
            phrase.push(' ');
            phrase.push_str(&vocab.ones[ones_digit]);
        }
    }
    phrase
}
