use currency_format::{WordsError, to_words, to_words_with_unit, try_to_words};

#[test]
fn test_zero() {
    assert_eq!(to_words(0), "صفر");
    assert_eq!(to_words(0.0), "صفر");
    assert_eq!(to_words(-0.0), "صفر");
}

#[test]
fn test_small_integers() {
    assert_eq!(to_words(5), "پنج");
    assert_eq!(to_words(15), "پانزده");
    assert_eq!(to_words(25), "بیست و پنج");
    assert_eq!(to_words(110), "یکصد و ده");
    assert_eq!(to_words(123), "یکصد و بیست و سه");
    assert_eq!(to_words(300), "سیصد");
}

#[test]
fn test_scaled_integers() {
    assert_eq!(to_words(1001), "یک هزار و یک");
    assert_eq!(to_words(1_000_000), "یک میلیون");
    assert_eq!(
        to_words(1_234_567),
        "یک میلیون و دویست و سی و چهار هزار و پانصد و شصت و هفت"
    );
    assert_eq!(to_words(2_000_000_000), "دو میلیارد");
}

#[test]
fn test_fractions_read_as_integers() {
    // Trailing zeros are stripped first: .5 reads as five, .25 as twenty-five
    assert_eq!(to_words(0.5), "صفر ممیز پنج");
    assert_eq!(to_words(10.07), "ده ممیز هفت");
    assert_eq!(to_words(1.25), "یک ممیز بیست و پنج");
}

#[test]
fn test_negative_values() {
    assert_eq!(to_words(-5.25), "منفی پنج ممیز بیست و پنج");
    assert_eq!(to_words(-1001), "منفی یک هزار و یک");
    // Sign comes from the original value, independent of rounding
    assert_eq!(to_words(-1e-9), "منفی صفر");
}

#[test]
fn test_negative_matches_prefixed_absolute() {
    for &sample in &[1.0, 42.5, 1001.0, 1_234_567.0] {
        let positive = to_words(sample);
        let negative = to_words(-sample);
        assert_eq!(negative, format!("منفی {positive}"));
    }
}

#[test]
fn test_rounding_to_eight_places() {
    assert_eq!(to_words(1.999999999), "دو");
    assert_eq!(to_words(2.000000001), "دو");
}

#[test]
fn test_invalid_input_is_empty() {
    assert_eq!(to_words(""), "");
    assert_eq!(to_words("abc"), "");
    assert_eq!(to_words(f64::NAN), "");
    assert_eq!(to_words(None::<f64>), "");
}

#[test]
fn test_text_input_is_coerced() {
    assert_eq!(to_words("1001"), "یک هزار و یک");
    assert_eq!(to_words("-5.25"), "منفی پنج ممیز بیست و پنج");
}

#[test]
fn test_with_unit() {
    assert_eq!(to_words_with_unit(150000, "تومان"), "یکصد و پنجاه هزار تومان");
    assert_eq!(to_words_with_unit(1.5, "دلار"), "یک ممیز پنج دلار");
    assert_eq!(to_words_with_unit("", "دلار"), "");
    // Zero converts to a nonempty phrase, so the unit is appended
    assert_eq!(to_words_with_unit(0, "دلار"), "صفر دلار");
}

#[test]
fn test_magnitude_overflow_policy() {
    assert_eq!(try_to_words(1e15), Err(WordsError::MagnitudeOverflow));
    assert_eq!(to_words(1e15), "");
    assert!(try_to_words(999_999_999_999_999i64).is_ok());
}

#[test]
fn test_strict_error_for_non_numeric() {
    assert_eq!(try_to_words("abc"), Err(WordsError::NotNumeric));
    assert_eq!(try_to_words(f64::NAN), Err(WordsError::NotNumeric));
}
