use strum::IntoEnumIterator;

use crate::normalizer::{cap_for, format_pretty_ua, normalize, Dialect, NormalizedNumber};

use super::init_logger;

fn assert_valid(raw: &str, e164: &str) {
    let number = normalize(raw);
    assert!(number.valid, "{raw:?} should be valid, got {number:?}");
    assert_eq!(number.e164, e164, "e164 of {raw:?}");
    assert_eq!(number.digits, &e164[1..]);
    assert_eq!(number.last9, &e164[4..]);
}

#[test]
fn canonical_input_is_truncated_to_twelve_digits() {
    init_logger();
    assert_valid("380971234567", "+380971234567");
    assert_valid("3809712345678999", "+380971234567");
    assert_valid("+380 97 123 45 67", "+380971234567");
    assert_valid("+38 (097) 123-45-67", "+380971234567");
    assert_valid("++380971234567", "+380971234567");
    assert_valid("tel: 380-97-123-45-67 ", "+380971234567");
}

#[test]
fn national_trunk_form_converts_at_ten_digits() {
    init_logger();
    assert_valid("0501234567", "+380501234567");
    assert_valid("050 123 45 67", "+380501234567");

    let partial = normalize("050123456");
    assert_eq!(partial.digits, "050123456");
    assert!(!partial.valid);
    assert_eq!(partial.e164, "");
    // nine digits are present, even though they are not the subscriber part yet
    assert_eq!(partial.last9, "050123456");
}

#[test]
fn legacy_eighty_form_converts_at_eleven_digits() {
    init_logger();
    assert_valid("80971234567", "+380971234567");
    assert_valid("8 097 123 45 67", "+380971234567");

    let partial = normalize("8097123456");
    assert_eq!(partial.digits, "8097123456");
    assert_eq!(partial.dialect(), Dialect::LegacyEighty);
    assert!(!partial.valid);
}

#[test]
fn long_distance_form() {
    init_logger();
    // ten digits: the leading 8 is dropped
    assert_valid("8971234567", "+380971234567");
    // eleven digits: only the trailing nine are kept
    assert_valid("81971234567", "+380971234567");
    assert_valid("819712345679", "+380971234567");
}

#[test]
fn bare_subscriber_number() {
    init_logger();
    assert_valid("971234567", "+380971234567");
    assert_valid("97 123 45 67", "+380971234567");
    // capped to nine digits before the conversion
    assert_valid("9712345678", "+380971234567");
}

#[test]
fn incomplete_input_stays_in_its_dialect() {
    init_logger();
    let number = normalize("123");
    assert_eq!(
        number,
        NormalizedNumber {
            digits: "123".to_owned(),
            e164: String::new(),
            last9: String::new(),
            valid: false,
        }
    );

    let number = normalize("+38097");
    assert_eq!(number.digits, "38097");
    assert!(number.is_canonical());
    assert!(!number.valid);
}

#[test]
fn noise_only_input_is_empty() {
    init_logger();
    for raw in ["", "   ", "abc", "+", "+++", "-()"] {
        assert_eq!(normalize(raw), NormalizedNumber::default(), "{raw:?}");
    }
}

#[test]
fn long_paste_is_capped_before_conversion() {
    init_logger();
    assert_valid("05012345678901234567", "+380501234567");
    assert_valid("80971234567000000000", "+380971234567");
}

#[test]
fn unicode_decimals_are_folded() {
    init_logger();
    assert_valid("０９７１２３４５６７", "+380971234567");
}

#[test]
fn renormalizing_a_valid_result_is_a_no_op() {
    init_logger();
    let inputs = [
        "0501234567",
        "80971234567",
        "8971234567",
        "81971234567",
        "971234567",
        "+380 97 123 45 67",
        "3809712345678999",
    ];
    for raw in inputs {
        let first = normalize(raw);
        assert!(first.valid);
        for again in [normalize(&first.e164), normalize(&first.digits)] {
            assert_eq!(again.valid, first.valid, "{raw:?}");
            assert_eq!(again.e164, first.e164, "{raw:?}");
            assert_eq!(again.last9, first.last9, "{raw:?}");
        }
    }
}

#[test]
fn last9_tracks_the_tail_of_digits() {
    init_logger();
    let inputs = [
        "", "1", "12345678", "123456789", "0501", "050123456", "0501234567", "8097123456",
        "+38097", "380971234567",
    ];
    for raw in inputs {
        let number = normalize(raw);
        if number.digits.len() >= 9 {
            assert_eq!(number.last9, &number.digits[number.digits.len() - 9..], "{raw:?}");
        } else {
            assert_eq!(number.last9, "", "{raw:?}");
        }
    }
}

#[test]
fn normalized_digits_never_exceed_the_dialect_cap() {
    init_logger();
    let long_tail = "1234567890123456";
    for dialect in Dialect::iter() {
        let raw = format!("{}{}", dialect.prefix(), long_tail);
        let number = normalize(&raw);
        assert!(
            number.digits.len() <= cap_for(&number.digits),
            "{dialect:?}: {number:?}"
        );
    }
}

#[test]
fn pretty_format_groups() {
    init_logger();
    assert_eq!(format_pretty_ua("380971234567"), "+380 97 123 45 67");
    assert_eq!(format_pretty_ua("380"), "+380");
    assert_eq!(format_pretty_ua("3809"), "+380 9");
    assert_eq!(format_pretty_ua("38097123"), "+380 97 123");
    assert_eq!(format_pretty_ua("3809712345678"), "+380 97 123 45 67");
    assert_eq!(format_pretty_ua("0971234567"), "");
    assert_eq!(format_pretty_ua(""), "");

    let pretty = format_pretty_ua("380501234567");
    let groups: Vec<&str> = pretty.split(' ').collect();
    assert_eq!(groups, ["+380", "50", "123", "45", "67"]);
}
