#![expect(missing_docs)]
#![expect(clippy::needless_raw_string_hashes)]

//! End-to-end parses that must fail with a specific [`ErrorKind`].

use jsontree::{ErrorKind, parse};
use rstest::rstest;

fn kind(input: &[u8]) -> ErrorKind {
    parse(input).unwrap_err().kind
}

#[rstest]
#[case(b"", ErrorKind::ExpectValue)]
#[case(b"nul", ErrorKind::InvalidValue)]
#[case(b"1 2", ErrorKind::RootNotSingular)]
#[case(b"1e400", ErrorKind::NumberTooBig)]
#[case(br#"["a""#, ErrorKind::MissQuotationMark)]
#[case(br#""\z""#, ErrorKind::InvalidStringEscape)]
#[case(b"[1 2]", ErrorKind::MissCommaOrSquareBracket)]
#[case(br#"{,}"#, ErrorKind::MissKey)]
#[case(br#"{"a" 1}"#, ErrorKind::MissColon)]
fn each_malformed_input_reports_its_kind(#[case] input: &[u8], #[case] expected: ErrorKind) {
    assert_eq!(kind(input), expected);
}

#[test]
fn empty_or_whitespace_only_is_expect_value() {
    assert_eq!(kind(b""), ErrorKind::ExpectValue);
    assert_eq!(kind(b"   \t\n"), ErrorKind::ExpectValue);
}

#[test]
fn malformed_literals_and_numbers_are_invalid_value() {
    assert_eq!(kind(b"nul"), ErrorKind::InvalidValue);
    assert_eq!(kind(b"tru"), ErrorKind::InvalidValue);
    assert_eq!(kind(b"fals"), ErrorKind::InvalidValue);
    assert_eq!(kind(b"+1"), ErrorKind::InvalidValue);
    assert_eq!(kind(b".1"), ErrorKind::InvalidValue);
}

#[test]
fn trailing_input_is_root_not_singular() {
    assert_eq!(kind(b"1 2"), ErrorKind::RootNotSingular);
    assert_eq!(kind(br#"{} {}"#), ErrorKind::RootNotSingular);
}

#[test]
fn overflowing_magnitude_is_number_too_big() {
    assert_eq!(kind(b"1e400"), ErrorKind::NumberTooBig);
}

#[test]
fn unterminated_string_is_miss_quotation_mark() {
    assert_eq!(kind(br#"["a""#), ErrorKind::MissQuotationMark);
}

#[test]
fn bad_escape_is_invalid_string_escape() {
    assert_eq!(kind(br#""\z""#), ErrorKind::InvalidStringEscape);
}

#[test]
fn raw_control_byte_is_invalid_string_char() {
    let mut input = vec![b'"'];
    input.push(9); // a raw tab, not the two-byte escape `\t`
    input.push(b'"');
    assert_eq!(kind(&input), ErrorKind::InvalidStringChar);
}

#[test]
fn array_without_separator_is_miss_comma_or_square_bracket() {
    assert_eq!(kind(b"[1 2]"), ErrorKind::MissCommaOrSquareBracket);
    assert_eq!(kind(b"[1,2"), ErrorKind::MissCommaOrSquareBracket);
}

#[test]
fn object_errors() {
    assert_eq!(kind(br#"{"a":1"#), ErrorKind::MissCommaOrCurlyBracket);
    assert_eq!(kind(br#"{,}"#), ErrorKind::MissKey);
    assert_eq!(kind(br#"{"a" 1}"#), ErrorKind::MissColon);
}
