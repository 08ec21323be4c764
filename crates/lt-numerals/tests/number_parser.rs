//! Integration tests for grouped integer parsing.

use lt_numerals::{ParseError, parse_number};

// =============================================================================
// Accepted forms
// =============================================================================

#[test]
fn plain_and_signed_integers() {
    assert_eq!(parse_number("0"), Ok(0));
    assert_eq!(parse_number("42"), Ok(42));
    assert_eq!(parse_number("+7"), Ok(7));
    assert_eq!(parse_number("-7"), Ok(-7));
    assert_eq!(parse_number("\u{2212}7"), Ok(-7));
    assert_eq!(parse_number("-0"), Ok(0));
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(parse_number("  12 "), Ok(12));
    assert_eq!(parse_number("\t-5\n"), Ok(-5));
}

#[test]
fn digit_groups() {
    assert_eq!(parse_number("1 000"), Ok(1000));
    assert_eq!(parse_number("-1 234 567"), Ok(-1_234_567));
    assert_eq!(parse_number("1\u{a0}000"), Ok(1000));
    assert_eq!(parse_number("1\u{202f}000"), Ok(1000));
    assert_eq!(parse_number("1_000_000"), Ok(1_000_000));
}

#[test]
fn full_i64_range() {
    assert_eq!(parse_number("9 223 372 036 854 775 807"), Ok(i64::MAX));
    assert_eq!(parse_number("-9223372036854775808"), Ok(i64::MIN));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn empty_input() {
    assert_eq!(parse_number(""), Err(ParseError::Empty));
    assert_eq!(parse_number("   "), Err(ParseError::Empty));
}

#[test]
fn missing_digits() {
    let err = parse_number("abc").unwrap_err();
    assert_eq!(err.offset(), 0);
    assert!(matches!(err, ParseError::Syntax { .. }));

    let err = parse_number("-").unwrap_err();
    assert_eq!(err.offset(), 1);

    let err = parse_number("  x").unwrap_err();
    assert_eq!(err.offset(), 2);
}

#[test]
fn trailing_garbage_points_at_first_bad_character() {
    assert_eq!(
        parse_number("12,5"),
        Err(ParseError::Syntax {
            offset: 2,
            message: "unexpected character: ','".to_string()
        })
    );
}

#[test]
fn only_ascii_whitespace_is_trimmed() {
    assert_eq!(
        parse_number("\u{a0}5"),
        Err(ParseError::Syntax {
            offset: 0,
            message: "expected a digit".to_string()
        })
    );
    let err = parse_number("5\u{a0}").unwrap_err();
    assert_eq!(err.offset(), 1);
}

#[test]
fn doubled_separator_is_rejected() {
    let err = parse_number("1  000").unwrap_err();
    assert_eq!(err.offset(), 1);
    assert_eq!(err.to_string(), "syntax error at offset 1: unexpected character: ' '");
}

#[test]
fn overflow_reports_whole_number_span() {
    let err = parse_number(" 9223372036854775808").unwrap_err();
    assert_eq!(err, ParseError::OutOfRange { offset: 1, len: 19 });
    assert_eq!(err.span_len(), 19);

    let err = parse_number("123456789012345678901234567890123456789012345").unwrap_err();
    assert!(matches!(err, ParseError::OutOfRange { offset: 0, .. }));
}
