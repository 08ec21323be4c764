//! Grouped integer parser using winnow.
//!
//! Accepts integers the way they are printed in Lithuanian text: an optional
//! sign (including the typographic minus) and digit groups separated by a
//! space, a no-break space, a narrow no-break space or an underscore.

use winnow::combinator::{alt, opt, separated};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

use super::error::ParseError;

/// Parse a signed integer such as `"-1 234 567"` or `"1_000"`.
///
/// # Examples
///
/// ```
/// use lt_numerals::parse_number;
///
/// assert_eq!(parse_number("1 000 000"), Ok(1_000_000));
/// assert_eq!(parse_number("−42"), Ok(-42));
/// assert!(parse_number("12,5").is_err());
/// ```
pub fn parse_number(input: &str) -> Result<i64, ParseError> {
    let body = input.trim_ascii_start();
    let leading = input.len() - body.len();
    let body = body.trim_ascii_end();
    if body.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut remaining = body;
    let (negative, digits) = match signed_digits(&mut remaining) {
        Ok(parsed) => parsed,
        Err(_) => {
            return Err(ParseError::Syntax {
                offset: leading + body.len() - remaining.len(),
                message: "expected a digit".to_string(),
            });
        }
    };

    if let Some(c) = remaining.chars().next() {
        return Err(ParseError::Syntax {
            offset: leading + body.len() - remaining.len(),
            message: format!("unexpected character: '{c}'"),
        });
    }

    digits
        .parse::<i128>()
        .ok()
        .map(|magnitude| if negative { -magnitude } else { magnitude })
        .and_then(|value| i64::try_from(value).ok())
        .ok_or(ParseError::OutOfRange {
            offset: leading,
            len: body.len(),
        })
}

/// Parse a sign and digit groups, returning whether the value is negative
/// and the digits with separators removed.
fn signed_digits(input: &mut &str) -> ModalResult<(bool, String)> {
    (sign, digits).parse_next(input)
}

/// Parse an optional sign: `+`, `-` or U+2212.
fn sign(input: &mut &str) -> ModalResult<bool> {
    opt(alt(('+'.value(false), '-'.value(true), '\u{2212}'.value(true))))
        .map(|sign: Option<bool>| sign.unwrap_or(false))
        .parse_next(input)
}

/// Parse one or more digit groups joined by single separators.
fn digits(input: &mut &str) -> ModalResult<String> {
    separated(1.., digit_group, group_separator)
        .map(|groups: Vec<&str>| groups.concat())
        .parse_next(input)
}

/// Parse a run of ASCII digits.
fn digit_group<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_digit()).parse_next(input)
}

/// Parse a digit group separator.
fn group_separator(input: &mut &str) -> ModalResult<char> {
    one_of([' ', '\u{a0}', '\u{202f}', '_']).parse_next(input)
}
