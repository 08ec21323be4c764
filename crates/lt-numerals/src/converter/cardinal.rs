//! Cardinal numerals: "du tūkstančiai trys šimtai keturiasdešimt penki".

use super::endings::cardinal_ending;
use crate::lexicon::{MINUS, TENS, UNITS, ZERO};
use crate::types::{Gender, MAGNITUDE_GROUPS, MagnitudeGroup};

/// Spell a signed value as a cardinal numeral.
pub(crate) fn cardinal(value: i64, gender: Gender) -> String {
    if value < 0 {
        format!("{MINUS} {}", spell_magnitude(value.unsigned_abs(), gender))
    } else {
        spell_magnitude(value.unsigned_abs(), gender)
    }
}

/// Spell a non-negative magnitude.
///
/// Gender only affects the trailing unit word; group counts are always
/// spelled masculine.
pub(crate) fn spell_magnitude(magnitude: u64, gender: Gender) -> String {
    if magnitude == 0 {
        return ZERO.to_string();
    }

    let mut parts: Vec<String> = Vec::new();
    let mut remaining = magnitude;

    for group in &MAGNITUDE_GROUPS {
        let count = remaining.div_euclid(group.divisor());
        if count > 0 {
            parts.push(group_phrase(group, count));
            remaining %= group.divisor();
        }
    }

    if remaining > 19 {
        parts.push(TENS[remaining.div_euclid(10) as usize].to_string());
        remaining %= 10;
    }

    if remaining > 0 {
        parts.push(format!(
            "{}{}",
            UNITS[remaining as usize],
            cardinal_ending(gender, remaining)
        ));
    }

    parts.join(" ")
}

/// "tūkstantis" for one, otherwise the masculine count followed by the
/// agreeing noun: "du tūkstančiai", "vienuolika tūkstančių".
fn group_phrase(group: &MagnitudeGroup, count: u64) -> String {
    if count == 1 {
        return group.singular.to_string();
    }
    let prefix = spell_magnitude(count, Gender::Masculine);
    format!("{prefix} {}", group.noun_for(count))
}
