//! Ordinal numerals: "šimtas dvidešimt antras".
//!
//! Only the trailing word takes an ordinal ending. Millions and thousands keep
//! a cardinal count, and values of a billion or more are spelled as thousands
//! of millions.

use super::OrdinalSpelling;
use super::cardinal::spell_magnitude;
use super::endings::ordinal_ending;
use crate::lexicon::{HUNDREDS, MINUS, ORDINAL_STEMS, TENS};
use crate::types::{Gender, HUNDRED, MILLION, THOUSAND};

const MILLION_VALUE: u64 = MILLION.divisor();
const THOUSAND_VALUE: u64 = THOUSAND.divisor();
const HUNDRED_VALUE: u64 = HUNDRED.divisor();

/// Spell a signed value as an ordinal numeral.
pub(crate) fn ordinal(value: i32, gender: Gender, spelling: OrdinalSpelling) -> String {
    let ending = ordinal_ending(gender);
    if value == 0 {
        return format!("{}{ending}", ORDINAL_STEMS[0]);
    }

    let mut parts: Vec<String> = Vec::new();
    if value < 0 {
        parts.push(MINUS.to_string());
    }

    let mut number = u64::from(value.unsigned_abs());

    if number.div_euclid(MILLION_VALUE) > 0 {
        let millions = if number == MILLION_VALUE {
            spelling.million_singular().to_string()
        } else {
            format!(
                "{} {}",
                spell_magnitude(number.div_euclid(MILLION_VALUE), Gender::Masculine),
                spelling.million_plural()
            )
        };
        parts.push(millions);
        number %= MILLION_VALUE;
    }

    if number.div_euclid(THOUSAND_VALUE) > 0 {
        let thousands = if number == THOUSAND_VALUE {
            THOUSAND.plural.to_string()
        } else {
            format!(
                "{} {}",
                spell_magnitude(number.div_euclid(THOUSAND_VALUE), Gender::Masculine),
                THOUSAND.plural
            )
        };
        parts.push(thousands);
        number %= THOUSAND_VALUE;
    }

    if number.div_euclid(HUNDRED_VALUE) > 0 {
        let hundreds = if number % HUNDRED_VALUE == 0 {
            format!("{}{ending}", HUNDREDS[number.div_euclid(HUNDRED_VALUE) as usize])
        } else if number > HUNDRED_VALUE && number < 2 * HUNDRED_VALUE {
            HUNDRED.singular.to_string()
        } else {
            format!(
                "{} {}",
                spell_magnitude(number.div_euclid(HUNDRED_VALUE), Gender::Masculine),
                HUNDRED.plural
            )
        };
        parts.push(hundreds);
        number %= HUNDRED_VALUE;
    }

    if number > 19 {
        let mut tens = TENS[number.div_euclid(10) as usize].to_string();
        if number % 10 == 0 {
            tens.push_str(ending);
        }
        parts.push(tens);
        number %= 10;
    }

    if number > 0 {
        parts.push(format!("{}{ending}", ORDINAL_STEMS[number as usize]));
    }

    parts.join(" ")
}
