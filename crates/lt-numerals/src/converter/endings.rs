//! Gender endings appended to unit stems and ordinal stems.

use crate::types::Gender;

/// Ending of an ordinal stem: "pirm" + "as" / "a".
pub fn ordinal_ending(gender: Gender) -> &'static str {
    match gender {
        Gender::Masculine => "as",
        Gender::Feminine => "a",
    }
}

/// Ending of a cardinal unit stem for `n`.
///
/// Only 1-9 are stems; every other value is already a full word and takes
/// no ending.
///
/// ```
/// use lt_numerals::{Gender, cardinal_ending};
///
/// assert_eq!(cardinal_ending(Gender::Masculine, 3), "ys");
/// assert_eq!(cardinal_ending(Gender::Feminine, 3), "ejos");
/// assert_eq!(cardinal_ending(Gender::Feminine, 12), "");
/// ```
pub fn cardinal_ending(gender: Gender, n: u64) -> &'static str {
    match (gender, n) {
        (Gender::Masculine, 1) => "as",
        (Gender::Masculine, 2) => "u",
        (Gender::Masculine, 3) => "ys",
        (Gender::Masculine, 4..=9) => "i",
        (Gender::Feminine, 1) => "a",
        (Gender::Feminine, 2) => "vi",
        (Gender::Feminine, 3) => "ejos",
        (Gender::Feminine, 4..=9) => "ios",
        _ => "",
    }
}
