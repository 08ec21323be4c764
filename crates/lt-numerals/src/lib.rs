//! Lithuanian numerals spelled out in words.
//!
//! Cardinals agree with the gender of the counted noun and pick the right form
//! of each group noun (šimtas, tūkstantis, milijonas, ...) from the count's
//! last two digits. Ordinals agree with gender on their final word.
//!
//! ```
//! use lt_numerals::{Gender, to_cardinal_words, to_ordinal_words};
//!
//! assert_eq!(to_cardinal_words(11_000, Gender::Masculine), "vienuolika tūkstančių");
//! assert_eq!(to_ordinal_words(42, Gender::Feminine), "keturiasdešimt antra");
//! ```

pub mod converter;
pub mod lexicon;
pub mod parser;
pub mod types;

pub use converter::{
    Converter, OrdinalSpelling, cardinal_ending, ordinal_ending, to_cardinal_words,
    to_cardinal_words_with_and, to_ordinal_words,
};
pub use parser::{ParseError, parse_number};
pub use types::{
    Gender, GrammaticalNumber, HUNDRED, MAGNITUDE_GROUPS, MILLION, MagnitudeGroup,
    ParseGenderError, THOUSAND, magnitude_group,
};
