//! Numeral to words conversion.
//!
//! [`Converter`] holds the output settings and spells cardinals and ordinals.
//! The free functions use the default settings.

mod cardinal;
mod endings;
mod ordinal;

use bon::Builder;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::lexicon::{LEGACY_MILLION_PLURAL, LEGACY_MILLION_SINGULAR};
use crate::types::{Gender, MILLION};

pub use endings::{cardinal_ending, ordinal_ending};

/// Spelling of the million nouns in ordinal output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrdinalSpelling {
    /// "milijonas" / "milijonai", matching cardinal output.
    #[default]
    Standard,
    /// "miljonas" / "miljonai", as older releases produced.
    Legacy,
}

impl OrdinalSpelling {
    /// Word for an ordinal of exactly one million.
    pub fn million_singular(self) -> &'static str {
        match self {
            OrdinalSpelling::Standard => MILLION.singular,
            OrdinalSpelling::Legacy => LEGACY_MILLION_SINGULAR,
        }
    }

    /// Word following a count of millions.
    pub fn million_plural(self) -> &'static str {
        match self {
            OrdinalSpelling::Standard => MILLION.plural,
            OrdinalSpelling::Legacy => LEGACY_MILLION_PLURAL,
        }
    }
}

/// Spells integers as Lithuanian words.
///
/// A converter is a small `Copy` value with no interior state, so one instance
/// can be shared freely between threads.
///
/// # Example
///
/// ```
/// use lt_numerals::{Converter, Gender, OrdinalSpelling};
///
/// let converter = Converter::builder()
///     .spelling(OrdinalSpelling::Legacy)
///     .build();
///
/// assert_eq!(converter.cardinal(2021, Gender::Feminine), "du tūkstančiai dvidešimt viena");
/// assert_eq!(converter.ordinal(1_000_000, Gender::Masculine), "miljonas");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Builder)]
pub struct Converter {
    /// Million spelling used by [`Converter::ordinal`].
    #[builder(default)]
    spelling: OrdinalSpelling,
}

impl Converter {
    /// Create a converter with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// The configured ordinal spelling.
    pub fn spelling(&self) -> OrdinalSpelling {
        self.spelling
    }

    /// Spell `value` as a cardinal numeral agreeing with `gender`.
    pub fn cardinal(&self, value: i64, gender: Gender) -> String {
        self.cardinal_with_and(value, gender, true)
    }

    /// Spell `value` as a cardinal numeral.
    ///
    /// `add_and` exists for parity with converters of languages that insert a
    /// conjunction between groups. Lithuanian numerals never take one, so the
    /// flag does not change the output.
    pub fn cardinal_with_and(&self, value: i64, gender: Gender, add_and: bool) -> String {
        trace!(value, %gender, add_and, "spelling cardinal");
        cardinal::cardinal(value, gender)
    }

    /// Spell `value` as an ordinal numeral agreeing with `gender`.
    pub fn ordinal(&self, value: i32, gender: Gender) -> String {
        trace!(value, %gender, spelling = ?self.spelling, "spelling ordinal");
        ordinal::ordinal(value, gender, self.spelling)
    }
}

/// Spell `value` as a cardinal numeral with the default [`Converter`].
///
/// ```
/// use lt_numerals::{Gender, to_cardinal_words};
///
/// assert_eq!(to_cardinal_words(123, Gender::Masculine), "šimtas dvidešimt trys");
/// assert_eq!(to_cardinal_words(-5, Gender::Feminine), "minus penkios");
/// ```
pub fn to_cardinal_words(value: i64, gender: Gender) -> String {
    Converter::default().cardinal(value, gender)
}

/// Like [`to_cardinal_words`], taking the `add_and` flag explicitly.
pub fn to_cardinal_words_with_and(value: i64, gender: Gender, add_and: bool) -> String {
    Converter::default().cardinal_with_and(value, gender, add_and)
}

/// Spell `value` as an ordinal numeral with the default [`Converter`].
///
/// ```
/// use lt_numerals::{Gender, to_ordinal_words};
///
/// assert_eq!(to_ordinal_words(21, Gender::Masculine), "dvidešimt pirmas");
/// assert_eq!(to_ordinal_words(3, Gender::Feminine), "treča");
/// ```
pub fn to_ordinal_words(value: i32, gender: Gender) -> String {
    Converter::default().ordinal(value, gender)
}
