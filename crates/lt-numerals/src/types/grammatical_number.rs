//! Numeral agreement classes.
//!
//! A Lithuanian noun counted by a numeral takes one of three forms depending on
//! the last two digits of the count:
//!
//! - 1, 21, 31, ... (but not 11): nominative singular, "vienas tūkstantis"
//! - 2-9, 22-29, ... (but not 12-19): nominative plural, "du tūkstančiai"
//! - 0, 10-20, 30, ...: genitive plural, "dešimt tūkstančių"
//!
//! CLDR calls these categories `one`, `few` and `other`.

use icu_plurals::PluralCategory;
use serde::{Deserialize, Serialize};

/// Which form a noun takes after a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrammaticalNumber {
    /// Counts ending in 1, except 11.
    SingularAgreeing,
    /// Counts ending in 2-9, except 12-19.
    PluralAgreeing,
    /// Everything else: 0, 10-20 and multiples of ten.
    SpecialCase,
}

impl GrammaticalNumber {
    /// Classify a count by its last two digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use lt_numerals::GrammaticalNumber;
    ///
    /// assert_eq!(GrammaticalNumber::classify(21), GrammaticalNumber::SingularAgreeing);
    /// assert_eq!(GrammaticalNumber::classify(14), GrammaticalNumber::SpecialCase);
    /// assert_eq!(GrammaticalNumber::classify(104), GrammaticalNumber::PluralAgreeing);
    /// ```
    pub fn classify(n: u64) -> Self {
        let tens = (n % 100).div_euclid(10);
        match n % 10 {
            _ if tens == 1 => GrammaticalNumber::SpecialCase,
            1 => GrammaticalNumber::SingularAgreeing,
            2..=9 => GrammaticalNumber::PluralAgreeing,
            _ => GrammaticalNumber::SpecialCase,
        }
    }

    /// Pick the noun form matching this class.
    pub fn select<'a>(self, singular: &'a str, plural: &'a str, special_case: &'a str) -> &'a str {
        match self {
            GrammaticalNumber::SingularAgreeing => singular,
            GrammaticalNumber::PluralAgreeing => plural,
            GrammaticalNumber::SpecialCase => special_case,
        }
    }

    /// The CLDR plural category for Lithuanian integers in this class.
    pub fn plural_category(self) -> PluralCategory {
        match self {
            GrammaticalNumber::SingularAgreeing => PluralCategory::One,
            GrammaticalNumber::PluralAgreeing => PluralCategory::Few,
            GrammaticalNumber::SpecialCase => PluralCategory::Other,
        }
    }

    /// Name of the CLDR category: `one`, `few` or `other`.
    pub fn cldr_name(self) -> &'static str {
        match self.plural_category() {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }

    /// Short label used in tables and JSON output.
    pub fn label(self) -> &'static str {
        match self {
            GrammaticalNumber::SingularAgreeing => "singular",
            GrammaticalNumber::PluralAgreeing => "plural",
            GrammaticalNumber::SpecialCase => "special",
        }
    }
}
