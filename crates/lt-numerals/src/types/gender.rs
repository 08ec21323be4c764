use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{ParseGenderError, compute_suggestions};

/// Names accepted for [`Gender::Masculine`], canonical name first.
const MASCULINE_NAMES: &[&str] = &["masculine", "masc", "m", "vyriškoji", "vyr"];

/// Names accepted for [`Gender::Feminine`], canonical name first.
const FEMININE_NAMES: &[&str] = &["feminine", "fem", "f", "moteriškoji", "mot"];

/// Neuter exists in Lithuanian but numerals never agree with it.
const NEUTER_NAMES: &[&str] = &["neuter", "neut", "bevardė"];

/// Grammatical gender a numeral agrees with.
///
/// Lithuanian numerals inflect for masculine and feminine only, so the enum is
/// closed: an unsupported gender cannot reach the converter. Text naming one
/// is rejected by [`Gender::from_str`].
///
/// # Example
///
/// ```
/// use lt_numerals::Gender;
///
/// let gender: Gender = "fem".parse().unwrap();
/// assert_eq!(gender, Gender::Feminine);
/// assert_eq!(gender.to_string(), "feminine");
/// assert!("neuter".parse::<Gender>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Masculine,
    Feminine,
}

impl Gender {
    /// Both genders, masculine first.
    pub const ALL: [Gender; 2] = [Gender::Masculine, Gender::Feminine];

    /// Canonical English name.
    pub fn name(self) -> &'static str {
        match self {
            Gender::Masculine => MASCULINE_NAMES[0],
            Gender::Feminine => FEMININE_NAMES[0],
        }
    }

    /// Short metadata tag (`masc` / `fem`).
    pub fn tag(self) -> &'static str {
        match self {
            Gender::Masculine => MASCULINE_NAMES[1],
            Gender::Feminine => FEMININE_NAMES[1],
        }
    }

    /// Every name `from_str` accepts.
    pub fn accepted_names() -> impl Iterator<Item = &'static str> {
        MASCULINE_NAMES.iter().chain(FEMININE_NAMES).copied()
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

impl FromStr for Gender {
    type Err = ParseGenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        if MASCULINE_NAMES.contains(&name.as_str()) {
            return Ok(Gender::Masculine);
        }
        if FEMININE_NAMES.contains(&name.as_str()) {
            return Ok(Gender::Feminine);
        }
        if NEUTER_NAMES.contains(&name.as_str()) {
            return Err(ParseGenderError::Unsupported {
                name: s.trim().to_string(),
            });
        }

        let available: Vec<&str> = Gender::accepted_names().collect();
        Err(ParseGenderError::Unknown {
            name: s.trim().to_string(),
            suggestions: compute_suggestions(&name, &available),
        })
    }
}
