//! Errors raised while reading grammatical metadata from text.

use strsim::levenshtein;
use thiserror::Error;

/// A gender name that could not be turned into a [`Gender`](super::Gender).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseGenderError {
    /// The name matches no known gender.
    #[error("unknown gender '{name}'{}", did_you_mean(.suggestions))]
    Unknown {
        name: String,
        suggestions: Vec<String>,
    },

    /// The name is a real Lithuanian gender that numerals do not agree with.
    #[error("gender '{name}' is not supported, numerals agree with masculine or feminine only")]
    Unsupported { name: String },
}

fn did_you_mean(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Up to three names from `available` within a small edit distance of `name`,
/// closest first.
///
/// Names of three characters or fewer tolerate one edit, longer names two.
pub fn compute_suggestions(name: &str, available: &[&str]) -> Vec<String> {
    let max_distance = if name.chars().count() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .iter()
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            if dist <= max_distance && dist > 0 {
                Some((dist, (*candidate).to_string()))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}
