mod error;
mod gender;
mod grammatical_number;
mod magnitude;

pub use error::{ParseGenderError, compute_suggestions};
pub use gender::Gender;
pub use grammatical_number::GrammaticalNumber;
pub use magnitude::{HUNDRED, MAGNITUDE_GROUPS, MILLION, MagnitudeGroup, THOUSAND, magnitude_group};
