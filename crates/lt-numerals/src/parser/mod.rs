//! Parsing of integers written with digit group separators.

pub mod error;
mod number;

pub use error::ParseError;
pub use number::parse_number;
