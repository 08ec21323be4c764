//! Parse error types for grouped integers.

use thiserror::Error;

/// An error that occurred while reading an integer from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input held nothing but whitespace.
    #[error("expected an integer, found empty input")]
    Empty,

    /// A syntax error at a byte offset into the input.
    #[error("syntax error at offset {offset}: {message}")]
    Syntax { offset: usize, message: String },

    /// Well-formed digits whose value does not fit a signed 64-bit integer.
    #[error("integer starting at offset {offset} does not fit in 64 bits")]
    OutOfRange { offset: usize, len: usize },
}

impl ParseError {
    /// Byte offset of the offending text, for diagnostics.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::Empty => 0,
            ParseError::Syntax { offset, .. } | ParseError::OutOfRange { offset, .. } => *offset,
        }
    }

    /// Byte length of the offending text, at least one.
    pub fn span_len(&self) -> usize {
        match self {
            ParseError::OutOfRange { len, .. } => (*len).max(1),
            ParseError::Empty | ParseError::Syntax { .. } => 1,
        }
    }
}
