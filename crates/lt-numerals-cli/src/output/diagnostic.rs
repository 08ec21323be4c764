//! Miette diagnostics for numeric command-line input.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use lt_numerals::ParseError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic pointing into a `VALUE` argument.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid value: {message}")]
#[diagnostic(code(ltnum::value))]
pub struct ValueDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("{label}")]
    span: SourceSpan,

    message: String,

    label: String,

    #[help]
    help: Option<String>,
}

impl ValueDiagnostic {
    /// Create a diagnostic from a number parse error.
    pub fn from_parse_error(input: &str, err: &ParseError) -> Self {
        let (label, help) = match err {
            ParseError::Empty => ("nothing here", None),
            ParseError::Syntax { .. } => (
                "error here",
                Some("digits may be grouped by single spaces or underscores".to_string()),
            ),
            ParseError::OutOfRange { .. } => (
                "too large",
                Some(format!("values must lie between {} and {}", i64::MIN, i64::MAX)),
            ),
        };

        Self::new(input, err.offset(), err.span_len(), err.to_string(), label, help)
    }

    /// Create a diagnostic for a value outside the range a command accepts.
    pub fn out_of_range(input: &str, min: i64, max: i64) -> Self {
        let start = input.len() - input.trim_start().len();
        Self::new(
            input,
            start,
            input.trim().len(),
            format!("expected a value between {min} and {max}"),
            "out of range",
            None,
        )
    }

    fn new(
        input: &str,
        offset: usize,
        len: usize,
        message: String,
        label: &str,
        help: Option<String>,
    ) -> Self {
        // Clamp the span to the input to avoid a miette panic on out-of-bounds
        let offset = offset.min(input.len());
        let len = len.min(input.len() - offset);

        ValueDiagnostic {
            src: NamedSource::new("VALUE", input.to_string()),
            span: (offset, len).into(),
            message,
            label: label.to_string(),
            help,
        }
    }

    /// Byte range the label covers.
    pub fn span(&self) -> SourceSpan {
        self.span
    }
}
