//! CLI command implementations.

mod cardinal;
mod classify;
mod ordinal;
mod table;

use clap::ValueEnum;
use lt_numerals::{Gender, OrdinalSpelling, ParseGenderError, parse_number};
use miette::{IntoDiagnostic, Report};
use serde::Serialize;

use crate::output::ValueDiagnostic;

pub use cardinal::{CardinalArgs, run_cardinal};
pub use classify::{ClassifyArgs, run_classify};
pub use ordinal::{OrdinalArgs, run_ordinal};
pub use table::{TableArgs, run_table};

/// Million spelling for ordinals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SpellingArg {
    /// milijonas, milijonai
    Standard,
    /// miljonas, miljonai
    Legacy,
}

impl From<SpellingArg> for OrdinalSpelling {
    fn from(arg: SpellingArg) -> Self {
        match arg {
            SpellingArg::Standard => OrdinalSpelling::Standard,
            SpellingArg::Legacy => OrdinalSpelling::Legacy,
        }
    }
}

/// Parse a `--gender` argument.
fn parse_gender(s: &str) -> Result<Gender, ParseGenderError> {
    s.parse()
}

/// Parse a `VALUE` argument into a diagnostic-ready result.
fn read_value(input: &str) -> Result<i64, ValueDiagnostic> {
    parse_number(input).map_err(|err| ValueDiagnostic::from_parse_error(input, &err))
}

/// Print an input error on stderr and return the data error exit code.
fn report(diagnostic: ValueDiagnostic, json: bool) -> i32 {
    if json {
        let output = serde_json::json!({
            "error": diagnostic.to_string()
        });
        eprintln!("{output:#}");
    } else {
        eprintln!("{:?}", Report::new(diagnostic));
    }
    exitcode::DATAERR
}

/// Print a value as pretty JSON on stdout.
fn print_json(value: &impl Serialize) -> miette::Result<()> {
    let output = serde_json::to_string_pretty(value).into_diagnostic()?;
    println!("{output}");
    Ok(())
}
