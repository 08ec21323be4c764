//! Implementation of the `ltnum ordinal` command.

use lt_numerals::{Converter, Gender, OrdinalSpelling};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::debug;

use super::{SpellingArg, parse_gender, print_json, read_value, report};
use crate::output::ValueDiagnostic;

/// Arguments for the ordinal command.
#[derive(Debug, clap::Args)]
pub struct OrdinalArgs {
    /// Integer to spell, within the 32-bit range
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Gender of the ranked noun
    #[arg(short, long, default_value = "masculine", env = "LTNUM_GENDER", value_parser = parse_gender)]
    pub gender: Gender,

    /// Spelling of the million nouns
    #[arg(long, value_enum, default_value_t = SpellingArg::Standard, env = "LTNUM_SPELLING")]
    pub spelling: SpellingArg,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for an ordinal.
#[derive(Debug, Serialize)]
pub struct OrdinalResult {
    pub value: i32,
    pub gender: Gender,
    pub spelling: OrdinalSpelling,
    pub words: String,
}

/// Narrow a parsed value to the range ordinals are spelled for.
fn narrow(input: &str, wide: i64) -> Result<i32, ValueDiagnostic> {
    i32::try_from(wide).map_err(|_| {
        ValueDiagnostic::out_of_range(input, i64::from(i32::MIN), i64::from(i32::MAX))
    })
}

/// Run the ordinal command.
pub fn run_ordinal(args: OrdinalArgs) -> miette::Result<i32> {
    let wide = match read_value(&args.value) {
        Ok(value) => value,
        Err(diagnostic) => return Ok(report(diagnostic, args.json)),
    };
    let value = match narrow(&args.value, wide) {
        Ok(value) => value,
        Err(diagnostic) => return Ok(report(diagnostic, args.json)),
    };

    let converter = Converter::builder()
        .spelling(args.spelling.into())
        .build();
    debug!(value, gender = %args.gender, spelling = ?args.spelling, "ordinal");
    let words = converter.ordinal(value, args.gender);

    if args.json {
        print_json(&OrdinalResult {
            value,
            gender: args.gender,
            spelling: converter.spelling(),
            words,
        })?;
    } else {
        println!("{}", words.if_supports_color(Stream::Stdout, |text| text.bold()));
    }
    Ok(exitcode::OK)
}
