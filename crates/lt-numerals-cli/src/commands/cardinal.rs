//! Implementation of the `ltnum cardinal` command.

use lt_numerals::{Converter, Gender};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::debug;

use super::{parse_gender, print_json, read_value, report};

/// Arguments for the cardinal command.
#[derive(Debug, clap::Args)]
pub struct CardinalArgs {
    /// Integer to spell; digits may be grouped, e.g. "1 000 000"
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Gender of the counted noun
    #[arg(short, long, default_value = "masculine", env = "LTNUM_GENDER", value_parser = parse_gender)]
    pub gender: Gender,

    /// Call the converter with `add_and` unset
    #[arg(long)]
    pub no_and: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for a cardinal.
#[derive(Debug, Serialize)]
pub struct CardinalResult {
    pub value: i64,
    pub gender: Gender,
    pub words: String,
}

/// Run the cardinal command.
pub fn run_cardinal(args: CardinalArgs) -> miette::Result<i32> {
    let value = match read_value(&args.value) {
        Ok(value) => value,
        Err(diagnostic) => return Ok(report(diagnostic, args.json)),
    };

    let add_and = !args.no_and;
    debug!(value, gender = %args.gender, add_and, "cardinal");
    let words = Converter::new().cardinal_with_and(value, args.gender, add_and);

    if args.json {
        print_json(&CardinalResult {
            value,
            gender: args.gender,
            words,
        })?;
    } else {
        println!("{}", words.if_supports_color(Stream::Stdout, |text| text.bold()));
    }
    Ok(exitcode::OK)
}
