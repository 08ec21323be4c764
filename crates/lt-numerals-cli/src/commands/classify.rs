//! Implementation of the `ltnum classify` command.

use lt_numerals::{Gender, GrammaticalNumber, MagnitudeGroup, magnitude_group, to_cardinal_words};
use miette::miette;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::debug;

use super::{print_json, read_value, report};

/// Arguments for the classify command.
#[derive(Debug, clap::Args)]
pub struct ClassifyArgs {
    /// Count to classify
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for a classification.
#[derive(Debug, Serialize)]
pub struct ClassifyResult {
    pub value: i64,
    pub class: GrammaticalNumber,
    pub cldr_category: &'static str,
    pub example: String,
}

/// The count followed by the agreeing form of "thousand".
fn example_phrase(value: i64, thousand: &MagnitudeGroup) -> String {
    format!(
        "{} {}",
        to_cardinal_words(value, Gender::Masculine),
        thousand.noun_for(value.unsigned_abs())
    )
}

/// Run the classify command.
pub fn run_classify(args: ClassifyArgs) -> miette::Result<i32> {
    let value = match read_value(&args.value) {
        Ok(value) => value,
        Err(diagnostic) => return Ok(report(diagnostic, args.json)),
    };
    let thousand = magnitude_group(3).ok_or_else(|| miette!("no group noun for 10^3"))?;

    let class = GrammaticalNumber::classify(value.unsigned_abs());
    debug!(value, class = class.label(), "classify");
    let result = ClassifyResult {
        value,
        class,
        cldr_category: class.cldr_name(),
        example: example_phrase(value, thousand),
    };

    if args.json {
        print_json(&result)?;
    } else {
        println!(
            "{} {}",
            result.class.label().if_supports_color(Stream::Stdout, |text| text.bold()),
            format!("(CLDR {})", result.cldr_category)
                .if_supports_color(Stream::Stdout, |text| text.dimmed())
        );
        println!("{}", result.example);
    }
    Ok(exitcode::OK)
}
