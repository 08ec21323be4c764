//! Implementation of the `ltnum table` command.

use clap::Args;
use lt_numerals::{Converter, Gender, GrammaticalNumber, parse_number};
use miette::Result;
use tracing::debug;

use super::{SpellingArg, parse_gender, print_json};
use crate::output::table::{NumeralRow, format_numeral_table};

/// Longest range the table command prints.
const MAX_ROWS: i128 = 10_000;

/// Arguments for the table command.
#[derive(Debug, Args)]
pub struct TableArgs {
    /// First value (inclusive)
    #[arg(long, default_value = "0", allow_hyphen_values = true, value_parser = parse_number)]
    pub from: i64,

    /// Last value (inclusive)
    #[arg(long, default_value = "20", allow_hyphen_values = true, value_parser = parse_number)]
    pub to: i64,

    /// Gender of the counted noun
    #[arg(short, long, default_value = "masculine", env = "LTNUM_GENDER", value_parser = parse_gender)]
    pub gender: Gender,

    /// Spelling of the million nouns in ordinals
    #[arg(long, value_enum, default_value_t = SpellingArg::Standard, env = "LTNUM_SPELLING")]
    pub spelling: SpellingArg,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Spell every value in `from..=to`.
///
/// Values outside the 32-bit range get no ordinal.
fn build_rows(from: i64, to: i64, gender: Gender, converter: Converter) -> Vec<NumeralRow> {
    (from..=to)
        .map(|value| NumeralRow {
            value,
            cardinal: converter.cardinal(value, gender),
            ordinal: i32::try_from(value)
                .ok()
                .map(|narrow| converter.ordinal(narrow, gender)),
            agreement: GrammaticalNumber::classify(value.unsigned_abs()).label(),
        })
        .collect()
}

/// Run the table command.
pub fn run_table(args: TableArgs) -> Result<i32> {
    if args.to < args.from {
        eprintln!("--to ({}) must not be less than --from ({})", args.to, args.from);
        return Ok(exitcode::USAGE);
    }
    let rows = i128::from(args.to) - i128::from(args.from) + 1;
    if rows > MAX_ROWS {
        eprintln!("range holds {rows} values, the table prints at most {MAX_ROWS}");
        return Ok(exitcode::USAGE);
    }

    let converter = Converter::builder()
        .spelling(args.spelling.into())
        .build();
    debug!(from = args.from, to = args.to, gender = %args.gender, "table");
    let rows = build_rows(args.from, args.to, args.gender, converter);

    if args.json {
        print_json(&rows)?;
    } else {
        println!("{}", format_numeral_table(&rows));
    }
    Ok(exitcode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_cover_inclusive_range() {
        let rows = build_rows(0, 3, Gender::Feminine, Converter::new());
        let cardinals: Vec<&str> = rows.iter().map(|row| row.cardinal.as_str()).collect();
        assert_eq!(cardinals, vec!["nulis", "viena", "dvi", "trejos"]);
        assert_eq!(rows[1].ordinal.as_deref(), Some("pirma"));
        assert_eq!(rows[1].agreement, "singular");
        assert_eq!(rows[0].agreement, "special");
    }

    #[test]
    fn values_beyond_32_bits_have_no_ordinal() {
        let start = i64::from(i32::MAX);
        let rows = build_rows(start, start + 1, Gender::Masculine, Converter::new());
        assert!(rows[0].ordinal.is_some());
        assert!(rows[1].ordinal.is_none());
        assert_eq!(rows[1].cardinal, "du milijardai šimtas keturiasdešimt septyni milijonai keturi šimtai aštuoniasdešimt trys tūkstančiai šeši šimtai keturiasdešimt aštuoni");
    }

    #[test]
    fn table_lists_every_row() {
        let rows = build_rows(9, 11, Gender::Masculine, Converter::new());
        let rendered = format_numeral_table(&rows).to_string();
        assert!(rendered.contains("devyni"));
        assert!(rendered.contains("dešimtas"));
        assert!(rendered.contains("vienuoliktas"));
    }
}
