//! `ltnum` entry point.
//!
//! Spells integers as Lithuanian words from the command line:
//! - `ltnum cardinal` - cardinal numeral
//! - `ltnum ordinal` - ordinal numeral
//! - `ltnum classify` - noun agreement class of a count
//! - `ltnum table` - cardinals and ordinals for a range of values

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    CardinalArgs, ClassifyArgs, OrdinalArgs, TableArgs, run_cardinal, run_classify, run_ordinal,
    run_table,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "LTNUM_LOG";

/// Lithuanian numerals in words.
#[derive(Debug, Parser)]
#[command(name = "ltnum")]
#[command(about = "Spell integers as Lithuanian words", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Spell a cardinal numeral
    Cardinal(CardinalArgs),
    /// Spell an ordinal numeral
    Ordinal(OrdinalArgs),
    /// Show which noun form a count selects
    Classify(ClassifyArgs),
    /// Print cardinals and ordinals for a range of values
    Table(TableArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors checks TTY, NO_COLOR and FORCE_COLOR itself
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Install the stderr log subscriber.
///
/// `LTNUM_LOG` takes an `EnvFilter` directive; without it the level is `warn`,
/// or `debug` with `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be set when embedded; keep the existing one.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(stderr))
        .with(filter)
        .try_init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    init_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Cardinal(args) => run_cardinal(args),
        Commands::Ordinal(args) => run_ordinal(args),
        Commands::Classify(args) => run_classify(args),
        Commands::Table(args) => run_table(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
