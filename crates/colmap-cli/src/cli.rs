//! CLI argument definitions for `colmap`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colmap_aliases::Vertical;
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "colmap",
    version,
    about = "Match spreadsheet headers to canonical import fields",
    long_about = "Match spreadsheet headers to canonical import fields.\n\n\
                  Headers are compared against a curated alias dictionary and assigned\n\
                  one-to-one; unmatched fields get ranked suggestions for manual mapping."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Auto-map the header row of a CSV file.
    Map(MapArgs),

    /// Find the best field for a single header.
    Match(MatchArgs),

    /// List canonical fields and their aliases.
    Fields(FieldsArgs),
}

/// Where fields and aliases come from.
#[derive(Args)]
pub struct FieldSource {
    /// Built-in vertical whose alias dictionary and field list to use.
    #[arg(long = "vertical", value_enum)]
    pub vertical: Option<VerticalArg>,

    /// Alias file (JSON) to use instead of the built-in dictionary.
    #[arg(long = "aliases", value_name = "PATH", conflicts_with = "vertical")]
    pub aliases: Option<PathBuf>,

    /// Canonical field to map; repeat for several (default: every registered field).
    #[arg(long = "field", value_name = "FIELD")]
    pub fields: Vec<String>,
}

#[derive(Parser)]
pub struct MapArgs {
    /// Delimited file whose first row holds the headers.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    #[command(flatten)]
    pub source: FieldSource,

    /// Matcher configuration (JSON) with thresholds and limits.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Field delimiter: one ASCII character or `tab` (default from extension).
    #[arg(long = "delimiter", value_name = "CHAR")]
    pub delimiter: Option<String>,

    /// Print the result as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct MatchArgs {
    /// Header text to match.
    #[arg(value_name = "HEADER")]
    pub header: String,

    #[command(flatten)]
    pub source: FieldSource,

    /// Matcher configuration (JSON) with thresholds and limits.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Parser)]
pub struct FieldsArgs {
    /// Built-in vertical to list (default: all merged).
    #[arg(long = "vertical", value_enum)]
    pub vertical: Option<VerticalArg>,

    /// Alias file (JSON) to list instead of the built-in dictionary.
    #[arg(long = "aliases", value_name = "PATH", conflicts_with = "vertical")]
    pub aliases: Option<PathBuf>,
}

/// CLI vertical choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum VerticalArg {
    Students,
    Staff,
    Fees,
    Inventory,
    Exams,
}

impl From<VerticalArg> for Vertical {
    fn from(value: VerticalArg) -> Self {
        match value {
            VerticalArg::Students => Vertical::Students,
            VerticalArg::Staff => Vertical::Staff,
            VerticalArg::Fees => Vertical::Fees,
            VerticalArg::Inventory => Vertical::Inventory,
            VerticalArg::Exams => Vertical::Exams,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
