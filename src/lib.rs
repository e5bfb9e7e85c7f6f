pub mod commands;
pub mod error;
pub mod inspection;
pub mod operations;
pub mod sinks;
pub mod sources;
pub mod utils;

pub use error::PeekError;

use camino::Utf8PathBuf;
use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand, ValueEnum, builder::ValueHint};
use clap_complete::Shell;
use std::io::{self, IsTerminal};

use crate::inspection::Delimiter;

pub const DEFAULT_PREVIEW_ROWS: usize = 20;
pub const DEFAULT_TOPK: usize = 5;
pub const DEFAULT_SAMPLE_SIZE: usize = 10;
pub const DEFAULT_SEED: u64 = 42;
/// Rows scanned for schema inference on ordinary loads.
pub const DEFAULT_INFER_LIMIT: usize = 2048;
/// Rows scanned for schema inference by `schema` and `columns`.
pub const SCHEMA_INFER_LIMIT: usize = 10_000;
pub const DEFAULT_MAX_WIDTH: usize = 120;

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

#[derive(Parser, Debug)]
#[command(version, long_version = LONG_VERSION, about, long_about = None)]
pub struct Cli {
    /// When to color output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    ///
    /// RUST_LOG takes precedence when set.
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a neat, truncated preview of the data (head).
    ///
    /// Examples:
    ///   peektab show data.csv
    ///   peektab show data.parquet -n 5 -c id,name
    #[command(visible_alias = "preview", verbatim_doc_comment)]
    Show(ShowArgs),

    /// Print inferred schema with types and null counts.
    Schema(SchemaArgs),

    /// Compute quick stats (numeric summary + top categories).
    Stats(StatsArgs),

    /// Sample random rows.
    Sample(SampleArgs),

    /// List columns with their types.
    Columns(ColumnsArgs),

    /// Convert between formats (csv <-> parquet <-> ndjson).
    ///
    /// Examples:
    ///   peektab convert data.csv data.parquet
    ///   peektab convert events.jsonl events.tsv
    ///   peektab convert dump.txt out.csv --from-format csv --delimiter ';'
    #[command(verbatim_doc_comment)]
    Convert(ConvertArgs),

    /// Quick info: rows, columns, file format, delimiter (if CSV), and memory footprint.
    Info(InfoArgs),

    /// Generate shell completions for your shell.
    ///
    /// To add completions for your current shell session only:
    ///   zsh:  eval "$(peektab completions zsh)"
    ///   bash: eval "$(peektab completions bash)"
    ///   fish: peektab completions fish | source
    #[command(verbatim_doc_comment)]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

impl Commands {
    pub fn generate_completions(shell: Shell) {
        clap_complete::generate(shell, &mut Cli::command(), "peektab", &mut io::stdout());
    }
}

/// The file being inspected and how to read it.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Path to a CSV/TSV, NDJSON (jsonl) or Parquet file.
    #[arg(value_hint = ValueHint::FilePath)]
    pub path: Utf8PathBuf,

    /// Force format: csv|ndjson|parquet
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// CSV delimiter. Sniffed from the first non-blank line when omitted.
    #[arg(long, short = 'd')]
    pub delimiter: Option<Delimiter>,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Number of rows to display.
    #[arg(long, short = 'n', default_value_t = DEFAULT_PREVIEW_ROWS)]
    pub rows: usize,

    /// Comma-separated list of columns to select.
    #[arg(long, short = 'c')]
    pub cols: Option<String>,
}

#[derive(Args, Debug)]
pub struct SchemaArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Args, Debug)]
pub struct StatsArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Top-k categories for string columns.
    #[arg(long, default_value_t = DEFAULT_TOPK)]
    pub topk: usize,
}

#[derive(Args, Debug)]
pub struct SampleArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Number of rows to sample. Clamped to the number of rows available.
    #[arg(long = "n", default_value_t = DEFAULT_SAMPLE_SIZE)]
    pub n: usize,

    /// Seed for the random draw.
    #[arg(long, default_value_t = DEFAULT_SEED, conflicts_with = "no_seed")]
    pub seed: u64,

    /// Draw an unseeded sample (different on every run).
    #[arg(long, default_value_t = false)]
    pub no_seed: bool,
}

impl SampleArgs {
    pub fn effective_seed(&self) -> Option<u64> {
        if self.no_seed { None } else { Some(self.seed) }
    }
}

#[derive(Args, Debug)]
pub struct ColumnsArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Source file
    #[arg(value_hint = ValueHint::FilePath)]
    pub src: Utf8PathBuf,

    /// Destination file (.csv/.tsv/.parquet/.jsonl)
    #[arg(value_hint = ValueHint::FilePath)]
    pub dst: Utf8PathBuf,

    /// Source format: csv|parquet|ndjson
    #[arg(long = "from-format", short = 'F')]
    pub from_format: Option<String>,

    /// Destination format: csv|parquet|ndjson
    #[arg(long = "to-format", short = 'T')]
    pub to_format: Option<String>,

    /// Delimiter for CSV output. Defaults to comma (tab for .tsv).
    #[arg(long, short = 'd')]
    pub delimiter: Option<Delimiter>,
}

#[derive(Args, Debug)]
pub struct InfoArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[value(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn enabled(&self) -> bool {
        match self {
            ColorChoice::Auto => io::stdout().is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}
