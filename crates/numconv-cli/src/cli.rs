//! CLI argument definitions for numconv.

use std::path::PathBuf;

use clap::{Args, ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use numconv_model::{ColumnSelector, ConvertOptions, DEFAULT_SAMPLE_SIZE};
use tracing::level_filters::LevelFilter;

use crate::logging::{LogConfig, LogFormat};

#[derive(Parser)]
#[command(
    name = "numconv",
    version,
    about = "Detect text columns holding numbers and convert them",
    long_about = "Detect CSV columns whose values are numbers written as text and convert them.\n\n\
                  Plain decimals (1.5) and decimal commas (1,5) are recognized from a sample of\n\
                  each column's first non-empty values."
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

    /// Log output format (pretty for human, json for machine parsing).
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

impl Cli {
    /// Level for numconv crates: `--log-level` wins over `-v`/`-q`.
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level
            .map_or_else(|| self.verbosity.tracing_level_filter(), LevelFilter::from)
    }

    /// `-q` (or an explicit level below `warn`) also hides the progress bar.
    pub fn hides_progress(&self) -> bool {
        self.level_filter() < LevelFilter::WARN
    }

    /// Logging setup for these flags.
    ///
    /// `RUST_LOG` is honored only when no level flag was given. Log files get
    /// timestamps and never get ANSI colors.
    pub fn log_config(&self, stderr_is_terminal: bool) -> LogConfig {
        let to_file = self.log_file.is_some();
        let with_ansi = match self.color.color {
            ColorChoice::Always => !to_file,
            ColorChoice::Never => false,
            ColorChoice::Auto => !to_file && stderr_is_terminal,
        };
        LogConfig {
            use_env_filter: !(self.verbosity.is_present() || self.log_level.is_some()),
            ..LogConfig::default()
        }
        .with_level_filter(self.level_filter())
        .with_format(self.log_format.into())
        .with_timestamps(to_file)
        .with_ansi(with_ansi)
        .with_log_file(self.log_file.clone())
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert numeric text columns and write the result.
    Convert(ConvertArgs),

    /// Report how each column would be classified, without converting.
    Inspect(ScanArgs),
}

/// Input and detection settings shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// CSV file to read.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Comma-separated list of columns to consider (default: all columns).
    #[arg(long = "columns", value_name = "NAMES", value_delimiter = ',')]
    pub columns: Option<Vec<String>>,

    /// Number of non-empty values sampled per column.
    #[arg(long = "sample-size", value_name = "N", default_value_t = DEFAULT_SAMPLE_SIZE)]
    pub sample_size: usize,

    /// Field delimiter of the CSV file (a single ASCII character, or "tab").
    #[arg(long = "delimiter", value_name = "CHAR", default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,
}

impl ScanArgs {
    /// Conversion options for these arguments.
    pub fn convert_options(&self, verbose: bool) -> ConvertOptions {
        let columns = match &self.columns {
            Some(names) => ColumnSelector::Explicit(names.clone()),
            None => ColumnSelector::Auto,
        };
        ConvertOptions::new()
            .with_columns(columns)
            .with_sample_size(self.sample_size)
            .with_verbose(verbose)
    }
}

#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Output CSV path (default: <INPUT stem>.numeric.csv next to the input).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Detect and report without writing the output CSV.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Hide the per-column progress bar.
    #[arg(long = "no-progress")]
    pub no_progress: bool,

    /// Also write the conversion report as JSON.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,
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

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}

fn parse_delimiter(value: &str) -> Result<u8, String> {
    if value.eq_ignore_ascii_case("tab") || value == "\\t" {
        return Ok(b'\t');
    }
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() && c != '"' && c != '\n' && c != '\r' => Ok(c as u8),
        _ => Err(format!(
            "expected a single ASCII character other than a quote or newline, got '{value}'"
        )),
    }
}
