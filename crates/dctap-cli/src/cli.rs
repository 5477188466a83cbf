//! CLI argument definitions for the DCTAP reader.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use dctap_cli::pipeline::parse_delimiter;
use dctap_output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "dctap",
    version,
    about = "Read and validate DCTAP tabular application profiles",
    long_about = "Read a DC Tabular Application Profile (CSV or TSV), normalize it into\n\
                  shapes and statement templates, and report problems as warnings.\n\n\
                  Output is plain text, JSON or YAML."
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

#[derive(Subcommand)]
pub enum Command {
    /// Read a profile and print it.
    Read(ReadArgs),

    /// List DCTAP elements and value constraint types.
    Elements,

    /// Write a default dctap.toml.
    Init(InitArgs),
}

#[derive(Parser)]
pub struct ReadArgs {
    /// CSV or TSV file holding the profile.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: FormatArg,

    /// Print warnings to stderr.
    #[arg(long = "warnings")]
    pub warnings: bool,

    /// Include warnings in JSON/YAML output.
    #[arg(long = "embed-warnings")]
    pub embed_warnings: bool,

    /// Config file (default: ./dctap.toml if present).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Field delimiter (default: tab for .tsv/.tab files, comma otherwise).
    #[arg(long = "delimiter", value_name = "CHAR", value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,

    /// Exit with status 1 if the profile has any warnings.
    #[arg(long = "strict")]
    pub strict: bool,
}

#[derive(Parser)]
pub struct InitArgs {
    /// Where to write the file.
    #[arg(long = "output", value_name = "PATH", default_value = "dctap.toml")]
    pub output: PathBuf,

    /// Overwrite an existing file.
    #[arg(long = "force")]
    pub force: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
    Yaml,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Yaml => OutputFormat::Yaml,
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
