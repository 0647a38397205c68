//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "critvar",
    version,
    about = "Locate critical clinical variables in tabular datasets",
    long_about = "Match dataset column names against a catalogue of critical variables.\n\n\
                  Column names and synonyms are normalized (case, accents, punctuation)\n\
                  and scored with Ratcliff-Obershelp similarity."
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

    /// Config file (default: ./critvar.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Variable catalogue file (overrides config and CRITVAR_VARIABLES_FILE).
    #[arg(long = "variables", value_name = "PATH", global = true)]
    pub variables: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze a CSV, TSV or Excel dataset.
    Analyze(AnalyzeArgs),

    /// Inspect or edit the variable catalogue.
    Variables {
        #[command(subcommand)]
        command: VariablesCommand,
    },
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Dataset to analyze (.csv, .tsv, .xlsx or .xls).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Minimum similarity for a column to be accepted (0.0 to 1.0).
    #[arg(long = "threshold", value_name = "T")]
    pub threshold: Option<f64>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Write the report to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum VariablesCommand {
    /// List every variable with its synonyms.
    List,

    /// Show one variable.
    Show { name: String },

    /// Add a variable with comma-separated synonyms.
    Add { name: String, synonyms: String },

    /// Replace the synonyms of a variable.
    Update { name: String, synonyms: String },

    /// Remove a variable.
    Remove { name: String },

    /// Restore the default catalogue.
    Reset,

    /// Append one synonym to a variable.
    AddSynonym { name: String, synonym: String },

    /// Remove one synonym from a variable.
    RemoveSynonym { name: String, synonym: String },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
    Csv,
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
