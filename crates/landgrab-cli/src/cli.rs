//! CLI argument definitions for the land-grab cleaner.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "landgrab-clean",
    version,
    about = "Clean the Land-Grab Universities dataset for analysis",
    long_about = "Clean the Land-Grab Universities dataset for analysis.\n\n\
                  Fixes malformed column names, parses currency columns as numbers,\n\
                  converts Y/N flags to booleans, fills missing years with 0 and\n\
                  drops derived and source/notes columns."
)]
pub struct Cli {
    /// Raw dataset (comma-separated, with header row).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Where to write the cleaned dataset (overwritten if it exists).
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Run every transformation and report the shape without writing OUTPUT.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Print a table of the cleaning steps after the shape line.
    #[arg(long = "summary")]
    pub summary: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
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

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn positional_paths_only() {
        let cli = Cli::try_parse_from(["landgrab-clean", "in.csv", "out.csv"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("in.csv"));
        assert_eq!(cli.output, PathBuf::from("out.csv"));
        assert!(!cli.dry_run);
        assert!(!cli.summary);
        assert!(cli.log_level.is_none());
    }

    #[test]
    fn output_path_is_required() {
        assert!(Cli::try_parse_from(["landgrab-clean", "in.csv"]).is_err());
    }
}
