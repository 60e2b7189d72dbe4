//! Arguments shared by every subcommand.
//!
//! Flattened into [`super::Cli`] with `global = true` so they may appear
//! before or after the subcommand name.

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Verbosity counter; see the logging module for the level mapping.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Raise the log level: -v for progress messages, \
                     -vv for diagnostics, -vvv for full tracing"
    )]
    pub verbose: u8,

    /// Only errors reach the terminal when set.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Also honoured via the NO_COLOR convention (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Alternative configuration file.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// How command output is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pick `Human` on a terminal, `Plain` otherwise.
    #[default]
    Auto,
    Human,
    Plain,
    Json,
}
