//! Archgen binary: architecture skeleton generator.
//!
//! Startup is linear: parse arguments, install the tracing subscriber,
//! load configuration, build the output manager, then dispatch to a
//! command handler. Any [`CliError`] bubbling out of a handler is turned
//! into a user-facing message and a process exit code in one place,
//! [`handle_error`].
//!
//! Exit codes: 0 success, 1 internal error, 2 user error, 3 not found,
//! 4 configuration error.

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // .env is optional; real deployments set environment variables directly.
    let _ = dotenvy::dotenv();

    // `Error::exit` prints --help / --version to stdout with status 0 and
    // real parse failures to stderr with status 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        "archgen started"
    );

    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("failed to load configuration: {e:#}");
            eprintln!("Configuration error: {e:#}");
            return ExitCode::from(4);
        }
    };

    let output = OutputManager::new(&cli.global, &config);
    let verbose = cli.global.verbose > 0;

    match run(cli, config, output) {
        Ok(()) => {
            info!("archgen finished");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose),
    }
}

#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::Generate(cmd) => commands::generate::execute(cmd, cli.global, config, output),
        Commands::Kinds(cmd) => commands::kinds::execute(cmd, cli.global, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
    }
}

/// Single sink for command failures: log the structured event, print the
/// message with its suggestions, map the category to an exit code.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    err.log();

    // Error text goes to stderr so it survives stdout redirection; colour
    // only when stderr is an actual terminal.
    let msg = if std::io::stderr().is_terminal() {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}
