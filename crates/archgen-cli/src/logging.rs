//! Tracing subscriber setup.
//!
//! Subscriber installation happens here and nowhere else; the library
//! crates emit spans and events but never install subscribers.
//!
//! Verbosity maps to filter levels: no flag is WARN, `-v` INFO, `-vv`
//! DEBUG, `-vvv` and beyond TRACE, `--quiet` ERROR. A `RUST_LOG`
//! environment variable takes precedence over the flags.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Install the global tracing subscriber. Call once, before any event fires.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = derive_level(args);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "archgen={level},archgen_core={level},archgen_adapters={level}",
        ))
    });

    let use_ansi = !args.no_color && std::io::stderr().is_terminal();

    // Diagnostics go to stderr; stdout is reserved for command output.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    // try_init instead of init: test binaries may attempt a second install
    // inside one process.
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber: {e}"))?;

    Ok(())
}

fn derive_level(args: &GlobalArgs) -> &'static str {
    match (args.quiet, args.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    }
}
