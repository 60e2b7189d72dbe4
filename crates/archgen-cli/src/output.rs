//! Terminal output for command handlers.
//!
//! Every user-visible line funnels through [`OutputManager`] so that quiet
//! mode and colour handling are decided in one place. Command handlers never
//! call `println!` themselves, with one exception: machine-readable output
//! (`--format json` and the like) bypasses this layer on purpose.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Marker prepended to status lines.
#[derive(Clone, Copy)]
enum Tone {
    Success,
    Error,
    Info,
}

impl Tone {
    fn symbol(self) -> &'static str {
        match self {
            Tone::Success => "\u{2713}", // ✓
            Tone::Error => "\u{2717}",   // ✗
            Tone::Info => "\u{2139}",    // ℹ
        }
    }

    fn paint(self, symbol: &str, msg: &str) -> String {
        match self {
            Tone::Success => format!("{} {}", symbol.green().bold(), msg.green()),
            Tone::Error => format!("{} {}", symbol.red().bold(), msg.red()),
            Tone::Info => format!("{} {}", symbol.blue().bold(), msg.blue()),
        }
    }
}

/// Writes user-facing lines, honouring `--quiet` and colour settings.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Auto resolves by TTY: interactive sessions get the human format,
        // pipes get plain text.
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            term: Term::stdout(),
        }
    }

    fn status(&self, tone: Tone, msg: &str) -> io::Result<()> {
        let symbol = tone.symbol();
        let line = if self.no_color {
            format!("{symbol} {msg}")
        } else {
            tone.paint(symbol, msg)
        };
        self.term.write_line(&line)
    }

    /// Plain line, dropped in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.status(Tone::Success, msg)
    }

    /// Errors are never dropped, even in quiet mode.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        self.status(Tone::Error, msg)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.status(Tone::Info, msg)
    }

    /// Section heading in bold cyan.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Resolved output format; never [`OutputFormat::Auto`].
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::AppConfig;

    fn manager(quiet: bool, no_color: bool) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: OutputFormat::Plain,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_swallows_print_and_info() {
        let out = manager(true, true);
        assert!(out.print("skipped").is_ok());
        assert!(out.info("skipped").is_ok());
    }

    #[test]
    fn errors_survive_quiet_mode() {
        let out = manager(true, true);
        assert!(out.error("still shown").is_ok());
    }

    #[test]
    fn no_color_disables_color_support() {
        assert!(manager(false, false).supports_color());
        assert!(!manager(false, true).supports_color());
    }

    #[test]
    fn explicit_format_is_kept() {
        assert_eq!(manager(false, false).format(), OutputFormat::Plain);
    }

    #[test]
    fn tones_carry_distinct_symbols() {
        assert_ne!(Tone::Success.symbol(), Tone::Error.symbol());
        assert_ne!(Tone::Error.symbol(), Tone::Info.symbol());
    }
}
