//! CLI-level error type.
//!
//! [`CliError`] wraps everything a command handler can fail with. Each
//! variant knows its category (and therefore exit code) and carries a
//! list of actionable suggestions shown under the error message.

use std::path::PathBuf;
use std::{error::Error, fmt::Write as _};

use owo_colors::OwoColorize;
use thiserror::Error;

use archgen_core::error::ArchError;

// Re-export so callers only need `use crate::error::*`.
pub use archgen_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Comprehensive CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input (validation failed).
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Service name validation failed.
    #[error("Invalid service name '{name}': {reason}")]
    InvalidServiceName { name: String, reason: String },

    /// Output directory already exists.
    #[error("Output directory already exists at {path}")]
    OutputExists { path: PathBuf },

    /// One or more nodes failed to generate; details were already
    /// reported per node.
    #[error("{failed} of {total} artifacts failed to generate")]
    GenerationIncomplete { failed: usize, total: usize },

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `archgen-core`.
    ///
    /// Wrapped here so that the CLI can attach suggestions drawn from the
    /// core error's category without touching core internals.
    #[error("Generation failed: {0}")]
    Core(#[from] ArchError),

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message } => vec![
                format!("Check your input: {}", message),
                "Use --help for usage information".into(),
            ],

            Self::InvalidServiceName { name, reason } => vec![
                format!("Service name '{}' is invalid: {}", name, reason),
                "Use a bare Java type name: a letter followed by letters and digits".into(),
                "Examples: User, OrderHistory, Payment2".into(),
            ],

            Self::OutputExists { path } => vec![
                format!("The directory '{}' already exists", path.display()),
                "Use --force to overwrite (destructive)".into(),
                "Choose a different --root directory".into(),
            ],

            Self::GenerationIncomplete { failed, .. } => vec![
                format!("{} node(s) could not be generated; see the errors above", failed),
                "Check that every --param matches the contract's arity and order".into(),
                "Check that referenced types exist in the catalog (archgen kinds)".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Check your config file at ~/.config/archgen/config.toml".into(),
                "Pass --config <FILE> to use a different file".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
                "Check available disk space".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::InvalidServiceName { .. } => ErrorCategory::UserError,
            Self::OutputExists { .. } => ErrorCategory::UserError,
            Self::GenerationIncomplete { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Render the error with ANSI colour, suggestions included.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut out = String::new();

        let _ = write!(out, "\n{} {}\n\n", "✗".red().bold(), "Error:".red().bold());
        let _ = writeln!(out, "  {}", self.to_string().red());

        if verbose {
            let mut link = self.source();
            while let Some(cause) = link {
                let _ = write!(out, "\n  {} {}\n", "→".dimmed(), cause.to_string().dimmed());
                link = cause.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let _ = write!(out, "\n{}\n", "Suggestions:".yellow().bold());
            for suggestion in suggestions {
                let _ = writeln!(out, "  {suggestion}");
            }
        }

        if !verbose {
            let _ = write!(
                out,
                "\n{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            );
        }

        out
    }

    /// Same layout as [`Self::format_colored`] without ANSI codes, for
    /// redirected stderr.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        let _ = write!(out, "\nError: {self}\n");

        if verbose {
            let mut link = self.source();
            while let Some(cause) = link {
                let _ = writeln!(out, "  Caused by: {cause}");
                link = cause.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for suggestion in &suggestions {
                let _ = writeln!(out, "  {suggestion}");
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Emit a tracing event at a severity matching the category.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("user error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("caused by: {}", source);
        }
    }
}

/// Coarse classification driving exit codes and log severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserError,
    NotFound,
    Configuration,
    Internal,
}
