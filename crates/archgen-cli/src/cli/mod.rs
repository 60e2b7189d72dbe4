//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "archgen",
    bin_name = "archgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Architecture skeleton generator",
    long_about = "Archgen generates runnable source skeletons (service \
                  contracts, implementations, and build files) from an \
                  artifact tree bound to catalog types.",
    after_help = "EXAMPLES:\n\
        \x20 archgen generate User\n\
        \x20 archgen generate Order --package com.example.shop --param java.lang.Integer\n\
        \x20 archgen kinds\n\
        \x20 archgen completions bash > /usr/share/bash-completion/completions/archgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a microservice skeleton.
    #[command(
        visible_alias = "g",
        about = "Generate a microservice skeleton",
        after_help = "EXAMPLES:\n\
            \x20 archgen generate User\n\
            \x20 archgen generate User --root ./user-svc --package com.example.user\n\
            \x20 archgen generate Net --contract archgen.sample.net.ServiceNetworkComponent \\\n\
            \x20\x20\x20  --param java.lang.String --param java.lang.Integer\n\
            \x20 archgen generate User --dry-run"
    )]
    Generate(GenerateArgs),

    /// List artifact node kinds.
    #[command(
        about = "List artifact node kinds and whether they are generated",
        after_help = "EXAMPLES:\n\
            \x20 archgen kinds\n\
            \x20 archgen kinds --format json"
    )]
    Kinds(KindsArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 archgen completions bash > ~/.local/share/bash-completion/completions/archgen\n\
            \x20 archgen completions zsh  > ~/.zfunc/_archgen\n\
            \x20 archgen completions fish > ~/.config/fish/completions/archgen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `archgen generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Bare service name; generated type names derive from it
    /// (`User` -> `UserService`, `DefaultUserService`, `UserApp`).
    #[arg(value_name = "NAME", help = "Service name, e.g. User")]
    pub name: String,

    /// Output root directory.
    #[arg(
        short = 'r',
        long = "root",
        value_name = "DIR",
        help = "Output root directory (default: ./<name>-service)"
    )]
    pub root: Option<PathBuf>,

    /// Java base package of the generated sources.
    #[arg(
        short = 'p',
        long = "package",
        value_name = "PACKAGE",
        help = "Base package (default: from config, e.g. com.example.<name>)"
    )]
    pub package: Option<String>,

    /// Catalog name of the contract the service extends.
    #[arg(
        long = "contract",
        value_name = "TYPE",
        help = "Fully qualified contract type (default: archgen.sample.service.BaseService)"
    )]
    pub contract: Option<String>,

    /// Type argument bound to the contract, in declaration order.
    /// Repeat for each generic position.
    #[arg(
        long = "param",
        value_name = "TYPE",
        help = "Type argument for the contract (repeatable, in order)"
    )]
    pub params: Vec<String>,

    /// Additional catalog manifest to merge over the built-ins.
    #[arg(
        long = "catalog",
        value_name = "FILE",
        help = "TOML catalog manifest with extra type descriptors"
    )]
    pub catalog: Option<PathBuf>,

    /// Skip the framework annotation on the implementation class.
    #[arg(long = "no-annotate", help = "Do not annotate the implementation class")]
    pub no_annotate: bool,

    /// Overwrite an existing directory (destructive).
    #[arg(long = "force", help = "Overwrite existing directory")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── kinds ─────────────────────────────────────────────────────────────────────

/// Arguments for `archgen kinds`.
#[derive(Debug, Args)]
pub struct KindsArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: KindsFormat,
}

/// Output format for the `kinds` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindsFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `archgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: clap_complete::Shell,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_generate_command() {
        let cli = Cli::parse_from(["archgen", "generate", "User"]);
        assert!(matches!(cli.command, Commands::Generate(_)));
    }

    #[test]
    fn generate_alias() {
        let cli = Cli::parse_from(["archgen", "g", "User"]);
        assert!(matches!(cli.command, Commands::Generate(_)));
    }

    #[test]
    fn params_accumulate_in_order() {
        let cli = Cli::parse_from([
            "archgen",
            "generate",
            "Net",
            "--param",
            "java.lang.String",
            "--param",
            "java.lang.Integer",
        ]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate command");
        };
        assert_eq!(args.params, ["java.lang.String", "java.lang.Integer"]);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["archgen", "--quiet", "--verbose", "kinds"]);
        assert!(result.is_err());
    }

    #[test]
    fn kinds_default_format_is_table() {
        let cli = Cli::parse_from(["archgen", "kinds"]);
        let Commands::Kinds(args) = cli.command else {
            panic!("expected kinds command");
        };
        assert!(matches!(args.format, KindsFormat::Table));
    }
}
