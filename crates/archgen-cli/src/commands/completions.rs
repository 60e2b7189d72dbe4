//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::{Cli, CompletionsArgs};
use crate::error::CliResult;

pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "archgen", &mut std::io::stdout());
    Ok(())
}
