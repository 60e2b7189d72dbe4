//! Implementation of the `archgen kinds` command.

use archgen_core::{application::GeneratorService, domain::NodeKind};

use crate::{
    cli::{KindsArgs, KindsFormat, global::GlobalArgs},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: KindsArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    match args.format {
        KindsFormat::Table => {
            output.header("Artifact node kinds:")?;
            for kind in NodeKind::ALL {
                output.print(&format!("  {:<20} {}", kind.name(), role(kind)))?;
            }
        }

        KindsFormat::List => {
            for kind in NodeKind::ALL {
                println!("{}", kind.name());
            }
        }

        KindsFormat::Json => {
            // Serialise to stdout directly (bypasses OutputManager because
            // JSON output must be parseable even in non-TTY pipes).
            let entries: Vec<serde_json::Value> = NodeKind::ALL
                .into_iter()
                .map(|kind| {
                    serde_json::json!({
                        "name": kind.name(),
                        "generated": GeneratorService::has_routine(kind),
                    })
                })
                .collect();
            let json =
                serde_json::to_string_pretty(&entries).unwrap_or_else(|_| "[]".into());
            println!("{json}");
        }
    }

    Ok(())
}

fn role(kind: NodeKind) -> &'static str {
    if GeneratorService::has_routine(kind) {
        "generated"
    } else {
        "structural"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_split_generated_from_structural() {
        assert_eq!(role(NodeKind::Contract), "generated");
        assert_eq!(role(NodeKind::Root), "structural");
        assert_eq!(role(NodeKind::ContractAbstract), "structural");
    }
}
