//! Implementation of the `archgen generate` command.
//!
//! Responsibility: translate CLI arguments into a microservice spec,
//! run the generation engine, and display results. No generation logic
//! lives here.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use archgen_adapters::{
    InMemoryCatalog, LocalEmitter, MemoryEmitter,
    catalog::load_manifest_file,
    templates::{MicroserviceSpec, MicroserviceTemplate},
};
use archgen_core::application::{GenerationReport, GeneratorService};

use crate::{
    cli::{GenerateArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `archgen generate` command.
///
/// Dispatch sequence:
/// 1. Validate the service name
/// 2. Resolve root directory, package, contract binding (args + config)
/// 3. Assemble the microservice tree and the catalog
/// 4. Early-exit if `--dry-run` (generate into memory, show paths)
/// 5. Run the engine against the local filesystem
/// 6. Print per-node failures and a success summary
#[instrument(skip_all, fields(service = %args.name))]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    validate_service_name(&args.name)?;

    // 1. Resolve output root and package
    let root_dir = args
        .root
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("{}-service", args.name.to_lowercase())));
    let package = args.package.clone().unwrap_or_else(|| {
        format!("{}.{}", config.defaults.package, args.name.to_lowercase())
    });

    // 2. Build the template parameters (contract binding from args over
    //    config defaults)
    let mut spec = MicroserviceSpec::new(
        root_dir.to_string_lossy().into_owned(),
        &package,
        &args.name,
    );
    let contract = args.contract.clone().or(config.defaults.contract.clone());
    match contract {
        Some(name) => spec = spec.contract(name, args.params.clone()),
        None if !args.params.is_empty() => {
            spec = spec.contract("archgen.sample.service.BaseService", args.params.clone());
        }
        None => {}
    }
    spec = spec.annotate_implementation(config.defaults.annotate && !args.no_annotate);

    debug!(
        root = %root_dir.display(),
        package,
        "spec resolved"
    );

    // 3. Assemble tree and catalog
    let tree = MicroserviceTemplate::new(&spec)
        .map_err(|e| CliError::Core(e.into()))?
        .into_tree();
    let catalog = build_catalog(&args, &config)?;

    // 4. Dry run: generate into memory and describe.
    if args.dry_run {
        let emitter = MemoryEmitter::new();
        let mut engine = GeneratorService::new(Box::new(catalog), Box::new(emitter.clone()));
        let report = engine.generate_tree(&tree);

        output.info(&format!(
            "Dry run: would create {} file(s) under {}",
            report.emitted().len(),
            root_dir.display(),
        ))?;
        for path in emitter.list_files() {
            output.print(&format!("  {}", path.display()))?;
        }
        return finish(report, &output);
    }

    // 5. Check the output directory, then generate for real.
    let emitter = LocalEmitter::new();
    if root_dir.exists() {
        if !args.force {
            return Err(CliError::OutputExists { path: root_dir });
        }
        emitter.clean(&root_dir).map_err(CliError::Core)?;
    }

    output.header(&format!("Generating '{}Service'...", args.name))?;
    info!(root = %root_dir.display(), "generation started");

    let mut engine = GeneratorService::new(Box::new(catalog), Box::new(emitter));
    let report = engine.generate_tree(&tree);

    if !report.has_failures() {
        output.success(&format!(
            "Generated {} file(s) under {}",
            report.emitted().len(),
            root_dir.display(),
        ))?;

        if !global.quiet {
            output.print("")?;
            output.print("Next steps:")?;
            output.print(&format!("  cd {}", root_dir.display()))?;
            output.print("  gradle build")?;
        }
    }

    finish(report, &output)
}

/// Built-in catalog plus any user manifest (flag wins over config).
fn build_catalog(args: &GenerateArgs, config: &AppConfig) -> CliResult<InMemoryCatalog> {
    let catalog = InMemoryCatalog::with_builtin();

    if let Some(manifest) = args.catalog.as_ref().or(config.catalog.manifest.as_ref()) {
        let descriptors = load_manifest_file(manifest).map_err(CliError::Core)?;
        catalog.register_all(descriptors).map_err(CliError::Core)?;
    }
    Ok(catalog)
}

/// Print per-node failures and collapse the report into an exit status.
fn finish(report: GenerationReport, output: &OutputManager) -> CliResult<()> {
    if !report.has_failures() {
        return Ok(());
    }
    for failure in report.failures() {
        output.error(&format!("{}: {}", failure.node, failure.error))?;
    }
    Err(CliError::GenerationIncomplete {
        failed: report.failures().len(),
        total: report.emitted().len() + report.failures().len(),
    })
}

fn validate_service_name(name: &str) -> CliResult<()> {
    let mut chars = name.chars();
    let first = chars.next().ok_or_else(|| CliError::InvalidServiceName {
        name: name.into(),
        reason: "name cannot be empty".into(),
    })?;

    if !first.is_ascii_alphabetic() {
        return Err(CliError::InvalidServiceName {
            name: name.into(),
            reason: "name must start with a letter".into(),
        });
    }
    if !chars.all(|c| c.is_ascii_alphanumeric()) {
        return Err(CliError::InvalidServiceName {
            name: name.into(),
            reason: "name must contain only letters and digits".into(),
        });
    }
    Ok(())
}
