//! Generation dispatch engine.
//!
//! The service walks a fully built [`ArtifactTree`] and turns each node
//! into emitted source text at most once. Dispatch is an exhaustive
//! match over [`NodeKind`]; kinds without a routine are structural
//! anchors and are skipped with a debug log. Failures abort only the
//! node they occur on — the node stays visited so a failed node is
//! never retried — and the run reports the aggregate list of failures
//! so a caller sees all structural problems in one pass.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{ArtifactEmitter, TypeCatalog},
        services::type_resolver::{TypeResolver, VarMapping},
    },
    domain::{
        ArtifactNode, ArtifactTree, DomainError, JavaUnit, MethodSig, NodeId, NodeKind,
        TypeDescriptor, TypeRef,
    },
    error::{ArchError, ArchResult},
};

/// Marker a builder sets when the implementation class should carry the
/// target framework's component annotation.
pub const NEEDS_FRAMEWORK_ANNOTATION: &str = "needs-framework-annotation";

const FRAMEWORK_ANNOTATION: &str = "org.springframework.stereotype.Service";

/// Outcome of one engine run over a tree.
#[derive(Debug, Default)]
pub struct GenerationReport {
    emitted: Vec<PathBuf>,
    failures: Vec<NodeFailure>,
}

impl GenerationReport {
    pub fn emitted(&self) -> &[PathBuf] {
        &self.emitted
    }

    pub fn failures(&self) -> &[NodeFailure] {
        &self.failures
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// One per-node failure, kept alongside enough context to display it.
#[derive(Debug)]
pub struct NodeFailure {
    pub node: String,
    pub kind: NodeKind,
    pub error: ArchError,
}

/// The generation engine. Single-threaded by design: the visited set is
/// engine-private and concurrent invocation is unsupported.
pub struct GeneratorService {
    catalog: Box<dyn TypeCatalog>,
    emitter: Box<dyn ArtifactEmitter>,
    visited: HashSet<NodeId>,
}

impl GeneratorService {
    /// Create an engine with the given adapters and log routine
    /// coverage for every kind, mirroring a startup completeness check.
    pub fn new(catalog: Box<dyn TypeCatalog>, emitter: Box<dyn ArtifactEmitter>) -> Self {
        for kind in NodeKind::ALL {
            if !Self::has_routine(kind) {
                debug!(%kind, "no generation routine for kind");
            }
        }

        Self {
            catalog,
            emitter,
            visited: HashSet::new(),
        }
    }

    /// `true` when the kind has a generation routine.
    pub const fn has_routine(kind: NodeKind) -> bool {
        matches!(
            kind,
            NodeKind::Contract
                | NodeKind::Implementation
                | NodeKind::TextResource
                | NodeKind::BuildConfig
                | NodeKind::SourceProperties
        )
    }

    /// Generate every node of the tree, in insertion order.
    #[instrument(skip_all, fields(nodes = tree.len()))]
    pub fn generate_tree(&mut self, tree: &ArtifactTree) -> GenerationReport {
        let mut report = GenerationReport::default();
        for node in tree.nodes() {
            self.generate(tree, node, &mut report);
        }

        info!(
            emitted = report.emitted.len(),
            failures = report.failures.len(),
            "generation pass finished"
        );
        report
    }

    /// Generate a single node. Idempotent: an already visited node is a
    /// no-op regardless of how its previous attempt ended.
    pub fn generate(
        &mut self,
        tree: &ArtifactTree,
        node: &Arc<ArtifactNode>,
        report: &mut GenerationReport,
    ) {
        if self.visited.contains(&node.id()) {
            debug!(node = %node, "already processed");
            return;
        }
        debug!(node = %node, "generating");
        self.visited.insert(node.id());

        // Pre-rendered nodes bypass the routines entirely.
        let outcome = if node.text().is_some() {
            self.emit_verbatim(node)
        } else {
            match node.kind() {
                NodeKind::Contract => self.gen_contract(tree, node),
                NodeKind::Implementation => self.gen_implementation(tree, node),
                NodeKind::TextResource | NodeKind::BuildConfig | NodeKind::SourceProperties => {
                    self.emit_verbatim(node)
                }
                NodeKind::Root
                | NodeKind::SourceRoot
                | NodeKind::SourceTestRoot
                | NodeKind::SourceBase
                | NodeKind::SourceBaseAbstract
                | NodeKind::SourceTestBase
                | NodeKind::ContractAbstract => {
                    debug!(kind = %node.kind(), "structural kind, skipping");
                    return;
                }
            }
        };

        match outcome {
            Ok(path) => report.emitted.push(path),
            Err(error) => report.failures.push(NodeFailure {
                node: node.to_string(),
                kind: node.kind(),
                error,
            }),
        }
    }

    // ── Routines ──────────────────────────────────────────────────────────

    /// Interface extending its abstract contract, with every generic
    /// position resolved to a concrete type.
    fn gen_contract(&self, tree: &ArtifactTree, node: &Arc<ArtifactNode>) -> ArchResult<PathBuf> {
        let name = node
            .filename()
            .ok_or(DomainError::MissingFilename { kind: node.kind() })?;

        let mut unit = JavaUnit::new(node.package_name());

        match self.abstract_descriptor(tree, node)? {
            None => {
                unit.body_mut().line(format!("public interface {name} {{"));
                unit.body_mut().line("}");
            }
            Some(descriptor) if descriptor.arity() == 0 => {
                let super_name = unit.import(descriptor.name());
                unit.body_mut()
                    .line(format!("public interface {name} extends {super_name} {{"));
                unit.body_mut().line("}");
            }
            Some(descriptor) => {
                let resolver = TypeResolver::new(self.catalog.as_ref());
                let mapping =
                    resolver.mapping(descriptor.name(), descriptor.type_params(), node)?;

                let mut arguments = Vec::with_capacity(descriptor.arity());
                for var in descriptor.type_params() {
                    let bound = resolver.resolve_variable(var, &mapping, node)?;
                    arguments.push(unit.import(bound.name()));
                }

                let super_name = unit.import(descriptor.name());
                unit.body_mut().line(format!(
                    "public interface {name} extends {super_name}<{}> {{",
                    arguments.join(", ")
                ));
                unit.body_mut().line("}");
            }
        }

        let path = node.path().join(java_filename(name));
        self.emit(path, unit.render())
    }

    /// Class implementing the contract, with one synthesized stub per
    /// non-default method of the abstract descriptor.
    fn gen_implementation(
        &self,
        tree: &ArtifactTree,
        node: &Arc<ArtifactNode>,
    ) -> ArchResult<PathBuf> {
        let contract = self.related_contract(tree, node)?;
        let contract_name =
            contract
                .filename()
                .ok_or(DomainError::MissingFilename {
                    kind: contract.kind(),
                })?;

        let descriptor = self
            .abstract_descriptor(tree, node)?
            .ok_or(DomainError::MissingRelated {
                kind: node.kind(),
                wanted: NodeKind::ContractAbstract,
            })?;

        // Resolution context: the implementation's own parameters when
        // it carries any, else the contract node's.
        let context: &Arc<ArtifactNode> = if node.generic_parameters().is_empty() {
            &contract
        } else {
            node
        };

        let resolver = TypeResolver::new(self.catalog.as_ref());
        let mapping = resolver.mapping(descriptor.name(), descriptor.type_params(), context)?;

        let class_name = format!("Default{contract_name}");
        let mut unit = JavaUnit::new(node.package_name());

        if node.has_marker(NEEDS_FRAMEWORK_ANNOTATION) {
            let annotation = unit.import(FRAMEWORK_ANNOTATION);
            unit.body_mut().line(format!("@{annotation}"));
        }
        unit.body_mut().line(format!(
            "public class {class_name} implements {contract_name} {{"
        ));

        for method in descriptor.methods() {
            if method.has_default_body {
                debug!(method = %method.name, "skipping default method");
                continue;
            }
            unit.body_mut().blank();
            self.write_method_stub(&mut unit, method, &resolver, &mapping, context)?;
        }

        unit.body_mut().line("}");

        let path = node.path().join(java_filename(&class_name));
        self.emit(path, unit.render())
    }

    fn write_method_stub(
        &self,
        unit: &mut JavaUnit,
        method: &MethodSig,
        resolver: &TypeResolver<'_>,
        mapping: &VarMapping,
        context: &Arc<ArtifactNode>,
    ) -> ArchResult<()> {
        let return_type = resolver.resolve_expr(&method.return_type, mapping, context)?;
        let return_rendered = return_type.java_notation(unit.imports_mut());

        let mut params = Vec::with_capacity(method.parameters.len());
        for param in &method.parameters {
            let resolved = resolver.resolve_expr(&param.ty, mapping, context)?;
            let rendered = resolved.java_notation(unit.imports_mut());
            params.push(format!("{rendered} {}", param.name));
        }

        let throws = if method.throws.is_empty() {
            String::new()
        } else {
            let names: Vec<String> = method
                .throws
                .iter()
                .map(|exception| unit.import(exception))
                .collect();
            format!(" throws {}", names.join(", "))
        };

        let body = unit.body_mut();
        body.indent();
        body.line("@Override");
        body.line(format!(
            "{} {return_rendered} {}({}){throws} {{",
            method.visibility.keyword(),
            method.name,
            params.join(", ")
        ));
        if let Some(literal) = method.return_type.category().default_literal() {
            body.indent();
            body.line(format!("return {literal};"));
            body.dedent();
        }
        body.line("}");
        body.dedent();
        Ok(())
    }

    /// Pre-rendered and resource nodes: write the literal text (empty
    /// when absent) under the node's filename.
    fn emit_verbatim(&self, node: &Arc<ArtifactNode>) -> ArchResult<PathBuf> {
        let filename = node
            .filename()
            .ok_or_else(|| ApplicationError::MissingEmitTarget { path: node.path() })?;
        let path = node.path().join(filename);
        self.emit(path, node.text().unwrap_or_default().to_string())
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    /// The node's abstract contract descriptor: explicit primary
    /// supertype when declared, else the nearest contract-abstract
    /// relative in the tree. `None` when neither exists.
    fn abstract_descriptor(
        &self,
        tree: &ArtifactTree,
        node: &Arc<ArtifactNode>,
    ) -> ArchResult<Option<TypeDescriptor>> {
        let reference = match node.primary_supertype() {
            Some(TypeRef::Catalog(name)) => Some(name.clone()),
            Some(TypeRef::Node(supertype)) => self.catalog_name_of(tree, supertype)?,
            None => match tree.find_related(node, NodeKind::ContractAbstract) {
                Some(abstract_node) => self.catalog_name_of(tree, &abstract_node)?,
                None => None,
            },
        };

        match reference {
            Some(name) => self.catalog.load(&name).map(Some),
            None => Ok(None),
        }
    }

    /// Catalog name a node points at. Abstract contract nodes carry the
    /// fully qualified name as their filename; contract nodes defer to
    /// their own primary supertype.
    fn catalog_name_of(
        &self,
        tree: &ArtifactTree,
        node: &Arc<ArtifactNode>,
    ) -> ArchResult<Option<String>> {
        match node.kind() {
            NodeKind::ContractAbstract => Ok(node.filename().map(str::to_string)),
            _ => match node.primary_supertype() {
                Some(TypeRef::Catalog(name)) => Ok(Some(name.clone())),
                Some(TypeRef::Node(next)) => self.catalog_name_of(tree, next),
                None => match tree.find_related(node, NodeKind::ContractAbstract) {
                    Some(abstract_node) => Ok(abstract_node.filename().map(str::to_string)),
                    None => Ok(None),
                },
            },
        }
    }

    /// The contract node an implementation belongs to: explicit
    /// supertype reference first, tree query second.
    fn related_contract(
        &self,
        tree: &ArtifactTree,
        node: &Arc<ArtifactNode>,
    ) -> ArchResult<Arc<ArtifactNode>> {
        if let Some(TypeRef::Node(supertype)) = node.primary_supertype() {
            if supertype.kind() == NodeKind::Contract {
                return Ok(Arc::clone(supertype));
            }
        }
        tree.find_related(node, NodeKind::Contract)
            .ok_or_else(|| {
                DomainError::MissingRelated {
                    kind: node.kind(),
                    wanted: NodeKind::Contract,
                }
                .into()
            })
    }

    fn emit(&self, path: PathBuf, text: String) -> ArchResult<PathBuf> {
        self.emitter.emit(&path, &text)?;
        Ok(path)
    }
}

fn java_filename(name: &str) -> String {
    format!("{name}.java")
}
