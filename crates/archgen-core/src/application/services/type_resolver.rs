//! Type-parameter resolution.
//!
//! Given a node and the declared type variables of its resolved
//! supertype, the resolver builds a name→position mapping and
//! substitutes every variable occurrence with a concrete catalog type.
//! A generic-parameter entry may reference another node instead of a
//! terminal catalog name; resolution then re-indexes the same position
//! in that node's own ordered parameter list, recursing until a
//! terminal name is reached. This is how chains like "this node's 2nd
//! parameter supplies the 2nd parameter of the node it defers to" are
//! resolved.
//!
//! Strictness: a node supplying zero parameters for a generic supertype
//! fails with an arity mismatch instead of falling back to raw types —
//! incomplete tree construction should surface early.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::trace;

use crate::{
    application::ports::TypeCatalog,
    domain::{ArtifactNode, DomainError, ResolvedType, TypeDescriptor, TypeExpr, TypeRef},
    error::ArchResult,
};

/// Name → position binding for one supertype's declared variables.
pub type VarMapping = HashMap<String, usize>;

/// Stateless resolution façade over the Type Catalog port.
pub struct TypeResolver<'a> {
    catalog: &'a dyn TypeCatalog,
}

impl<'a> TypeResolver<'a> {
    pub fn new(catalog: &'a dyn TypeCatalog) -> Self {
        Self { catalog }
    }

    /// Build the name→position mapping for `declared` against the
    /// node's supplied parameters.
    pub fn mapping(
        &self,
        type_name: &str,
        declared: &[String],
        node: &ArtifactNode,
    ) -> ArchResult<VarMapping> {
        if declared.len() != node.generic_parameters().len() {
            return Err(DomainError::ArityMismatch {
                type_name: type_name.to_string(),
                expected: declared.len(),
                found: node.generic_parameters().len(),
            }
            .into());
        }

        Ok(declared
            .iter()
            .enumerate()
            .map(|(position, name)| (name.clone(), position))
            .collect())
    }

    /// Resolve a type variable to its bound catalog descriptor.
    pub fn resolve_variable(
        &self,
        var_name: &str,
        mapping: &VarMapping,
        node: &ArtifactNode,
    ) -> ArchResult<TypeDescriptor> {
        let position = *mapping
            .get(var_name)
            .ok_or_else(|| DomainError::UnknownTypeVariable {
                name: var_name.to_string(),
            })?;

        trace!(var = var_name, position, node = %node, "resolving type variable");
        self.resolve_position(position, node)
    }

    /// Resolve every declared position of a supertype in order.
    pub fn resolve_all_positions(
        &self,
        node: &ArtifactNode,
    ) -> ArchResult<Vec<TypeDescriptor>> {
        (0..node.generic_parameters().len())
            .map(|position| self.resolve_position(position, node))
            .collect()
    }

    /// Resolve one parameter slot, following node references until a
    /// terminal catalog name is reached.
    fn resolve_position(
        &self,
        position: usize,
        node: &ArtifactNode,
    ) -> ArchResult<TypeDescriptor> {
        match node.generic_parameters().get(position) {
            Some(TypeRef::Catalog(name)) => self.catalog.load(name),
            Some(TypeRef::Node(source)) => self.resolve_via_source(position, source),
            None => Err(DomainError::ArityMismatch {
                type_name: node_label(node),
                expected: position + 1,
                found: node.generic_parameters().len(),
            }
            .into()),
        }
    }

    fn resolve_via_source(
        &self,
        position: usize,
        source: &Arc<ArtifactNode>,
    ) -> ArchResult<TypeDescriptor> {
        if source.generic_parameters().is_empty() {
            return Err(DomainError::ArityMismatch {
                type_name: node_label(source),
                expected: position + 1,
                found: 0,
            }
            .into());
        }
        self.resolve_position(position, source)
    }

    /// Resolve a declared method type shape into a concrete one.
    ///
    /// Directly parameterized occurrences keep their raw-type identity
    /// and resolve each argument recursively. Wildcards resolve only
    /// when bounded by a declared type variable; anything else is an
    /// explicit unsupported case.
    pub fn resolve_expr(
        &self,
        expr: &TypeExpr,
        mapping: &VarMapping,
        node: &ArtifactNode,
    ) -> ArchResult<ResolvedType> {
        match expr {
            TypeExpr::Concrete(name) => Ok(ResolvedType::concrete(name.clone())),
            TypeExpr::Variable(var) => {
                let descriptor = self.resolve_variable(var, mapping, node)?;
                Ok(ResolvedType::concrete(descriptor.name()))
            }
            TypeExpr::Parameterized { raw, args } => {
                let resolved = args
                    .iter()
                    .map(|arg| self.resolve_expr(arg, mapping, node))
                    .collect::<ArchResult<Vec<_>>>()?;
                Ok(ResolvedType::Parameterized {
                    raw: raw.clone(),
                    args: resolved,
                })
            }
            TypeExpr::Wildcard { upper_bound } => match upper_bound.as_deref() {
                Some(TypeExpr::Variable(var)) => {
                    let descriptor = self.resolve_variable(var, mapping, node)?;
                    Ok(ResolvedType::WildcardExtends(Box::new(
                        ResolvedType::concrete(descriptor.name()),
                    )))
                }
                _ => Err(DomainError::UnsupportedWildcard {
                    context: expr.to_string(),
                }
                .into()),
            },
        }
    }
}

fn node_label(node: &ArtifactNode) -> String {
    node.filename().unwrap_or(node.segment()).to_string()
}
