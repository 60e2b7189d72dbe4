//! Artifact nodes: the units of the target tree.
//!
//! A node is an immutable value object finalized by its builder. Nodes
//! reference each other by identity (`Arc`), never by value copy — a
//! shared supertype node is pointed at by every dependent without
//! duplication. The filesystem path of a node is an emergent property of
//! ancestor segment concatenation, not stored state.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{error::DomainError, kind::NodeKind};

/// Stable identity for a node, used by the engine's visited set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(Uuid);

impl NodeId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reference to a type: either another artifact node or a name the
/// Type Catalog can load.
#[derive(Debug, Clone)]
pub enum TypeRef {
    Node(Arc<ArtifactNode>),
    Catalog(String),
}

impl TypeRef {
    pub fn catalog(name: impl Into<String>) -> Self {
        TypeRef::Catalog(name.into())
    }

    pub fn node(node: &Arc<ArtifactNode>) -> Self {
        TypeRef::Node(Arc::clone(node))
    }
}

/// One node of the artifact tree.
#[derive(Debug)]
pub struct ArtifactNode {
    id: NodeId,
    kind: NodeKind,
    /// Relative path segment below the parent. May span several path
    /// components (`src/main/java`, `com/example/app`).
    segment: String,
    parent: Option<Arc<ArtifactNode>>,
    /// First entry is primary for single-inheritance generation.
    supertypes: Vec<TypeRef>,
    /// Position i binds the i-th declared variable of the resolved
    /// supertype.
    generic_parameters: Vec<TypeRef>,
    filename: Option<String>,
    is_interface: bool,
    /// Free-form markers, e.g. `needs-framework-annotation`.
    metadata: Vec<String>,
    /// Pre-rendered content; written verbatim, bypassing generation.
    text: Option<String>,
}

impl ArtifactNode {
    pub fn builder(segment: impl Into<String>, kind: NodeKind) -> NodeBuilder {
        NodeBuilder::new(segment, kind)
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn segment(&self) -> &str {
        &self.segment
    }

    pub fn parent(&self) -> Option<&Arc<ArtifactNode>> {
        self.parent.as_ref()
    }

    pub fn supertypes(&self) -> &[TypeRef] {
        &self.supertypes
    }

    /// Primary supertype for single-inheritance generation.
    pub fn primary_supertype(&self) -> Option<&TypeRef> {
        self.supertypes.first()
    }

    pub fn generic_parameters(&self) -> &[TypeRef] {
        &self.generic_parameters
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn is_interface(&self) -> bool {
        self.is_interface
    }

    pub fn has_marker(&self, marker: &str) -> bool {
        self.metadata.iter().any(|m| m == marker)
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Filesystem path: ancestor segments concatenated root-first.
    /// Empty segments (anchor-only nodes) contribute nothing.
    pub fn path(&self) -> PathBuf {
        let mut segments = Vec::new();
        let mut current = Some(self);
        while let Some(node) = current {
            if !node.segment.is_empty() {
                segments.push(node.segment.as_str());
            }
            current = node.parent.as_deref();
        }
        segments.iter().rev().collect()
    }

    /// Ancestor chain root-first, as ids. Used by the tree query to
    /// score subtree proximity.
    pub fn ancestry(&self) -> Vec<NodeId> {
        let mut ids = vec![self.id];
        let mut current = self.parent.as_deref();
        while let Some(node) = current {
            ids.push(node.id);
            current = node.parent.as_deref();
        }
        ids.reverse();
        ids
    }

    /// Package name derived from the segments strictly below the
    /// nearest source-root ancestor (or below the root when no source
    /// root exists on the chain), with `/` mapped to `.`.
    pub fn package_name(&self) -> String {
        let mut segments: Vec<&str> = Vec::new();
        let mut current = Some(self);
        while let Some(node) = current {
            if matches!(node.kind, NodeKind::Root | NodeKind::SourceRoot | NodeKind::SourceTestRoot)
            {
                break;
            }
            if !node.segment.is_empty() {
                segments.push(node.segment.as_str());
            }
            current = node.parent.as_deref();
        }
        segments.reverse();
        segments.join("/").replace('/', ".")
    }

    fn has_base_ancestor(&self) -> bool {
        let mut current = self.parent.as_deref();
        while let Some(node) = current {
            if node.kind.is_base() {
                return true;
            }
            current = node.parent.as_deref();
        }
        false
    }
}

// Identity, not structure: two nodes are equal only when they are the
// same node.
impl PartialEq for ArtifactNode {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ArtifactNode {}

impl fmt::Display for ArtifactNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.path().display())
    }
}

/// Staged builder returning an owned, finalized node.
#[derive(Debug)]
pub struct NodeBuilder {
    kind: NodeKind,
    segment: String,
    parent: Option<Arc<ArtifactNode>>,
    supertypes: Vec<TypeRef>,
    generic_parameters: Vec<TypeRef>,
    filename: Option<String>,
    is_interface: bool,
    metadata: Vec<String>,
    text: Option<String>,
}

impl NodeBuilder {
    pub fn new(segment: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            kind,
            segment: segment.into(),
            parent: None,
            supertypes: Vec::new(),
            generic_parameters: Vec::new(),
            filename: None,
            is_interface: kind == NodeKind::Contract || kind == NodeKind::ContractAbstract,
            metadata: Vec::new(),
            text: None,
        }
    }

    pub fn parent(mut self, parent: &Arc<ArtifactNode>) -> Self {
        self.parent = Some(Arc::clone(parent));
        self
    }

    pub fn supertype(mut self, supertype: TypeRef) -> Self {
        self.supertypes.push(supertype);
        self
    }

    pub fn parameter(mut self, parameter: TypeRef) -> Self {
        self.generic_parameters.push(parameter);
        self
    }

    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn interface(mut self, is_interface: bool) -> Self {
        self.is_interface = is_interface;
        self
    }

    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.metadata.push(marker.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Finalize the node. Side-effect free; no disk I/O.
    pub fn build(self) -> Result<Arc<ArtifactNode>, DomainError> {
        if self.kind != NodeKind::Root && self.parent.is_none() {
            return Err(DomainError::MissingParent { kind: self.kind });
        }

        let node = Arc::new(ArtifactNode {
            id: NodeId::new(),
            kind: self.kind,
            segment: self.segment,
            parent: self.parent,
            supertypes: self.supertypes,
            generic_parameters: self.generic_parameters,
            filename: self.filename,
            is_interface: self.is_interface,
            metadata: self.metadata,
            text: self.text,
        });

        if node.kind.requires_base_ancestor() && !node.has_base_ancestor() {
            return Err(DomainError::MissingBaseAncestor { kind: node.kind });
        }

        Ok(node)
    }
}
