//! The owned, rooted artifact tree and its kind query.
//!
//! Builders insert nodes as they construct them; the tree never mutates
//! a node. Iteration order is insertion order, which is deterministic
//! because parents are necessarily built before their children.
//!
//! The related-node query keeps a secondary index from kind to nodes of
//! that kind. When several candidates exist, the one sharing the deepest
//! common ancestor with the querying node wins — this scopes lookups to
//! the nearest enclosing subtree, the way the original resolved a
//! service's abstract contract across package bases.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{
    entities::node::{ArtifactNode, NodeId},
    kind::NodeKind,
};

#[derive(Debug)]
pub struct ArtifactTree {
    root: Arc<ArtifactNode>,
    nodes: Vec<Arc<ArtifactNode>>,
    by_kind: HashMap<NodeKind, Vec<Arc<ArtifactNode>>>,
}

impl ArtifactTree {
    pub fn new(root: Arc<ArtifactNode>) -> Self {
        let mut tree = Self {
            root: Arc::clone(&root),
            nodes: Vec::new(),
            by_kind: HashMap::new(),
        };
        tree.insert(root);
        tree
    }

    /// Register a built node. Ancestors a node references do not have to
    /// be inserted first, but insertion order is the generation order.
    pub fn insert(&mut self, node: Arc<ArtifactNode>) {
        self.by_kind
            .entry(node.kind())
            .or_default()
            .push(Arc::clone(&node));
        self.nodes.push(node);
    }

    pub fn root(&self) -> &Arc<ArtifactNode> {
        &self.root
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Arc<ArtifactNode>> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Find the node of `kind` nearest to `node`, measured by shared
    /// ancestry depth. Returns `None` when the tree has no node of that
    /// kind at all.
    pub fn find_related(
        &self,
        node: &Arc<ArtifactNode>,
        kind: NodeKind,
    ) -> Option<Arc<ArtifactNode>> {
        let candidates = self.by_kind.get(&kind)?;
        let ancestry = node.ancestry();

        candidates
            .iter()
            .max_by_key(|candidate| shared_prefix(&ancestry, &candidate.ancestry()))
            .cloned()
    }
}

fn shared_prefix(a: &[NodeId], b: &[NodeId]) -> usize {
    a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
}
