//! The closed set of artifact node kinds.
//!
//! Kinds are the wire contract between tree builders and the generation
//! engine. The enum is deliberately exhaustive: a routine for an unknown
//! kind is unrepresentable, and a kind without a routine is a legal
//! structural anchor (skipped with a debug log).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind tag carried by every [`super::ArtifactNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// Tree root; owns the output directory name.
    Root,
    /// Source root, e.g. `src/main/java`. Structural only.
    SourceRoot,
    /// Test source root, e.g. `src/test/groovy`. Structural only.
    SourceTestRoot,
    /// Package base under a source root, e.g. `com/example/app`.
    SourceBase,
    /// Package base for abstract contracts that live outside the
    /// generated app (usually a library package).
    SourceBaseAbstract,
    /// Package base under a test source root.
    SourceTestBase,
    /// A generated interface extending an abstract contract.
    Contract,
    /// An abstract contract backed by a catalog descriptor; never
    /// generated itself.
    ContractAbstract,
    /// A generated class implementing a contract's method set.
    Implementation,
    /// A pre-rendered text file written verbatim.
    TextResource,
    /// A build file (`build.gradle` etc.); pre-rendered text.
    BuildConfig,
    /// A properties/resource file; pre-rendered or empty text.
    SourceProperties,
}

impl NodeKind {
    /// Every kind, in declaration order. Used by the engine's routine
    /// coverage check and the CLI `kinds` listing.
    pub const ALL: [NodeKind; 12] = [
        NodeKind::Root,
        NodeKind::SourceRoot,
        NodeKind::SourceTestRoot,
        NodeKind::SourceBase,
        NodeKind::SourceBaseAbstract,
        NodeKind::SourceTestBase,
        NodeKind::Contract,
        NodeKind::ContractAbstract,
        NodeKind::Implementation,
        NodeKind::TextResource,
        NodeKind::BuildConfig,
        NodeKind::SourceProperties,
    ];

    /// `true` for kinds that emit Java source and therefore must sit
    /// under a package base.
    pub const fn requires_base_ancestor(self) -> bool {
        matches!(
            self,
            NodeKind::Contract | NodeKind::ContractAbstract | NodeKind::Implementation
        )
    }

    /// `true` for the package-base kinds themselves.
    pub const fn is_base(self) -> bool {
        matches!(
            self,
            NodeKind::SourceBase | NodeKind::SourceBaseAbstract | NodeKind::SourceTestBase
        )
    }

    /// Stable kebab-case name used in logs and CLI output.
    pub const fn name(self) -> &'static str {
        match self {
            NodeKind::Root => "root",
            NodeKind::SourceRoot => "source-root",
            NodeKind::SourceTestRoot => "source-test-root",
            NodeKind::SourceBase => "source-base",
            NodeKind::SourceBaseAbstract => "source-base-abstract",
            NodeKind::SourceTestBase => "source-test-base",
            NodeKind::Contract => "contract",
            NodeKind::ContractAbstract => "contract-abstract",
            NodeKind::Implementation => "implementation",
            NodeKind::TextResource => "text-resource",
            NodeKind::BuildConfig => "build-config",
            NodeKind::SourceProperties => "source-properties",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_covers_every_kind() {
        // Display names must be unique; a duplicate would break the
        // CLI kinds listing and the coverage check.
        let mut names: Vec<_> = NodeKind::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), NodeKind::ALL.len());
    }

    #[test]
    fn source_kinds_require_base() {
        assert!(NodeKind::Contract.requires_base_ancestor());
        assert!(NodeKind::Implementation.requires_base_ancestor());
        assert!(!NodeKind::TextResource.requires_base_ancestor());
        assert!(!NodeKind::Root.requires_base_ancestor());
    }
}
