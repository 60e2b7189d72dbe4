//! Core domain layer for archgen.
//!
//! Pure data and logic: the artifact tree model, type descriptors, and
//! source text assembly. All I/O (catalog lookup, artifact emission) is
//! handled via ports defined in the application layer.
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: no filesystem, network, or external calls
//! - **Immutable entities**: nodes are finalized by their builders and
//!   shared by reference afterwards

pub mod entities;
pub mod error;
pub mod kind;
pub mod source;
pub mod tree;

pub use entities::{
    descriptor::{
        MethodParam, MethodSig, ReturnCategory, TypeDescriptor, TypeExpr, Visibility,
    },
    node::{ArtifactNode, NodeBuilder, NodeId, TypeRef},
};
pub use error::{DomainError, ErrorCategory};
pub use kind::NodeKind;
pub use source::{JavaUnit, ResolvedType, SourceWriter, simple_name};
pub use tree::ArtifactTree;
