pub mod descriptor;
pub mod node;

pub use crate::domain::DomainError;
pub use descriptor::{MethodParam, MethodSig, ReturnCategory, TypeDescriptor, TypeExpr, Visibility};
pub use node::{ArtifactNode, NodeBuilder, NodeId, TypeRef};
