//! Archgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the
//! archgen artifact generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          archgen-cli (CLI)              │
//! │      (Implements Driving Ports)         │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (GeneratorService, TypeResolver)     │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │   (Driven: TypeCatalog, Emitter)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    archgen-adapters (Infrastructure)    │
//! │   (InMemoryCatalog, LocalEmitter, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ArtifactNode, ArtifactTree, TypeExpr) │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use archgen_core::{
//!     application::GeneratorService,
//!     domain::{ArtifactNode, ArtifactTree, NodeKind},
//! };
//!
//! // 1. Assemble the tree
//! let root = ArtifactNode::builder("rootDir", NodeKind::Root)
//!     .build()
//!     .unwrap();
//! let tree = ArtifactTree::new(root);
//!
//! // 2. Run the engine (with injected adapters)
//! let mut engine = GeneratorService::new(catalog, emitter);
//! let report = engine.generate_tree(&tree);
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerationReport, GeneratorService, NodeFailure, TypeResolver,
        ports::{ArtifactEmitter, TypeCatalog},
    };
    pub use crate::domain::{
        ArtifactNode, ArtifactTree, MethodSig, NodeKind, ResolvedType, SourceWriter,
        TypeDescriptor, TypeExpr, TypeRef, Visibility,
    };
    pub use crate::error::{ArchError, ArchResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
