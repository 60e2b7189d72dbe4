//! Application layer for archgen.
//!
//! This layer contains:
//! - **Services**: the generation engine and the type resolver
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but owns no tree
//! model of its own. All tree and resolution rules live in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{GenerationReport, GeneratorService, NodeFailure, TypeResolver};

pub use ports::{ArtifactEmitter, TypeCatalog};

pub use error::ApplicationError;
