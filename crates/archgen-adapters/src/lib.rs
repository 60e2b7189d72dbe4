//! Infrastructure adapters for archgen.
//!
//! This crate implements the ports defined in
//! `archgen-core::application::ports`. It contains all external
//! dependencies and I/O operations: the type catalog backends, artifact
//! emitters, and the prebuilt architecture templates.

pub mod builtin_descriptors;
pub mod catalog;
pub mod emitter;
pub mod templates;

// Re-export commonly used adapters
pub use catalog::InMemoryCatalog;
pub use emitter::{LocalEmitter, MemoryEmitter};
pub use templates::MicroserviceTemplate;
