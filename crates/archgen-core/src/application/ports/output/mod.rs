//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the engine needs from external systems.
//! The `archgen-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::TypeDescriptor;
use crate::error::ArchResult;

/// Port for type-descriptor lookup.
///
/// Implemented by:
/// - `archgen_adapters::catalog::InMemoryCatalog` (built-in descriptors)
///
/// The engine never mutates the catalog; it is read-only from the
/// core's perspective.
pub trait TypeCatalog: Send + Sync {
    /// Load the descriptor for a fully qualified type name.
    fn load(&self, name: &str) -> ArchResult<TypeDescriptor>;

    /// Cheap existence probe; used by validation paths that do not need
    /// the descriptor itself.
    fn contains(&self, name: &str) -> bool {
        self.load(name).is_ok()
    }
}

/// Port for persisting generated text.
///
/// Implemented by:
/// - `archgen_adapters::emitter::LocalEmitter` (production)
/// - `archgen_adapters::emitter::MemoryEmitter` (testing)
///
/// Downstream build/compile steps keyed by file extension are entirely
/// the adapter's business; the core only hands over text and a path.
pub trait ArtifactEmitter: Send + Sync {
    /// Write `text` at `path`, creating parent directories as needed.
    fn emit(&self, path: &Path, text: &str) -> ArchResult<()>;
}
