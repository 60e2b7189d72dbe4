//! Type Catalog adapters.

pub mod file;
pub mod memory;

pub use file::load_manifest_file;
pub use memory::InMemoryCatalog;
