//! Artifact Emitter adapters.

pub mod local;
pub mod memory;

pub use local::LocalEmitter;
pub use memory::MemoryEmitter;
