//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the engine
//! needs from the outside world. Adapters in `archgen-adapters`
//! implement these.
//!
//! - **Driven (Output) Ports**: called by the engine, implemented by
//!   infrastructure — `TypeCatalog` and `ArtifactEmitter`.
//! - **Driving (Input) Ports**: the CLI drives the engine directly via
//!   `GeneratorService`.

pub mod output;

pub use output::{ArtifactEmitter, TypeCatalog};
