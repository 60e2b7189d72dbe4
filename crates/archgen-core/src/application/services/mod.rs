//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level use case: "generate every artifact of a built tree".

pub mod generator_service;
pub mod type_resolver;

pub use generator_service::{
    GenerationReport, GeneratorService, NEEDS_FRAMEWORK_ANNOTATION, NodeFailure,
};
pub use type_resolver::{TypeResolver, VarMapping};
