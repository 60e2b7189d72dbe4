//! TOML-backed catalog manifests.
//!
//! A manifest is a flat list of type descriptors, so a user can describe
//! external types without compiling against them.
//!
//! # `catalog.toml` format
//!
//! ```toml
//! [[types]]
//! name = "example.net.NetworkComponent"
//! type_params = ["M", "R"]
//!
//!   [[types.methods]]
//!   name = "send"
//!   return_type = { Concrete = "void" }
//!   throws = ["example.net.NetworkException"]
//!
//!     [[types.methods.parameters]]
//!     name = "message"
//!     ty = { Variable = "M" }
//! ```
//!
//! Optional fields (`type_params`, `methods`, `parameters`, `throws`,
//! `visibility`, `has_default_body`) default to empty/public/required.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, instrument};

use archgen_core::{
    application::ApplicationError,
    domain::TypeDescriptor,
    error::{ArchError, ArchResult},
};

/// Deserialised representation of a `catalog.toml` file.
#[derive(Debug, Deserialize)]
struct CatalogManifest {
    #[serde(default)]
    types: Vec<TypeDescriptor>,
}

/// Parse a manifest string into descriptors.
pub fn load_manifest_str(text: &str) -> ArchResult<Vec<TypeDescriptor>> {
    let manifest: CatalogManifest =
        toml::from_str(text).map_err(|e| ArchError::Configuration {
            message: format!("Invalid catalog manifest: {e}"),
        })?;
    Ok(manifest.types)
}

/// Load and parse a manifest file.
#[instrument]
pub fn load_manifest_file(path: &Path) -> ArchResult<Vec<TypeDescriptor>> {
    let text = fs::read_to_string(path).map_err(|e| ApplicationError::CatalogUnavailable {
        reason: format!("Failed to read {}: {}", path.display(), e),
    })?;

    let types = load_manifest_str(&text)?;
    debug!(path = %path.display(), count = types.len(), "loaded catalog manifest");
    Ok(types)
}
