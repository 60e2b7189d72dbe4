//! Application layer errors.
//!
//! These errors represent failures at the port boundaries, not in the
//! tree model itself. Tree/resolution errors are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while driving the ports.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The Type Catalog has no entry for a referenced name.
    #[error("no catalog entry for type '{name}'")]
    CatalogEntryMissing { name: String },

    /// Catalog access failed (lock poisoned, backing store error).
    #[error("type catalog unavailable: {reason}")]
    CatalogUnavailable { reason: String },

    /// The emitter failed to persist generated text.
    #[error("emission failed at {path}: {reason}")]
    EmissionFailed { path: PathBuf, reason: String },

    /// A generation routine was invoked for a node missing required
    /// emission metadata.
    #[error("node at {path} has no filename to emit under")]
    MissingEmitTarget { path: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::CatalogEntryMissing { name } => vec![
                format!("'{}' is not registered in the type catalog", name),
                "Register the descriptor before generating".into(),
                "Try: archgen kinds to inspect the built-in catalog".into(),
            ],
            Self::CatalogUnavailable { .. } => vec![
                "The catalog backend could not be read".into(),
                "Try again in a moment".into(),
            ],
            Self::EmissionFailed { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::MissingEmitTarget { .. } => vec![
                "Give the node a filename with .filename(..)".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CatalogEntryMissing { .. } => ErrorCategory::NotFound,
            Self::CatalogUnavailable { .. } => ErrorCategory::Internal,
            Self::EmissionFailed { .. } => ErrorCategory::Internal,
            Self::MissingEmitTarget { .. } => ErrorCategory::Configuration,
        }
    }
}
