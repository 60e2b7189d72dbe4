use thiserror::Error;

use crate::domain::kind::NodeKind;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports aggregate them per node)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Tree construction errors
    // ========================================================================
    #[error("node of kind '{kind}' requires a parent")]
    MissingParent { kind: NodeKind },

    #[error("node of kind '{kind}' requires a package-base ancestor")]
    MissingBaseAncestor { kind: NodeKind },

    #[error("node of kind '{kind}' requires a filename")]
    MissingFilename { kind: NodeKind },

    // ========================================================================
    // Type-parameter resolution errors
    // ========================================================================
    #[error("type '{type_name}' declares {expected} type parameter(s), node supplies {found}")]
    ArityMismatch {
        type_name: String,
        expected: usize,
        found: usize,
    },

    #[error("type variable '{name}' has no binding in the declared contract")]
    UnknownTypeVariable { name: String },

    #[error("wildcard bound in '{context}' is not a type variable and cannot be resolved")]
    UnsupportedWildcard { context: String },

    // ========================================================================
    // Tree query errors
    // ========================================================================
    #[error("no related '{wanted}' node found for '{kind}' node")]
    MissingRelated { kind: NodeKind, wanted: NodeKind },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingParent { kind } => vec![
                format!("'{}' nodes cannot be roots", kind),
                "Attach the node to a parent with .parent(..) before build()".into(),
            ],
            Self::MissingBaseAncestor { kind } => vec![
                format!("'{}' nodes emit source and need a package", kind),
                "Add a source-base (or source-base-abstract) ancestor".into(),
            ],
            Self::ArityMismatch {
                type_name,
                expected,
                ..
            } => vec![
                format!(
                    "Supply exactly {} parameter(s) for '{}' with .parameter(..)",
                    expected, type_name
                ),
                "Raw/unbounded supertypes are deliberately rejected".into(),
            ],
            Self::UnknownTypeVariable { name } => vec![
                format!("The contract references '{}' but never declares it", name),
                "Check the catalog descriptor's type parameter list".into(),
            ],
            Self::UnsupportedWildcard { .. } => vec![
                "Only wildcards bounded by a declared type variable resolve".into(),
                "Replace the wildcard bound with a type variable in the contract".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingParent { .. }
            | Self::MissingBaseAncestor { .. }
            | Self::MissingFilename { .. }
            | Self::ArityMismatch { .. } => ErrorCategory::Configuration,
            Self::UnknownTypeVariable { .. } | Self::UnsupportedWildcard { .. } => {
                ErrorCategory::Contract
            }
            Self::MissingRelated { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The tree was assembled incorrectly.
    Configuration,
    /// A catalog descriptor is malformed for this use.
    Contract,
    NotFound,
    Internal,
}
