//! Error types for the operational document model.

use thiserror::Error;

/// Errors produced while interpreting document data.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A `type` discriminant that is none of the five known values.
    #[error("unknown document type: {0}")]
    UnknownDocumentType(String),

    /// A quick-action key outside the fixed six-kind set.
    #[error("unknown quick action kind: {0}")]
    UnknownQuickActionKind(String),
}

/// Convenience result alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
