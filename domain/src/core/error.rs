//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Unknown evidence relationship: {0}")]
    UnknownRelationship(String),

    #[error("Invalid consensus threshold: {0}% (must be between 1 and 100)")]
    InvalidThreshold(u8),
}

impl DomainError {
    /// Shorthand for building a [`DomainError::Validation`]
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        DomainError::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Check if this error came from input validation
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation { .. })
    }
}
