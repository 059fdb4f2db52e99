//! The shared error taxonomy
//!
//! Every operation surfaced by the domain services fails with one of these
//! kinds. All of them are recoverable at the request boundary: a failure
//! maps to a single rejected operation with no partial state change.

use thiserror::Error;

use crate::ports::StoreError;

/// Error kinds surfaced by the domain core
#[derive(Debug, Error)]
pub enum CoreError {
    /// A referenced entity is absent
    #[error("not found: {0}")]
    NotFound(String),

    /// Authenticated but not authorized for this resource
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Malformed enum value or failed field validation
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Operation not legal for the entity's current state
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Uniqueness or referential-integrity violation surfaced by the store
    #[error("conflict: {0}")]
    Conflict(String),

    /// A bounded retry loop ran out of attempts
    #[error("exhausted: {0}")]
    Exhausted(String),
}

impl CoreError {
    pub fn not_found(message: impl Into<String>) -> Self {
        CoreError::NotFound(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        CoreError::Forbidden(message.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        CoreError::InvalidInput(message.into())
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        CoreError::InvalidState(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        CoreError::Conflict(message.into())
    }

    pub fn exhausted(message: impl Into<String>) -> Self {
        CoreError::Exhausted(message.into())
    }

    /// Returns true if this error indicates an absent entity
    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::NotFound(_))
    }

    /// Returns true if this error indicates an authorization failure
    pub fn is_forbidden(&self) -> bool {
        matches!(self, CoreError::Forbidden(_))
    }
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => CoreError::NotFound(err.to_string()),
            StoreError::DuplicateKey { .. } => CoreError::Conflict(err.to_string()),
            StoreError::ForeignKeyRestrict { .. } => CoreError::Conflict(err.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(err: validator::ValidationErrors) -> Self {
        CoreError::InvalidInput(err.to_string())
    }
}
