//! Persistence port contracts
//!
//! Each domain defines an async store trait over these shared pieces. The
//! durable store is an external collaborator: it owns auto-generated keys,
//! uniqueness constraints (email, policy number, claim number) and the
//! foreign-key behaviors (policy->claim RESTRICT, user->policy and
//! user->claim(owner) CASCADE, user->claim(adjuster) SET NULL).
//!
//! Adapters must apply each mutation atomically so a partially applied
//! state (e.g. a claim number reserved but no claim persisted) is never
//! observable.

use std::fmt;
use thiserror::Error;

/// Error type for store operations
///
/// A unified error type that all store adapters use, ensuring consistent
/// error handling whatever the backing system is.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested entity was not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// A uniqueness constraint was violated
    #[error("{entity} already exists with {key}")]
    DuplicateKey { entity: &'static str, key: String },

    /// A delete was rejected because dependent rows reference the entity
    #[error("{entity} {id} is still referenced by {dependent} records")]
    ForeignKeyRestrict {
        entity: &'static str,
        id: String,
        dependent: &'static str,
    },
}

impl StoreError {
    /// Creates a NotFound error
    pub fn not_found(entity: &'static str, id: impl fmt::Display) -> Self {
        StoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Creates a DuplicateKey error
    pub fn duplicate_key(entity: &'static str, key: impl fmt::Display) -> Self {
        StoreError::DuplicateKey {
            entity,
            key: key.to_string(),
        }
    }

    /// Creates a ForeignKeyRestrict error
    pub fn restricted(
        entity: &'static str,
        id: impl fmt::Display,
        dependent: &'static str,
    ) -> Self {
        StoreError::ForeignKeyRestrict {
            entity,
            id: id.to_string(),
            dependent,
        }
    }

    /// Returns true if this error indicates the entity was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }

    /// Returns true if this error indicates a uniqueness violation
    pub fn is_duplicate(&self) -> bool {
        matches!(self, StoreError::DuplicateKey { .. })
    }
}

/// Marker trait for all domain store ports
///
/// Store traits extend this marker so adapters are thread-safe and usable
/// from async contexts.
pub trait DomainPort: Send + Sync + 'static {}
