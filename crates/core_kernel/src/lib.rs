//! Core Kernel - Foundational types for the claims back office
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money with precise decimal arithmetic
//! - Strongly-typed entity identifiers
//! - The role model and ownership-scoped access predicates
//! - Reference-number generation for claims and policies
//! - The shared error taxonomy and persistence port contracts

pub mod access;
pub mod error;
pub mod identifiers;
pub mod money;
pub mod ports;
pub mod refnum;

pub use access::{can_access_claim, can_access_policy, Role};
pub use error::CoreError;
pub use identifiers::{AlertId, ClaimEventId, ClaimId, DocumentId, PolicyId, UserId};
pub use money::Money;
pub use ports::{DomainPort, StoreError};
