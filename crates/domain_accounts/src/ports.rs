//! Account domain ports
//!
//! The account domain needs a durable user store and an opaque credential
//! hasher. Both are external collaborators; adapters implement these traits
//! (a database-backed store in production, the in-memory adapter in tests).

use async_trait::async_trait;

use core_kernel::{DomainPort, StoreError, UserId};

use crate::account::User;

/// Durable storage for user accounts
///
/// The store enforces email uniqueness; `insert_user` fails with
/// [`StoreError::DuplicateKey`] when the email is already registered.
#[async_trait]
pub trait UserStore: DomainPort {
    /// Persists a new user
    async fn insert_user(&self, user: &User) -> Result<(), StoreError>;

    /// Retrieves a user by id
    async fn get_user(&self, id: UserId) -> Result<User, StoreError>;

    /// Looks a user up by email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Replaces a stored user
    async fn update_user(&self, user: &User) -> Result<(), StoreError>;
}

/// Opaque hash/verify operations over user credentials
///
/// The hashing scheme lives outside the domain core; tests use a
/// deterministic stand-in.
pub trait CredentialHasher: Send + Sync + 'static {
    /// Hashes a plaintext credential for storage
    fn hash(&self, plaintext: &str) -> String;

    /// Verifies a plaintext credential against a stored hash
    fn verify(&self, plaintext: &str, hash: &str) -> bool;
}
