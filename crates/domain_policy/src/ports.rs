//! Policy domain ports

use async_trait::async_trait;

use core_kernel::{DomainPort, PolicyId, StoreError, UserId};

use crate::policy::Policy;

/// Durable storage for policies
///
/// The store enforces policy-number uniqueness and the policy->claim
/// RESTRICT rule: `delete_policy` fails with
/// [`StoreError::ForeignKeyRestrict`] while claims reference the policy.
#[async_trait]
pub trait PolicyStore: DomainPort {
    /// Persists a new policy
    async fn insert_policy(&self, policy: &Policy) -> Result<(), StoreError>;

    /// Retrieves a policy by id
    async fn get_policy(&self, id: PolicyId) -> Result<Policy, StoreError>;

    /// Returns true if a policy already carries this number
    async fn policy_number_exists(&self, number: &str) -> Result<bool, StoreError>;

    /// Lists all policies owned by a user
    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Policy>, StoreError>;

    /// Lists the active policies owned by a user
    async fn list_active_by_owner(&self, owner: UserId) -> Result<Vec<Policy>, StoreError>;

    /// Lists every policy
    async fn list_all(&self) -> Result<Vec<Policy>, StoreError>;

    /// Replaces a stored policy
    async fn update_policy(&self, policy: &Policy) -> Result<(), StoreError>;

    /// Deletes a policy
    async fn delete_policy(&self, id: PolicyId) -> Result<(), StoreError>;
}
