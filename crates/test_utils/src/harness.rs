//! Service wiring over the in-memory store
//!
//! Stands in for the application's composition root: one shared
//! [`MemoryStore`] behind every port, each service constructed over it.

use std::sync::Arc;

use core_kernel::Role;
use domain_accounts::{AccountService, User};
use domain_claims::ClaimService;
use domain_policy::{Policy, PolicyService};
use infra_memory::MemoryStore;

use crate::builders::TestUserBuilder;
use crate::hashing::PlainHasher;

/// Everything a service-level test needs, wired and ready
pub struct TestHarness {
    pub store: MemoryStore,
    pub accounts: AccountService,
    pub policies: PolicyService,
    pub claims: ClaimService,
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHarness {
    /// Builds a fresh harness over an empty store
    pub fn new() -> Self {
        crate::init_tracing();

        let store = MemoryStore::new();
        let accounts = AccountService::new(Arc::new(store.clone()), Arc::new(PlainHasher));
        let policies = PolicyService::new(Arc::new(store.clone()), Arc::new(store.clone()));
        let claims = ClaimService::new(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store.clone()),
        );

        Self {
            store,
            accounts,
            policies,
            claims,
        }
    }

    /// Seeds a user with the given role directly into the store
    pub async fn seed_user(&self, role: Role) -> User {
        let user = TestUserBuilder::new().with_role(role).build();
        domain_accounts::UserStore::insert_user(&self.store, &user)
            .await
            .expect("seed user");
        user
    }

    /// Seeds a policy directly into the store
    pub async fn seed_policy(&self, policy: &Policy) {
        domain_policy::PolicyStore::insert_policy(&self.store, policy)
            .await
            .expect("seed policy");
    }
}
