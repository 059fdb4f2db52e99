//! The in-memory store

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use core_kernel::{AlertId, ClaimId, DomainPort, PolicyId, StoreError, UserId};
use domain_accounts::{User, UserStore};
use domain_claims::{
    Claim, ClaimDocument, ClaimEvent, ClaimEventStore, ClaimStatus, ClaimStore, DocumentStore,
    FraudAlert, FraudAlertStore,
};
use domain_policy::{Policy, PolicyStore};

#[derive(Default)]
struct Tables {
    users: HashMap<UserId, User>,
    policies: HashMap<PolicyId, Policy>,
    claims: HashMap<ClaimId, Claim>,
    events: Vec<ClaimEvent>,
    documents: Vec<ClaimDocument>,
    alerts: HashMap<AlertId, FraudAlert>,
}

/// An in-memory persistence gateway
///
/// Cloneable handle; clones share the same underlying tables.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes a user, applying the store's referential rules
    ///
    /// Owned policies and claims are cascaded; claims where the user is
    /// only the assigned adjuster keep their row with the reference nulled
    /// out. Not exposed through the domain ports — the core never
    /// hard-deletes users.
    pub async fn remove_user(&self, id: UserId) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        if tables.users.remove(&id).is_none() {
            return Err(StoreError::not_found("user", id));
        }

        tables.claims.retain(|_, claim| claim.owner_id != id);
        for claim in tables.claims.values_mut() {
            if claim.adjuster_id == Some(id) {
                claim.adjuster_id = None;
            }
        }
        tables.policies.retain(|_, policy| policy.owner_id != id);

        debug!(user = %id, "user removed with cascade");
        Ok(())
    }
}

impl DomainPort for MemoryStore {}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert_user(&self, user: &User) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|u| u.email == user.email) {
            return Err(StoreError::duplicate_key("user", &user.email));
        }
        tables.users.insert(user.id, user.clone());
        Ok(())
    }

    async fn get_user(&self, id: UserId) -> Result<User, StoreError> {
        let tables = self.tables.read().await;
        tables
            .users
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("user", id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn update_user(&self, user: &User) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&user.id) {
            return Err(StoreError::not_found("user", user.id));
        }
        tables.users.insert(user.id, user.clone());
        Ok(())
    }
}

#[async_trait]
impl PolicyStore for MemoryStore {
    async fn insert_policy(&self, policy: &Policy) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        if tables
            .policies
            .values()
            .any(|p| p.policy_number == policy.policy_number)
        {
            return Err(StoreError::duplicate_key("policy", &policy.policy_number));
        }
        tables.policies.insert(policy.id, policy.clone());
        Ok(())
    }

    async fn get_policy(&self, id: PolicyId) -> Result<Policy, StoreError> {
        let tables = self.tables.read().await;
        tables
            .policies
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("policy", id))
    }

    async fn policy_number_exists(&self, number: &str) -> Result<bool, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.policies.values().any(|p| p.policy_number == number))
    }

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Policy>, StoreError> {
        let tables = self.tables.read().await;
        let mut policies: Vec<Policy> = tables
            .policies
            .values()
            .filter(|p| p.owner_id == owner)
            .cloned()
            .collect();
        policies.sort_by_key(|p| p.created_at);
        Ok(policies)
    }

    async fn list_active_by_owner(&self, owner: UserId) -> Result<Vec<Policy>, StoreError> {
        let tables = self.tables.read().await;
        let mut policies: Vec<Policy> = tables
            .policies
            .values()
            .filter(|p| p.owner_id == owner && p.is_active)
            .cloned()
            .collect();
        policies.sort_by_key(|p| p.created_at);
        Ok(policies)
    }

    async fn list_all(&self) -> Result<Vec<Policy>, StoreError> {
        let tables = self.tables.read().await;
        let mut policies: Vec<Policy> = tables.policies.values().cloned().collect();
        policies.sort_by_key(|p| p.created_at);
        Ok(policies)
    }

    async fn update_policy(&self, policy: &Policy) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.policies.contains_key(&policy.id) {
            return Err(StoreError::not_found("policy", policy.id));
        }
        tables.policies.insert(policy.id, policy.clone());
        Ok(())
    }

    async fn delete_policy(&self, id: PolicyId) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.policies.contains_key(&id) {
            return Err(StoreError::not_found("policy", id));
        }
        // ON DELETE RESTRICT: claims keep their policy alive
        if tables.claims.values().any(|c| c.policy_id == id) {
            return Err(StoreError::restricted("policy", id, "claim"));
        }
        tables.policies.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl ClaimStore for MemoryStore {
    async fn insert_claim(&self, claim: &Claim) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        if tables
            .claims
            .values()
            .any(|c| c.claim_number == claim.claim_number)
        {
            return Err(StoreError::duplicate_key("claim", &claim.claim_number));
        }
        tables.claims.insert(claim.id, claim.clone());
        Ok(())
    }

    async fn get_claim(&self, id: ClaimId) -> Result<Claim, StoreError> {
        let tables = self.tables.read().await;
        tables
            .claims
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("claim", id))
    }

    async fn claim_number_exists(&self, number: &str) -> Result<bool, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.claims.values().any(|c| c.claim_number == number))
    }

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Claim>, StoreError> {
        let tables = self.tables.read().await;
        let mut claims: Vec<Claim> = tables
            .claims
            .values()
            .filter(|c| c.owner_id == owner)
            .cloned()
            .collect();
        claims.sort_by_key(|c| c.created_at);
        Ok(claims)
    }

    async fn list_all(&self) -> Result<Vec<Claim>, StoreError> {
        let tables = self.tables.read().await;
        let mut claims: Vec<Claim> = tables.claims.values().cloned().collect();
        claims.sort_by_key(|c| c.created_at);
        Ok(claims)
    }

    async fn list_by_status(&self, status: ClaimStatus) -> Result<Vec<Claim>, StoreError> {
        let tables = self.tables.read().await;
        let mut claims: Vec<Claim> = tables
            .claims
            .values()
            .filter(|c| c.status == status)
            .cloned()
            .collect();
        claims.sort_by_key(|c| c.created_at);
        Ok(claims)
    }

    async fn update_claim(&self, claim: &Claim) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.claims.contains_key(&claim.id) {
            return Err(StoreError::not_found("claim", claim.id));
        }
        tables.claims.insert(claim.id, claim.clone());
        Ok(())
    }

    async fn delete_claim(&self, id: ClaimId) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        if tables.claims.remove(&id).is_none() {
            return Err(StoreError::not_found("claim", id));
        }
        Ok(())
    }
}

#[async_trait]
impl ClaimEventStore for MemoryStore {
    async fn append_event(&self, event: &ClaimEvent) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        tables.events.push(event.clone());
        Ok(())
    }

    async fn list_events(&self, claim_id: ClaimId) -> Result<Vec<ClaimEvent>, StoreError> {
        let tables = self.tables.read().await;
        let mut events: Vec<ClaimEvent> = tables
            .events
            .iter()
            .filter(|e| e.claim_id == claim_id)
            .cloned()
            .collect();
        events.sort_by_key(|e| e.occurred_at);
        Ok(events)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_document(&self, document: &ClaimDocument) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        tables.documents.push(document.clone());
        Ok(())
    }

    async fn list_documents(&self, claim_id: ClaimId) -> Result<Vec<ClaimDocument>, StoreError> {
        let tables = self.tables.read().await;
        let mut documents: Vec<ClaimDocument> = tables
            .documents
            .iter()
            .filter(|d| d.claim_id == claim_id)
            .cloned()
            .collect();
        documents.sort_by_key(|d| d.uploaded_at);
        Ok(documents)
    }
}

#[async_trait]
impl FraudAlertStore for MemoryStore {
    async fn insert_alert(&self, alert: &FraudAlert) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        tables.alerts.insert(alert.id, alert.clone());
        Ok(())
    }

    async fn get_alert(&self, id: AlertId) -> Result<FraudAlert, StoreError> {
        let tables = self.tables.read().await;
        tables
            .alerts
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("fraud alert", id))
    }

    async fn update_alert(&self, alert: &FraudAlert) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.alerts.contains_key(&alert.id) {
            return Err(StoreError::not_found("fraud alert", alert.id));
        }
        tables.alerts.insert(alert.id, alert.clone());
        Ok(())
    }

    async fn list_alerts(&self, claim_id: ClaimId) -> Result<Vec<FraudAlert>, StoreError> {
        let tables = self.tables.read().await;
        let mut alerts: Vec<FraudAlert> = tables
            .alerts
            .values()
            .filter(|a| a.claim_id == claim_id)
            .cloned()
            .collect();
        alerts.sort_by_key(|a| a.created_at);
        Ok(alerts)
    }
}
