//! Claims domain ports
//!
//! Store contracts for claims and their satellite records. The claim store
//! enforces claim-number uniqueness; the event and document stores are
//! append-only.

use async_trait::async_trait;

use core_kernel::{AlertId, ClaimId, DomainPort, StoreError, UserId};

use crate::claim::{Claim, ClaimStatus};
use crate::document::ClaimDocument;
use crate::event::ClaimEvent;
use crate::fraud::FraudAlert;

/// Durable storage for claims
#[async_trait]
pub trait ClaimStore: DomainPort {
    /// Persists a new claim
    async fn insert_claim(&self, claim: &Claim) -> Result<(), StoreError>;

    /// Retrieves a claim by id
    async fn get_claim(&self, id: ClaimId) -> Result<Claim, StoreError>;

    /// Returns true if a claim already carries this number
    async fn claim_number_exists(&self, number: &str) -> Result<bool, StoreError>;

    /// Lists all claims owned by a user
    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Claim>, StoreError>;

    /// Lists every claim
    async fn list_all(&self) -> Result<Vec<Claim>, StoreError>;

    /// Lists claims in a given status
    async fn list_by_status(&self, status: ClaimStatus) -> Result<Vec<Claim>, StoreError>;

    /// Replaces a stored claim
    async fn update_claim(&self, claim: &Claim) -> Result<(), StoreError>;

    /// Deletes a claim
    async fn delete_claim(&self, id: ClaimId) -> Result<(), StoreError>;
}

/// Append-only storage for claim audit events
#[async_trait]
pub trait ClaimEventStore: DomainPort {
    /// Appends an event
    async fn append_event(&self, event: &ClaimEvent) -> Result<(), StoreError>;

    /// Lists a claim's events, oldest first
    async fn list_events(&self, claim_id: ClaimId) -> Result<Vec<ClaimEvent>, StoreError>;
}

/// Append-only storage for claim document references
#[async_trait]
pub trait DocumentStore: DomainPort {
    /// Persists a new document reference
    async fn insert_document(&self, document: &ClaimDocument) -> Result<(), StoreError>;

    /// Lists a claim's documents
    async fn list_documents(&self, claim_id: ClaimId) -> Result<Vec<ClaimDocument>, StoreError>;
}

/// Durable storage for fraud alerts
#[async_trait]
pub trait FraudAlertStore: DomainPort {
    /// Persists a new alert
    async fn insert_alert(&self, alert: &FraudAlert) -> Result<(), StoreError>;

    /// Retrieves an alert by id
    async fn get_alert(&self, id: AlertId) -> Result<FraudAlert, StoreError>;

    /// Replaces a stored alert
    async fn update_alert(&self, alert: &FraudAlert) -> Result<(), StoreError>;

    /// Lists a claim's alerts
    async fn list_alerts(&self, claim_id: ClaimId) -> Result<Vec<FraudAlert>, StoreError>;
}
