//! Claim lifecycle application service

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use tracing::{info, instrument, warn};
use validator::{Validate, ValidationError};

use core_kernel::refnum::{self, MAX_GENERATION_ATTEMPTS};
use core_kernel::{can_access_claim, AlertId, ClaimId, CoreError, Money, PolicyId, Role, UserId};
use domain_accounts::UserStore;
use domain_policy::PolicyStore;

use crate::claim::{Claim, ClaimStatus};
use crate::document::{AttachDocumentRequest, ClaimDocument};
use crate::event::ClaimEvent;
use crate::fraud::{FraudAlert, RaiseFraudAlertRequest};
use crate::ports::{ClaimEventStore, ClaimStore, DocumentStore, FraudAlertStore};
use crate::risk::{RiskInput, RiskScorer};
use crate::view::ClaimView;

/// Claim submission request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateClaimRequest {
    pub policy_id: PolicyId,
    pub incident_date: NaiveDate,
    #[validate(length(min = 10, max = 5000, message = "description must be 10-5000 characters"))]
    pub description: String,
    #[validate(length(max = 255))]
    pub location: Option<String>,
    #[validate(custom(function = "strictly_positive"))]
    pub claimed_amount: Money,
}

/// Status update request (adjuster/admin action, gated at the boundary)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateClaimStatusRequest {
    /// New status name, matched case-insensitively
    #[validate(length(min = 1, message = "status is required"))]
    pub status: String,
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
    /// Applied as given; intentionally not bounded by the claimed amount
    pub approved_amount: Option<Money>,
    pub adjuster_id: Option<UserId>,
}

fn strictly_positive(amount: &Money) -> Result<(), ValidationError> {
    if !amount.is_positive() {
        let mut err = ValidationError::new("amount");
        err.message = Some("must be greater than zero".into());
        return Err(err);
    }
    Ok(())
}

/// Service handling the claim lifecycle
///
/// Validates requests, gates access through the access predicates, invokes
/// the risk scorer on submission, and appends an audit event for every
/// status change.
pub struct ClaimService {
    claims: Arc<dyn ClaimStore>,
    events: Arc<dyn ClaimEventStore>,
    documents: Arc<dyn DocumentStore>,
    alerts: Arc<dyn FraudAlertStore>,
    policies: Arc<dyn PolicyStore>,
    users: Arc<dyn UserStore>,
    scorer: RiskScorer,
}

impl ClaimService {
    pub fn new(
        claims: Arc<dyn ClaimStore>,
        events: Arc<dyn ClaimEventStore>,
        documents: Arc<dyn DocumentStore>,
        alerts: Arc<dyn FraudAlertStore>,
        policies: Arc<dyn PolicyStore>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            claims,
            events,
            documents,
            alerts,
            policies,
            users,
            scorer: RiskScorer::standard(),
        }
    }

    /// Submits a new claim for the owning user
    ///
    /// The claim starts life SUBMITTED (DRAFT is never produced here), the
    /// policy's deductible is copied onto it, and the risk scorer runs
    /// before it is persisted.
    #[instrument(skip(self, request), fields(policy = %request.policy_id, owner = %owner_id))]
    pub async fn create_claim(
        &self,
        request: CreateClaimRequest,
        owner_id: UserId,
    ) -> Result<ClaimView, CoreError> {
        request.validate()?;
        if request.incident_date > Utc::now().date_naive() {
            return Err(CoreError::invalid_input("incident date cannot be in the future"));
        }

        let policy = self.policies.get_policy(request.policy_id).await?;
        if policy.owner_id != owner_id {
            return Err(CoreError::forbidden("policy does not belong to requester"));
        }
        if !policy.is_active {
            return Err(CoreError::invalid_state("policy is not active"));
        }
        let owner = self.users.get_user(owner_id).await?;

        let assessment = self.scorer.score(&RiskInput {
            claimed_amount: request.claimed_amount,
            coverage_amount: policy.coverage_amount,
        });

        let claim_number = self.unique_claim_number().await?;
        let now = Utc::now();
        let claim = Claim {
            id: ClaimId::new_v7(),
            claim_number,
            policy_id: policy.id,
            owner_id,
            adjuster_id: None,
            incident_date: request.incident_date,
            description: request.description,
            location: request.location,
            claimed_amount: request.claimed_amount,
            approved_amount: None,
            deductible_amount: policy.deductible,
            status: ClaimStatus::Submitted,
            risk_score: assessment.score,
            risk_level: assessment.level,
            fraud_flag: false,
            fraud_score: rust_decimal::Decimal::ZERO,
            reported_date: now,
            submitted_at: Some(now),
            reviewed_at: None,
            closed_at: None,
            created_at: now,
            updated_at: now,
        };
        self.claims.insert_claim(&claim).await?;

        info!(
            claim_id = %claim.id,
            number = %claim.claim_number,
            risk_score = claim.risk_score,
            "claim submitted"
        );
        Ok(ClaimView::from_parts(&claim, &policy, owner.full_name(), None))
    }

    /// Retrieves a claim, enforcing the access policy
    pub async fn get_claim(
        &self,
        id: ClaimId,
        requester: UserId,
        role: Role,
    ) -> Result<ClaimView, CoreError> {
        let claim = self.claims.get_claim(id).await?;
        if !can_access_claim(claim.owner_id, requester, role) {
            return Err(CoreError::forbidden("claim belongs to another user"));
        }
        self.view_of(claim).await
    }

    /// Lists every claim owned by a user
    pub async fn list_by_owner(&self, owner: UserId) -> Result<Vec<ClaimView>, CoreError> {
        let claims = self.claims.list_by_owner(owner).await?;
        self.views_of(claims).await
    }

    /// Lists every claim (privileged callers only; gated at the boundary)
    pub async fn list_all(&self) -> Result<Vec<ClaimView>, CoreError> {
        let claims = self.claims.list_all().await?;
        self.views_of(claims).await
    }

    /// Lists claims in a given status (privileged callers only)
    pub async fn list_by_status(&self, status: ClaimStatus) -> Result<Vec<ClaimView>, CoreError> {
        let claims = self.claims.list_by_status(status).await?;
        self.views_of(claims).await
    }

    /// Applies a status transition
    ///
    /// Stamps `reviewed_at` on first entry into UNDER_REVIEW and
    /// `closed_at` on every entry into CLOSED/APPROVED/DENIED, applies the
    /// approved amount if supplied, resolves and assigns the adjuster if
    /// one is named, and appends an audit event attributing the change to
    /// `acted_by`.
    #[instrument(skip(self, request), fields(claim = %id, acted_by = %acted_by))]
    pub async fn update_status(
        &self,
        id: ClaimId,
        request: UpdateClaimStatusRequest,
        acted_by: UserId,
    ) -> Result<ClaimView, CoreError> {
        request.validate()?;

        let mut claim = self.claims.get_claim(id).await?;
        let new_status: ClaimStatus = request.status.parse().map_err(CoreError::invalid_input)?;
        let old_status = claim.status;

        claim.apply_status(new_status)?;

        if let Some(amount) = request.approved_amount {
            claim.approved_amount = Some(amount);
        }
        if let Some(adjuster_id) = request.adjuster_id {
            // Resolve before assigning so a bad id fails the whole update
            let adjuster = self.users.get_user(adjuster_id).await?;
            claim.assign_adjuster(adjuster.id);
        }

        self.claims.update_claim(&claim).await?;
        let event = ClaimEvent::status_changed(
            claim.id,
            acted_by,
            old_status,
            new_status,
            request.notes,
        );
        self.events.append_event(&event).await?;

        info!(%old_status, %new_status, "claim status updated");
        self.view_of(claim).await
    }

    /// Deletes a claim
    ///
    /// Admins delete unconditionally; everyone else may delete only their
    /// own claim and only while it is still a DRAFT.
    #[instrument(skip(self))]
    pub async fn delete_claim(
        &self,
        id: ClaimId,
        requester: UserId,
        role: Role,
    ) -> Result<(), CoreError> {
        let claim = self.claims.get_claim(id).await?;

        if role != Role::Admin {
            if claim.owner_id != requester {
                return Err(CoreError::forbidden("claim belongs to another user"));
            }
            if claim.status != ClaimStatus::Draft {
                return Err(CoreError::invalid_state("can only delete draft claims"));
            }
        }

        self.claims.delete_claim(id).await?;
        info!(claim_id = %id, "claim deleted");
        Ok(())
    }

    /// Lists a claim's audit events, oldest first
    pub async fn list_events(
        &self,
        claim_id: ClaimId,
        requester: UserId,
        role: Role,
    ) -> Result<Vec<ClaimEvent>, CoreError> {
        let claim = self.claims.get_claim(claim_id).await?;
        if !can_access_claim(claim.owner_id, requester, role) {
            return Err(CoreError::forbidden("claim belongs to another user"));
        }
        Ok(self.events.list_events(claim_id).await?)
    }

    /// Attaches a document reference to a claim
    #[instrument(skip(self, request), fields(claim = %claim_id))]
    pub async fn attach_document(
        &self,
        claim_id: ClaimId,
        request: AttachDocumentRequest,
        uploader: UserId,
        role: Role,
    ) -> Result<ClaimDocument, CoreError> {
        request.validate()?;

        let claim = self.claims.get_claim(claim_id).await?;
        if !can_access_claim(claim.owner_id, uploader, role) {
            return Err(CoreError::forbidden("claim belongs to another user"));
        }

        let document = ClaimDocument::from_request(claim_id, uploader, request);
        self.documents.insert_document(&document).await?;

        info!(document_id = %document.id, file = %document.file_name, "document attached");
        Ok(document)
    }

    /// Lists a claim's document references
    pub async fn list_documents(
        &self,
        claim_id: ClaimId,
        requester: UserId,
        role: Role,
    ) -> Result<Vec<ClaimDocument>, CoreError> {
        let claim = self.claims.get_claim(claim_id).await?;
        if !can_access_claim(claim.owner_id, requester, role) {
            return Err(CoreError::forbidden("claim belongs to another user"));
        }
        Ok(self.documents.list_documents(claim_id).await?)
    }

    /// Raises a fraud alert against a claim
    ///
    /// Called by fraud-detection logic outside this core. Flags the claim
    /// and records the fraud score when one is supplied.
    #[instrument(skip(self, request), fields(claim = %claim_id))]
    pub async fn raise_fraud_alert(
        &self,
        claim_id: ClaimId,
        request: RaiseFraudAlertRequest,
    ) -> Result<FraudAlert, CoreError> {
        request.validate()?;

        let mut claim = self.claims.get_claim(claim_id).await?;
        let alert = FraudAlert::raise(claim_id, &request);

        claim.flag_fraud(request.fraud_score.unwrap_or(claim.fraud_score))?;
        self.claims.update_claim(&claim).await?;
        self.alerts.insert_alert(&alert).await?;

        warn!(alert_id = %alert.id, severity = ?alert.severity, "fraud alert raised");
        Ok(alert)
    }

    /// Resolves a fraud alert (adjuster/admin only)
    #[instrument(skip(self))]
    pub async fn resolve_fraud_alert(
        &self,
        alert_id: AlertId,
        resolver: UserId,
        role: Role,
    ) -> Result<FraudAlert, CoreError> {
        if !matches!(role, Role::Adjuster | Role::Admin) {
            return Err(CoreError::forbidden("only adjusters or admins may resolve alerts"));
        }

        let mut alert = self.alerts.get_alert(alert_id).await?;
        if alert.resolved {
            return Err(CoreError::invalid_state("alert is already resolved"));
        }

        alert.resolve(resolver);
        self.alerts.update_alert(&alert).await?;

        info!(alert_id = %alert.id, "fraud alert resolved");
        Ok(alert)
    }

    /// Lists a claim's fraud alerts (adjuster/admin only)
    pub async fn list_fraud_alerts(
        &self,
        claim_id: ClaimId,
        role: Role,
    ) -> Result<Vec<FraudAlert>, CoreError> {
        if !matches!(role, Role::Adjuster | Role::Admin) {
            return Err(CoreError::forbidden("only adjusters or admins may list alerts"));
        }
        Ok(self.alerts.list_alerts(claim_id).await?)
    }

    /// Generates a claim number, retrying on collision against the store's
    /// uniqueness constraint
    async fn unique_claim_number(&self) -> Result<String, CoreError> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let candidate = refnum::claim_number();
            if !self.claims.claim_number_exists(&candidate).await? {
                return Ok(candidate);
            }
            warn!(number = %candidate, "claim number collision, regenerating");
        }
        Err(CoreError::exhausted("could not generate a unique claim number"))
    }

    async fn view_of(&self, claim: Claim) -> Result<ClaimView, CoreError> {
        let policy = self.policies.get_policy(claim.policy_id).await?;
        let owner = self.users.get_user(claim.owner_id).await?;
        let adjuster_name = match claim.adjuster_id {
            Some(id) => Some(self.users.get_user(id).await?.full_name()),
            None => None,
        };
        Ok(ClaimView::from_parts(
            &claim,
            &policy,
            owner.full_name(),
            adjuster_name,
        ))
    }

    async fn views_of(&self, claims: Vec<Claim>) -> Result<Vec<ClaimView>, CoreError> {
        let mut views = Vec::with_capacity(claims.len());
        for claim in claims {
            views.push(self.view_of(claim).await?);
        }
        Ok(views)
    }
}
