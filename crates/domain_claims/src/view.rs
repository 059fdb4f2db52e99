//! Response view mapping
//!
//! Pure mapping from the claim record plus explicitly looked-up joined
//! fields (policy number and type, customer and adjuster names) to the
//! response value. Kept separate from persistence.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use core_kernel::{ClaimId, Money, PolicyId, UserId};
use domain_policy::{Policy, PolicyType};

use crate::claim::{Claim, ClaimStatus, RiskLevel};

/// Claim response view
#[derive(Debug, Clone, Serialize)]
pub struct ClaimView {
    pub id: ClaimId,
    pub claim_number: String,
    pub policy_id: PolicyId,
    pub policy_number: String,
    pub policy_type: PolicyType,
    pub owner_id: UserId,
    pub customer_name: String,
    pub adjuster_id: Option<UserId>,
    pub adjuster_name: Option<String>,
    pub incident_date: NaiveDate,
    pub reported_date: DateTime<Utc>,
    pub description: String,
    pub location: Option<String>,
    pub claimed_amount: Money,
    pub approved_amount: Option<Money>,
    pub deductible_amount: Money,
    pub status: ClaimStatus,
    pub risk_level: RiskLevel,
    pub risk_score: u32,
    pub fraud_flag: bool,
    pub fraud_score: Decimal,
    pub submitted_at: Option<DateTime<Utc>>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub closed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ClaimView {
    pub fn from_parts(
        claim: &Claim,
        policy: &Policy,
        customer_name: String,
        adjuster_name: Option<String>,
    ) -> Self {
        Self {
            id: claim.id,
            claim_number: claim.claim_number.clone(),
            policy_id: claim.policy_id,
            policy_number: policy.policy_number.clone(),
            policy_type: policy.policy_type,
            owner_id: claim.owner_id,
            customer_name,
            adjuster_id: claim.adjuster_id,
            adjuster_name,
            incident_date: claim.incident_date,
            reported_date: claim.reported_date,
            description: claim.description.clone(),
            location: claim.location.clone(),
            claimed_amount: claim.claimed_amount,
            approved_amount: claim.approved_amount,
            deductible_amount: claim.deductible_amount,
            status: claim.status,
            risk_level: claim.risk_level,
            risk_score: claim.risk_score,
            fraud_flag: claim.fraud_flag,
            fraud_score: claim.fraud_score,
            submitted_at: claim.submitted_at,
            reviewed_at: claim.reviewed_at,
            closed_at: claim.closed_at,
            created_at: claim.created_at,
            updated_at: claim.updated_at,
        }
    }
}
