//! Claim entity and status state machine

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{ClaimId, CoreError, Money, PolicyId, UserId};

/// Claim status
///
/// DRAFT exists as a stored value and deletion privileges it, but the
/// creation path always produces SUBMITTED, so no operation here ever
/// leaves a claim in DRAFT. Kept as-is until product intent says
/// otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimStatus {
    Draft,
    Submitted,
    UnderReview,
    Investigating,
    Approved,
    Denied,
    Closed,
}

impl ClaimStatus {
    /// Canonical wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Draft => "DRAFT",
            ClaimStatus::Submitted => "SUBMITTED",
            ClaimStatus::UnderReview => "UNDER_REVIEW",
            ClaimStatus::Investigating => "INVESTIGATING",
            ClaimStatus::Approved => "APPROVED",
            ClaimStatus::Denied => "DENIED",
            ClaimStatus::Closed => "CLOSED",
        }
    }

    /// Returns true for the terminal states
    pub fn is_terminal(&self) -> bool {
        matches!(self, ClaimStatus::Closed | ClaimStatus::Denied)
    }

    /// Checks whether a transition to `target` is permitted
    ///
    /// From CLOSED or DENIED the only destinations are CLOSED or DENIED
    /// themselves; every other transition, including backwards moves, is
    /// allowed.
    pub fn can_transition_to(&self, target: ClaimStatus) -> bool {
        if self.is_terminal() {
            target.is_terminal()
        } else {
            true
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DRAFT" => Ok(ClaimStatus::Draft),
            "SUBMITTED" => Ok(ClaimStatus::Submitted),
            "UNDER_REVIEW" => Ok(ClaimStatus::UnderReview),
            "INVESTIGATING" => Ok(ClaimStatus::Investigating),
            "APPROVED" => Ok(ClaimStatus::Approved),
            "DENIED" => Ok(ClaimStatus::Denied),
            "CLOSED" => Ok(ClaimStatus::Closed),
            other => Err(format!("invalid status: {other}")),
        }
    }
}

/// Scrutiny priority derived from the risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

/// A request for payment under a policy
///
/// Relations are identifier-based: the claim stores its policy, owner, and
/// adjuster ids; denormalized response fields are looked up explicitly when
/// a view is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,
    /// Unique claim number (`CLM-XXXXXXXX`)
    pub claim_number: String,
    /// Policy the claim is filed against
    pub policy_id: PolicyId,
    /// Owning user
    pub owner_id: UserId,
    /// Assigned adjuster, if any
    pub adjuster_id: Option<UserId>,
    /// Date of the incident, never in the future
    pub incident_date: NaiveDate,
    /// Free-text incident description
    pub description: String,
    /// Incident location
    pub location: Option<String>,
    /// Amount claimed, strictly positive
    pub claimed_amount: Money,
    /// Amount approved, set only on decision
    pub approved_amount: Option<Money>,
    /// Deductible copied from the policy at creation time
    pub deductible_amount: Money,
    /// Lifecycle status
    pub status: ClaimStatus,
    /// Risk score from the scorer
    pub risk_score: u32,
    /// Risk level from the scorer
    pub risk_level: RiskLevel,
    /// Whether fraud detection has flagged this claim
    pub fraud_flag: bool,
    /// Fraud score in [0, 100]
    pub fraud_score: Decimal,
    /// When the claim was reported
    pub reported_date: DateTime<Utc>,
    /// When the claim was submitted
    pub submitted_at: Option<DateTime<Utc>>,
    /// First entry into UNDER_REVIEW
    pub reviewed_at: Option<DateTime<Utc>>,
    /// Latest entry into CLOSED, APPROVED, or DENIED
    pub closed_at: Option<DateTime<Utc>>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Claim {
    /// Applies a status transition, stamping derived timestamps
    ///
    /// `reviewed_at` is stamped only on the first entry into UNDER_REVIEW;
    /// `closed_at` is stamped on every entry into CLOSED, APPROVED, or
    /// DENIED.
    pub fn apply_status(&mut self, new_status: ClaimStatus) -> Result<(), CoreError> {
        if !self.status.can_transition_to(new_status) {
            return Err(CoreError::invalid_state(format!(
                "cannot reopen {} claims",
                self.status
            )));
        }

        let now = Utc::now();
        self.status = new_status;

        if new_status == ClaimStatus::UnderReview && self.reviewed_at.is_none() {
            self.reviewed_at = Some(now);
        }
        if matches!(
            new_status,
            ClaimStatus::Closed | ClaimStatus::Approved | ClaimStatus::Denied
        ) {
            self.closed_at = Some(now);
        }

        self.updated_at = now;
        Ok(())
    }

    /// Assigns an adjuster
    pub fn assign_adjuster(&mut self, adjuster: UserId) {
        self.adjuster_id = Some(adjuster);
        self.updated_at = Utc::now();
    }

    /// Records a fraud signal against the claim
    ///
    /// The score must fall in [0, 100].
    pub fn flag_fraud(&mut self, score: Decimal) -> Result<(), CoreError> {
        if score < dec!(0) || score > dec!(100) {
            return Err(CoreError::invalid_input(
                "fraud score must be between 0 and 100",
            ));
        }
        self.fraud_flag = true;
        self.fraud_score = score;
        self.updated_at = Utc::now();
        Ok(())
    }
}
