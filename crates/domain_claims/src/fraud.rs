//! Fraud alerts
//!
//! A fraud alert flags a suspicious pattern on a claim, independent of the
//! claim's lifecycle status. Alerts are raised by fraud-detection logic
//! outside this core and resolved by an adjuster or admin.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{AlertId, ClaimId, UserId};

/// Alert severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
    Critical,
}

/// A flagged suspicious pattern tied to a claim
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FraudAlert {
    /// Unique identifier
    pub id: AlertId,
    /// The claim the alert is tied to
    pub claim_id: ClaimId,
    /// Kind of pattern detected (e.g. "DUPLICATE_CLAIM")
    pub alert_type: String,
    /// Severity
    pub severity: AlertSeverity,
    /// Human-readable description
    pub description: String,
    /// Whether the alert has been resolved
    pub resolved: bool,
    /// Who resolved it
    pub resolved_by: Option<UserId>,
    /// When it was resolved
    pub resolved_at: Option<DateTime<Utc>>,
    /// When it was raised
    pub created_at: DateTime<Utc>,
}

/// Request to raise a fraud alert against a claim
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RaiseFraudAlertRequest {
    #[validate(length(min = 1, max = 100))]
    pub alert_type: String,
    pub severity: AlertSeverity,
    #[validate(length(min = 1, max = 2000))]
    pub description: String,
    /// Optional fraud score to record on the claim, in [0, 100]
    pub fraud_score: Option<Decimal>,
}

impl FraudAlert {
    /// Raises a new unresolved alert
    pub fn raise(claim_id: ClaimId, request: &RaiseFraudAlertRequest) -> Self {
        Self {
            id: AlertId::new_v7(),
            claim_id,
            alert_type: request.alert_type.clone(),
            severity: request.severity,
            description: request.description.clone(),
            resolved: false,
            resolved_by: None,
            resolved_at: None,
            created_at: Utc::now(),
        }
    }

    /// Marks the alert resolved
    pub fn resolve(&mut self, resolver: UserId) {
        self.resolved = true;
        self.resolved_by = Some(resolver);
        self.resolved_at = Some(Utc::now());
    }
}
