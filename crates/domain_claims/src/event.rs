//! Claim audit events
//!
//! Immutable, append-only records. Every status change appends one so each
//! change is attributable to an acting user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimEventId, ClaimId, UserId};

use crate::claim::ClaimStatus;

/// What kind of change the event records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimEventType {
    StatusChanged,
    AdjusterAssigned,
}

/// An audit record for a claim
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimEvent {
    /// Unique identifier
    pub id: ClaimEventId,
    /// The claim the event belongs to
    pub claim_id: ClaimId,
    /// The user whose action produced the event
    pub acted_by: UserId,
    /// Event kind
    pub event_type: ClaimEventType,
    /// Status before the change
    pub old_status: ClaimStatus,
    /// Status after the change
    pub new_status: ClaimStatus,
    /// Free-text note supplied with the change
    pub note: Option<String>,
    /// When the event occurred
    pub occurred_at: DateTime<Utc>,
}

impl ClaimEvent {
    /// Records a status change
    pub fn status_changed(
        claim_id: ClaimId,
        acted_by: UserId,
        old_status: ClaimStatus,
        new_status: ClaimStatus,
        note: Option<String>,
    ) -> Self {
        Self {
            id: ClaimEventId::new_v7(),
            claim_id,
            acted_by,
            event_type: ClaimEventType::StatusChanged,
            old_status,
            new_status,
            note,
            occurred_at: Utc::now(),
        }
    }
}
