//! Response view mapping
//!
//! Pure mapping from the domain record plus joined fields (the owner's
//! display name) to the response value. Kept separate from persistence.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use core_kernel::{Money, PolicyId, UserId};

use crate::policy::{Policy, PolicyType};

/// Policy response view
#[derive(Debug, Clone, Serialize)]
pub struct PolicyView {
    pub id: PolicyId,
    pub policy_number: String,
    pub owner_id: UserId,
    pub customer_name: String,
    pub policy_type: PolicyType,
    pub coverage_amount: Money,
    pub deductible: Money,
    pub premium_amount: Money,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PolicyView {
    pub fn from_policy(policy: &Policy, customer_name: String) -> Self {
        Self {
            id: policy.id,
            policy_number: policy.policy_number.clone(),
            owner_id: policy.owner_id,
            customer_name,
            policy_type: policy.policy_type,
            coverage_amount: policy.coverage_amount,
            deductible: policy.deductible,
            premium_amount: policy.premium_amount,
            start_date: policy.start_date,
            end_date: policy.end_date,
            is_active: policy.is_active,
            created_at: policy.created_at,
            updated_at: policy.updated_at,
        }
    }
}
