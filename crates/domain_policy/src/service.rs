//! Policy application service

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use tracing::{info, instrument, warn};
use validator::{Validate, ValidationError};

use core_kernel::refnum::{self, MAX_GENERATION_ATTEMPTS};
use core_kernel::{can_access_policy, CoreError, Money, PolicyId, Role, UserId};
use domain_accounts::UserStore;

use crate::policy::{Policy, PolicyType};
use crate::ports::PolicyStore;
use crate::view::PolicyView;

/// Policy creation request (agent/admin action)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePolicyRequest {
    /// The user the policy is written for
    pub owner_id: UserId,
    /// Line of business, matched case-insensitively against known types
    #[validate(length(min = 1, message = "policy type is required"))]
    pub policy_type: String,
    #[validate(custom(function = "strictly_positive"))]
    pub coverage_amount: Money,
    #[validate(custom(function = "non_negative"))]
    pub deductible: Money,
    #[validate(custom(function = "strictly_positive"))]
    pub premium_amount: Money,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

fn strictly_positive(amount: &Money) -> Result<(), ValidationError> {
    if !amount.is_positive() {
        let mut err = ValidationError::new("amount");
        err.message = Some("must be greater than zero".into());
        return Err(err);
    }
    Ok(())
}

fn non_negative(amount: &Money) -> Result<(), ValidationError> {
    if amount.is_negative() {
        let mut err = ValidationError::new("amount");
        err.message = Some("must not be negative".into());
        return Err(err);
    }
    Ok(())
}

/// Service handling policy operations
pub struct PolicyService {
    policies: Arc<dyn PolicyStore>,
    users: Arc<dyn UserStore>,
}

impl PolicyService {
    pub fn new(policies: Arc<dyn PolicyStore>, users: Arc<dyn UserStore>) -> Self {
        Self { policies, users }
    }

    /// Creates a policy for the requested owner
    ///
    /// Fails with `NotFound` when the owner does not exist and with
    /// `InvalidInput` on an unknown type or a non-positive date window.
    #[instrument(skip(self, request), fields(owner = %request.owner_id))]
    pub async fn create_policy(&self, request: CreatePolicyRequest) -> Result<PolicyView, CoreError> {
        request.validate()?;
        if request.end_date <= request.start_date {
            return Err(CoreError::invalid_input("end date must be after start date"));
        }

        let owner = self.users.get_user(request.owner_id).await?;
        let policy_type: PolicyType = request
            .policy_type
            .parse()
            .map_err(CoreError::invalid_input)?;

        let policy_number = self.unique_policy_number(policy_type).await?;
        let now = Utc::now();
        let policy = Policy {
            id: PolicyId::new_v7(),
            policy_number,
            owner_id: owner.id,
            policy_type,
            coverage_amount: request.coverage_amount,
            deductible: request.deductible,
            premium_amount: request.premium_amount,
            start_date: request.start_date,
            end_date: request.end_date,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        self.policies.insert_policy(&policy).await?;

        info!(policy_id = %policy.id, number = %policy.policy_number, "policy created");
        Ok(PolicyView::from_policy(&policy, owner.full_name()))
    }

    /// Retrieves a policy, enforcing the access policy
    pub async fn get_policy(
        &self,
        id: PolicyId,
        requester: UserId,
        role: Role,
    ) -> Result<PolicyView, CoreError> {
        let policy = self.policies.get_policy(id).await?;
        if !can_access_policy(policy.owner_id, requester, role) {
            return Err(CoreError::forbidden("policy belongs to another user"));
        }
        self.view_of(policy).await
    }

    /// Lists every policy owned by a user
    pub async fn list_by_owner(&self, owner: UserId) -> Result<Vec<PolicyView>, CoreError> {
        let policies = self.policies.list_by_owner(owner).await?;
        self.views_of(policies).await
    }

    /// Lists the active policies owned by a user
    pub async fn list_active_by_owner(&self, owner: UserId) -> Result<Vec<PolicyView>, CoreError> {
        let policies = self.policies.list_active_by_owner(owner).await?;
        self.views_of(policies).await
    }

    /// Lists every policy (privileged callers only; gated at the boundary)
    pub async fn list_all(&self) -> Result<Vec<PolicyView>, CoreError> {
        let policies = self.policies.list_all().await?;
        self.views_of(policies).await
    }

    /// Deactivates a policy
    ///
    /// Carries no authorization parameter; callers gate this as admin-only
    /// at the boundary.
    #[instrument(skip(self))]
    pub async fn deactivate(&self, id: PolicyId) -> Result<PolicyView, CoreError> {
        let mut policy = self.policies.get_policy(id).await?;
        policy.deactivate();
        self.policies.update_policy(&policy).await?;

        info!(policy_id = %policy.id, "policy deactivated");
        self.view_of(policy).await
    }

    /// Deletes a policy
    ///
    /// Deletion is unconditional here; the store's RESTRICT rule rejects
    /// the delete while claims reference the policy, surfaced as
    /// `Conflict`.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: PolicyId) -> Result<(), CoreError> {
        self.policies.delete_policy(id).await?;
        info!(policy_id = %id, "policy deleted");
        Ok(())
    }

    /// Generates a policy number, retrying on collision against the
    /// store's uniqueness constraint
    async fn unique_policy_number(&self, policy_type: PolicyType) -> Result<String, CoreError> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let candidate = refnum::policy_number(policy_type.code());
            if !self.policies.policy_number_exists(&candidate).await? {
                return Ok(candidate);
            }
            warn!(number = %candidate, "policy number collision, regenerating");
        }
        Err(CoreError::exhausted("could not generate a unique policy number"))
    }

    async fn view_of(&self, policy: Policy) -> Result<PolicyView, CoreError> {
        let owner = self.users.get_user(policy.owner_id).await?;
        Ok(PolicyView::from_policy(&policy, owner.full_name()))
    }

    async fn views_of(&self, policies: Vec<Policy>) -> Result<Vec<PolicyView>, CoreError> {
        let mut views = Vec::with_capacity(policies.len());
        for policy in policies {
            views.push(self.view_of(policy).await?);
        }
        Ok(views)
    }
}
