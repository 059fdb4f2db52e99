//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. These builders allow tests to specify only the relevant
//! fields while using defaults for everything else.

use chrono::Utc;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use rust_decimal::Decimal;

use core_kernel::{ClaimId, Money, PolicyId, Role, UserId};
use domain_accounts::{CredentialHasher, User};
use domain_claims::{Claim, ClaimStatus, RiskLevel};
use domain_policy::{Policy, PolicyType};

use crate::fixtures::{MoneyFixtures, StringFixtures, TemporalFixtures};
use crate::hashing::PlainHasher;

/// Builder for constructing test user accounts
pub struct TestUserBuilder {
    email: String,
    password: String,
    first_name: String,
    last_name: String,
    role: Role,
    is_active: bool,
}

impl Default for TestUserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestUserBuilder {
    /// Creates a new builder with a random active customer
    pub fn new() -> Self {
        Self {
            email: SafeEmail().fake(),
            password: "correct-horse".to_string(),
            first_name: FirstName().fake(),
            last_name: LastName().fake(),
            role: Role::Customer,
            is_active: true,
        }
    }

    /// Sets the email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the plaintext password (hashed with [`PlainHasher`])
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Sets the first and last name
    pub fn with_name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = first.into();
        self.last_name = last.into();
        self
    }

    /// Sets the role
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Marks the account disabled
    pub fn disabled(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Builds the user
    pub fn build(self) -> User {
        let mut user = User::register(
            self.email,
            PlainHasher.hash(&self.password),
            self.first_name,
            self.last_name,
            None,
        );
        user.role = self.role;
        user.is_active = self.is_active;
        user
    }
}

/// Builder for constructing test policies
pub struct TestPolicyBuilder {
    owner_id: UserId,
    policy_number: String,
    policy_type: PolicyType,
    coverage_amount: Money,
    deductible: Money,
    premium_amount: Money,
    is_active: bool,
}

impl TestPolicyBuilder {
    /// Creates a new builder owned by the given user
    pub fn new(owner_id: UserId) -> Self {
        Self {
            owner_id,
            policy_number: core_kernel::refnum::policy_number("AUTO"),
            policy_type: PolicyType::Auto,
            coverage_amount: MoneyFixtures::coverage(),
            deductible: MoneyFixtures::deductible(),
            premium_amount: MoneyFixtures::premium(),
            is_active: true,
        }
    }

    /// Sets the policy number
    pub fn with_policy_number(mut self, number: impl Into<String>) -> Self {
        self.policy_number = number.into();
        self
    }

    /// Sets the line of business
    pub fn with_type(mut self, policy_type: PolicyType) -> Self {
        self.policy_type = policy_type;
        self
    }

    /// Sets the coverage amount
    pub fn with_coverage(mut self, coverage: Money) -> Self {
        self.coverage_amount = coverage;
        self
    }

    /// Sets the deductible
    pub fn with_deductible(mut self, deductible: Money) -> Self {
        self.deductible = deductible;
        self
    }

    /// Marks the policy inactive
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Builds the policy
    pub fn build(self) -> Policy {
        let now = Utc::now();
        Policy {
            id: PolicyId::new_v7(),
            policy_number: self.policy_number,
            owner_id: self.owner_id,
            policy_type: self.policy_type,
            coverage_amount: self.coverage_amount,
            deductible: self.deductible,
            premium_amount: self.premium_amount,
            start_date: TemporalFixtures::policy_start(),
            end_date: TemporalFixtures::policy_end(),
            is_active: self.is_active,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Builder for constructing test claims
pub struct TestClaimBuilder {
    owner_id: UserId,
    policy_id: PolicyId,
    status: ClaimStatus,
    claimed_amount: Money,
    deductible_amount: Money,
    adjuster_id: Option<UserId>,
}

impl TestClaimBuilder {
    /// Creates a new submitted claim against the given policy
    pub fn new(owner_id: UserId, policy_id: PolicyId) -> Self {
        Self {
            owner_id,
            policy_id,
            status: ClaimStatus::Submitted,
            claimed_amount: MoneyFixtures::small_claim(),
            deductible_amount: MoneyFixtures::deductible(),
            adjuster_id: None,
        }
    }

    /// Sets the status
    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the claimed amount
    pub fn with_claimed_amount(mut self, amount: Money) -> Self {
        self.claimed_amount = amount;
        self
    }

    /// Assigns an adjuster
    pub fn with_adjuster(mut self, adjuster: UserId) -> Self {
        self.adjuster_id = Some(adjuster);
        self
    }

    /// Builds the claim
    pub fn build(self) -> Claim {
        let now = Utc::now();
        Claim {
            id: ClaimId::new_v7(),
            claim_number: core_kernel::refnum::claim_number(),
            policy_id: self.policy_id,
            owner_id: self.owner_id,
            adjuster_id: self.adjuster_id,
            incident_date: TemporalFixtures::incident(),
            description: StringFixtures::description(),
            location: None,
            claimed_amount: self.claimed_amount,
            approved_amount: None,
            deductible_amount: self.deductible_amount,
            status: self.status,
            risk_score: 0,
            risk_level: RiskLevel::Low,
            fraud_flag: false,
            fraud_score: Decimal::ZERO,
            reported_date: now,
            submitted_at: Some(now),
            reviewed_at: None,
            closed_at: None,
            created_at: now,
            updated_at: now,
        }
    }
}
