//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data that
//! maintains domain invariants.

use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::Money;
use domain_claims::ClaimStatus;
use domain_policy::PolicyType;

/// Strategy for strictly positive monetary amounts (two decimal places)
pub fn positive_money_strategy() -> impl Strategy<Value = Money> {
    (1i64..1_000_000_000i64).prop_map(|cents| Money::new(Decimal::new(cents, 2)))
}

/// Strategy for a (claimed, coverage) pair with positive coverage
pub fn claim_ratio_strategy() -> impl Strategy<Value = (Money, Money)> {
    (1i64..1_000_000_000i64, 1i64..1_000_000_000i64).prop_map(|(claimed, coverage)| {
        (
            Money::new(Decimal::new(claimed, 2)),
            Money::new(Decimal::new(coverage, 2)),
        )
    })
}

/// Strategy over every claim status
pub fn claim_status_strategy() -> impl Strategy<Value = ClaimStatus> {
    prop_oneof![
        Just(ClaimStatus::Draft),
        Just(ClaimStatus::Submitted),
        Just(ClaimStatus::UnderReview),
        Just(ClaimStatus::Investigating),
        Just(ClaimStatus::Approved),
        Just(ClaimStatus::Denied),
        Just(ClaimStatus::Closed),
    ]
}

/// Strategy over every policy type
pub fn policy_type_strategy() -> impl Strategy<Value = PolicyType> {
    prop_oneof![
        Just(PolicyType::Auto),
        Just(PolicyType::Home),
        Just(PolicyType::Health),
        Just(PolicyType::Life),
        Just(PolicyType::Business),
    ]
}
