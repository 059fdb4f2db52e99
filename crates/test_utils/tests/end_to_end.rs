//! Full flow: registration, policy issuance, and claim submission

use rust_decimal_macros::dec;

use core_kernel::{Money, Role};
use domain_accounts::RegisterRequest;
use domain_claims::{ClaimStatus, CreateClaimRequest, RiskLevel};
use domain_policy::CreatePolicyRequest;
use test_utils::{StringFixtures, TemporalFixtures, TestHarness};

#[tokio::test]
async fn test_submission_flow_scores_and_stamps_the_claim() {
    let harness = TestHarness::new();

    // A customer registers
    let customer = harness
        .accounts
        .register(RegisterRequest {
            email: "maria.santos@example.com".into(),
            password: "correct-horse".into(),
            first_name: "Maria".into(),
            last_name: "Santos".into(),
            phone: None,
        })
        .await
        .unwrap();
    assert_eq!(customer.role, Role::Customer);

    // An admin writes an auto policy for them
    let policy = harness
        .policies
        .create_policy(CreatePolicyRequest {
            owner_id: customer.id,
            policy_type: "AUTO".into(),
            coverage_amount: Money::new(dec!(50000.00)),
            deductible: Money::new(dec!(500.00)),
            premium_amount: Money::new(dec!(1200.00)),
            start_date: TemporalFixtures::policy_start(),
            end_date: TemporalFixtures::policy_end(),
        })
        .await
        .unwrap();
    assert!(policy.policy_number.starts_with("POL-AUTO-"));
    assert!(policy.is_active);
    assert_eq!(policy.customer_name, "Maria Santos");

    // The customer files a claim for more than half the coverage
    let claim = harness
        .claims
        .create_claim(
            CreateClaimRequest {
                policy_id: policy.id,
                incident_date: TemporalFixtures::incident(),
                description: StringFixtures::description(),
                location: Some("Springfield".into()),
                claimed_amount: Money::new(dec!(30000.00)),
            },
            customer.id,
        )
        .await
        .unwrap();

    // The claim enters the lifecycle SUBMITTED with the policy's
    // deductible copied over and the high-claim-ratio rule triggered
    assert_eq!(claim.status, ClaimStatus::Submitted);
    assert!(claim.submitted_at.is_some());
    assert_eq!(claim.deductible_amount, Money::new(dec!(500.00)));
    assert_eq!(claim.risk_score, 30);
    assert_eq!(claim.risk_level, RiskLevel::Medium);
    assert_eq!(claim.policy_number, policy.policy_number);
    assert_eq!(claim.customer_name, "Maria Santos");
    assert_eq!(claim.adjuster_name, None);
}

#[tokio::test]
async fn test_claim_numbers_are_wellformed_and_unique() {
    let harness = TestHarness::new();
    let customer = harness.seed_user(Role::Customer).await;
    let policy = harness
        .policies
        .create_policy(CreatePolicyRequest {
            owner_id: customer.id,
            policy_type: "HOME".into(),
            coverage_amount: Money::new(dec!(200000.00)),
            deductible: Money::new(dec!(1000.00)),
            premium_amount: Money::new(dec!(900.00)),
            start_date: TemporalFixtures::policy_start(),
            end_date: TemporalFixtures::policy_end(),
        })
        .await
        .unwrap();

    let mut numbers = std::collections::HashSet::new();
    for _ in 0..20 {
        let claim = harness
            .claims
            .create_claim(
                CreateClaimRequest {
                    policy_id: policy.id,
                    incident_date: TemporalFixtures::incident(),
                    description: StringFixtures::description(),
                    location: None,
                    claimed_amount: Money::new(dec!(250.00)),
                },
                customer.id,
            )
            .await
            .unwrap();

        let suffix = claim.claim_number.strip_prefix("CLM-").unwrap();
        assert_eq!(suffix.len(), 8);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
        assert!(numbers.insert(claim.claim_number));
    }
}
