//! Claim service behavior over the in-memory store

use chrono::{Days, Utc};
use rust_decimal_macros::dec;

use core_kernel::{CoreError, Money, Role, UserId};
use domain_claims::{
    AlertSeverity, AttachDocumentRequest, ClaimStatus, ClaimView, CreateClaimRequest,
    RaiseFraudAlertRequest, RiskLevel, UpdateClaimStatusRequest,
};
use test_utils::{
    MoneyFixtures, StringFixtures, TemporalFixtures, TestClaimBuilder, TestHarness,
    TestPolicyBuilder,
};

fn create_request(policy_id: core_kernel::PolicyId, claimed: Money) -> CreateClaimRequest {
    CreateClaimRequest {
        policy_id,
        incident_date: TemporalFixtures::incident(),
        description: StringFixtures::description(),
        location: None,
        claimed_amount: claimed,
    }
}

fn status_request(status: &str) -> UpdateClaimStatusRequest {
    UpdateClaimStatusRequest {
        status: status.into(),
        notes: None,
        approved_amount: None,
        adjuster_id: None,
    }
}

/// Seeds a customer with an active policy and returns both
async fn customer_with_policy(
    harness: &TestHarness,
) -> (domain_accounts::User, domain_policy::Policy) {
    let customer = harness.seed_user(Role::Customer).await;
    let policy = TestPolicyBuilder::new(customer.id).build();
    harness.seed_policy(&policy).await;
    (customer, policy)
}

async fn submit(harness: &TestHarness, owner: UserId, policy: &domain_policy::Policy) -> ClaimView {
    harness
        .claims
        .create_claim(
            create_request(policy.id, MoneyFixtures::small_claim()),
            owner,
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn test_future_incident_dates_are_rejected() {
    let harness = TestHarness::new();
    let (customer, policy) = customer_with_policy(&harness).await;

    let mut request = create_request(policy.id, MoneyFixtures::small_claim());
    request.incident_date = Utc::now().date_naive() + Days::new(1);

    let err = harness
        .claims
        .create_claim(request, customer.id)
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::InvalidInput(_)));
}

#[tokio::test]
async fn test_non_positive_claimed_amounts_fail_before_any_lookup() {
    let harness = TestHarness::new();
    let customer = harness.seed_user(Role::Customer).await;

    for amount in [Money::zero(), Money::new(dec!(-100))] {
        // The policy id is bogus on purpose; validation fires first
        let err = harness
            .claims
            .create_claim(
                create_request(core_kernel::PolicyId::new(), amount),
                customer.id,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }
}

#[tokio::test]
async fn test_claims_against_foreign_policies_are_forbidden() {
    let harness = TestHarness::new();
    let (_, policy) = customer_with_policy(&harness).await;
    let stranger = harness.seed_user(Role::Customer).await;

    let err = harness
        .claims
        .create_claim(
            create_request(policy.id, MoneyFixtures::small_claim()),
            stranger.id,
        )
        .await
        .unwrap_err();
    assert!(err.is_forbidden());
}

#[tokio::test]
async fn test_claims_against_inactive_policies_are_rejected() {
    let harness = TestHarness::new();
    let customer = harness.seed_user(Role::Customer).await;
    let policy = TestPolicyBuilder::new(customer.id).inactive().build();
    harness.seed_policy(&policy).await;

    let err = harness
        .claims
        .create_claim(
            create_request(policy.id, MoneyFixtures::small_claim()),
            customer.id,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::InvalidState(_)));
}

#[tokio::test]
async fn test_risk_boundary_at_half_coverage() {
    let harness = TestHarness::new();
    let (customer, policy) = customer_with_policy(&harness).await;

    // Exactly half the coverage does not trigger the ratio rule
    let at_half = harness
        .claims
        .create_claim(
            create_request(policy.id, MoneyFixtures::half_coverage_claim()),
            customer.id,
        )
        .await
        .unwrap();
    assert_eq!(at_half.risk_score, 0);
    assert_eq!(at_half.risk_level, RiskLevel::Low);

    // One cent over does
    let over_half = harness
        .claims
        .create_claim(
            create_request(policy.id, Money::new(dec!(25000.01))),
            customer.id,
        )
        .await
        .unwrap();
    assert_eq!(over_half.risk_score, 30);
    assert_eq!(over_half.risk_level, RiskLevel::Medium);
}

#[tokio::test]
async fn test_status_updates_stamp_timestamps_and_append_events() {
    let harness = TestHarness::new();
    let (customer, policy) = customer_with_policy(&harness).await;
    let adjuster = harness.seed_user(Role::Adjuster).await;
    let claim = submit(&harness, customer.id, &policy).await;

    let reviewed = harness
        .claims
        .update_status(
            claim.id,
            UpdateClaimStatusRequest {
                status: "under_review".into(),
                notes: Some("assigning for review".into()),
                approved_amount: None,
                adjuster_id: Some(adjuster.id),
            },
            adjuster.id,
        )
        .await
        .unwrap();
    assert_eq!(reviewed.status, ClaimStatus::UnderReview);
    assert_eq!(reviewed.adjuster_id, Some(adjuster.id));
    assert_eq!(reviewed.adjuster_name, Some(adjuster.full_name()));
    let first_review = reviewed.reviewed_at.unwrap();

    // Leaving and re-entering review keeps the original stamp
    harness
        .claims
        .update_status(claim.id, status_request("INVESTIGATING"), adjuster.id)
        .await
        .unwrap();
    let re_reviewed = harness
        .claims
        .update_status(claim.id, status_request("UNDER_REVIEW"), adjuster.id)
        .await
        .unwrap();
    assert_eq!(re_reviewed.reviewed_at, Some(first_review));

    let approved = harness
        .claims
        .update_status(
            claim.id,
            UpdateClaimStatusRequest {
                status: "APPROVED".into(),
                notes: None,
                approved_amount: Some(Money::new(dec!(750.00))),
                adjuster_id: None,
            },
            adjuster.id,
        )
        .await
        .unwrap();
    assert_eq!(approved.approved_amount, Some(Money::new(dec!(750.00))));
    assert!(approved.closed_at.is_some());

    let events = harness
        .claims
        .list_events(claim.id, adjuster.id, Role::Adjuster)
        .await
        .unwrap();
    assert_eq!(events.len(), 4);
    assert_eq!(events[0].old_status, ClaimStatus::Submitted);
    assert_eq!(events[0].new_status, ClaimStatus::UnderReview);
    assert_eq!(events[0].acted_by, adjuster.id);
    assert_eq!(events[0].note.as_deref(), Some("assigning for review"));
    assert_eq!(events[3].new_status, ClaimStatus::Approved);
}

#[tokio::test]
async fn test_terminal_claims_cannot_reopen_but_move_between_themselves() {
    let harness = TestHarness::new();
    let (customer, policy) = customer_with_policy(&harness).await;
    let admin = harness.seed_user(Role::Admin).await;
    let claim = submit(&harness, customer.id, &policy).await;

    harness
        .claims
        .update_status(claim.id, status_request("CLOSED"), admin.id)
        .await
        .unwrap();

    let err = harness
        .claims
        .update_status(claim.id, status_request("SUBMITTED"), admin.id)
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::InvalidState(_)));

    let denied = harness
        .claims
        .update_status(claim.id, status_request("DENIED"), admin.id)
        .await
        .unwrap();
    assert_eq!(denied.status, ClaimStatus::Denied);

    let reclosed = harness
        .claims
        .update_status(claim.id, status_request("CLOSED"), admin.id)
        .await
        .unwrap();
    assert_eq!(reclosed.status, ClaimStatus::Closed);
}

#[tokio::test]
async fn test_unknown_status_and_unknown_adjuster_fail_whole_update() {
    let harness = TestHarness::new();
    let (customer, policy) = customer_with_policy(&harness).await;
    let admin = harness.seed_user(Role::Admin).await;
    let claim = submit(&harness, customer.id, &policy).await;

    let err = harness
        .claims
        .update_status(claim.id, status_request("REOPENED"), admin.id)
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::InvalidInput(_)));

    let err = harness
        .claims
        .update_status(
            claim.id,
            UpdateClaimStatusRequest {
                status: "UNDER_REVIEW".into(),
                notes: None,
                approved_amount: None,
                adjuster_id: Some(UserId::new()),
            },
            admin.id,
        )
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    // The failed update left no adjuster behind
    let view = harness
        .claims
        .get_claim(claim.id, admin.id, Role::Admin)
        .await
        .unwrap();
    assert_eq!(view.adjuster_id, None);
}

#[tokio::test]
async fn test_delete_is_admin_or_own_draft_only() {
    let harness = TestHarness::new();
    let (customer, policy) = customer_with_policy(&harness).await;
    let admin = harness.seed_user(Role::Admin).await;
    let claim = submit(&harness, customer.id, &policy).await;

    // Owners cannot delete once the claim is submitted
    let err = harness
        .claims
        .delete_claim(claim.id, customer.id, Role::Customer)
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::InvalidState(_)));

    // A stored draft is deletable by its owner
    let draft = TestClaimBuilder::new(customer.id, policy.id)
        .with_status(ClaimStatus::Draft)
        .build();
    domain_claims::ClaimStore::insert_claim(&harness.store, &draft)
        .await
        .unwrap();
    harness
        .claims
        .delete_claim(draft.id, customer.id, Role::Customer)
        .await
        .unwrap();

    // Admins delete regardless of status or ownership
    harness
        .claims
        .delete_claim(claim.id, admin.id, Role::Admin)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_claim_access_is_owner_adjuster_or_admin() {
    let harness = TestHarness::new();
    let (customer, policy) = customer_with_policy(&harness).await;
    let stranger = harness.seed_user(Role::Customer).await;
    let agent = harness.seed_user(Role::Agent).await;
    let adjuster = harness.seed_user(Role::Adjuster).await;
    let claim = submit(&harness, customer.id, &policy).await;

    assert!(harness
        .claims
        .get_claim(claim.id, customer.id, Role::Customer)
        .await
        .is_ok());
    assert!(harness
        .claims
        .get_claim(claim.id, adjuster.id, Role::Adjuster)
        .await
        .is_ok());
    // Agents have no standing on claims
    assert!(harness
        .claims
        .get_claim(claim.id, agent.id, Role::Agent)
        .await
        .unwrap_err()
        .is_forbidden());
    assert!(harness
        .claims
        .get_claim(claim.id, stranger.id, Role::Customer)
        .await
        .unwrap_err()
        .is_forbidden());
}

#[tokio::test]
async fn test_documents_attach_and_list_for_authorized_users() {
    let harness = TestHarness::new();
    let (customer, policy) = customer_with_policy(&harness).await;
    let stranger = harness.seed_user(Role::Customer).await;
    let claim = submit(&harness, customer.id, &policy).await;

    let request = AttachDocumentRequest {
        document_type: "POLICE_REPORT".into(),
        file_name: "report.pdf".into(),
        file_size: 52_431,
        mime_type: "application/pdf".into(),
        bucket: "claims-documents".into(),
        key: "2024/06/report.pdf".into(),
    };

    let err = harness
        .claims
        .attach_document(claim.id, request.clone(), stranger.id, Role::Customer)
        .await
        .unwrap_err();
    assert!(err.is_forbidden());

    let mut empty = request.clone();
    empty.file_size = 0;
    let err = harness
        .claims
        .attach_document(claim.id, empty, customer.id, Role::Customer)
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::InvalidInput(_)));

    let document = harness
        .claims
        .attach_document(claim.id, request, customer.id, Role::Customer)
        .await
        .unwrap();
    assert_eq!(document.uploaded_by, customer.id);

    let documents = harness
        .claims
        .list_documents(claim.id, customer.id, Role::Customer)
        .await
        .unwrap();
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].storage.bucket, "claims-documents");
}

#[tokio::test]
async fn test_fraud_alerts_flag_the_claim_and_gate_resolution() {
    let harness = TestHarness::new();
    let (customer, policy) = customer_with_policy(&harness).await;
    let adjuster = harness.seed_user(Role::Adjuster).await;
    let claim = submit(&harness, customer.id, &policy).await;

    let alert = harness
        .claims
        .raise_fraud_alert(
            claim.id,
            RaiseFraudAlertRequest {
                alert_type: "DUPLICATE_CLAIM".into(),
                severity: AlertSeverity::High,
                description: "two claims filed for the same incident".into(),
                fraud_score: Some(dec!(65)),
            },
        )
        .await
        .unwrap();
    assert!(!alert.resolved);

    let view = harness
        .claims
        .get_claim(claim.id, adjuster.id, Role::Adjuster)
        .await
        .unwrap();
    assert!(view.fraud_flag);
    assert_eq!(view.fraud_score, dec!(65));

    // Customers can neither list nor resolve alerts
    assert!(harness
        .claims
        .list_fraud_alerts(claim.id, Role::Customer)
        .await
        .unwrap_err()
        .is_forbidden());
    assert!(harness
        .claims
        .resolve_fraud_alert(alert.id, customer.id, Role::Customer)
        .await
        .unwrap_err()
        .is_forbidden());

    let resolved = harness
        .claims
        .resolve_fraud_alert(alert.id, adjuster.id, Role::Adjuster)
        .await
        .unwrap();
    assert_eq!(resolved.resolved_by, Some(adjuster.id));

    let err = harness
        .claims
        .resolve_fraud_alert(alert.id, adjuster.id, Role::Adjuster)
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::InvalidState(_)));
}

#[tokio::test]
async fn test_out_of_range_fraud_scores_are_rejected() {
    let harness = TestHarness::new();
    let (customer, policy) = customer_with_policy(&harness).await;
    let claim = submit(&harness, customer.id, &policy).await;

    let err = harness
        .claims
        .raise_fraud_alert(
            claim.id,
            RaiseFraudAlertRequest {
                alert_type: "SCORE_SPIKE".into(),
                severity: AlertSeverity::Critical,
                description: "model output out of range".into(),
                fraud_score: Some(dec!(100.5)),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::InvalidInput(_)));
}

#[tokio::test]
async fn test_status_listing_is_scoped_by_status() {
    let harness = TestHarness::new();
    let (customer, policy) = customer_with_policy(&harness).await;
    let admin = harness.seed_user(Role::Admin).await;

    let first = submit(&harness, customer.id, &policy).await;
    let second = submit(&harness, customer.id, &policy).await;
    harness
        .claims
        .update_status(first.id, status_request("DENIED"), admin.id)
        .await
        .unwrap();

    let submitted = harness
        .claims
        .list_by_status(ClaimStatus::Submitted)
        .await
        .unwrap();
    assert_eq!(submitted.len(), 1);
    assert_eq!(submitted[0].id, second.id);

    let denied = harness.claims.list_by_status(ClaimStatus::Denied).await.unwrap();
    assert_eq!(denied.len(), 1);
    assert_eq!(denied[0].id, first.id);
}
