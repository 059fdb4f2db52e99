//! Policy service behavior over the in-memory store

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use core_kernel::{CoreError, Money, Role, UserId};
use domain_policy::CreatePolicyRequest;
use test_utils::{MoneyFixtures, TemporalFixtures, TestClaimBuilder, TestHarness};

fn request(owner_id: UserId) -> CreatePolicyRequest {
    CreatePolicyRequest {
        owner_id,
        policy_type: "AUTO".into(),
        coverage_amount: MoneyFixtures::coverage(),
        deductible: MoneyFixtures::deductible(),
        premium_amount: MoneyFixtures::premium(),
        start_date: TemporalFixtures::policy_start(),
        end_date: TemporalFixtures::policy_end(),
    }
}

#[tokio::test]
async fn test_create_assigns_a_typed_policy_number() {
    let harness = TestHarness::new();
    let owner = harness.seed_user(Role::Customer).await;

    let mut home = request(owner.id);
    home.policy_type = "home".into();
    let view = harness.policies.create_policy(home).await.unwrap();

    // Type parsing is case-insensitive; the number embeds the type code
    let suffix = view.policy_number.strip_prefix("POL-HOME-").unwrap();
    assert_eq!(suffix.len(), 6);
    assert!(view.is_active);
}

#[tokio::test]
async fn test_end_date_must_be_after_start_date() {
    let harness = TestHarness::new();
    let owner = harness.seed_user(Role::Customer).await;

    let mut same_day = request(owner.id);
    same_day.end_date = same_day.start_date;
    let err = harness.policies.create_policy(same_day).await.unwrap_err();
    assert!(matches!(err, CoreError::InvalidInput(_)));

    let mut inverted = request(owner.id);
    inverted.end_date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let err = harness.policies.create_policy(inverted).await.unwrap_err();
    assert!(matches!(err, CoreError::InvalidInput(_)));
}

#[tokio::test]
async fn test_unknown_type_and_bad_amounts_are_rejected() {
    let harness = TestHarness::new();
    let owner = harness.seed_user(Role::Customer).await;

    let mut pet = request(owner.id);
    pet.policy_type = "PET".into();
    assert!(matches!(
        harness.policies.create_policy(pet).await.unwrap_err(),
        CoreError::InvalidInput(_)
    ));

    let mut free = request(owner.id);
    free.premium_amount = Money::zero();
    assert!(matches!(
        harness.policies.create_policy(free).await.unwrap_err(),
        CoreError::InvalidInput(_)
    ));

    let mut negative_deductible = request(owner.id);
    negative_deductible.deductible = Money::new(dec!(-1));
    assert!(matches!(
        harness
            .policies
            .create_policy(negative_deductible)
            .await
            .unwrap_err(),
        CoreError::InvalidInput(_)
    ));

    // A zero deductible is fine
    let mut zero_deductible = request(owner.id);
    zero_deductible.deductible = Money::zero();
    assert!(harness.policies.create_policy(zero_deductible).await.is_ok());
}

#[tokio::test]
async fn test_missing_owner_is_not_found() {
    let harness = TestHarness::new();
    let err = harness
        .policies
        .create_policy(request(UserId::new()))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_access_is_owner_or_privileged_roles() {
    let harness = TestHarness::new();
    let owner = harness.seed_user(Role::Customer).await;
    let stranger = harness.seed_user(Role::Customer).await;
    let agent = harness.seed_user(Role::Agent).await;
    let adjuster = harness.seed_user(Role::Adjuster).await;

    let view = harness.policies.create_policy(request(owner.id)).await.unwrap();

    assert!(harness
        .policies
        .get_policy(view.id, owner.id, Role::Customer)
        .await
        .is_ok());
    assert!(harness
        .policies
        .get_policy(view.id, agent.id, Role::Agent)
        .await
        .is_ok());
    // Adjusters have no standing on policies
    assert!(harness
        .policies
        .get_policy(view.id, adjuster.id, Role::Adjuster)
        .await
        .unwrap_err()
        .is_forbidden());
    assert!(harness
        .policies
        .get_policy(view.id, stranger.id, Role::Customer)
        .await
        .unwrap_err()
        .is_forbidden());
}

#[tokio::test]
async fn test_active_listing_excludes_deactivated_policies() {
    let harness = TestHarness::new();
    let owner = harness.seed_user(Role::Customer).await;

    let first = harness.policies.create_policy(request(owner.id)).await.unwrap();
    let second = harness.policies.create_policy(request(owner.id)).await.unwrap();
    harness.policies.deactivate(first.id).await.unwrap();

    let all = harness.policies.list_by_owner(owner.id).await.unwrap();
    assert_eq!(all.len(), 2);

    let active = harness.policies.list_active_by_owner(owner.id).await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, second.id);
}

#[tokio::test]
async fn test_delete_conflicts_while_claims_reference_the_policy() {
    let harness = TestHarness::new();
    let owner = harness.seed_user(Role::Customer).await;
    let view = harness.policies.create_policy(request(owner.id)).await.unwrap();

    let claim = TestClaimBuilder::new(owner.id, view.id).build();
    domain_claims::ClaimStore::insert_claim(&harness.store, &claim)
        .await
        .unwrap();

    let err = harness.policies.delete(view.id).await.unwrap_err();
    assert!(matches!(err, CoreError::Conflict(_)));

    domain_claims::ClaimStore::delete_claim(&harness.store, claim.id)
        .await
        .unwrap();
    harness.policies.delete(view.id).await.unwrap();
}
