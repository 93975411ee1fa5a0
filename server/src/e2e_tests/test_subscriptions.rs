//! Subscription lifecycle and exclusivity.

use crate::e2e_tests::helpers::{ok_data, seeded_api};
use crate::fixtures::{EMMA_USER_ID, MARCUS_USER_ID, SOPHIA_USER_ID};
use crate::types::{SubscriptionStatus, SubscriptionTier, UserId};

#[tokio::test]
async fn test_exclusivity_no_second_active_record_no_double_count() {
    let api = seeded_api();
    let emma = UserId::from(EMMA_USER_ID);
    let sophia = UserId::from(SOPHIA_USER_ID);

    ok_data(api.subscribe(&emma, &sophia, SubscriptionTier::Icon).await);
    let count_after_first = ok_data(api.get_user(&sophia).await)
        .subscriber_count()
        .expect("creator");

    let duplicate = api.subscribe(&emma, &sophia, SubscriptionTier::Icon).await;
    assert_eq!(duplicate.error.as_deref(), Some("Already subscribed"));

    let count_after_duplicate = ok_data(api.get_user(&sophia).await)
        .subscriber_count()
        .expect("creator");
    assert_eq!(count_after_first, count_after_duplicate);

    let active_records = ok_data(api.get_my_subscriptions(&emma).await)
        .into_iter()
        .filter(|v| v.subscription.creator_id == sophia && v.subscription.is_active())
        .count();
    assert_eq!(active_records, 1);
}

#[tokio::test]
async fn test_fan_may_hold_subscriptions_to_different_creators() {
    let api = seeded_api();
    let emma = UserId::from(EMMA_USER_ID);

    ok_data(
        api.subscribe(&emma, &UserId::from(SOPHIA_USER_ID), SubscriptionTier::Icon)
            .await,
    );
    ok_data(
        api.subscribe(&emma, &UserId::from(MARCUS_USER_ID), SubscriptionTier::Creator)
            .await,
    );

    let active = ok_data(api.get_my_subscriptions(&emma).await)
        .into_iter()
        .filter(|v| v.subscription.is_active())
        .count();
    assert_eq!(active, 2);
}

#[tokio::test]
async fn test_cancellation_is_terminal_for_the_record() {
    let api = seeded_api();
    let emma = UserId::from(EMMA_USER_ID);
    let sophia = UserId::from(SOPHIA_USER_ID);

    let view = ok_data(api.subscribe(&emma, &sophia, SubscriptionTier::Icon).await);
    let cancelled = ok_data(api.cancel_subscription(&view.subscription.id).await);
    assert_eq!(cancelled.subscription.status, SubscriptionStatus::Cancelled);

    // Cancelling again returns the record unchanged, still cancelled
    let again = ok_data(api.cancel_subscription(&view.subscription.id).await);
    assert_eq!(again.subscription.status, SubscriptionStatus::Cancelled);
}

#[tokio::test]
async fn test_subscriber_listing_shows_both_parties() {
    let api = seeded_api();
    let emma = UserId::from(EMMA_USER_ID);
    let sophia = UserId::from(SOPHIA_USER_ID);

    ok_data(api.subscribe(&emma, &sophia, SubscriptionTier::Icon).await);

    let subscribers = ok_data(api.get_subscribers(&sophia).await);
    let emma_edge = subscribers
        .iter()
        .find(|v| v.subscription.fan_id == emma)
        .expect("emma's subscription on sophia's side");
    assert_eq!(emma_edge.fan.id, emma);
    assert_eq!(emma_edge.creator.id, sophia);
}

#[tokio::test]
async fn test_unknown_parties_are_domain_errors() {
    let api = seeded_api();
    let response = api
        .subscribe(
            &UserId::from("ghost-fan"),
            &UserId::from(SOPHIA_USER_ID),
            SubscriptionTier::Icon,
        )
        .await;
    assert_eq!(response.error.as_deref(), Some("User not found"));

    let response = api
        .cancel_subscription(&crate::types::SubscriptionId::from("ghost-sub"))
        .await;
    assert_eq!(response.error.as_deref(), Some("Subscription not found"));
}
