//! The concrete seed-42 walkthrough scenarios.

use crate::e2e_tests::helpers::{ok_data, seeded_api};
use crate::fixtures::{EMMA_USER_ID, MARCUS_USER_ID, SOPHIA_USER_ID};
use crate::types::{PostVisibility, SubscriptionTier, TipData, TransactionStatus, UserId};

#[tokio::test]
async fn test_seed_42_population() {
    let api = seeded_api();
    // 4 named personas + 5 additional creators + 10 additional fans
    let store = api.store();
    let store = store.read().expect("store lock");
    assert_eq!(store.users().len(), 19);
}

#[tokio::test]
async fn test_sophia_has_eight_posts_one_pinned_exclusive() {
    let api = seeded_api();
    let posts = ok_data(api.get_posts_by_creator(&UserId::from(SOPHIA_USER_ID)).await);
    assert_eq!(posts.len(), 8);
    assert_eq!(
        posts
            .iter()
            .filter(|p| p.post.visibility == PostVisibility::IconOnly && p.post.is_pinned)
            .count(),
        1
    );
}

#[tokio::test]
async fn test_emma_subscriptions_list_contains_both_creators() {
    let api = seeded_api();
    let emma = ok_data(api.get_user(&UserId::from(EMMA_USER_ID)).await);
    let subscriptions = emma.subscriptions();
    assert!(subscriptions.contains(&UserId::from(SOPHIA_USER_ID)));
    assert!(subscriptions.contains(&UserId::from(MARCUS_USER_ID)));
}

#[tokio::test]
async fn test_subscribe_scenario_on_fresh_seed() {
    let api = seeded_api();
    let emma = UserId::from(EMMA_USER_ID);
    let sophia = UserId::from(SOPHIA_USER_ID);

    let count_before = ok_data(api.get_user(&sophia).await)
        .subscriber_count()
        .expect("sophia is a creator");

    let view = ok_data(api.subscribe(&emma, &sophia, SubscriptionTier::Icon).await);
    assert_eq!(view.subscription.amount, 29.99);

    let count_after = ok_data(api.get_user(&sophia).await)
        .subscriber_count()
        .expect("sophia is a creator");
    assert_eq!(count_after, count_before + 1);
}

#[tokio::test]
async fn test_tip_scenario_credits_exactly_fifty() {
    let api = seeded_api();
    let sophia = UserId::from(SOPHIA_USER_ID);

    let earnings_before = ok_data(api.get_user(&sophia).await)
        .total_earnings()
        .expect("sophia is a creator");

    let transaction = ok_data(
        api.send_tip(
            &UserId::from(EMMA_USER_ID),
            &TipData {
                creator_id: sophia.clone(),
                amount: 50.0,
                message: None,
            },
        )
        .await,
    );
    assert_eq!(transaction.status, TransactionStatus::Completed);

    let earnings_after = ok_data(api.get_user(&sophia).await)
        .total_earnings()
        .expect("sophia is a creator");
    assert!((earnings_after - earnings_before - 50.0).abs() < 1e-9);
}
