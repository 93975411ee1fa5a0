//! Tipping end to end.

use crate::e2e_tests::helpers::{ok_data, seeded_api};
use crate::fixtures::{EMMA_USER_ID, MARCUS_USER_ID, SOPHIA_USER_ID};
use crate::types::{NotificationKind, TipData, TransactionKind, UserId};

#[tokio::test]
async fn test_tip_flows_into_history_earnings_and_notifications() {
    let api = seeded_api();
    let emma = UserId::from(EMMA_USER_ID);
    let marcus = UserId::from(MARCUS_USER_ID);

    let earnings_before = ok_data(api.get_user(&marcus).await)
        .total_earnings()
        .expect("creator");
    let history_before = ok_data(api.get_transactions(&emma).await).len();

    let transaction = ok_data(
        api.send_tip(
            &emma,
            &TipData {
                creator_id: marcus.clone(),
                amount: 12.5,
                message: Some("Great photo series".to_string()),
            },
        )
        .await,
    );
    assert_eq!(transaction.kind, TransactionKind::Tip);
    assert_eq!(transaction.description, "Great photo series");

    let earnings_after = ok_data(api.get_user(&marcus).await)
        .total_earnings()
        .expect("creator");
    assert!((earnings_after - earnings_before - 12.5).abs() < 1e-9);

    let history_after = ok_data(api.get_transactions(&emma).await);
    assert_eq!(history_after.len(), history_before + 1);
    assert_eq!(history_after[0].id, transaction.id, "newest first");

    let notifications = ok_data(api.get_notifications(&marcus).await);
    assert!(
        notifications
            .iter()
            .any(|n| n.kind == NotificationKind::NewTip && !n.is_read)
    );
}

#[tokio::test]
async fn test_tips_accumulate() {
    let api = seeded_api();
    let emma = UserId::from(EMMA_USER_ID);
    let sophia = UserId::from(SOPHIA_USER_ID);

    let before = ok_data(api.get_user(&sophia).await)
        .total_earnings()
        .expect("creator");
    for _ in 0..3 {
        ok_data(
            api.send_tip(
                &emma,
                &TipData {
                    creator_id: sophia.clone(),
                    amount: 10.0,
                    message: None,
                },
            )
            .await,
        );
    }
    let after = ok_data(api.get_user(&sophia).await)
        .total_earnings()
        .expect("creator");
    assert!((after - before - 30.0).abs() < 1e-9);
}
