//! Notification lifecycle end to end.

use crate::e2e_tests::helpers::{ok_data, seeded_api};
use crate::fixtures::{EMMA_USER_ID, SOPHIA_USER_ID};
use crate::types::{NotificationKind, SubscriptionTier, UserId};

#[tokio::test]
async fn test_actions_generate_notifications_for_the_creator() {
    let api = seeded_api();
    let emma = UserId::from(EMMA_USER_ID);
    let sophia = UserId::from(SOPHIA_USER_ID);

    let before = ok_data(api.get_notifications(&sophia).await).len();
    ok_data(api.subscribe(&emma, &sophia, SubscriptionTier::Icon).await);

    let notifications = ok_data(api.get_notifications(&sophia).await);
    assert_eq!(notifications.len(), before + 1);

    let newest = &notifications[0];
    assert_eq!(newest.kind, NotificationKind::NewSubscriber);
    assert!(!newest.is_read);
    assert_eq!(newest.title, "New Subscriber");
}

#[tokio::test]
async fn test_read_marking_single_and_bulk() {
    let api = seeded_api();
    let sophia = UserId::from(SOPHIA_USER_ID);

    let notifications = ok_data(api.get_notifications(&sophia).await);
    let unread: Vec<_> = notifications.iter().filter(|n| !n.is_read).collect();
    assert!(unread.len() >= 2, "fixture seeds several unread items");

    let marked = ok_data(api.mark_notification_read(&unread[0].id).await);
    assert!(marked.is_read);

    ok_data(api.mark_all_notifications_read(&sophia).await);
    let after = ok_data(api.get_notifications(&sophia).await);
    assert!(after.iter().all(|n| n.is_read));

    // Emma's inbox is untouched by Sophia's bulk read
    let emma_inbox = ok_data(api.get_notifications(&UserId::from(EMMA_USER_ID)).await);
    assert_eq!(emma_inbox.len(), 1);
}
