//! Messaging end to end: threads, sending, unread bookkeeping.

use crate::e2e_tests::helpers::{ok_data, seeded_api};
use crate::fixtures::{
    EMMA_MARCUS_CONVERSATION_ID, EMMA_SOPHIA_CONVERSATION_ID, EMMA_USER_ID, SOPHIA_USER_ID,
};
use crate::types::{ConversationId, SendMessageData, UserId};

#[tokio::test]
async fn test_unread_count_climbs_then_zeroes() {
    let api = seeded_api();
    let emma = UserId::from(EMMA_USER_ID);
    let sophia = UserId::from(SOPHIA_USER_ID);
    let thread_id = ConversationId::from(EMMA_SOPHIA_CONVERSATION_ID);

    let unread_before = ok_data(api.get_conversations(&sophia).await)
        .into_iter()
        .find(|c| c.conversation.id == thread_id)
        .expect("seeded thread")
        .conversation
        .unread_count;

    ok_data(
        api.send_message(
            &emma,
            &SendMessageData {
                conversation_id: thread_id.clone(),
                content: "One more thing...".to_string(),
                media: None,
            },
        )
        .await,
    );

    let unread_after = ok_data(api.get_conversations(&sophia).await)
        .into_iter()
        .find(|c| c.conversation.id == thread_id)
        .expect("seeded thread")
        .conversation
        .unread_count;
    assert_eq!(unread_after, unread_before + 1);

    ok_data(api.mark_as_read(&thread_id, &sophia).await);
    let unread_cleared = ok_data(api.get_conversations(&sophia).await)
        .into_iter()
        .find(|c| c.conversation.id == thread_id)
        .expect("seeded thread")
        .conversation
        .unread_count;
    assert_eq!(unread_cleared, 0);
}

#[tokio::test]
async fn test_sending_reorders_conversations_by_activity() {
    let api = seeded_api();
    let emma = UserId::from(EMMA_USER_ID);

    ok_data(
        api.send_message(
            &emma,
            &SendMessageData {
                conversation_id: ConversationId::from(EMMA_MARCUS_CONVERSATION_ID),
                content: "Just saw the new series!".to_string(),
                media: None,
            },
        )
        .await,
    );

    let conversations = ok_data(api.get_conversations(&emma).await);
    assert_eq!(
        conversations[0].conversation.id,
        ConversationId::from(EMMA_MARCUS_CONVERSATION_ID),
        "most recently active thread first"
    );
}

#[tokio::test]
async fn test_thread_keeps_chronological_order() {
    let api = seeded_api();
    let thread_id = ConversationId::from(EMMA_SOPHIA_CONVERSATION_ID);

    let messages = ok_data(api.get_messages(&thread_id).await);
    assert_eq!(messages.len(), 3);
    let ordered = messages
        .windows(2)
        .all(|w| w[0].message.created_at <= w[1].message.created_at);
    assert!(ordered);

    // Scripted opener comes from Emma
    assert_eq!(messages[0].message.sender_id, UserId::from(EMMA_USER_ID));
    assert_eq!(
        messages[0].message.content,
        "Hi Sophia! Loved your recent post about the rooftop event 😍"
    );
}
