//! Direct-messaging operations.

use crate::factory::MessageOverrides;
use crate::types::{
    ApiResponse, ConversationId, ConversationView, MessageView, SendMessageData, UserId,
};

use super::{ERR_INTERNAL, MockApi, conversation_view, message_view};

impl MockApi {
    /// The user's conversations, most recently active first.
    pub async fn get_conversations(&self, user_id: &UserId) -> ApiResponse<Vec<ConversationView>> {
        if let Err(response) = self.simulate_network().await {
            return response;
        }
        let Ok(store) = self.store.read() else {
            return ApiResponse::error(ERR_INTERNAL);
        };
        let conversations = store
            .conversations_by_user(user_id)
            .into_iter()
            .filter_map(|conv| conversation_view(&store, conv))
            .collect();
        ApiResponse::ok(conversations)
    }

    /// Messages in a conversation, oldest first.
    pub async fn get_messages(&self, conversation_id: &ConversationId) -> ApiResponse<Vec<MessageView>> {
        if let Err(response) = self.simulate_network().await {
            return response;
        }
        let Ok(store) = self.store.read() else {
            return ApiResponse::error(ERR_INTERNAL);
        };
        let messages = store
            .messages_by_conversation(conversation_id)
            .into_iter()
            .filter_map(|msg| message_view(&store, msg))
            .collect();
        ApiResponse::ok(messages)
    }

    /// Send a message from `user_id` into an existing conversation.
    pub async fn send_message(&self, user_id: &UserId, data: &SendMessageData) -> ApiResponse<MessageView> {
        if let Err(response) = self.simulate_network().await {
            return response;
        }
        let Ok(mut store) = self.store.write() else {
            return ApiResponse::error(ERR_INTERNAL);
        };
        if store.user(user_id).is_none() {
            return ApiResponse::error("User not found");
        }
        if store.conversation(&data.conversation_id).is_none() {
            return ApiResponse::error("Conversation not found");
        }

        let now = store.now();
        let Ok(mut factory) = self.factory.lock() else {
            return ApiResponse::error(ERR_INTERNAL);
        };
        let message = factory.create_message(
            &data.conversation_id,
            user_id,
            MessageOverrides {
                content: Some(data.content.clone()),
                is_read: Some(false),
                created_at: Some(now),
            },
        );
        drop(factory);

        store.insert_message(message.clone());
        message_view(&store, message).map_or_else(
            || ApiResponse::error(ERR_INTERNAL),
            |view| ApiResponse::ok_with_message(view, "Message sent"),
        )
    }

    /// Mark the conversation read from `user_id`'s side.
    pub async fn mark_as_read(
        &self,
        conversation_id: &ConversationId,
        user_id: &UserId,
    ) -> ApiResponse<()> {
        if let Err(response) = self.simulate_network().await {
            return response;
        }
        let Ok(mut store) = self.store.write() else {
            return ApiResponse::error(ERR_INTERNAL);
        };
        store.mark_conversation_read(conversation_id, user_id);
        ApiResponse::ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests_support::seeded_api;
    use crate::fixtures::{EMMA_SOPHIA_CONVERSATION_ID, EMMA_USER_ID, SOPHIA_USER_ID};

    #[tokio::test]
    async fn test_emma_sees_both_scripted_threads() {
        let api = seeded_api();
        let conversations = api
            .get_conversations(&UserId::from(EMMA_USER_ID))
            .await
            .data
            .unwrap();
        assert_eq!(conversations.len(), 2);
        for view in &conversations {
            assert_eq!(view.participants.len(), 2);
        }
    }

    #[tokio::test]
    async fn test_send_message_updates_thread_cache() {
        let api = seeded_api();
        let conversation_id = ConversationId::from(EMMA_SOPHIA_CONVERSATION_ID);
        let emma = UserId::from(EMMA_USER_ID);

        let before = api.get_messages(&conversation_id).await.data.unwrap().len();
        let response = api
            .send_message(
                &emma,
                &SendMessageData {
                    conversation_id: conversation_id.clone(),
                    content: "See you there!".to_string(),
                    media: None,
                },
            )
            .await;
        let view = response.data.unwrap();
        assert_eq!(view.message.content, "See you there!");
        assert_eq!(view.sender.id, emma);

        let messages = api.get_messages(&conversation_id).await.data.unwrap();
        assert_eq!(messages.len(), before + 1);
        assert_eq!(messages.last().unwrap().message.content, "See you there!");

        let conversations = api.get_conversations(&emma).await.data.unwrap();
        let thread = conversations
            .iter()
            .find(|c| c.conversation.id == conversation_id)
            .unwrap();
        assert_eq!(
            thread
                .conversation
                .last_message
                .as_ref()
                .unwrap()
                .content,
            "See you there!"
        );
    }

    #[tokio::test]
    async fn test_send_to_unknown_conversation_fails() {
        let api = seeded_api();
        let response = api
            .send_message(
                &UserId::from(EMMA_USER_ID),
                &SendMessageData {
                    conversation_id: ConversationId::from("conv-ghost"),
                    content: "hello?".to_string(),
                    media: None,
                },
            )
            .await;
        assert_eq!(response.error.as_deref(), Some("Conversation not found"));
    }

    #[tokio::test]
    async fn test_mark_as_read_zeroes_unread_and_flips_messages() {
        let api = seeded_api();
        let conversation_id = ConversationId::from(EMMA_SOPHIA_CONVERSATION_ID);
        let sophia = UserId::from(SOPHIA_USER_ID);

        api.mark_as_read(&conversation_id, &sophia).await;

        let conversations = api.get_conversations(&sophia).await.data.unwrap();
        let thread = conversations
            .iter()
            .find(|c| c.conversation.id == conversation_id)
            .unwrap();
        assert_eq!(thread.conversation.unread_count, 0);

        let messages = api.get_messages(&conversation_id).await.data.unwrap();
        for view in messages {
            if view.message.sender_id != sophia {
                assert!(view.message.is_read);
            }
        }
    }
}
