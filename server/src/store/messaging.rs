//! Conversation and message operations, plus the unread aggregate.

use crate::types::{Conversation, ConversationId, Message, UserId};

use super::Store;

impl Store {
    /// Look up a conversation by ID.
    #[must_use]
    pub fn conversation(&self, id: &ConversationId) -> Option<Conversation> {
        self.conversations.get(id).cloned()
    }

    /// Conversations the user participates in, most recently active
    /// first.
    #[must_use]
    pub fn conversations_by_user(&self, user_id: &UserId) -> Vec<Conversation> {
        let Some(ids) = self.conversations_by_user.get(user_id) else {
            return Vec::new();
        };
        let mut conversations: Vec<Conversation> = ids
            .iter()
            .filter_map(|id| self.conversations.get(id))
            .cloned()
            .collect();
        conversations.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        conversations
    }

    /// Insert a conversation and index it under every participant.
    pub fn insert_conversation(&mut self, conversation: Conversation) {
        let id = conversation.id.clone();
        let participants = conversation.participants.clone();
        if self.conversations.insert(id.clone(), conversation).is_some() {
            return;
        }
        self.conversation_order.push(id.clone());
        for participant in participants {
            self.conversations_by_user
                .entry(participant)
                .or_default()
                .push(id.clone());
        }
    }

    /// Messages in a conversation, oldest first.
    #[must_use]
    pub fn messages_by_conversation(&self, conversation_id: &ConversationId) -> Vec<Message> {
        let mut messages: Vec<Message> = self
            .message_order
            .iter()
            .filter_map(|id| self.messages.get(id))
            .filter(|msg| msg.conversation_id == *conversation_id)
            .cloned()
            .collect();
        messages.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        messages
    }

    /// Insert a message and refresh the parent conversation's cache:
    /// `last_message`, `updated_at`, and the unread counter.
    pub fn insert_message(&mut self, message: Message) {
        let id = message.id.clone();
        let conversation_id = message.conversation_id.clone();
        let cached = message.clone();
        if self.messages.insert(id.clone(), message).is_some() {
            return;
        }
        self.message_order.push(id);

        if let Some(conversation) = self.conversations.get_mut(&conversation_id) {
            conversation.updated_at = cached.created_at;
            conversation.last_message = Some(cached);
            conversation.unread_count += 1;
        }
    }

    /// Mark a thread read from `reader_id`'s side: flip `is_read` on every
    /// message the reader did not author, and zero the unread counter.
    pub fn mark_conversation_read(&mut self, conversation_id: &ConversationId, reader_id: &UserId) {
        let unread: Vec<_> = self
            .message_order
            .iter()
            .filter(|id| {
                self.messages.get(*id).is_some_and(|msg| {
                    msg.conversation_id == *conversation_id
                        && msg.sender_id != *reader_id
                        && !msg.is_read
                })
            })
            .cloned()
            .collect();
        for id in unread {
            if let Some(msg) = self.messages.get_mut(&id) {
                msg.is_read = true;
            }
        }

        if let Some(conversation) = self.conversations.get_mut(conversation_id) {
            conversation.unread_count = 0;
        }
    }
}
