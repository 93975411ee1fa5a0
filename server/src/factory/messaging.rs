//! Message, conversation, and notification generation.

use crate::types::{
    Conversation, ConversationId, DAY_MS, MediaKind, Message, MessageId, Notification,
    NotificationId, NotificationKind, Timestamp, UserId, YEAR_MS,
};

use super::Factory;

/// Overrides for [`Factory::create_message`].
#[derive(Debug, Clone, Default)]
pub struct MessageOverrides {
    pub content: Option<String>,
    pub is_read: Option<bool>,
    pub created_at: Option<Timestamp>,
}

/// Overrides for [`Factory::create_conversation`].
#[derive(Debug, Clone, Default)]
pub struct ConversationOverrides {
    pub id: Option<ConversationId>,
    pub unread_count: Option<u32>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

/// Overrides for [`Factory::create_notification`].
#[derive(Debug, Clone, Default)]
pub struct NotificationOverrides {
    pub kind: Option<NotificationKind>,
    pub title: Option<String>,
    pub message: Option<String>,
    pub is_read: Option<bool>,
    pub created_at: Option<Timestamp>,
}

impl Factory {
    /// Generate a message from `sender_id` in `conversation_id`.
    pub fn create_message(
        &mut self,
        conversation_id: &ConversationId,
        sender_id: &UserId,
        overrides: MessageOverrides,
    ) -> Message {
        let media = self
            .chance(0.15)
            .then(|| vec![self.create_media(MediaKind::Image)]);

        Message {
            id: MessageId(self.hex_id()),
            conversation_id: conversation_id.clone(),
            sender_id: sender_id.clone(),
            content: overrides.content.unwrap_or_else(|| self.sentence(3, 20)),
            media,
            is_read: overrides.is_read.unwrap_or_else(|| self.chance(0.6)),
            created_at: overrides.created_at.unwrap_or_else(|| self.past(7 * DAY_MS)),
        }
    }

    /// Generate a conversation between `participants`.
    ///
    /// The placeholder `last_message` gives a fresh thread something to
    /// render; the store replaces it as soon as a real message lands.
    pub fn create_conversation(
        &mut self,
        participants: Vec<UserId>,
        overrides: ConversationOverrides,
    ) -> Conversation {
        let id = overrides
            .id
            .unwrap_or_else(|| ConversationId(self.hex_id()));
        let last_sender = self.pick(&participants).clone();
        let last_message = self.create_message(&id, &last_sender, MessageOverrides::default());

        Conversation {
            id,
            participants,
            last_message: Some(last_message),
            unread_count: overrides.unread_count.unwrap_or_else(|| self.int(0, 10)),
            created_at: overrides.created_at.unwrap_or_else(|| self.past(YEAR_MS)),
            updated_at: overrides.updated_at.unwrap_or_else(|| self.past(7 * DAY_MS)),
        }
    }

    /// Generate a notification for `user_id`.
    pub fn create_notification(
        &mut self,
        user_id: &UserId,
        overrides: NotificationOverrides,
    ) -> Notification {
        let kind = overrides
            .kind
            .unwrap_or_else(|| *self.pick(&NotificationKind::ALL));

        Notification {
            id: NotificationId(self.hex_id()),
            user_id: user_id.clone(),
            kind,
            title: overrides.title.unwrap_or_else(|| kind.title().to_string()),
            message: overrides
                .message
                .unwrap_or_else(|| kind.default_message().to_string()),
            is_read: overrides.is_read.unwrap_or_else(|| self.chance(0.4)),
            created_at: overrides.created_at.unwrap_or_else(|| self.past(14 * DAY_MS)),
        }
    }
}
