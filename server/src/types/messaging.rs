//! Direct messages and conversations.

use serde::{Deserialize, Serialize};

use super::ids::{ConversationId, MessageId, UserId};
use super::post::Media;
use super::time::Timestamp;
use super::user::User;

/// A direct message inside a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: MessageId,
    pub conversation_id: ConversationId,
    pub sender_id: UserId,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Vec<Media>>,
    pub is_read: bool,
    pub created_at: Timestamp,
}

/// A message thread between a set of participants.
///
/// `last_message` and `unread_count` are denormalized: the store refreshes
/// both whenever a message is inserted, and zeroes the count when the
/// thread is marked read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: ConversationId,
    /// Serialized as `participantIds`; [`ConversationView`] supplies the
    /// joined `participants` field without a key collision on flatten.
    #[serde(rename = "participantIds")]
    pub participants: Vec<UserId>,
    pub last_message: Option<Message>,
    pub unread_count: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A message joined with its sender at query time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageView {
    #[serde(flatten)]
    pub message: Message,
    pub sender: User,
}

/// A conversation joined with its full participant records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationView {
    #[serde(flatten)]
    pub conversation: Conversation,
    pub participants: Vec<User>,
}

/// Payload for sending a message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageData {
    pub conversation_id: ConversationId,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Vec<Media>>,
}
