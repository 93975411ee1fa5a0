//! In-app notifications.

use serde::{Deserialize, Serialize};

use super::ids::{NotificationId, UserId};
use super::time::Timestamp;

/// What triggered a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    NewSubscriber,
    NewTip,
    NewComment,
    NewLike,
    NewMessage,
}

impl NotificationKind {
    /// All kinds, in the order the factory draws from.
    pub const ALL: [Self; 5] = [
        Self::NewSubscriber,
        Self::NewTip,
        Self::NewComment,
        Self::NewLike,
        Self::NewMessage,
    ];

    /// Human-readable title shown in the notification list.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::NewSubscriber => "New Subscriber",
            Self::NewTip => "New Tip",
            Self::NewComment => "New Comment",
            Self::NewLike => "New Like",
            Self::NewMessage => "New Message",
        }
    }

    /// Default body text when no custom message is supplied.
    #[must_use]
    pub const fn default_message(self) -> &'static str {
        match self {
            Self::NewSubscriber => "You have a new subscriber!",
            Self::NewTip => "You received a tip!",
            Self::NewComment => "Someone commented on your post",
            Self::NewLike => "Someone liked your post",
            Self::NewMessage => "You have a new message",
        }
    }
}

/// A notification addressed to one recipient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    pub user_id: UserId,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: Timestamp,
}
