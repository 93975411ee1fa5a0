//! ID newtypes for every entity in the data model.
//!
//! Wrapping the raw strings keeps the store's index maps honest: a
//! `fan→subscriptions` index keyed by `UserId` cannot be probed with a
//! `PostId` by accident. IDs are plain strings because the demo fixtures
//! use human-readable values (`user-sophia-creator`) alongside generated
//! hex IDs.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// View the ID as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

id_type!(
    /// Identifies a [`User`](crate::types::User).
    UserId
);
id_type!(
    /// Identifies a [`Post`](crate::types::Post).
    PostId
);
id_type!(
    /// Identifies a [`Comment`](crate::types::Comment).
    CommentId
);
id_type!(
    /// Identifies a [`Subscription`](crate::types::Subscription).
    SubscriptionId
);
id_type!(
    /// Identifies a [`Transaction`](crate::types::Transaction).
    TransactionId
);
id_type!(
    /// Identifies a [`Conversation`](crate::types::Conversation).
    ConversationId
);
id_type!(
    /// Identifies a [`Message`](crate::types::Message).
    MessageId
);
id_type!(
    /// Identifies a [`Notification`](crate::types::Notification).
    NotificationId
);
id_type!(
    /// Identifies a [`Media`](crate::types::Media) attachment.
    MediaId
);
