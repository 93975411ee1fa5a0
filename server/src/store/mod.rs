//! The in-memory store: primary maps, secondary indexes, aggregates.
//!
//! A [`Store`] is an explicitly constructed value. Callers that share one
//! wrap it in `Arc<RwLock<Store>>`; nothing in this crate hides a store
//! in a global. The store exclusively owns every entity: reads hand out
//! clones, and all mutation goes through `&mut self` operations.
//!
//! # Index atomicity
//!
//! Every create/delete updates the primary map and its secondary indexes
//! inside one `&mut self` method, and store execution is single-threaded
//! (the API layer serializes access through a lock). A concurrent port
//! must keep each operation atomic: an index that can observe a primary
//! map mid-update corrupts every aggregate built on top of it.
//!
//! # Ordering
//!
//! `HashMap` iteration order is nondeterministic, so each scanned entity
//! type also keeps an insertion-order vector. List operations iterate
//! that vector and sort with *stable* sorts, so equal timestamps keep
//! insertion order, which is what makes reseeding reproducible down to
//! list ordering.

mod analytics;
mod comments;
mod messaging;
mod notifications;
mod posts;
mod subscriptions;
mod transactions;
mod users;

use std::collections::HashMap;

use crate::types::{
    AnalyticsPeriod, Clock, Comment, CommentId, Conversation, ConversationId, CreatorAnalytics,
    Message, MessageId, Notification, NotificationId, Post, PostId, Subscription, SubscriptionId,
    Timestamp, Transaction, TransactionId, User, UserId,
};

/// In-memory database for the demo backend.
#[derive(Debug, Clone, Default)]
pub struct Store {
    clock: Clock,

    users: HashMap<UserId, User>,
    user_order: Vec<UserId>,
    posts: HashMap<PostId, Post>,
    post_order: Vec<PostId>,
    comments: HashMap<CommentId, Comment>,
    transactions: HashMap<TransactionId, Transaction>,
    transaction_order: Vec<TransactionId>,
    subscriptions: HashMap<SubscriptionId, Subscription>,
    messages: HashMap<MessageId, Message>,
    message_order: Vec<MessageId>,
    conversations: HashMap<ConversationId, Conversation>,
    conversation_order: Vec<ConversationId>,
    notifications: HashMap<NotificationId, Notification>,
    notification_order: Vec<NotificationId>,
    analytics: HashMap<(UserId, AnalyticsPeriod), CreatorAnalytics>,

    // Secondary indexes: foreign key → owning entity IDs.
    posts_by_creator: HashMap<UserId, Vec<PostId>>,
    comments_by_post: HashMap<PostId, Vec<CommentId>>,
    conversations_by_user: HashMap<UserId, Vec<ConversationId>>,
    subscriptions_by_creator: HashMap<UserId, Vec<SubscriptionId>>,
    subscriptions_by_fan: HashMap<UserId, Vec<SubscriptionId>>,
}

impl Store {
    /// Create an empty store with the clock at the demo epoch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard every entity and index and rewind the clock.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Deterministic "now" for runtime-created entities.
    ///
    /// Advances the logical clock by one step per call.
    pub fn now(&mut self) -> Timestamp {
        self.clock.tick()
    }

    /// Move the clock to `start` (the seeder pins it to the demo epoch).
    pub fn set_clock(&mut self, start: Timestamp) {
        self.clock.reset(start);
    }

    /// Entity counts for log lines: (users, posts, subscriptions,
    /// conversations).
    #[must_use]
    pub fn census(&self) -> (usize, usize, usize, usize) {
        (
            self.users.len(),
            self.posts.len(),
            self.subscriptions.len(),
            self.conversations.len(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::user::RoleProfile;
    use crate::types::{DEMO_EPOCH, SubscriptionTier, UserRole};

    pub(crate) fn test_user(id: &str, profile: RoleProfile) -> User {
        User {
            id: UserId::from(id),
            email: format!("{id}@example.com"),
            username: id.to_string(),
            display_name: id.to_string(),
            avatar: String::new(),
            bio: String::new(),
            subscription_tier: SubscriptionTier::Free,
            is_verified: false,
            created_at: Timestamp(0),
            profile,
        }
    }

    pub(crate) fn test_creator(id: &str) -> User {
        test_user(
            id,
            RoleProfile::Creator {
                subscriber_count: 0,
                total_earnings: 0.0,
            },
        )
    }

    pub(crate) fn test_fan(id: &str) -> User {
        test_user(
            id,
            RoleProfile::Fan {
                following_count: 0,
                subscriptions: Vec::new(),
            },
        )
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut store = Store::new();
        store.insert_user(test_creator("c1"));
        assert_eq!(store.census().0, 1);

        store.reset();
        assert_eq!(store.census(), (0, 0, 0, 0));
        assert_eq!(store.clock.current(), DEMO_EPOCH);
    }

    #[test]
    fn test_now_is_monotonic() {
        let mut store = Store::new();
        let a = store.now();
        let b = store.now();
        assert!(b > a);
    }

    #[test]
    fn test_role_helpers() {
        assert_eq!(test_creator("c").role(), UserRole::Creator);
        assert_eq!(test_fan("f").role(), UserRole::Fan);
    }
}
