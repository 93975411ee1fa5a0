//! Domain types shared by the store, the factories, and the API layer.
//!
//! All entities serialize in `camelCase` to match the production API
//! shapes, and every list/lookup hands out owned clones: the store is the
//! only holder of authoritative values.

pub mod analytics;
pub mod comment;
pub mod envelope;
pub mod ids;
pub mod messaging;
pub mod notification;
pub mod post;
pub mod subscription;
pub mod time;
pub mod transaction;
pub mod user;

pub use analytics::{AnalyticsPeriod, CountPoint, CreatorAnalytics, RevenuePoint};
pub use comment::{Comment, CommentView};
pub use envelope::{ApiResponse, PaginatedResponse};
pub use ids::{
    CommentId, ConversationId, MediaId, MessageId, NotificationId, PostId, SubscriptionId,
    TransactionId, UserId,
};
pub use messaging::{Conversation, ConversationView, Message, MessageView, SendMessageData};
pub use notification::{Notification, NotificationKind};
pub use post::{CreatePostData, Media, MediaKind, Post, PostPatch, PostView, PostVisibility};
pub use subscription::{Subscription, SubscriptionStatus, SubscriptionView};
pub use time::{Clock, DAY_MS, DEMO_EPOCH, SECOND_MS, Timestamp, YEAR_MS};
pub use transaction::{TipData, Transaction, TransactionKind, TransactionStatus};
pub use user::{
    AuthPayload, LoginCredentials, RoleProfile, SignupData, SubscriptionTier, User, UserPatch,
    UserRole,
};
