//! Comments on posts.

use serde::{Deserialize, Serialize};

use super::ids::{CommentId, PostId, UserId};
use super::time::Timestamp;
use super::user::User;

/// A comment, owned by a post and a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    pub user_id: UserId,
    pub content: String,
    pub like_count: u32,
    pub is_liked: bool,
    pub created_at: Timestamp,
}

/// A comment joined with its author at query time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentView {
    #[serde(flatten)]
    pub comment: Comment,
    pub user: User,
}
