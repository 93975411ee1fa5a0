//! Posts and media attachments.

use serde::{Deserialize, Serialize};

use super::ids::{MediaId, PostId, UserId};
use super::time::Timestamp;
use super::user::User;

/// Who may see a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PostVisibility {
    Public,
    Subscribers,
    IconOnly,
}

/// Kind of media attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Audio,
}

/// A media attachment on a post or message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: MediaId,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Playback length in seconds, for video/audio.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// A piece of creator content.
///
/// `like_count` and `comment_count` are denormalized aggregates; the
/// store keeps `comment_count` equal to the number of stored comments for
/// this post at all times. Likes have no backing records, so `like_count`
/// only ever moves through [`toggle_like`](crate::store::Store::toggle_like).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub creator_id: UserId,
    pub content: String,
    pub media: Vec<Media>,
    pub visibility: PostVisibility,
    pub like_count: u32,
    pub comment_count: u32,
    pub is_liked: bool,
    pub is_pinned: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A post joined with its creator at query time.
///
/// The production API embedded a snapshotted creator object inside each
/// post, which drifted whenever the user record changed. Here the join
/// happens on read, against the authoritative user record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostView {
    #[serde(flatten)]
    pub post: Post,
    pub creator: User,
}

/// Field-by-field patch for [`Store::update_post`](crate::store::Store::update_post).
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub content: Option<String>,
    pub visibility: Option<PostVisibility>,
    pub is_pinned: Option<bool>,
}

/// Payload for creating a post through the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostData {
    pub content: String,
    #[serde(default)]
    pub media: Vec<Media>,
    pub visibility: PostVisibility,
}
