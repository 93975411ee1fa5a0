//! Post, media, and comment generation.

use crate::types::{
    Comment, CommentId, DAY_MS, Media, MediaId, MediaKind, Post, PostId, PostVisibility,
    Timestamp, UserId,
};

use super::Factory;

const VISIBILITIES: [PostVisibility; 3] = [
    PostVisibility::Public,
    PostVisibility::Subscribers,
    PostVisibility::IconOnly,
];

// Image-heavy mix, matching the feed's real media distribution.
const MEDIA_MIX: [MediaKind; 4] = [
    MediaKind::Image,
    MediaKind::Image,
    MediaKind::Image,
    MediaKind::Video,
];

/// Overrides for [`Factory::create_post`].
#[derive(Debug, Clone, Default)]
pub struct PostOverrides {
    pub id: Option<PostId>,
    pub content: Option<String>,
    pub media: Option<Vec<Media>>,
    pub visibility: Option<PostVisibility>,
    pub like_count: Option<u32>,
    pub is_liked: Option<bool>,
    pub is_pinned: Option<bool>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

/// Overrides for [`Factory::create_comment`].
#[derive(Debug, Clone, Default)]
pub struct CommentOverrides {
    pub content: Option<String>,
    pub like_count: Option<u32>,
    pub is_liked: Option<bool>,
    pub created_at: Option<Timestamp>,
}

impl Factory {
    /// Generate a media attachment of the given kind.
    pub fn create_media(&mut self, kind: MediaKind) -> Media {
        let id = MediaId(self.hex_id());
        match kind {
            MediaKind::Image => {
                let width = self.int(800, 1920);
                let height = self.int(600, 1080);
                let slug = self.alphanumeric(8);
                Media {
                    id,
                    kind,
                    url: format!("https://picsum.photos/seed/{slug}/{width}/{height}"),
                    thumbnail: Some(format!("https://picsum.photos/seed/{slug}/400/300")),
                    duration: None,
                    width: Some(width),
                    height: Some(height),
                }
            }
            MediaKind::Video => {
                let slug = self.alphanumeric(8);
                Media {
                    id,
                    kind,
                    url: format!("https://sample-videos.com/video/mp4/720/{slug}.mp4"),
                    thumbnail: Some(format!("https://picsum.photos/seed/{slug}/1280/720")),
                    duration: Some(self.int(10, 300)),
                    width: Some(1280),
                    height: Some(720),
                }
            }
            MediaKind::Audio => {
                let slug = self.alphanumeric(8);
                Media {
                    id,
                    kind,
                    url: format!("https://sample-audio.com/audio/{slug}.mp3"),
                    thumbnail: None,
                    duration: Some(self.int(30, 600)),
                    width: None,
                    height: None,
                }
            }
        }
    }

    /// Generate a post owned by `creator_id`.
    ///
    /// `comment_count` always starts at zero: the count is a live
    /// aggregate over stored comment records, never generated fiction.
    /// A generated liked post carries at least its viewer's own like, so
    /// un-liking can never drive the count below zero.
    pub fn create_post(&mut self, creator_id: &UserId, overrides: PostOverrides) -> Post {
        let media = match overrides.media {
            Some(media) => media,
            None => {
                let count = if self.chance(0.7) { self.int(1, 4) } else { 0 };
                (0..count)
                    .map(|_| {
                        let kind = *self.pick(&MEDIA_MIX);
                        self.create_media(kind)
                    })
                    .collect()
            }
        };

        let is_liked = overrides.is_liked.unwrap_or_else(|| self.chance(0.2));
        let generated_likes = self.int(u32::from(is_liked), 10_000);

        Post {
            id: overrides.id.unwrap_or_else(|| PostId(self.hex_id())),
            creator_id: creator_id.clone(),
            content: overrides.content.unwrap_or_else(|| self.paragraph(1, 3)),
            media,
            visibility: overrides
                .visibility
                .unwrap_or_else(|| *self.pick(&VISIBILITIES)),
            like_count: overrides.like_count.unwrap_or(generated_likes),
            comment_count: 0,
            is_liked,
            is_pinned: overrides.is_pinned.unwrap_or_else(|| self.chance(0.05)),
            created_at: overrides.created_at.unwrap_or_else(|| self.past(30 * DAY_MS)),
            updated_at: overrides.updated_at.unwrap_or_else(|| self.past(30 * DAY_MS)),
        }
    }

    /// Generate `count` posts for one creator.
    pub fn create_posts(&mut self, count: usize, creator_id: &UserId) -> Vec<Post> {
        (0..count)
            .map(|_| self.create_post(creator_id, PostOverrides::default()))
            .collect()
    }

    /// Generate a comment by `user_id` on `post_id`.
    pub fn create_comment(
        &mut self,
        post_id: &PostId,
        user_id: &UserId,
        overrides: CommentOverrides,
    ) -> Comment {
        Comment {
            id: CommentId(self.hex_id()),
            post_id: post_id.clone(),
            user_id: user_id.clone(),
            content: overrides.content.unwrap_or_else(|| self.sentence(3, 12)),
            like_count: overrides.like_count.unwrap_or_else(|| self.int(0, 500)),
            is_liked: overrides.is_liked.unwrap_or_else(|| self.chance(0.15)),
            created_at: overrides.created_at.unwrap_or_else(|| self.past(7 * DAY_MS)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_comment_count_starts_at_zero() {
        let mut factory = Factory::new(42);
        for _ in 0..25 {
            let post = factory.create_post(&UserId::from("c1"), PostOverrides::default());
            assert_eq!(post.comment_count, 0);
        }
    }

    #[test]
    fn test_liked_post_has_at_least_one_like() {
        let mut factory = Factory::new(42);
        for _ in 0..200 {
            let post = factory.create_post(&UserId::from("c1"), PostOverrides::default());
            if post.is_liked {
                assert!(post.like_count >= 1);
            }
        }
    }

    #[test]
    fn test_post_overrides_win() {
        let mut factory = Factory::new(42);
        let post = factory.create_post(
            &UserId::from("c1"),
            PostOverrides {
                visibility: Some(PostVisibility::IconOnly),
                is_pinned: Some(true),
                content: Some("pinned".to_string()),
                ..PostOverrides::default()
            },
        );
        assert_eq!(post.visibility, PostVisibility::IconOnly);
        assert!(post.is_pinned);
        assert_eq!(post.content, "pinned");
    }

    #[test]
    fn test_video_media_has_duration() {
        let mut factory = Factory::new(42);
        let media = factory.create_media(MediaKind::Video);
        let duration = media.duration.unwrap();
        assert!((10..=300).contains(&duration));
        assert_eq!(media.width, Some(1280));
    }
}
