//! Post operations: feed, CRUD, likes, comments.

use crate::factory::{CommentOverrides, PostOverrides};
use crate::types::{
    ApiResponse, CommentView, CreatePostData, PaginatedResponse, PostId, PostView, UserId,
};

use super::{ERR_INTERNAL, MockApi, comment_view, post_view};

impl MockApi {
    /// One page of the user's feed.
    ///
    /// Pagination is plain slicing over the feed query, exactly as deep
    /// as the requested page; no stability guarantees across mutations.
    pub async fn get_feed(
        &self,
        user_id: &UserId,
        page: usize,
        page_size: usize,
    ) -> ApiResponse<PaginatedResponse<PostView>> {
        if let Err(response) = self.simulate_network().await {
            return response;
        }
        let Ok(store) = self.store.read() else {
            return ApiResponse::error(ERR_INTERNAL);
        };

        let page = page.max(1);
        let posts = store.get_feed(user_id, page_size.saturating_mul(page));
        let total = posts.len();
        let start = page_size.saturating_mul(page - 1);
        let end = (start + page_size).min(total);
        let page_items: Vec<PostView> = posts
            .into_iter()
            .skip(start)
            .take(page_size)
            .filter_map(|post| post_view(&store, post))
            .collect();

        ApiResponse::ok(PaginatedResponse {
            data: page_items,
            page,
            page_size,
            total,
            has_more: end < total,
        })
    }

    /// Fetch a single post.
    pub async fn get_post(&self, post_id: &PostId) -> ApiResponse<PostView> {
        if let Err(response) = self.simulate_network().await {
            return response;
        }
        let Ok(store) = self.store.read() else {
            return ApiResponse::error(ERR_INTERNAL);
        };
        store
            .post(post_id)
            .and_then(|post| post_view(&store, post))
            .map_or_else(|| ApiResponse::error("Post not found"), ApiResponse::ok)
    }

    /// A creator's posts, newest first.
    pub async fn get_posts_by_creator(&self, creator_id: &UserId) -> ApiResponse<Vec<PostView>> {
        if let Err(response) = self.simulate_network().await {
            return response;
        }
        let Ok(store) = self.store.read() else {
            return ApiResponse::error(ERR_INTERNAL);
        };
        let posts = store
            .posts_by_creator(creator_id)
            .into_iter()
            .filter_map(|post| post_view(&store, post))
            .collect();
        ApiResponse::ok(posts)
    }

    /// Publish a post for `user_id`.
    pub async fn create_post(&self, user_id: &UserId, data: CreatePostData) -> ApiResponse<PostView> {
        if let Err(response) = self.simulate_network().await {
            return response;
        }
        let Ok(mut store) = self.store.write() else {
            return ApiResponse::error(ERR_INTERNAL);
        };
        if store.user(user_id).is_none() {
            return ApiResponse::error("User not found");
        }

        let now = store.now();
        let Ok(mut factory) = self.factory.lock() else {
            return ApiResponse::error(ERR_INTERNAL);
        };
        let post = factory.create_post(
            user_id,
            PostOverrides {
                content: Some(data.content),
                media: Some(data.media),
                visibility: Some(data.visibility),
                created_at: Some(now),
                updated_at: Some(now),
                ..PostOverrides::default()
            },
        );
        drop(factory);

        store.insert_post(post.clone());
        tracing::debug!(post = %post.id, creator = %user_id, "post created");

        post_view(&store, post).map_or_else(
            || ApiResponse::error(ERR_INTERNAL),
            |view| ApiResponse::ok_with_message(view, "Post created successfully"),
        )
    }

    /// Delete a post. Only the owning creator may do this.
    pub async fn delete_post(&self, post_id: &PostId, user_id: &UserId) -> ApiResponse<()> {
        if let Err(response) = self.simulate_network().await {
            return response;
        }
        let Ok(mut store) = self.store.write() else {
            return ApiResponse::error(ERR_INTERNAL);
        };
        let Some(post) = store.post(post_id) else {
            return ApiResponse::error("Post not found");
        };
        if post.creator_id != *user_id {
            return ApiResponse::error("Unauthorized");
        }
        store.delete_post(post_id);
        ApiResponse::ok_with_message((), "Post deleted successfully")
    }

    /// Toggle the like flag on a post.
    pub async fn toggle_like(&self, post_id: &PostId) -> ApiResponse<PostView> {
        if let Err(response) = self.simulate_network().await {
            return response;
        }
        let Ok(mut store) = self.store.write() else {
            return ApiResponse::error(ERR_INTERNAL);
        };
        store
            .toggle_like(post_id)
            .and_then(|post| post_view(&store, post))
            .map_or_else(|| ApiResponse::error("Post not found"), ApiResponse::ok)
    }

    /// Comments on a post, oldest first.
    pub async fn get_comments(&self, post_id: &PostId) -> ApiResponse<Vec<CommentView>> {
        if let Err(response) = self.simulate_network().await {
            return response;
        }
        let Ok(store) = self.store.read() else {
            return ApiResponse::error(ERR_INTERNAL);
        };
        let comments = store
            .comments_by_post(post_id)
            .into_iter()
            .filter_map(|comment| comment_view(&store, comment))
            .collect();
        ApiResponse::ok(comments)
    }

    /// Add a comment by `user_id` to a post.
    pub async fn add_comment(
        &self,
        post_id: &PostId,
        user_id: &UserId,
        content: &str,
    ) -> ApiResponse<CommentView> {
        if let Err(response) = self.simulate_network().await {
            return response;
        }
        let Ok(mut store) = self.store.write() else {
            return ApiResponse::error(ERR_INTERNAL);
        };
        if store.user(user_id).is_none() {
            return ApiResponse::error("User not found");
        }
        if store.post(post_id).is_none() {
            return ApiResponse::error("Post not found");
        }

        let now = store.now();
        let Ok(mut factory) = self.factory.lock() else {
            return ApiResponse::error(ERR_INTERNAL);
        };
        let comment = factory.create_comment(
            post_id,
            user_id,
            CommentOverrides {
                content: Some(content.to_string()),
                created_at: Some(now),
                ..CommentOverrides::default()
            },
        );
        drop(factory);

        store.insert_comment(comment.clone());
        comment_view(&store, comment).map_or_else(
            || ApiResponse::error(ERR_INTERNAL),
            |view| ApiResponse::ok_with_message(view, "Comment added successfully"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests_support::seeded_api;
    use crate::fixtures::{EMMA_USER_ID, SOPHIA_USER_ID};
    use crate::types::{Media, MediaId, MediaKind, PostVisibility};

    #[tokio::test]
    async fn test_feed_pagination_slices() {
        let api = seeded_api();
        let emma = UserId::from(EMMA_USER_ID);

        let first = api.get_feed(&emma, 1, 5).await.data.unwrap();
        assert_eq!(first.data.len(), 5);
        assert_eq!(first.page, 1);
        assert!(first.has_more);

        let second = api.get_feed(&emma, 2, 5).await.data.unwrap();
        assert_eq!(second.page, 2);
        let first_ids: Vec<_> = first.data.iter().map(|p| p.post.id.clone()).collect();
        assert!(second.data.iter().all(|p| !first_ids.contains(&p.post.id)));
    }

    #[tokio::test]
    async fn test_feed_views_join_live_creator() {
        let api = seeded_api();
        let feed = api
            .get_feed(&UserId::from(EMMA_USER_ID), 1, 50)
            .await
            .data
            .unwrap();
        for view in &feed.data {
            assert_eq!(view.creator.id, view.post.creator_id);
        }
    }

    #[tokio::test]
    async fn test_create_post_stamps_runtime_clock() {
        let api = seeded_api();
        let sophia = UserId::from(SOPHIA_USER_ID);
        let response = api
            .create_post(
                &sophia,
                CreatePostData {
                    content: "Fresh off the press".to_string(),
                    media: vec![Media {
                        id: MediaId::from("m-upload"),
                        kind: MediaKind::Image,
                        url: "https://example.com/upload.jpg".to_string(),
                        thumbnail: None,
                        duration: None,
                        width: Some(1920),
                        height: Some(1080),
                    }],
                    visibility: PostVisibility::Public,
                },
            )
            .await;
        let view = response.data.unwrap();
        assert_eq!(view.post.content, "Fresh off the press");
        assert_eq!(view.post.comment_count, 0);
        assert_eq!(view.creator.id, sophia);

        // Newest-first: the fresh post leads the creator's listing
        let posts = api.get_posts_by_creator(&sophia).await.data.unwrap();
        assert_eq!(posts[0].post.id, view.post.id);
        assert_eq!(posts.len(), 9);
    }

    #[tokio::test]
    async fn test_delete_post_requires_ownership() {
        let api = seeded_api();
        let sophia = UserId::from(SOPHIA_USER_ID);
        let posts = api.get_posts_by_creator(&sophia).await.data.unwrap();
        let target = posts[0].post.id.clone();

        let denied = api.delete_post(&target, &UserId::from(EMMA_USER_ID)).await;
        assert_eq!(denied.error.as_deref(), Some("Unauthorized"));

        let allowed = api.delete_post(&target, &sophia).await;
        assert!(allowed.success);

        let gone = api.get_post(&target).await;
        assert_eq!(gone.error.as_deref(), Some("Post not found"));
    }

    #[tokio::test]
    async fn test_add_comment_bumps_count() {
        let api = seeded_api();
        let sophia = UserId::from(SOPHIA_USER_ID);
        let posts = api.get_posts_by_creator(&sophia).await.data.unwrap();
        let target = posts[0].post.id.clone();
        let before = posts[0].post.comment_count;

        let response = api
            .add_comment(&target, &UserId::from(EMMA_USER_ID), "Gorgeous!")
            .await;
        assert_eq!(response.data.unwrap().comment.content, "Gorgeous!");

        let after = api.get_post(&target).await.data.unwrap().post.comment_count;
        assert_eq!(after, before + 1);
    }

    #[tokio::test]
    async fn test_toggle_like_round_trips_through_api() {
        let api = seeded_api();
        let posts = api
            .get_posts_by_creator(&UserId::from(SOPHIA_USER_ID))
            .await
            .data
            .unwrap();
        let target = posts[0].post.id.clone();
        let before = (posts[0].post.is_liked, posts[0].post.like_count);

        api.toggle_like(&target).await;
        let toggled = api.get_post(&target).await.data.unwrap().post;
        assert_ne!(toggled.is_liked, before.0);

        api.toggle_like(&target).await;
        let restored = api.get_post(&target).await.data.unwrap().post;
        assert_eq!((restored.is_liked, restored.like_count), before);
    }
}
