//! Post lifecycle: publish, like, comment, delete.

use crate::e2e_tests::helpers::{ok_data, seeded_api};
use crate::fixtures::{EMMA_USER_ID, SOPHIA_USER_ID};
use crate::types::{CreatePostData, PostVisibility, UserId};

#[tokio::test]
async fn test_publish_then_read_back() {
    let api = seeded_api();
    let sophia = UserId::from(SOPHIA_USER_ID);

    let published = ok_data(
        api.create_post(
            &sophia,
            CreatePostData {
                content: "Tonight's lineup is unreal".to_string(),
                media: Vec::new(),
                visibility: PostVisibility::Subscribers,
            },
        )
        .await,
    );

    let fetched = ok_data(api.get_post(&published.post.id).await);
    assert_eq!(fetched.post, published.post);
    assert_eq!(fetched.creator.id, sophia);
}

#[tokio::test]
async fn test_double_toggle_restores_like_state() {
    let api = seeded_api();
    let posts = ok_data(api.get_posts_by_creator(&UserId::from(SOPHIA_USER_ID)).await);

    for view in posts.iter().take(3) {
        let id = &view.post.id;
        let original = (view.post.is_liked, view.post.like_count);

        ok_data(api.toggle_like(id).await);
        let restored = ok_data(api.toggle_like(id).await);
        assert_eq!((restored.post.is_liked, restored.post.like_count), original);
    }
}

#[tokio::test]
async fn test_comment_count_tracks_records_through_api() {
    let api = seeded_api();
    let emma = UserId::from(EMMA_USER_ID);
    let posts = ok_data(api.get_posts_by_creator(&UserId::from(SOPHIA_USER_ID)).await);
    let target = posts[0].post.id.clone();

    let records_before = ok_data(api.get_comments(&target).await).len();
    let count_before = posts[0].post.comment_count as usize;
    assert_eq!(records_before, count_before);

    ok_data(api.add_comment(&target, &emma, "First!").await);
    ok_data(api.add_comment(&target, &emma, "Second!").await);

    let records_after = ok_data(api.get_comments(&target).await).len();
    let count_after = ok_data(api.get_post(&target).await).post.comment_count as usize;
    assert_eq!(records_after, records_before + 2);
    assert_eq!(count_after, records_after);
}

#[tokio::test]
async fn test_comment_views_join_their_author() {
    let api = seeded_api();
    let posts = ok_data(api.get_posts_by_creator(&UserId::from(SOPHIA_USER_ID)).await);
    let comments = ok_data(api.get_comments(&posts[0].post.id).await);
    assert!(!comments.is_empty());
    for view in comments {
        assert_eq!(view.user.id, view.comment.user_id);
    }
}

#[tokio::test]
async fn test_deleting_someone_elses_post_is_unauthorized() {
    let api = seeded_api();
    let posts = ok_data(api.get_posts_by_creator(&UserId::from(SOPHIA_USER_ID)).await);
    let response = api
        .delete_post(&posts[0].post.id, &UserId::from(EMMA_USER_ID))
        .await;
    assert_eq!(response.error.as_deref(), Some("Unauthorized"));

    // The post is still there
    assert!(api.get_post(&posts[0].post.id).await.success);
}
