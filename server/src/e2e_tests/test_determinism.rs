//! Seeding the same seed twice must reproduce the world byte-for-byte.

use crate::e2e_tests::helpers::{api_with_seed, ok_data, world_snapshot};
use crate::fixtures::EMMA_USER_ID;
use crate::types::{CreatePostData, PostVisibility, UserId};

#[test]
fn test_same_seed_rebuilds_identical_world() {
    let first = api_with_seed(42);
    let second = api_with_seed(42);
    assert_eq!(world_snapshot(&first), world_snapshot(&second));
}

#[test]
fn test_different_seeds_build_different_worlds() {
    let first = api_with_seed(42);
    let second = api_with_seed(43);
    assert_ne!(world_snapshot(&first), world_snapshot(&second));
}

#[tokio::test]
async fn test_list_orderings_are_reproducible() {
    let first = api_with_seed(7);
    let second = api_with_seed(7);

    let emma = UserId::from(EMMA_USER_ID);
    let feed_a = ok_data(first.get_feed(&emma, 1, 50).await);
    let feed_b = ok_data(second.get_feed(&emma, 1, 50).await);

    let ids_a: Vec<_> = feed_a.data.iter().map(|p| p.post.id.clone()).collect();
    let ids_b: Vec<_> = feed_b.data.iter().map(|p| p.post.id.clone()).collect();
    assert_eq!(ids_a, ids_b);
}

#[tokio::test]
async fn test_runtime_operations_replay_identically() {
    // Two APIs with the same seed and the same call sequence mint the
    // same IDs and timestamps for handler-created entities.
    let first = api_with_seed(99);
    let second = api_with_seed(99);
    let emma = UserId::from(EMMA_USER_ID);

    let data = CreatePostData {
        content: "replayed".to_string(),
        media: Vec::new(),
        visibility: PostVisibility::Public,
    };
    let post_a = ok_data(first.create_post(&emma, data.clone()).await);
    let post_b = ok_data(second.create_post(&emma, data).await);

    assert_eq!(post_a.post.id, post_b.post.id);
    assert_eq!(post_a.post.created_at, post_b.post.created_at);
}
