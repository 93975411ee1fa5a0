//! Post operations: CRUD, the feed query, and like toggling.

use crate::types::{Post, PostId, PostPatch, PostVisibility, UserId};

use super::Store;

impl Store {
    /// Look up a post by ID.
    #[must_use]
    pub fn post(&self, id: &PostId) -> Option<Post> {
        self.posts.get(id).cloned()
    }

    /// All posts, newest first (ties keep insertion order).
    #[must_use]
    pub fn posts(&self) -> Vec<Post> {
        let mut posts: Vec<Post> = self
            .post_order
            .iter()
            .filter_map(|id| self.posts.get(id))
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts
    }

    /// A creator's posts, newest first.
    #[must_use]
    pub fn posts_by_creator(&self, creator_id: &UserId) -> Vec<Post> {
        let Some(ids) = self.posts_by_creator.get(creator_id) else {
            return Vec::new();
        };
        let mut posts: Vec<Post> = ids.iter().filter_map(|id| self.posts.get(id)).cloned().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts
    }

    /// The feed for `user_id`: public posts, posts from creators on the
    /// user's subscription list, and the user's own posts, newest first,
    /// truncated to `limit`. Empty when the user is unknown.
    ///
    /// The subscription check is existence-only: which paid tier the
    /// subscription was bought at is never consulted, so a `subscribers`
    /// post and an `icon-only` post are equally visible to any subscriber
    /// of that creator. Carried over from the production behavior as-is.
    #[must_use]
    pub fn get_feed(&self, user_id: &UserId, limit: usize) -> Vec<Post> {
        let Some(user) = self.users.get(user_id) else {
            return Vec::new();
        };
        let subscribed = user.subscriptions();

        self.posts()
            .into_iter()
            .filter(|post| {
                post.visibility == PostVisibility::Public
                    || subscribed.contains(&post.creator_id)
                    || post.creator_id == *user_id
            })
            .take(limit)
            .collect()
    }

    /// Insert a post and index it under its creator (newest first).
    pub fn insert_post(&mut self, post: Post) {
        let id = post.id.clone();
        let creator_id = post.creator_id.clone();
        if self.posts.insert(id.clone(), post).is_none() {
            self.post_order.push(id.clone());
            self.posts_by_creator
                .entry(creator_id)
                .or_default()
                .insert(0, id);
        }
    }

    /// Merge `patch` over the stored post. `None` when the ID is unknown.
    pub fn update_post(&mut self, id: &PostId, patch: PostPatch) -> Option<Post> {
        let post = self.posts.get_mut(id)?;
        if let Some(content) = patch.content {
            post.content = content;
        }
        if let Some(visibility) = patch.visibility {
            post.visibility = visibility;
        }
        if let Some(is_pinned) = patch.is_pinned {
            post.is_pinned = is_pinned;
        }
        Some(post.clone())
    }

    /// Remove a post and its index entry. Comments on the post are left
    /// behind and become unreachable through the post.
    pub fn delete_post(&mut self, id: &PostId) -> bool {
        let Some(post) = self.posts.remove(id) else {
            return false;
        };
        self.post_order.retain(|existing| existing != id);
        if let Some(ids) = self.posts_by_creator.get_mut(&post.creator_id) {
            ids.retain(|existing| existing != id);
        }
        true
    }

    /// Flip `is_liked` and move `like_count` one step in the same
    /// direction. `None` when the post does not exist.
    pub fn toggle_like(&mut self, id: &PostId) -> Option<Post> {
        let post = self.posts.get_mut(id)?;
        if post.is_liked {
            post.is_liked = false;
            post.like_count = post.like_count.saturating_sub(1);
        } else {
            post.is_liked = true;
            post.like_count += 1;
        }
        Some(post.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{test_creator, test_fan};
    use super::*;
    use crate::types::user::RoleProfile;
    use crate::types::{Timestamp, User};

    fn post_at(id: &str, creator: &str, at: u64, visibility: PostVisibility) -> Post {
        Post {
            id: PostId::from(id),
            creator_id: UserId::from(creator),
            content: String::new(),
            media: Vec::new(),
            visibility,
            like_count: 0,
            comment_count: 0,
            is_liked: false,
            is_pinned: false,
            created_at: Timestamp(at),
            updated_at: Timestamp(at),
        }
    }

    fn fan_subscribed_to(id: &str, creators: &[&str]) -> User {
        User {
            profile: RoleProfile::Fan {
                following_count: 0,
                subscriptions: creators.iter().map(|c| UserId::from(*c)).collect(),
            },
            ..test_fan(id)
        }
    }

    #[test]
    fn test_posts_sorted_newest_first_with_stable_ties() {
        let mut store = Store::new();
        store.insert_post(post_at("p1", "c1", 100, PostVisibility::Public));
        store.insert_post(post_at("p2", "c1", 300, PostVisibility::Public));
        store.insert_post(post_at("p3", "c1", 300, PostVisibility::Public));
        store.insert_post(post_at("p4", "c1", 200, PostVisibility::Public));

        let ids: Vec<String> = store.posts().into_iter().map(|p| p.id.0).collect();
        // p2 before p3: equal timestamps keep insertion order
        assert_eq!(ids, ["p2", "p3", "p4", "p1"]);
    }

    #[test]
    fn test_feed_includes_public_subscribed_and_own() {
        let mut store = Store::new();
        store.insert_user(test_creator("c1"));
        store.insert_user(test_creator("c2"));
        store.insert_user(fan_subscribed_to("f1", &["c1"]));

        store.insert_post(post_at("pub", "c2", 400, PostVisibility::Public));
        store.insert_post(post_at("sub", "c1", 300, PostVisibility::Subscribers));
        store.insert_post(post_at("hidden", "c2", 200, PostVisibility::Subscribers));

        let ids: Vec<String> = store
            .get_feed(&UserId::from("f1"), 20)
            .into_iter()
            .map(|p| p.id.0)
            .collect();
        assert_eq!(ids, ["pub", "sub"]);
    }

    #[test]
    fn test_feed_ignores_purchased_tier() {
        // A plain subscriber sees icon-only posts from the creator they
        // subscribe to: the filter checks existence, not tier.
        let mut store = Store::new();
        store.insert_user(test_creator("c1"));
        store.insert_user(fan_subscribed_to("f1", &["c1"]));
        store.insert_post(post_at("icon", "c1", 100, PostVisibility::IconOnly));

        let feed = store.get_feed(&UserId::from("f1"), 20);
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].id, PostId::from("icon"));
    }

    #[test]
    fn test_feed_always_contains_own_posts() {
        let mut store = Store::new();
        store.insert_user(test_creator("c1"));
        store.insert_post(post_at("own", "c1", 100, PostVisibility::IconOnly));

        let feed = store.get_feed(&UserId::from("c1"), 20);
        assert_eq!(feed.len(), 1);
    }

    #[test]
    fn test_feed_unknown_user_is_empty() {
        let mut store = Store::new();
        store.insert_post(post_at("p", "c", 1, PostVisibility::Public));
        assert!(store.get_feed(&UserId::from("ghost"), 20).is_empty());
    }

    #[test]
    fn test_feed_truncates_to_limit() {
        let mut store = Store::new();
        store.insert_user(test_fan("f1"));
        for i in 0..10 {
            store.insert_post(post_at(&format!("p{i}"), "c", i, PostVisibility::Public));
        }
        assert_eq!(store.get_feed(&UserId::from("f1"), 3).len(), 3);
    }

    #[test]
    fn test_toggle_like_round_trip() {
        let mut store = Store::new();
        store.insert_post(post_at("p1", "c1", 1, PostVisibility::Public));

        let liked = store.toggle_like(&PostId::from("p1")).unwrap();
        assert!(liked.is_liked);
        assert_eq!(liked.like_count, 1);

        let unliked = store.toggle_like(&PostId::from("p1")).unwrap();
        assert!(!unliked.is_liked);
        assert_eq!(unliked.like_count, 0);
    }

    #[test]
    fn test_toggle_like_missing_post() {
        let mut store = Store::new();
        assert!(store.toggle_like(&PostId::from("nope")).is_none());
    }

    #[test]
    fn test_delete_post_cleans_creator_index() {
        let mut store = Store::new();
        store.insert_post(post_at("p1", "c1", 1, PostVisibility::Public));
        store.insert_post(post_at("p2", "c1", 2, PostVisibility::Public));

        assert!(store.delete_post(&PostId::from("p1")));
        let remaining: Vec<String> = store
            .posts_by_creator(&UserId::from("c1"))
            .into_iter()
            .map(|p| p.id.0)
            .collect();
        assert_eq!(remaining, ["p2"]);
    }

    #[test]
    fn test_creator_index_is_newest_first() {
        let mut store = Store::new();
        store.insert_post(post_at("old", "c1", 100, PostVisibility::Public));
        store.insert_post(post_at("new", "c1", 200, PostVisibility::Public));

        let ids: Vec<String> = store
            .posts_by_creator(&UserId::from("c1"))
            .into_iter()
            .map(|p| p.id.0)
            .collect();
        assert_eq!(ids, ["new", "old"]);
    }
}
