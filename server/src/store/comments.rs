//! Comment operations and the `comment_count` aggregate.

use crate::types::{Comment, CommentId, PostId};

use super::Store;

impl Store {
    /// Comments on a post, oldest first (ties keep insertion order).
    #[must_use]
    pub fn comments_by_post(&self, post_id: &PostId) -> Vec<Comment> {
        let Some(ids) = self.comments_by_post.get(post_id) else {
            return Vec::new();
        };
        let mut comments: Vec<Comment> = ids
            .iter()
            .filter_map(|id| self.comments.get(id))
            .cloned()
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        comments
    }

    /// Insert a comment: primary map, post→comments index, and the parent
    /// post's `comment_count`, all in one step.
    pub fn insert_comment(&mut self, comment: Comment) {
        let id = comment.id.clone();
        let post_id = comment.post_id.clone();
        if self.comments.insert(id.clone(), comment).is_some() {
            return;
        }
        self.comments_by_post
            .entry(post_id.clone())
            .or_default()
            .push(id);
        if let Some(post) = self.posts.get_mut(&post_id) {
            post.comment_count += 1;
        }
    }

    /// Delete a comment, reversing everything `insert_comment` did. The
    /// parent's `comment_count` never drops below zero.
    pub fn delete_comment(&mut self, id: &CommentId) -> bool {
        let Some(comment) = self.comments.remove(id) else {
            return false;
        };
        if let Some(ids) = self.comments_by_post.get_mut(&comment.post_id) {
            ids.retain(|existing| existing != id);
        }
        if let Some(post) = self.posts.get_mut(&comment.post_id) {
            post.comment_count = post.comment_count.saturating_sub(1);
        }
        true
    }
}
