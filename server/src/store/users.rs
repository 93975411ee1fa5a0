//! User operations.

use crate::types::{User, UserId, UserPatch, UserRole};

use super::Store;

impl Store {
    /// Look up a user by ID.
    #[must_use]
    pub fn user(&self, id: &UserId) -> Option<User> {
        self.users.get(id).cloned()
    }

    /// Look up a user by email address.
    #[must_use]
    pub fn user_by_email(&self, email: &str) -> Option<User> {
        self.user_order
            .iter()
            .filter_map(|id| self.users.get(id))
            .find(|user| user.email == email)
            .cloned()
    }

    /// Look up a user by username.
    #[must_use]
    pub fn user_by_username(&self, username: &str) -> Option<User> {
        self.user_order
            .iter()
            .filter_map(|id| self.users.get(id))
            .find(|user| user.username == username)
            .cloned()
    }

    /// All users, in insertion order.
    #[must_use]
    pub fn users(&self) -> Vec<User> {
        self.user_order
            .iter()
            .filter_map(|id| self.users.get(id))
            .cloned()
            .collect()
    }

    /// All creator accounts, in insertion order.
    #[must_use]
    pub fn creators(&self) -> Vec<User> {
        self.user_order
            .iter()
            .filter_map(|id| self.users.get(id))
            .filter(|user| user.role() == UserRole::Creator)
            .cloned()
            .collect()
    }

    /// Insert a user. Re-inserting an existing ID replaces the record.
    pub fn insert_user(&mut self, user: User) {
        if self.users.insert(user.id.clone(), user.clone()).is_none() {
            self.user_order.push(user.id);
        }
    }

    /// Merge `patch` over the stored user. `None` when the ID is unknown.
    pub fn update_user(&mut self, id: &UserId, patch: UserPatch) -> Option<User> {
        let user = self.users.get_mut(id)?;
        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(username) = patch.username {
            user.username = username;
        }
        if let Some(display_name) = patch.display_name {
            user.display_name = display_name;
        }
        if let Some(avatar) = patch.avatar {
            user.avatar = avatar;
        }
        if let Some(bio) = patch.bio {
            user.bio = bio;
        }
        if let Some(tier) = patch.subscription_tier {
            user.subscription_tier = tier;
        }
        if let Some(is_verified) = patch.is_verified {
            user.is_verified = is_verified;
        }
        Some(user.clone())
    }

    /// Remove a user record. Returns whether anything was removed.
    ///
    /// Entities that reference the user (posts, subscriptions, …) are
    /// left in place; lookups against them simply stop resolving.
    pub fn delete_user(&mut self, id: &UserId) -> bool {
        if self.users.remove(id).is_some() {
            self.user_order.retain(|existing| existing != id);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{test_creator, test_fan};
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut store = Store::new();
        store.insert_user(test_creator("c1"));

        assert!(store.user(&UserId::from("c1")).is_some());
        assert!(store.user(&UserId::from("missing")).is_none());
        assert!(store.user_by_email("c1@example.com").is_some());
        assert!(store.user_by_username("c1").is_some());
    }

    #[test]
    fn test_users_keep_insertion_order() {
        let mut store = Store::new();
        for id in ["b", "a", "c"] {
            store.insert_user(test_fan(id));
        }
        let ids: Vec<String> = store.users().into_iter().map(|u| u.id.0).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[test]
    fn test_creators_filters_by_role() {
        let mut store = Store::new();
        store.insert_user(test_creator("c1"));
        store.insert_user(test_fan("f1"));
        store.insert_user(test_creator("c2"));

        let creators: Vec<String> = store.creators().into_iter().map(|u| u.id.0).collect();
        assert_eq!(creators, ["c1", "c2"]);
    }

    #[test]
    fn test_update_merges_patch() {
        let mut store = Store::new();
        store.insert_user(test_fan("f1"));

        let updated = store
            .update_user(
                &UserId::from("f1"),
                UserPatch {
                    bio: Some("new bio".to_string()),
                    ..UserPatch::default()
                },
            )
            .unwrap();
        assert_eq!(updated.bio, "new bio");
        // Untouched fields survive
        assert_eq!(updated.username, "f1");
    }

    #[test]
    fn test_update_missing_user_is_none() {
        let mut store = Store::new();
        assert!(
            store
                .update_user(&UserId::from("ghost"), UserPatch::default())
                .is_none()
        );
    }

    #[test]
    fn test_reinsert_does_not_duplicate_order() {
        let mut store = Store::new();
        store.insert_user(test_fan("f1"));
        store.insert_user(test_fan("f1"));
        assert_eq!(store.users().len(), 1);
    }

    #[test]
    fn test_delete_removes_from_listing() {
        let mut store = Store::new();
        store.insert_user(test_fan("f1"));
        assert!(store.delete_user(&UserId::from("f1")));
        assert!(!store.delete_user(&UserId::from("f1")));
        assert!(store.users().is_empty());
    }
}
