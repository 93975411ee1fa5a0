//! Notification operations.

use crate::types::{Notification, NotificationId, UserId};

use super::Store;

impl Store {
    /// Notifications addressed to a user, newest first.
    #[must_use]
    pub fn notifications_by_user(&self, user_id: &UserId) -> Vec<Notification> {
        let mut notifications: Vec<Notification> = self
            .notification_order
            .iter()
            .filter_map(|id| self.notifications.get(id))
            .filter(|note| note.user_id == *user_id)
            .cloned()
            .collect();
        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        notifications
    }

    /// Insert a notification.
    pub fn insert_notification(&mut self, notification: Notification) {
        let id = notification.id.clone();
        if self.notifications.insert(id.clone(), notification).is_none() {
            self.notification_order.push(id);
        }
    }

    /// Mark one notification read. `None` when the ID is unknown.
    pub fn mark_notification_read(&mut self, id: &NotificationId) -> Option<Notification> {
        let notification = self.notifications.get_mut(id)?;
        notification.is_read = true;
        Some(notification.clone())
    }

    /// Mark everything addressed to `user_id` read.
    pub fn mark_all_notifications_read(&mut self, user_id: &UserId) {
        for notification in self.notifications.values_mut() {
            if notification.user_id == *user_id {
                notification.is_read = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NotificationKind, Timestamp};

    fn note(id: &str, user: &str, at: u64) -> Notification {
        Notification {
            id: NotificationId::from(id),
            user_id: UserId::from(user),
            kind: NotificationKind::NewLike,
            title: "New Like".to_string(),
            message: "Someone liked your post".to_string(),
            is_read: false,
            created_at: Timestamp(at),
        }
    }

    #[test]
    fn test_listing_is_per_user_newest_first() {
        let mut store = Store::new();
        store.insert_notification(note("n1", "u1", 100));
        store.insert_notification(note("n2", "u1", 300));
        store.insert_notification(note("other", "u2", 200));

        let ids: Vec<String> = store
            .notifications_by_user(&UserId::from("u1"))
            .into_iter()
            .map(|n| n.id.0)
            .collect();
        assert_eq!(ids, ["n2", "n1"]);
    }

    #[test]
    fn test_mark_single_read() {
        let mut store = Store::new();
        store.insert_notification(note("n1", "u1", 100));

        let marked = store.mark_notification_read(&NotificationId::from("n1")).unwrap();
        assert!(marked.is_read);
        assert!(store.mark_notification_read(&NotificationId::from("nope")).is_none());
    }

    #[test]
    fn test_mark_all_read_scopes_to_user() {
        let mut store = Store::new();
        store.insert_notification(note("n1", "u1", 100));
        store.insert_notification(note("n2", "u1", 200));
        store.insert_notification(note("other", "u2", 300));

        store.mark_all_notifications_read(&UserId::from("u1"));

        assert!(store
            .notifications_by_user(&UserId::from("u1"))
            .iter()
            .all(|n| n.is_read));
        assert!(!store.notifications_by_user(&UserId::from("u2"))[0].is_read);
    }
}
