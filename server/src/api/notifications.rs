//! Notification operations.

use crate::types::{ApiResponse, Notification, NotificationId, UserId};

use super::{ERR_INTERNAL, MockApi};

impl MockApi {
    /// The user's notifications, newest first.
    pub async fn get_notifications(&self, user_id: &UserId) -> ApiResponse<Vec<Notification>> {
        if let Err(response) = self.simulate_network().await {
            return response;
        }
        let Ok(store) = self.store.read() else {
            return ApiResponse::error(ERR_INTERNAL);
        };
        ApiResponse::ok(store.notifications_by_user(user_id))
    }

    /// Mark one notification read.
    pub async fn mark_notification_read(&self, id: &NotificationId) -> ApiResponse<Notification> {
        if let Err(response) = self.simulate_network().await {
            return response;
        }
        let Ok(mut store) = self.store.write() else {
            return ApiResponse::error(ERR_INTERNAL);
        };
        match store.mark_notification_read(id) {
            Some(notification) => ApiResponse::ok(notification),
            None => ApiResponse::error("Notification not found"),
        }
    }

    /// Mark every notification for `user_id` read.
    pub async fn mark_all_notifications_read(&self, user_id: &UserId) -> ApiResponse<()> {
        if let Err(response) = self.simulate_network().await {
            return response;
        }
        let Ok(mut store) = self.store.write() else {
            return ApiResponse::error(ERR_INTERNAL);
        };
        store.mark_all_notifications_read(user_id);
        ApiResponse::ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests_support::seeded_api;
    use crate::fixtures::SOPHIA_USER_ID;

    #[tokio::test]
    async fn test_sophia_has_seeded_notifications() {
        let api = seeded_api();
        let notifications = api
            .get_notifications(&UserId::from(SOPHIA_USER_ID))
            .await
            .data
            .unwrap();
        assert_eq!(notifications.len(), 4);
        assert!(notifications.iter().any(|n| !n.is_read));
    }

    #[tokio::test]
    async fn test_mark_single_then_all_read() {
        let api = seeded_api();
        let sophia = UserId::from(SOPHIA_USER_ID);

        let first = api.get_notifications(&sophia).await.data.unwrap()[0].clone();
        let marked = api.mark_notification_read(&first.id).await.data.unwrap();
        assert!(marked.is_read);

        api.mark_all_notifications_read(&sophia).await;
        let all = api.get_notifications(&sophia).await.data.unwrap();
        assert!(all.iter().all(|n| n.is_read));
    }

    #[tokio::test]
    async fn test_mark_unknown_notification_fails() {
        let api = seeded_api();
        let response = api
            .mark_notification_read(&NotificationId::from("ghost"))
            .await;
        assert_eq!(response.error.as_deref(), Some("Notification not found"));
    }
}
