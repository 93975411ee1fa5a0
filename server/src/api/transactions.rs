//! Transaction history and tipping.

use crate::factory::{NotificationOverrides, TransactionOverrides};
use crate::types::{
    ApiResponse, NotificationKind, TipData, Transaction, TransactionKind, TransactionStatus,
    UserId,
};

use super::{ERR_INTERNAL, MockApi};

impl MockApi {
    /// All transactions the user took part in, newest first.
    pub async fn get_transactions(&self, user_id: &UserId) -> ApiResponse<Vec<Transaction>> {
        if let Err(response) = self.simulate_network().await {
            return response;
        }
        let Ok(store) = self.store.read() else {
            return ApiResponse::error(ERR_INTERNAL);
        };
        ApiResponse::ok(store.transactions_by_user(user_id))
    }

    /// Send a tip from `fan_id` to a creator.
    ///
    /// The transaction completes immediately, crediting the creator's
    /// earnings, and the creator is notified.
    pub async fn send_tip(&self, fan_id: &UserId, data: &TipData) -> ApiResponse<Transaction> {
        if let Err(response) = self.simulate_network().await {
            return response;
        }
        let Ok(mut store) = self.store.write() else {
            return ApiResponse::error(ERR_INTERNAL);
        };
        let Some(fan) = store.user(fan_id) else {
            return ApiResponse::error("User not found");
        };
        if store.user(&data.creator_id).is_none() {
            return ApiResponse::error("User not found");
        }

        let now = store.now();
        let Ok(mut factory) = self.factory.lock() else {
            return ApiResponse::error(ERR_INTERNAL);
        };
        let transaction = factory.create_transaction(
            fan_id,
            &data.creator_id,
            TransactionOverrides {
                kind: Some(TransactionKind::Tip),
                amount: Some(data.amount),
                status: Some(TransactionStatus::Completed),
                description: Some(
                    data.message
                        .clone()
                        .unwrap_or_else(|| "Tip from fan".to_string()),
                ),
                created_at: Some(now),
            },
        );
        let notification = factory.create_notification(
            &data.creator_id,
            NotificationOverrides {
                kind: Some(NotificationKind::NewTip),
                message: Some(format!(
                    "You received a ${} tip from {}!",
                    data.amount, fan.display_name
                )),
                is_read: Some(false),
                created_at: Some(now),
                ..NotificationOverrides::default()
            },
        );
        drop(factory);

        store.insert_transaction(transaction.clone());
        store.insert_notification(notification);
        tracing::debug!(fan = %fan_id, creator = %data.creator_id, amount = data.amount, "tip sent");

        ApiResponse::ok_with_message(transaction, "Tip sent successfully")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests_support::seeded_api;
    use crate::fixtures::{EMMA_USER_ID, SOPHIA_USER_ID};

    #[tokio::test]
    async fn test_tip_credits_creator_earnings_exactly() {
        let api = seeded_api();
        let emma = UserId::from(EMMA_USER_ID);
        let sophia = UserId::from(SOPHIA_USER_ID);

        let before = api
            .get_user(&sophia)
            .await
            .data
            .unwrap()
            .total_earnings()
            .unwrap();

        let response = api
            .send_tip(
                &emma,
                &TipData {
                    creator_id: sophia.clone(),
                    amount: 50.0,
                    message: None,
                },
            )
            .await;
        let transaction = response.data.unwrap();
        assert_eq!(transaction.status, TransactionStatus::Completed);
        assert_eq!(transaction.amount, 50.0);

        let after = api
            .get_user(&sophia)
            .await
            .data
            .unwrap()
            .total_earnings()
            .unwrap();
        assert!((after - before - 50.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_tip_message_becomes_description() {
        let api = seeded_api();
        let response = api
            .send_tip(
                &UserId::from(EMMA_USER_ID),
                &TipData {
                    creator_id: UserId::from(SOPHIA_USER_ID),
                    amount: 10.0,
                    message: Some("For the rooftop shots!".to_string()),
                },
            )
            .await;
        assert_eq!(response.data.unwrap().description, "For the rooftop shots!");
    }

    #[tokio::test]
    async fn test_tip_notifies_creator() {
        let api = seeded_api();
        let sophia = UserId::from(SOPHIA_USER_ID);
        api.send_tip(
            &UserId::from(EMMA_USER_ID),
            &TipData {
                creator_id: sophia.clone(),
                amount: 50.0,
                message: None,
            },
        )
        .await;

        let notifications = api.get_notifications(&sophia).await.data.unwrap();
        assert!(notifications.iter().any(|n| {
            n.kind == NotificationKind::NewTip
                && n.message == "You received a $50 tip from Emma Rodriguez!"
        }));
    }

    #[tokio::test]
    async fn test_tip_to_unknown_creator_fails() {
        let api = seeded_api();
        let response = api
            .send_tip(
                &UserId::from(EMMA_USER_ID),
                &TipData {
                    creator_id: UserId::from("ghost"),
                    amount: 5.0,
                    message: None,
                },
            )
            .await;
        assert_eq!(response.error.as_deref(), Some("User not found"));
    }

    #[tokio::test]
    async fn test_history_lists_seeded_transactions() {
        let api = seeded_api();
        let history = api
            .get_transactions(&UserId::from(EMMA_USER_ID))
            .await
            .data
            .unwrap();
        // Emma's scripted payments plus her share of the history loop
        assert!(history.len() >= 3);
        let newest_first = history.windows(2).all(|w| w[0].created_at >= w[1].created_at);
        assert!(newest_first);
    }
}
