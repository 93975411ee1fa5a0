//! Subscription operations.

use crate::factory::{NotificationOverrides, SubscriptionOverrides, TransactionOverrides};
use crate::types::{
    ApiResponse, NotificationKind, SubscriptionId, SubscriptionStatus, SubscriptionTier,
    SubscriptionView, TransactionKind, TransactionStatus, UserId,
};

use super::{ERR_INTERNAL, MockApi, subscription_view};

impl MockApi {
    /// Subscriptions held by `user_id` as a fan.
    pub async fn get_my_subscriptions(&self, user_id: &UserId) -> ApiResponse<Vec<SubscriptionView>> {
        if let Err(response) = self.simulate_network().await {
            return response;
        }
        let Ok(store) = self.store.read() else {
            return ApiResponse::error(ERR_INTERNAL);
        };
        let subscriptions = store
            .subscriptions_by_fan(user_id)
            .into_iter()
            .filter_map(|sub| subscription_view(&store, sub))
            .collect();
        ApiResponse::ok(subscriptions)
    }

    /// Subscriptions on `creator_id`'s side of the ledger.
    pub async fn get_subscribers(&self, creator_id: &UserId) -> ApiResponse<Vec<SubscriptionView>> {
        if let Err(response) = self.simulate_network().await {
            return response;
        }
        let Ok(store) = self.store.read() else {
            return ApiResponse::error(ERR_INTERNAL);
        };
        let subscriptions = store
            .subscriptions_by_creator(creator_id)
            .into_iter()
            .filter_map(|sub| subscription_view(&store, sub))
            .collect();
        ApiResponse::ok(subscriptions)
    }

    /// Subscribe `fan_id` to `creator_id` at a paid tier.
    ///
    /// At most one active subscription may exist per (fan, creator) pair;
    /// a duplicate attempt fails without touching any aggregate. Success
    /// also records the payment transaction and notifies the creator.
    pub async fn subscribe(
        &self,
        fan_id: &UserId,
        creator_id: &UserId,
        tier: SubscriptionTier,
    ) -> ApiResponse<SubscriptionView> {
        if let Err(response) = self.simulate_network().await {
            return response;
        }
        if tier == SubscriptionTier::Free {
            return ApiResponse::error("Invalid subscription tier");
        }

        let Ok(mut store) = self.store.write() else {
            return ApiResponse::error(ERR_INTERNAL);
        };
        let Some(fan) = store.user(fan_id) else {
            return ApiResponse::error("User not found");
        };
        if store.user(creator_id).is_none() {
            return ApiResponse::error("User not found");
        }
        if store.is_subscribed(fan_id, creator_id) {
            return ApiResponse::error("Already subscribed");
        }

        let amount = tier.monthly_price();
        let now = store.now();
        let Ok(mut factory) = self.factory.lock() else {
            return ApiResponse::error(ERR_INTERNAL);
        };
        let subscription = factory.create_subscription(
            fan_id,
            creator_id,
            SubscriptionOverrides {
                tier: Some(tier),
                amount: Some(amount),
                status: Some(SubscriptionStatus::Active),
                start_date: Some(now),
                auto_renew: Some(true),
                ..SubscriptionOverrides::default()
            },
        );
        let payment = factory.create_transaction(
            fan_id,
            creator_id,
            TransactionOverrides {
                kind: Some(TransactionKind::Subscription),
                amount: Some(amount),
                status: Some(TransactionStatus::Completed),
                description: Some(format!("{tier} tier subscription")),
                created_at: Some(now),
            },
        );
        let notification = factory.create_notification(
            creator_id,
            NotificationOverrides {
                kind: Some(NotificationKind::NewSubscriber),
                message: Some(format!(
                    "{} just subscribed to your {tier} tier!",
                    fan.display_name
                )),
                is_read: Some(false),
                created_at: Some(now),
                ..NotificationOverrides::default()
            },
        );
        drop(factory);

        store.insert_subscription(subscription.clone());
        store.insert_transaction(payment);
        store.insert_notification(notification);
        tracing::debug!(fan = %fan_id, creator = %creator_id, %tier, "new subscription");

        subscription_view(&store, subscription).map_or_else(
            || ApiResponse::error(ERR_INTERNAL),
            |view| ApiResponse::ok_with_message(view, "Subscribed successfully"),
        )
    }

    /// Cancel a subscription. The record survives with `Cancelled`
    /// status; re-subscribing later creates a new record.
    pub async fn cancel_subscription(
        &self,
        subscription_id: &SubscriptionId,
    ) -> ApiResponse<SubscriptionView> {
        if let Err(response) = self.simulate_network().await {
            return response;
        }
        let Ok(mut store) = self.store.write() else {
            return ApiResponse::error(ERR_INTERNAL);
        };
        store
            .cancel_subscription(subscription_id)
            .and_then(|sub| subscription_view(&store, sub))
            .map_or_else(
                || ApiResponse::error("Subscription not found"),
                |view| ApiResponse::ok_with_message(view, "Subscription cancelled"),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests_support::seeded_api;
    use crate::fixtures::{EMMA_USER_ID, SOPHIA_USER_ID};

    #[tokio::test]
    async fn test_subscribe_emma_to_sophia_icon() {
        let api = seeded_api();
        let emma = UserId::from(EMMA_USER_ID);
        let sophia = UserId::from(SOPHIA_USER_ID);

        let before = api.get_user(&sophia).await.data.unwrap();
        let response = api.subscribe(&emma, &sophia, SubscriptionTier::Icon).await;

        let view = response.data.unwrap();
        assert_eq!(view.subscription.amount, 29.99);
        assert_eq!(view.subscription.status, SubscriptionStatus::Active);

        let after = api.get_user(&sophia).await.data.unwrap();
        assert_eq!(
            after.subscriber_count().unwrap(),
            before.subscriber_count().unwrap() + 1
        );
    }

    #[tokio::test]
    async fn test_duplicate_subscribe_is_rejected_without_side_effects() {
        let api = seeded_api();
        let emma = UserId::from(EMMA_USER_ID);
        let sophia = UserId::from(SOPHIA_USER_ID);

        api.subscribe(&emma, &sophia, SubscriptionTier::Icon).await;
        let count_after_first = api
            .get_user(&sophia)
            .await
            .data
            .unwrap()
            .subscriber_count()
            .unwrap();

        let second = api.subscribe(&emma, &sophia, SubscriptionTier::Creator).await;
        assert_eq!(second.error.as_deref(), Some("Already subscribed"));

        let count_after_second = api
            .get_user(&sophia)
            .await
            .data
            .unwrap()
            .subscriber_count()
            .unwrap();
        assert_eq!(count_after_first, count_after_second);

        let active = api
            .get_my_subscriptions(&emma)
            .await
            .data
            .unwrap()
            .into_iter()
            .filter(|v| v.subscription.creator_id == sophia && v.subscription.is_active())
            .count();
        assert_eq!(active, 1);
    }

    #[tokio::test]
    async fn test_subscribe_records_payment_and_notification() {
        let api = seeded_api();
        let emma = UserId::from(EMMA_USER_ID);
        let sophia = UserId::from(SOPHIA_USER_ID);

        let notifications_before = api.get_notifications(&sophia).await.data.unwrap().len();
        api.subscribe(&emma, &sophia, SubscriptionTier::Icon).await;

        let transactions = api.get_transactions(&emma).await.data.unwrap();
        assert!(transactions.iter().any(|t| {
            t.kind == TransactionKind::Subscription
                && t.amount == 29.99
                && t.description == "icon tier subscription"
        }));

        let notifications = api.get_notifications(&sophia).await.data.unwrap();
        assert_eq!(notifications.len(), notifications_before + 1);
        assert!(notifications.iter().any(|n| {
            n.kind == NotificationKind::NewSubscriber
                && n.message == "Emma Rodriguez just subscribed to your icon tier!"
        }));
    }

    #[tokio::test]
    async fn test_cancel_then_resubscribe() {
        let api = seeded_api();
        let emma = UserId::from(EMMA_USER_ID);
        let sophia = UserId::from(SOPHIA_USER_ID);

        let sub = api
            .subscribe(&emma, &sophia, SubscriptionTier::Icon)
            .await
            .data
            .unwrap()
            .subscription;

        let cancelled = api.cancel_subscription(&sub.id).await.data.unwrap();
        assert_eq!(cancelled.subscription.status, SubscriptionStatus::Cancelled);

        // Cancellation is terminal for the record, but the pair may
        // subscribe again with a fresh record.
        let again = api.subscribe(&emma, &sophia, SubscriptionTier::Creator).await;
        assert!(again.success);
        assert_ne!(again.data.unwrap().subscription.id, sub.id);
    }

    #[tokio::test]
    async fn test_free_tier_is_not_subscribable() {
        let api = seeded_api();
        let response = api
            .subscribe(
                &UserId::from(EMMA_USER_ID),
                &UserId::from(SOPHIA_USER_ID),
                SubscriptionTier::Free,
            )
            .await;
        assert_eq!(response.error.as_deref(), Some("Invalid subscription tier"));
    }
}
