//! Subscription operations and the subscriber-count aggregate.

use crate::types::user::RoleProfile;
use crate::types::{Subscription, SubscriptionId, SubscriptionStatus, UserId};

use super::Store;

impl Store {
    /// Look up a subscription by ID.
    #[must_use]
    pub fn subscription(&self, id: &SubscriptionId) -> Option<Subscription> {
        self.subscriptions.get(id).cloned()
    }

    /// All subscriptions on a creator, in creation order.
    #[must_use]
    pub fn subscriptions_by_creator(&self, creator_id: &UserId) -> Vec<Subscription> {
        self.subscriptions_by_creator
            .get(creator_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| self.subscriptions.get(id))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// All subscriptions held by a fan, in creation order.
    #[must_use]
    pub fn subscriptions_by_fan(&self, fan_id: &UserId) -> Vec<Subscription> {
        self.subscriptions_by_fan
            .get(fan_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| self.subscriptions.get(id))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether `fan_id` currently holds an *active* subscription to
    /// `creator_id`. Cancelled records don't count.
    #[must_use]
    pub fn is_subscribed(&self, fan_id: &UserId, creator_id: &UserId) -> bool {
        self.subscriptions_by_fan(fan_id)
            .iter()
            .any(|sub| sub.creator_id == *creator_id && sub.is_active())
    }

    /// Insert a subscription and everything hanging off it: both indexes,
    /// the fan's subscription list, and the creator's subscriber count.
    pub fn insert_subscription(&mut self, subscription: Subscription) {
        let id = subscription.id.clone();
        let fan_id = subscription.fan_id.clone();
        let creator_id = subscription.creator_id.clone();
        if self.subscriptions.insert(id.clone(), subscription).is_some() {
            return;
        }

        self.subscriptions_by_creator
            .entry(creator_id.clone())
            .or_default()
            .push(id.clone());
        self.subscriptions_by_fan
            .entry(fan_id.clone())
            .or_default()
            .push(id);

        if let Some(fan) = self.users.get_mut(&fan_id) {
            if let RoleProfile::Fan { subscriptions, .. } = &mut fan.profile {
                subscriptions.push(creator_id.clone());
            }
        }
        if let Some(creator) = self.users.get_mut(&creator_id) {
            if let RoleProfile::Creator {
                subscriber_count, ..
            } = &mut creator.profile
            {
                *subscriber_count += 1;
            }
        }
    }

    /// Move an active subscription to `Cancelled` and reverse the fan-list
    /// and subscriber-count effects of [`insert_subscription`]. The record
    /// itself is kept; cancellation is terminal, not deletion.
    ///
    /// A record that is already cancelled (or expired) is returned
    /// unchanged so repeated cancels cannot drain the aggregates.
    pub fn cancel_subscription(&mut self, id: &SubscriptionId) -> Option<Subscription> {
        let subscription = self.subscriptions.get_mut(id)?;
        if !subscription.is_active() {
            return Some(subscription.clone());
        }
        subscription.status = SubscriptionStatus::Cancelled;
        let cancelled = subscription.clone();

        if let Some(fan) = self.users.get_mut(&cancelled.fan_id) {
            if let RoleProfile::Fan { subscriptions, .. } = &mut fan.profile {
                subscriptions.retain(|creator| creator != &cancelled.creator_id);
            }
        }
        if let Some(creator) = self.users.get_mut(&cancelled.creator_id) {
            if let RoleProfile::Creator {
                subscriber_count, ..
            } = &mut creator.profile
            {
                *subscriber_count = subscriber_count.saturating_sub(1);
            }
        }

        Some(cancelled)
    }
}
