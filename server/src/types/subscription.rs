//! Fan→creator subscription edges.

use serde::{Deserialize, Serialize};

use super::ids::{SubscriptionId, UserId};
use super::time::Timestamp;
use super::user::{SubscriptionTier, User};

/// Lifecycle state of a subscription.
///
/// The only transition is `Active → Cancelled`, and it is terminal:
/// resubscribing creates a new record rather than reviving the old one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Cancelled,
    Expired,
}

/// A paid relationship between a fan and a creator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: SubscriptionId,
    pub fan_id: UserId,
    pub creator_id: UserId,
    pub tier: SubscriptionTier,
    /// Monthly amount in USD.
    pub amount: f64,
    pub status: SubscriptionStatus,
    pub start_date: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Timestamp>,
    pub auto_renew: bool,
}

impl Subscription {
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.status, SubscriptionStatus::Active)
    }
}

/// A subscription joined with both parties at query time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionView {
    #[serde(flatten)]
    pub subscription: Subscription,
    pub fan: User,
    pub creator: User,
}
