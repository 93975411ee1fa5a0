//! Transaction and subscription generation.

use crate::types::{
    DAY_MS, Subscription, SubscriptionId, SubscriptionStatus, SubscriptionTier, Timestamp,
    Transaction, TransactionId, TransactionKind, TransactionStatus, UserId, YEAR_MS,
};

use super::Factory;

const KINDS: [TransactionKind; 3] = [
    TransactionKind::Subscription,
    TransactionKind::Tip,
    TransactionKind::Payout,
];

// Three completed draws for every pending one.
const STATUSES: [TransactionStatus; 4] = [
    TransactionStatus::Completed,
    TransactionStatus::Completed,
    TransactionStatus::Completed,
    TransactionStatus::Pending,
];

const PAID_TIERS: [SubscriptionTier; 2] = [SubscriptionTier::Creator, SubscriptionTier::Icon];

// Three active draws for every cancelled one.
const SUB_STATUSES: [SubscriptionStatus; 4] = [
    SubscriptionStatus::Active,
    SubscriptionStatus::Active,
    SubscriptionStatus::Active,
    SubscriptionStatus::Cancelled,
];

/// Overrides for [`Factory::create_transaction`].
#[derive(Debug, Clone, Default)]
pub struct TransactionOverrides {
    pub kind: Option<TransactionKind>,
    pub amount: Option<f64>,
    pub status: Option<TransactionStatus>,
    pub description: Option<String>,
    pub created_at: Option<Timestamp>,
}

/// Overrides for [`Factory::create_subscription`].
#[derive(Debug, Clone, Default)]
pub struct SubscriptionOverrides {
    pub id: Option<SubscriptionId>,
    pub tier: Option<SubscriptionTier>,
    pub amount: Option<f64>,
    pub status: Option<SubscriptionStatus>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub auto_renew: Option<bool>,
}

impl Factory {
    /// Generate a transfer from `from_user_id` to `to_user_id`.
    pub fn create_transaction(
        &mut self,
        from_user_id: &UserId,
        to_user_id: &UserId,
        overrides: TransactionOverrides,
    ) -> Transaction {
        let kind = overrides.kind.unwrap_or_else(|| *self.pick(&KINDS));
        let (generated_amount, generated_description) = match kind {
            TransactionKind::Subscription => (9.99, "Monthly subscription".to_string()),
            TransactionKind::Tip => (self.amount(5.0, 500.0), "Tip from fan".to_string()),
            TransactionKind::Payout => {
                (self.amount(100.0, 5_000.0), "Payout to bank account".to_string())
            }
        };

        Transaction {
            id: TransactionId(self.hex_id()),
            kind,
            amount: overrides.amount.unwrap_or(generated_amount),
            currency: "USD".to_string(),
            status: overrides.status.unwrap_or_else(|| *self.pick(&STATUSES)),
            from_user_id: from_user_id.clone(),
            to_user_id: to_user_id.clone(),
            description: overrides.description.unwrap_or(generated_description),
            created_at: overrides.created_at.unwrap_or_else(|| self.past(60 * DAY_MS)),
        }
    }

    /// Generate a subscription edge from `fan_id` to `creator_id`.
    pub fn create_subscription(
        &mut self,
        fan_id: &UserId,
        creator_id: &UserId,
        overrides: SubscriptionOverrides,
    ) -> Subscription {
        let tier = overrides.tier.unwrap_or_else(|| *self.pick(&PAID_TIERS));
        let status = overrides.status.unwrap_or_else(|| *self.pick(&SUB_STATUSES));

        let end_date = overrides.end_date.or_else(|| {
            matches!(status, SubscriptionStatus::Cancelled).then(|| self.future(YEAR_MS / 2))
        });
        let auto_renew = overrides.auto_renew.unwrap_or_else(|| {
            matches!(status, SubscriptionStatus::Active) && self.chance(0.8)
        });

        Subscription {
            id: overrides.id.unwrap_or_else(|| SubscriptionId(self.hex_id())),
            fan_id: fan_id.clone(),
            creator_id: creator_id.clone(),
            tier,
            amount: overrides.amount.unwrap_or_else(|| tier.monthly_price()),
            status,
            start_date: overrides.start_date.unwrap_or_else(|| self.past(YEAR_MS)),
            end_date,
            auto_renew,
        }
    }
}
