//! Value transfers: subscription payments, tips, payouts.

use serde::{Deserialize, Serialize};

use super::ids::{TransactionId, UserId};
use super::time::Timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Subscription,
    Tip,
    Payout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
}

/// A directed value transfer from one user to another.
///
/// Inserting a `Completed` transaction credits the recipient's
/// `total_earnings`; other statuses leave aggregates untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub currency: String,
    pub status: TransactionStatus,
    pub from_user_id: UserId,
    pub to_user_id: UserId,
    pub description: String,
    pub created_at: Timestamp,
}

/// Payload for sending a tip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TipData {
    pub creator_id: UserId,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
