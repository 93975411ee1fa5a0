//! Transaction operations and the earnings aggregate.

use crate::types::user::RoleProfile;
use crate::types::{Transaction, TransactionStatus, UserId};

use super::Store;

impl Store {
    /// Transactions where the user is either party, newest first.
    #[must_use]
    pub fn transactions_by_user(&self, user_id: &UserId) -> Vec<Transaction> {
        let mut transactions: Vec<Transaction> = self
            .transaction_order
            .iter()
            .filter_map(|id| self.transactions.get(id))
            .filter(|txn| txn.from_user_id == *user_id || txn.to_user_id == *user_id)
            .cloned()
            .collect();
        transactions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        transactions
    }

    /// Transactions received by a creator, newest first.
    #[must_use]
    pub fn transactions_by_creator(&self, creator_id: &UserId) -> Vec<Transaction> {
        let mut transactions: Vec<Transaction> = self
            .transaction_order
            .iter()
            .filter_map(|id| self.transactions.get(id))
            .filter(|txn| txn.to_user_id == *creator_id)
            .cloned()
            .collect();
        transactions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        transactions
    }

    /// Insert a transaction. A `Completed` transfer credits the
    /// recipient's `total_earnings` in the same step; pending, failed,
    /// and refunded transfers leave aggregates untouched.
    pub fn insert_transaction(&mut self, transaction: Transaction) {
        let id = transaction.id.clone();
        let to_user_id = transaction.to_user_id.clone();
        let credit = matches!(transaction.status, TransactionStatus::Completed)
            .then_some(transaction.amount);

        if self.transactions.insert(id.clone(), transaction).is_some() {
            return;
        }
        self.transaction_order.push(id);

        if let Some(amount) = credit {
            if let Some(recipient) = self.users.get_mut(&to_user_id) {
                if let RoleProfile::Creator { total_earnings, .. } = &mut recipient.profile {
                    *total_earnings += amount;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{test_creator, test_fan};
    use super::*;
    use crate::types::{Timestamp, TransactionId, TransactionKind};

    fn txn(id: &str, from: &str, to: &str, amount: f64, status: TransactionStatus, at: u64) -> Transaction {
        Transaction {
            id: TransactionId::from(id),
            kind: TransactionKind::Tip,
            amount,
            currency: "USD".to_string(),
            status,
            from_user_id: UserId::from(from),
            to_user_id: UserId::from(to),
            description: String::new(),
            created_at: Timestamp(at),
        }
    }

    #[test]
    fn test_completed_transaction_credits_earnings() {
        let mut store = Store::new();
        store.insert_user(test_creator("c1"));
        store.insert_user(test_fan("f1"));

        store.insert_transaction(txn("t1", "f1", "c1", 50.0, TransactionStatus::Completed, 1));

        let creator = store.user(&UserId::from("c1")).unwrap();
        assert_eq!(creator.total_earnings(), Some(50.0));
    }

    #[test]
    fn test_pending_transaction_does_not_credit() {
        let mut store = Store::new();
        store.insert_user(test_creator("c1"));
        store.insert_user(test_fan("f1"));

        store.insert_transaction(txn("t1", "f1", "c1", 50.0, TransactionStatus::Pending, 1));

        let creator = store.user(&UserId::from("c1")).unwrap();
        assert_eq!(creator.total_earnings(), Some(0.0));
    }

    #[test]
    fn test_listing_covers_both_directions() {
        let mut store = Store::new();
        store.insert_user(test_creator("c1"));
        store.insert_user(test_fan("f1"));

        store.insert_transaction(txn("sent", "f1", "c1", 10.0, TransactionStatus::Completed, 10));
        store.insert_transaction(txn("recv", "c1", "f1", 5.0, TransactionStatus::Completed, 20));
        store.insert_transaction(txn("other", "x", "y", 1.0, TransactionStatus::Completed, 30));

        let ids: Vec<String> = store
            .transactions_by_user(&UserId::from("f1"))
            .into_iter()
            .map(|t| t.id.0)
            .collect();
        assert_eq!(ids, ["recv", "sent"]);
    }

    #[test]
    fn test_creator_listing_is_incoming_only() {
        let mut store = Store::new();
        store.insert_transaction(txn("in", "f1", "c1", 10.0, TransactionStatus::Completed, 10));
        store.insert_transaction(txn("out", "c1", "f1", 5.0, TransactionStatus::Completed, 20));

        let ids: Vec<String> = store
            .transactions_by_creator(&UserId::from("c1"))
            .into_iter()
            .map(|t| t.id.0)
            .collect();
        assert_eq!(ids, ["in"]);
    }
}
