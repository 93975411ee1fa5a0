//! Analytics snapshot storage.
//!
//! Snapshots are precomputed by the factory and stored whole; there is no
//! live aggregation over the entity graph.

use crate::types::{AnalyticsPeriod, CreatorAnalytics, UserId};

use super::Store;

impl Store {
    /// The stored snapshot for `(creator_id, period)`, if one was seeded.
    #[must_use]
    pub fn analytics(&self, creator_id: &UserId, period: AnalyticsPeriod) -> Option<CreatorAnalytics> {
        self.analytics.get(&(creator_id.clone(), period)).cloned()
    }

    /// Store (or replace) a snapshot under its `(creator, period)` key.
    pub fn set_analytics(&mut self, snapshot: CreatorAnalytics) {
        self.analytics
            .insert((snapshot.user_id.clone(), snapshot.period), snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::Factory;

    #[test]
    fn test_snapshots_keyed_by_creator_and_period() {
        let mut store = Store::new();
        let mut factory = Factory::new(42);
        let creator = UserId::from("c1");

        store.set_analytics(factory.create_analytics(&creator, AnalyticsPeriod::Month));

        assert!(store.analytics(&creator, AnalyticsPeriod::Month).is_some());
        assert!(store.analytics(&creator, AnalyticsPeriod::Week).is_none());
        assert!(store.analytics(&UserId::from("c2"), AnalyticsPeriod::Month).is_none());
    }

    #[test]
    fn test_set_replaces_existing_snapshot() {
        let mut store = Store::new();
        let mut factory = Factory::new(42);
        let creator = UserId::from("c1");

        store.set_analytics(factory.create_analytics(&creator, AnalyticsPeriod::Month));
        let second = factory.create_analytics(&creator, AnalyticsPeriod::Month);
        let expected = second.total_revenue;
        store.set_analytics(second);

        let stored = store.analytics(&creator, AnalyticsPeriod::Month).unwrap();
        assert_eq!(stored.total_revenue, expected);
    }
}
