//! Analytics snapshot generation.

use crate::types::{
    AnalyticsPeriod, CountPoint, CreatorAnalytics, DAY_MS, DEMO_EPOCH, RevenuePoint, UserId,
};

use super::Factory;

/// Fraction of total revenue attributed to subscriptions; the remainder
/// is tips. Dashboards assume the two sum to the total.
const SUBSCRIPTION_REVENUE_SHARE: f64 = 0.7;

impl Factory {
    /// Generate a dashboard snapshot for `user_id` over `period`.
    ///
    /// The numbers are plausible fiction, not aggregates of stored
    /// entities; only the internal ratios are guaranteed.
    pub fn create_analytics(&mut self, user_id: &UserId, period: AnalyticsPeriod) -> CreatorAnalytics {
        let total_revenue = self.amount(1_000.0, 100_000.0);
        let subscription_revenue = total_revenue * SUBSCRIPTION_REVENUE_SHARE;
        let tip_revenue = total_revenue - subscription_revenue;

        let days = period.days();
        let mut revenue_by_day = Vec::with_capacity(days as usize);
        let mut subscribers_by_day = Vec::with_capacity(days as usize);
        let mut views_by_day = Vec::with_capacity(days as usize);

        // Oldest day first, ending at the demo epoch's "today".
        for day in (0..days).rev() {
            let date = DEMO_EPOCH.minus(u64::from(day) * DAY_MS);
            revenue_by_day.push(RevenuePoint {
                date,
                amount: self.amount(50.0, 5_000.0),
            });
            subscribers_by_day.push(CountPoint {
                date,
                count: self.int(10, 1_000),
            });
            views_by_day.push(CountPoint {
                date,
                count: self.int(100, 10_000),
            });
        }

        CreatorAnalytics {
            user_id: user_id.clone(),
            period,
            total_revenue,
            subscription_revenue,
            tip_revenue,
            revenue_change: self.percent(-20.0, 50.0),
            total_subscribers: self.int(50, 10_000),
            new_subscribers: self.int(5, 500),
            subscriber_change: self.percent(-10.0, 30.0),
            total_views: self.int(10_000, 500_000),
            total_likes: self.int(5_000, 50_000),
            total_comments: self.int(500, 10_000),
            engagement_rate: self.percent(1.0, 15.0),
            total_posts: self.int(10, 500),
            posts_this_period: self.int(1, 50),
            revenue_by_day,
            subscribers_by_day,
            views_by_day,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revenue_split_sums_to_total() {
        let mut factory = Factory::new(42);
        let snapshot = factory.create_analytics(&UserId::from("c1"), AnalyticsPeriod::Month);
        let sum = snapshot.subscription_revenue + snapshot.tip_revenue;
        assert!((sum - snapshot.total_revenue).abs() < 1e-6);
        assert!(
            (snapshot.subscription_revenue / snapshot.total_revenue - 0.7).abs() < 1e-9
        );
    }

    #[test]
    fn test_series_length_matches_period() {
        let mut factory = Factory::new(42);
        let month = factory.create_analytics(&UserId::from("c1"), AnalyticsPeriod::Month);
        assert_eq!(month.revenue_by_day.len(), 30);

        let week = factory.create_analytics(&UserId::from("c1"), AnalyticsPeriod::Week);
        assert_eq!(week.views_by_day.len(), 7);
    }

    #[test]
    fn test_series_dates_ascend_to_epoch() {
        let mut factory = Factory::new(42);
        let snapshot = factory.create_analytics(&UserId::from("c1"), AnalyticsPeriod::Week);
        let dates: Vec<_> = snapshot.revenue_by_day.iter().map(|p| p.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
        assert_eq!(dates.last().copied(), Some(DEMO_EPOCH));
    }
}
