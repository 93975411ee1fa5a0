//! Creator analytics snapshots.
//!
//! Snapshots are generated fiction for the dashboard, keyed by
//! `(creator, period)`. They are not derived from the live entity graph.

use serde::{Deserialize, Serialize};

use super::ids::UserId;
use super::time::Timestamp;

/// Reporting window of a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyticsPeriod {
    Day,
    Week,
    Month,
    Year,
}

impl AnalyticsPeriod {
    /// Number of daily data points in this window.
    #[must_use]
    pub const fn days(self) -> u32 {
        match self {
            Self::Day => 1,
            Self::Week => 7,
            Self::Month => 30,
            Self::Year => 365,
        }
    }
}

/// One day of a time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenuePoint {
    pub date: Timestamp,
    pub amount: f64,
}

/// One day of a count-valued time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountPoint {
    pub date: Timestamp,
    pub count: u32,
}

/// A creator's dashboard numbers for one period.
///
/// `subscription_revenue + tip_revenue == total_revenue` at the fixed
/// 70/30 split the factory generates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorAnalytics {
    pub user_id: UserId,
    pub period: AnalyticsPeriod,
    // Revenue
    pub total_revenue: f64,
    pub subscription_revenue: f64,
    pub tip_revenue: f64,
    /// Percentage change versus the previous period.
    pub revenue_change: f64,
    // Subscribers
    pub total_subscribers: u32,
    pub new_subscribers: u32,
    pub subscriber_change: f64,
    // Engagement
    pub total_views: u32,
    pub total_likes: u32,
    pub total_comments: u32,
    pub engagement_rate: f64,
    // Posts
    pub total_posts: u32,
    pub posts_this_period: u32,
    // Time series
    pub revenue_by_day: Vec<RevenuePoint>,
    pub subscribers_by_day: Vec<CountPoint>,
    pub views_by_day: Vec<CountPoint>,
}
