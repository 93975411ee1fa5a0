//! Creator analytics retrieval.

use crate::types::{AnalyticsPeriod, ApiResponse, CreatorAnalytics, UserId};

use super::{ERR_INTERNAL, MockApi};

impl MockApi {
    /// The creator's snapshot for the requested period. Only seeded
    /// periods exist; there is no on-demand aggregation.
    pub async fn get_analytics(
        &self,
        creator_id: &UserId,
        period: AnalyticsPeriod,
    ) -> ApiResponse<CreatorAnalytics> {
        if let Err(response) = self.simulate_network().await {
            return response;
        }
        let Ok(store) = self.store.read() else {
            return ApiResponse::error(ERR_INTERNAL);
        };
        match store.analytics(creator_id, period) {
            Some(snapshot) => ApiResponse::ok(snapshot),
            None => ApiResponse::error("Analytics not found"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests_support::seeded_api;
    use crate::fixtures::{EMMA_USER_ID, SOPHIA_USER_ID};

    #[tokio::test]
    async fn test_monthly_snapshot_exists_for_sophia() {
        let api = seeded_api();
        let snapshot = api
            .get_analytics(&UserId::from(SOPHIA_USER_ID), AnalyticsPeriod::Month)
            .await
            .data
            .unwrap();
        assert_eq!(snapshot.user_id, UserId::from(SOPHIA_USER_ID));
        assert_eq!(snapshot.revenue_by_day.len(), 30);
    }

    #[tokio::test]
    async fn test_missing_snapshot_is_domain_error() {
        let api = seeded_api();
        let weekly = api
            .get_analytics(&UserId::from(SOPHIA_USER_ID), AnalyticsPeriod::Week)
            .await;
        assert_eq!(weekly.error.as_deref(), Some("Analytics not found"));

        let fan = api
            .get_analytics(&UserId::from(EMMA_USER_ID), AnalyticsPeriod::Month)
            .await;
        assert_eq!(fan.error.as_deref(), Some("Analytics not found"));
    }
}
