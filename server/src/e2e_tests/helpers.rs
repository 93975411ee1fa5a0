//! Common helpers for end-to-end tests.

use std::sync::{Arc, RwLock};

use crate::api::{ApiConfig, MockApi};
use crate::fixtures::{DEFAULT_SEED, seed_database};
use crate::store::Store;
use crate::types::{ApiResponse, UserId};

/// Config with the simulated network turned off.
pub fn quiet_config() -> ApiConfig {
    ApiConfig {
        enable_network_delay: false,
        enable_random_errors: false,
        ..ApiConfig::default()
    }
}

/// A quiet API over demo data seeded from `seed`.
pub fn api_with_seed(seed: u64) -> MockApi {
    let mut store = Store::new();
    seed_database(&mut store, seed);
    MockApi::new(Arc::new(RwLock::new(store)), quiet_config(), seed)
}

/// A quiet API over default-seed demo data.
pub fn seeded_api() -> MockApi {
    api_with_seed(DEFAULT_SEED)
}

/// Unwrap a success envelope, panicking with the error text otherwise.
pub fn ok_data<T>(response: ApiResponse<T>) -> T {
    assert!(
        response.success,
        "expected success, got error: {:?}",
        response.error
    );
    response.data.expect("success response must carry data")
}

/// Serialize the observable world state reachable through the API's
/// store: used to prove operations had no effect.
pub fn world_snapshot(api: &MockApi) -> serde_json::Value {
    let store = api.store();
    let store = store.read().expect("store lock");
    let emma = UserId::from(crate::fixtures::EMMA_USER_ID);
    let sophia = UserId::from(crate::fixtures::SOPHIA_USER_ID);
    serde_json::json!({
        "users": store.users(),
        "posts": store.posts(),
        "emma_subscriptions": store.subscriptions_by_fan(&emma),
        "sophia_subscribers": store.subscriptions_by_creator(&sophia),
        "emma_transactions": store.transactions_by_user(&emma),
        "emma_conversations": store.conversations_by_user(&emma),
        "sophia_notifications": store.notifications_by_user(&sophia),
    })
}
