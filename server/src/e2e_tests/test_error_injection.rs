//! Injected transient failures must never touch the store.

use std::time::Instant;

use crate::api::ApiConfig;
use crate::e2e_tests::helpers::{seeded_api, world_snapshot};
use crate::fixtures::{EMMA_USER_ID, SOPHIA_USER_ID};
use crate::types::{LoginCredentials, SubscriptionTier, TipData, UserId};

fn always_failing() -> crate::api::MockApi {
    let api = seeded_api();
    api.set_config(ApiConfig {
        enable_network_delay: false,
        enable_random_errors: true,
        error_rate: 1.0,
        ..ApiConfig::default()
    });
    api
}

#[tokio::test]
async fn test_failed_mutations_leave_state_byte_identical() {
    let api = always_failing();
    let before = world_snapshot(&api);

    let emma = UserId::from(EMMA_USER_ID);
    let sophia = UserId::from(SOPHIA_USER_ID);

    // Every mutating operation fails up front...
    assert!(!api.subscribe(&emma, &sophia, SubscriptionTier::Icon).await.success);
    assert!(
        !api.send_tip(
            &emma,
            &TipData {
                creator_id: sophia.clone(),
                amount: 50.0,
                message: None,
            },
        )
        .await
        .success
    );
    assert!(!api.mark_all_notifications_read(&sophia).await.success);
    assert!(
        !api.login(&LoginCredentials {
            email: "emma@cabana.demo".to_string(),
            password: "demo123".to_string(),
        })
        .await
        .success
    );

    // ...and the world is exactly as it was.
    assert_eq!(world_snapshot(&api), before);
}

#[tokio::test]
async fn test_injected_errors_use_transient_messages() {
    let api = always_failing();
    for _ in 0..20 {
        let response = api.get_creators().await;
        assert!(!response.success);
        let message = response.error.expect("error message");
        assert!(
            message == "Network connection failed"
                || message == "Server timeout"
                || message == "Service temporarily unavailable"
                || message == "Rate limit exceeded",
            "unexpected transient error: {message}"
        );
    }
}

#[tokio::test]
async fn test_api_stays_interactive_after_failures() {
    let api = always_failing();
    assert!(!api.get_creators().await.success);

    // Turning injection off immediately heals the next call.
    api.set_config(ApiConfig {
        enable_network_delay: false,
        enable_random_errors: false,
        ..ApiConfig::default()
    });
    assert!(api.get_creators().await.success);
}

#[tokio::test]
async fn test_delay_window_is_honored() {
    let api = seeded_api();
    api.set_config(ApiConfig {
        enable_network_delay: true,
        min_delay_ms: 20,
        max_delay_ms: 40,
        enable_random_errors: false,
        ..ApiConfig::default()
    });

    let start = Instant::now();
    let _ = api.get_creators().await;
    assert!(start.elapsed().as_millis() >= 20);
}
