//! Login, signup, and session-restore flows.

use crate::e2e_tests::helpers::{ok_data, seeded_api};
use crate::fixtures::{DEMO_PASSWORD, demo_credentials};
use crate::types::{LoginCredentials, SignupData, UserRole};

#[tokio::test]
async fn test_every_demo_credential_logs_in() {
    let api = seeded_api();
    for credential in demo_credentials() {
        let payload = ok_data(
            api.login(&LoginCredentials {
                email: credential.email.clone(),
                password: credential.password.clone(),
            })
            .await,
        );
        assert_eq!(payload.user.id, credential.persona.user_id);
        assert_eq!(payload.user.role(), credential.persona.role);
    }
}

#[tokio::test]
async fn test_non_demo_account_requires_placeholder_password() {
    let api = seeded_api();
    let signup = ok_data(
        api.signup(&SignupData {
            email: "outsider@mailbox.dev".to_string(),
            password: "anything".to_string(),
            username: "outsider".to_string(),
            display_name: "Out Sider".to_string(),
            role: UserRole::Fan,
        })
        .await,
    );

    // Wrong password fails for a non-demo domain...
    let rejected = api
        .login(&LoginCredentials {
            email: "outsider@mailbox.dev".to_string(),
            password: "wrong".to_string(),
        })
        .await;
    assert_eq!(rejected.error.as_deref(), Some("Invalid email or password"));

    // ...while the fixed demo password works.
    let accepted = ok_data(
        api.login(&LoginCredentials {
            email: "outsider@mailbox.dev".to_string(),
            password: DEMO_PASSWORD.to_string(),
        })
        .await,
    );
    assert_eq!(accepted.user.id, signup.user.id);
}

#[tokio::test]
async fn test_session_restore_round_trip() {
    let api = seeded_api();
    let payload = ok_data(
        api.login(&LoginCredentials {
            email: "sophia@cabana.demo".to_string(),
            password: DEMO_PASSWORD.to_string(),
        })
        .await,
    );

    let restored = ok_data(api.get_current_user(&payload.token).await);
    assert_eq!(restored.id, payload.user.id);

    // Logout always succeeds; the token itself stays valid (stateless)
    let logout = api.logout().await;
    assert!(logout.success);
}

#[tokio::test]
async fn test_duplicate_username_is_rejected() {
    let api = seeded_api();
    let response = api
        .signup(&SignupData {
            email: "second@mailbox.dev".to_string(),
            password: "pw".to_string(),
            username: "sophia_luxury".to_string(),
            display_name: "Pretender".to_string(),
            role: UserRole::Creator,
        })
        .await;
    assert_eq!(response.error.as_deref(), Some("Username already taken"));
}
