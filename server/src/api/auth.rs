//! Authentication operations: login, signup, session restore, logout.

use crate::auth::{issue_token, verify_token};
use crate::factory::UserOverrides;
use crate::fixtures::{DEMO_EMAIL_DOMAIN, DEMO_PASSWORD};
use crate::types::user::RoleProfile;
use crate::types::{
    ApiResponse, AuthPayload, LoginCredentials, SignupData, SubscriptionTier, User, UserId,
    UserRole,
};

use super::{ERR_INTERNAL, MockApi};

impl MockApi {
    /// Log in with email and password.
    ///
    /// Demo-domain addresses accept any password; everything else must
    /// present the fixed demo password. Either way this is demo-only
    /// behavior; passwords are never hashed or stored.
    pub async fn login(&self, credentials: &LoginCredentials) -> ApiResponse<AuthPayload> {
        if let Err(response) = self.simulate_network().await {
            return response;
        }

        let Ok(store) = self.store.read() else {
            return ApiResponse::error(ERR_INTERNAL);
        };
        let Some(user) = store.user_by_email(&credentials.email) else {
            return ApiResponse::error("Invalid email or password");
        };

        let is_demo_account = credentials.email.ends_with(DEMO_EMAIL_DOMAIN);
        if !is_demo_account && credentials.password != DEMO_PASSWORD {
            return ApiResponse::error("Invalid email or password");
        }

        match issue_token(&user.id) {
            Ok(token) => {
                tracing::debug!(user = %user.id, "login");
                ApiResponse::ok_with_message(AuthPayload { user, token }, "Login successful")
            }
            Err(e) => ApiResponse::error(e.to_string()),
        }
    }

    /// Create a new account.
    pub async fn signup(&self, data: &SignupData) -> ApiResponse<AuthPayload> {
        if let Err(response) = self.simulate_network().await {
            return response;
        }

        let Ok(mut store) = self.store.write() else {
            return ApiResponse::error(ERR_INTERNAL);
        };
        if store.user_by_email(&data.email).is_some() {
            return ApiResponse::error("Email already registered");
        }
        if store.user_by_username(&data.username).is_some() {
            return ApiResponse::error("Username already taken");
        }

        let created_at = store.now();
        let Ok(mut factory) = self.factory.lock() else {
            return ApiResponse::error(ERR_INTERNAL);
        };
        let profile = match data.role {
            UserRole::Creator => RoleProfile::Creator {
                subscriber_count: 0,
                total_earnings: 0.0,
            },
            UserRole::Fan => RoleProfile::Fan {
                following_count: 0,
                subscriptions: Vec::new(),
            },
            UserRole::Admin => RoleProfile::Admin,
        };
        let id = UserId(format!("user-{}", factory.hex_id()));
        let user = factory.create_user(UserOverrides {
            id: Some(id),
            role: Some(data.role),
            email: Some(data.email.clone()),
            username: Some(data.username.clone()),
            display_name: Some(data.display_name.clone()),
            avatar: Some(format!(
                "https://api.dicebear.com/7.x/avataaars/svg?seed={}",
                data.username
            )),
            bio: Some(String::new()),
            subscription_tier: Some(SubscriptionTier::Free),
            is_verified: Some(false),
            created_at: Some(created_at),
            profile: Some(profile),
        });
        drop(factory);

        store.insert_user(user.clone());
        tracing::info!(user = %user.id, "account created");

        match issue_token(&user.id) {
            Ok(token) => ApiResponse::ok_with_message(
                AuthPayload { user, token },
                "Account created successfully",
            ),
            Err(e) => ApiResponse::error(e.to_string()),
        }
    }

    /// Resolve the account behind an access token.
    pub async fn get_current_user(&self, token: &str) -> ApiResponse<User> {
        if let Err(response) = self.simulate_network().await {
            return response;
        }

        let Ok(user_id) = verify_token(token) else {
            return ApiResponse::error("Invalid session");
        };
        let Ok(store) = self.store.read() else {
            return ApiResponse::error(ERR_INTERNAL);
        };
        match store.user(&user_id) {
            Some(user) => ApiResponse::ok(user),
            None => ApiResponse::error("Invalid session"),
        }
    }

    /// End the session. Never fails, and skips error injection; the
    /// demo must always be able to sign out.
    pub async fn logout(&self) -> ApiResponse<()> {
        self.random_delay().await;
        ApiResponse::ok_with_message((), "Logged out successfully")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests_support::seeded_api;
    use crate::fixtures::EMMA_USER_ID;

    #[tokio::test]
    async fn test_demo_account_accepts_any_password() {
        let api = seeded_api();
        let response = api
            .login(&LoginCredentials {
                email: "emma@cabana.demo".to_string(),
                password: "whatever".to_string(),
            })
            .await;
        let payload = response.data.unwrap();
        assert_eq!(payload.user.id, UserId::from(EMMA_USER_ID));
        assert!(!payload.token.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_email_is_rejected() {
        let api = seeded_api();
        let response = api
            .login(&LoginCredentials {
                email: "nobody@nowhere.test".to_string(),
                password: DEMO_PASSWORD.to_string(),
            })
            .await;
        assert_eq!(response.error.as_deref(), Some("Invalid email or password"));
    }

    #[tokio::test]
    async fn test_signup_rejects_duplicate_email() {
        let api = seeded_api();
        let response = api
            .signup(&SignupData {
                email: "emma@cabana.demo".to_string(),
                password: "pw".to_string(),
                username: "new_user".to_string(),
                display_name: "New User".to_string(),
                role: UserRole::Fan,
            })
            .await;
        assert_eq!(response.error.as_deref(), Some("Email already registered"));
    }

    #[tokio::test]
    async fn test_signup_then_restore_session() {
        let api = seeded_api();
        let signup = api
            .signup(&SignupData {
                email: "fresh@mailbox.dev".to_string(),
                password: "pw".to_string(),
                username: "fresh_face".to_string(),
                display_name: "Fresh Face".to_string(),
                role: UserRole::Creator,
            })
            .await;
        let payload = signup.data.unwrap();
        assert_eq!(payload.user.subscriber_count(), Some(0));
        assert_eq!(payload.user.subscription_tier, SubscriptionTier::Free);

        let restored = api.get_current_user(&payload.token).await;
        assert_eq!(restored.data.unwrap().id, payload.user.id);
    }

    #[tokio::test]
    async fn test_bad_token_is_invalid_session() {
        let api = seeded_api();
        let response = api.get_current_user("garbage").await;
        assert_eq!(response.error.as_deref(), Some("Invalid session"));
    }
}
