//! Serializable client-session state.
//!
//! The UI persists the authenticated session and the demo control knobs
//! in client-side storage across reloads. This module only defines the
//! values; where and how they are persisted is the client's business.

use serde::{Deserialize, Serialize};

use crate::api::ApiConfig;
use crate::fixtures::DEFAULT_SEED;
use crate::types::User;

/// The authenticated-session snapshot the client keeps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub user: Option<User>,
    pub access_token: Option<String>,
    pub is_authenticated: bool,
}

impl AuthSession {
    /// A session for a freshly logged-in user.
    #[must_use]
    pub const fn logged_in(user: User, access_token: String) -> Self {
        Self {
            user: Some(user),
            access_token: Some(access_token),
            is_authenticated: true,
        }
    }

    /// The signed-out session.
    #[must_use]
    pub fn logged_out() -> Self {
        Self::default()
    }
}

/// Demo control-panel settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoSettings {
    /// Persona ID currently driving the walkthrough, if any.
    pub current_persona: Option<String>,
    pub enable_network_delay: bool,
    pub network_delay_ms: u64,
    pub enable_random_errors: bool,
    /// Probability (0..=1) of an injected transient failure.
    pub error_rate: f64,
    pub enable_toasts: bool,
    pub seed: u64,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            current_persona: None,
            enable_network_delay: true,
            network_delay_ms: 500,
            enable_random_errors: false,
            error_rate: 0.1,
            enable_toasts: true,
            seed: DEFAULT_SEED,
        }
    }
}

impl DemoSettings {
    /// Translate the single delay knob into the API's `[min, max]` window:
    /// calls take between half the configured delay and the full delay.
    #[must_use]
    pub const fn api_config(&self) -> ApiConfig {
        ApiConfig {
            enable_network_delay: self.enable_network_delay,
            min_delay_ms: self.network_delay_ms / 2,
            max_delay_ms: self.network_delay_ms,
            enable_random_errors: self.enable_random_errors,
            error_rate: self.error_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_demo_panel() {
        let settings = DemoSettings::default();
        assert!(settings.enable_network_delay);
        assert_eq!(settings.network_delay_ms, 500);
        assert!(!settings.enable_random_errors);
        assert_eq!(settings.seed, 42);
    }

    #[test]
    fn test_api_config_halves_minimum_delay() {
        let settings = DemoSettings {
            network_delay_ms: 800,
            ..DemoSettings::default()
        };
        let config = settings.api_config();
        assert_eq!(config.min_delay_ms, 400);
        assert_eq!(config.max_delay_ms, 800);
    }

    #[test]
    fn test_session_serializes_camel_case() {
        let session = AuthSession::logged_out();
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["isAuthenticated"], false);
        assert_eq!(json["user"], serde_json::Value::Null);
    }
}
