//! The mock API: the surface a real backend would expose.
//!
//! Every operation runs the same gauntlet: an awaited random delay drawn
//! from the configured window, then, with the configured probability, a
//! short-circuit into a transient error *before* any store access, so an
//! injected failure can never leave partial state behind. Only then does
//! the handler validate, touch the store, and wrap the outcome in the
//! uniform [`ApiResponse`] envelope. Nothing here panics past the
//! boundary; even a poisoned store lock is rendered as an error envelope.
//!
//! Authorization (e.g. only a post's owner may delete it) lives in these
//! handlers, not in the store.

mod analytics;
mod auth;
mod messaging;
mod notifications;
mod posts;
mod subscriptions;
mod transactions;
mod users;

use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::factory::Factory;
use crate::fixtures;
use crate::store::Store;
use crate::types::{
    ApiResponse, Comment, CommentView, Conversation, ConversationView, Message, MessageView,
    Post, PostView, Subscription, SubscriptionView,
};

/// Simulated-network behavior, adjustable at any time; changes take
/// effect on the next call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub enable_network_delay: bool,
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
    pub enable_random_errors: bool,
    /// Probability (0..=1) of a simulated transient failure per call.
    pub error_rate: f64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            enable_network_delay: true,
            min_delay_ms: 300,
            max_delay_ms: 1_000,
            enable_random_errors: false,
            error_rate: 0.1,
        }
    }
}

/// The transient failures error injection draws from.
const TRANSIENT_ERRORS: [&str; 4] = [
    "Network connection failed",
    "Server timeout",
    "Service temporarily unavailable",
    "Rate limit exceeded",
];

/// Error rendered when a store lock is poisoned.
pub(crate) const ERR_INTERNAL: &str = "Internal storage error";

/// The mock API over a shared store.
///
/// The store handle is injected at construction, never read from an
/// ambient global, so tests build an isolated store per case. The chaos RNG
/// (delay/error draws) and the runtime factory (handler-created
/// entities) are deliberately separate generators: injecting errors must
/// not change which entities get generated, and neither may disturb the
/// fixture seeder's stream.
pub struct MockApi {
    store: Arc<RwLock<Store>>,
    config: RwLock<ApiConfig>,
    chaos: Mutex<StdRng>,
    factory: Mutex<Factory>,
}

impl MockApi {
    /// Build an API over `store` with the given simulated-network config.
    ///
    /// `seed` drives the chaos RNG and the runtime factory.
    #[must_use]
    pub fn new(store: Arc<RwLock<Store>>, config: ApiConfig, seed: u64) -> Self {
        Self {
            store,
            config: RwLock::new(config),
            chaos: Mutex::new(StdRng::seed_from_u64(seed)),
            // Offset keeps the runtime stream distinct from both the
            // chaos stream and a fixture factory seeded with `seed`.
            factory: Mutex::new(Factory::new(seed.wrapping_add(1))),
        }
    }

    /// Replace the simulated-network config.
    pub fn set_config(&self, config: ApiConfig) {
        if let Ok(mut current) = self.config.write() {
            *current = config;
        }
    }

    /// The current simulated-network config.
    #[must_use]
    pub fn config(&self) -> ApiConfig {
        self.config
            .read()
            .map_or_else(|_| ApiConfig::default(), |config| config.clone())
    }

    /// Handle on the underlying store.
    #[must_use]
    pub fn store(&self) -> Arc<RwLock<Store>> {
        Arc::clone(&self.store)
    }

    /// Destroy all state and rebuild the demo fixtures from `seed`.
    ///
    /// Demo-panel control operation: runs without delay or error
    /// injection.
    pub fn reset_demo(&self, seed: u64) -> ApiResponse<()> {
        let Ok(mut store) = self.store.write() else {
            return ApiResponse::error(ERR_INTERNAL);
        };
        fixtures::seed_database(&mut store, seed);
        ApiResponse::ok_with_message((), "Demo data reset")
    }

    /// Await a delay drawn uniformly from the configured window.
    pub(crate) async fn random_delay(&self) {
        let delay_ms = {
            let Ok(config) = self.config.read() else { return };
            if !config.enable_network_delay {
                return;
            }
            let Ok(mut chaos) = self.chaos.lock() else { return };
            if config.min_delay_ms >= config.max_delay_ms {
                config.max_delay_ms
            } else {
                chaos.random_range(config.min_delay_ms..=config.max_delay_ms)
            }
        };
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }

    /// Roll the dice for an injected transient failure.
    pub(crate) fn maybe_transient_error<T>(&self) -> Option<ApiResponse<T>> {
        let Ok(config) = self.config.read() else {
            return None;
        };
        if !config.enable_random_errors {
            return None;
        }
        let Ok(mut chaos) = self.chaos.lock() else {
            return None;
        };
        if chaos.random::<f64>() < config.error_rate {
            let message = TRANSIENT_ERRORS[chaos.random_range(0..TRANSIENT_ERRORS.len())];
            tracing::debug!(error = message, "injecting transient failure");
            return Some(ApiResponse::error(message));
        }
        None
    }

    /// The standard preamble: delay, then possibly a simulated failure.
    ///
    /// Must run before the handler touches the store.
    pub(crate) async fn simulate_network<T>(&self) -> Result<(), ApiResponse<T>> {
        self.random_delay().await;
        match self.maybe_transient_error() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

// Query-time joins: a view is an entity plus the authoritative records it
// references. An item whose referenced user no longer resolves is dropped
// rather than served with a stale snapshot.

pub(crate) fn post_view(store: &Store, post: Post) -> Option<PostView> {
    let creator = store.user(&post.creator_id)?;
    Some(PostView { post, creator })
}

pub(crate) fn comment_view(store: &Store, comment: Comment) -> Option<CommentView> {
    let user = store.user(&comment.user_id)?;
    Some(CommentView { comment, user })
}

pub(crate) fn subscription_view(store: &Store, subscription: Subscription) -> Option<SubscriptionView> {
    let fan = store.user(&subscription.fan_id)?;
    let creator = store.user(&subscription.creator_id)?;
    Some(SubscriptionView {
        subscription,
        fan,
        creator,
    })
}

pub(crate) fn message_view(store: &Store, message: Message) -> Option<MessageView> {
    let sender = store.user(&message.sender_id)?;
    Some(MessageView { message, sender })
}

pub(crate) fn conversation_view(store: &Store, conversation: Conversation) -> Option<ConversationView> {
    let participants: Vec<_> = conversation
        .participants
        .iter()
        .filter_map(|id| store.user(id))
        .collect();
    Some(ConversationView {
        conversation,
        participants,
    })
}

#[cfg(test)]
pub(crate) mod tests_support {
    use super::{ApiConfig, MockApi};
    use crate::fixtures::{DEFAULT_SEED, seed_database};
    use crate::store::Store;
    use std::sync::{Arc, RwLock};

    /// Delay and error injection off: unit tests exercise semantics, not
    /// the simulated network.
    pub(crate) fn quiet_config() -> ApiConfig {
        ApiConfig {
            enable_network_delay: false,
            enable_random_errors: false,
            ..ApiConfig::default()
        }
    }

    /// A quiet API over freshly seeded demo data.
    pub(crate) fn seeded_api() -> MockApi {
        let mut store = Store::new();
        seed_database(&mut store, DEFAULT_SEED);
        MockApi::new(Arc::new(RwLock::new(store)), quiet_config(), DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::tests_support::quiet_config;
    use super::*;

    fn api() -> MockApi {
        MockApi::new(Arc::new(RwLock::new(Store::new())), quiet_config(), 1)
    }

    #[test]
    fn test_config_roundtrip() {
        let api = api();
        let mut config = api.config();
        assert!(!config.enable_network_delay);

        config.error_rate = 0.5;
        config.enable_random_errors = true;
        api.set_config(config.clone());
        assert_eq!(api.config(), config);
    }

    #[tokio::test]
    async fn test_no_error_injected_when_disabled() {
        let api = api();
        for _ in 0..100 {
            assert!(api.simulate_network::<()>().await.is_ok());
        }
    }

    #[tokio::test]
    async fn test_error_always_injected_at_full_rate() {
        let api = api();
        api.set_config(ApiConfig {
            enable_random_errors: true,
            error_rate: 1.0,
            ..quiet_config()
        });
        let outcome: Result<(), ApiResponse<()>> = api.simulate_network().await;
        let error = outcome.unwrap_err();
        assert!(!error.success);
        assert!(TRANSIENT_ERRORS.contains(&error.error.unwrap().as_str()));
    }
}
