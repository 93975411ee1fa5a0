//! User accounts and role-specific profile data.

use serde::{Deserialize, Serialize};

use super::ids::UserId;
use super::time::Timestamp;

/// What a user is allowed to do on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Creator,
    Fan,
    Admin,
}

/// Subscription level controlling content visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    Free,
    Creator,
    Icon,
}

impl SubscriptionTier {
    /// Monthly price of a paid tier in USD. `Free` costs nothing.
    #[must_use]
    pub const fn monthly_price(self) -> f64 {
        match self {
            Self::Free => 0.0,
            Self::Creator => 9.99,
            Self::Icon => 29.99,
        }
    }
}

impl std::fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Free => "free",
            Self::Creator => "creator",
            Self::Icon => "icon",
        };
        f.write_str(name)
    }
}

/// Role-conditional user data.
///
/// Creator aggregates (`subscriber_count`, `total_earnings`) exist only
/// on the `Creator` variant, and a fan's subscription list only on `Fan`;
/// the "creators carry creator fields" rule is structural, not policed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum RoleProfile {
    #[serde(rename_all = "camelCase")]
    Creator {
        subscriber_count: u32,
        total_earnings: f64,
    },
    #[serde(rename_all = "camelCase")]
    Fan {
        following_count: u32,
        /// Creator IDs this fan subscribes to.
        subscriptions: Vec<UserId>,
    },
    Admin,
}

/// A platform account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub username: String,
    pub display_name: String,
    pub avatar: String,
    pub bio: String,
    pub subscription_tier: SubscriptionTier,
    pub is_verified: bool,
    pub created_at: Timestamp,
    /// Serialized flattened, so the wire shape carries a `role` tag plus
    /// the role's fields at the top level of the user object.
    #[serde(flatten)]
    pub profile: RoleProfile,
}

impl User {
    /// The account's role, derived from its profile.
    #[must_use]
    pub const fn role(&self) -> UserRole {
        match self.profile {
            RoleProfile::Creator { .. } => UserRole::Creator,
            RoleProfile::Fan { .. } => UserRole::Fan,
            RoleProfile::Admin => UserRole::Admin,
        }
    }

    #[must_use]
    pub const fn is_creator(&self) -> bool {
        matches!(self.profile, RoleProfile::Creator { .. })
    }

    /// Creator IDs this user subscribes to; empty for non-fans.
    #[must_use]
    pub fn subscriptions(&self) -> &[UserId] {
        match &self.profile {
            RoleProfile::Fan { subscriptions, .. } => subscriptions,
            _ => &[],
        }
    }

    /// Current subscriber count; `None` for non-creators.
    #[must_use]
    pub const fn subscriber_count(&self) -> Option<u32> {
        match self.profile {
            RoleProfile::Creator {
                subscriber_count, ..
            } => Some(subscriber_count),
            _ => None,
        }
    }

    /// Lifetime earnings; `None` for non-creators.
    #[must_use]
    pub const fn total_earnings(&self) -> Option<f64> {
        match self.profile {
            RoleProfile::Creator { total_earnings, .. } => Some(total_earnings),
            _ => None,
        }
    }
}

/// Field-by-field patch for [`Store::update_user`](crate::store::Store::update_user).
///
/// `None` leaves the existing value untouched.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub email: Option<String>,
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub subscription_tier: Option<SubscriptionTier>,
    pub is_verified: Option<bool>,
}

/// Credentials presented at login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Payload for account creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupData {
    pub email: String,
    pub password: String,
    pub username: String,
    pub display_name: String,
    pub role: UserRole,
}

/// Successful login/signup response body: the account plus its token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthPayload {
    pub user: User,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fan(subscriptions: Vec<UserId>) -> User {
        User {
            id: UserId::from("u1"),
            email: "fan@example.com".to_string(),
            username: "fan1".to_string(),
            display_name: "Fan One".to_string(),
            avatar: String::new(),
            bio: String::new(),
            subscription_tier: SubscriptionTier::Free,
            is_verified: false,
            created_at: Timestamp(0),
            profile: RoleProfile::Fan {
                following_count: 3,
                subscriptions,
            },
        }
    }

    #[test]
    fn test_role_is_derived_from_profile() {
        let user = fan(vec![]);
        assert_eq!(user.role(), UserRole::Fan);
        assert!(!user.is_creator());
        assert_eq!(user.subscriber_count(), None);
    }

    #[test]
    fn test_creator_fields_serialize_flattened() {
        let user = User {
            profile: RoleProfile::Creator {
                subscriber_count: 42,
                total_earnings: 1000.5,
            },
            ..fan(vec![])
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["role"], "creator");
        assert_eq!(json["subscriberCount"], 42);
        assert_eq!(json["totalEarnings"], 1000.5);
        // Fan fields must be absent entirely
        assert!(json.get("subscriptions").is_none());
    }

    #[test]
    fn test_tier_pricing() {
        assert_eq!(SubscriptionTier::Creator.monthly_price(), 9.99);
        assert_eq!(SubscriptionTier::Icon.monthly_price(), 29.99);
    }
}
