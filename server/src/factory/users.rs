//! User generation.

use crate::types::{RoleProfile, SubscriptionTier, User, UserId, UserRole, YEAR_MS};

use super::lexicon::{EMAIL_DOMAINS, FIRST_NAMES, LAST_NAMES};
use super::Factory;

const ROLES: [UserRole; 3] = [UserRole::Creator, UserRole::Fan, UserRole::Admin];
const TIERS: [SubscriptionTier; 3] = [
    SubscriptionTier::Free,
    SubscriptionTier::Creator,
    SubscriptionTier::Icon,
];

/// Overrides for [`Factory::create_user`]; `None` means "generate".
#[derive(Debug, Clone, Default)]
pub struct UserOverrides {
    pub id: Option<UserId>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    /// Steers which role-conditional fields get generated. Ignored when
    /// `profile` is supplied, since the profile fixes the role.
    pub role: Option<UserRole>,
    pub subscription_tier: Option<SubscriptionTier>,
    pub is_verified: Option<bool>,
    pub created_at: Option<crate::types::Timestamp>,
    pub profile: Option<RoleProfile>,
}

impl Factory {
    /// Generate a user. Override fields win over generated ones.
    pub fn create_user(&mut self, overrides: UserOverrides) -> User {
        let role = overrides
            .profile
            .as_ref()
            .map(profile_role)
            .or(overrides.role)
            .unwrap_or_else(|| *self.pick(&ROLES));

        let first = *self.pick(&FIRST_NAMES);
        let last = *self.pick(&LAST_NAMES);
        let username = format!(
            "{}_{}{}",
            first.to_lowercase(),
            last.to_lowercase(),
            self.int(10, 99)
        );
        let domain = *self.pick(&EMAIL_DOMAINS);

        let generated_profile = match role {
            UserRole::Creator => RoleProfile::Creator {
                subscriber_count: self.int(10, 50_000),
                total_earnings: self.amount(100.0, 500_000.0),
            },
            UserRole::Fan => RoleProfile::Fan {
                following_count: self.int(0, 200),
                subscriptions: Vec::new(),
            },
            UserRole::Admin => RoleProfile::Admin,
        };

        User {
            id: overrides.id.unwrap_or_else(|| UserId(self.hex_id())),
            email: overrides
                .email
                .unwrap_or_else(|| format!("{username}@{domain}")),
            username: overrides.username.unwrap_or_else(|| username.clone()),
            display_name: overrides
                .display_name
                .unwrap_or_else(|| format!("{first} {last}")),
            avatar: overrides
                .avatar
                .unwrap_or_else(|| avatar_url(&username)),
            bio: overrides.bio.unwrap_or_else(|| self.sentence(5, 15)),
            subscription_tier: overrides
                .subscription_tier
                .unwrap_or_else(|| *self.pick(&TIERS)),
            is_verified: overrides.is_verified.unwrap_or_else(|| self.chance(0.3)),
            created_at: overrides.created_at.unwrap_or_else(|| self.past(2 * YEAR_MS)),
            profile: overrides.profile.unwrap_or(generated_profile),
        }
    }

    /// Generate `count` users, all with the given role when supplied.
    pub fn create_users(&mut self, count: usize, role: Option<UserRole>) -> Vec<User> {
        (0..count)
            .map(|_| {
                self.create_user(UserOverrides {
                    role,
                    ..UserOverrides::default()
                })
            })
            .collect()
    }
}

const fn profile_role(profile: &RoleProfile) -> UserRole {
    match profile {
        RoleProfile::Creator { .. } => UserRole::Creator,
        RoleProfile::Fan { .. } => UserRole::Fan,
        RoleProfile::Admin => UserRole::Admin,
    }
}

/// Deterministic avatar URL derived from the username.
pub(crate) fn avatar_url(seed: &str) -> String {
    format!("https://api.dicebear.com/7.x/avataaars/svg?seed={seed}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins_over_generated() {
        let mut factory = Factory::new(42);
        let user = factory.create_user(UserOverrides {
            id: Some(UserId::from("user-fixed")),
            email: Some("fixed@cabana.demo".to_string()),
            role: Some(UserRole::Creator),
            ..UserOverrides::default()
        });
        assert_eq!(user.id, UserId::from("user-fixed"));
        assert_eq!(user.email, "fixed@cabana.demo");
        assert_eq!(user.role(), UserRole::Creator);
    }

    #[test]
    fn test_creator_gets_creator_fields() {
        let mut factory = Factory::new(42);
        let user = factory.create_user(UserOverrides {
            role: Some(UserRole::Creator),
            ..UserOverrides::default()
        });
        let count = user.subscriber_count().unwrap();
        assert!((10..=50_000).contains(&count));
        assert!(user.total_earnings().unwrap() >= 100.0);
    }

    #[test]
    fn test_fan_starts_with_no_subscriptions() {
        let mut factory = Factory::new(42);
        let user = factory.create_user(UserOverrides {
            role: Some(UserRole::Fan),
            ..UserOverrides::default()
        });
        assert!(user.subscriptions().is_empty());
        assert_eq!(user.subscriber_count(), None);
    }

    #[test]
    fn test_profile_override_fixes_role() {
        let mut factory = Factory::new(42);
        let user = factory.create_user(UserOverrides {
            profile: Some(RoleProfile::Creator {
                subscriber_count: 2547,
                total_earnings: 45_320.50,
            }),
            ..UserOverrides::default()
        });
        assert_eq!(user.role(), UserRole::Creator);
        assert_eq!(user.subscriber_count(), Some(2547));
    }

    #[test]
    fn test_batch_generation_is_deterministic() {
        let users_a = Factory::new(9).create_users(5, Some(UserRole::Fan));
        let users_b = Factory::new(9).create_users(5, Some(UserRole::Fan));
        assert_eq!(users_a, users_b);
    }
}
