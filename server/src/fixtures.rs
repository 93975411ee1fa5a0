//! Seeded demo fixtures: named personas and the reproducible world graph.
//!
//! [`seed_database`] discards all prior state, then rebuilds the demo
//! scenario from a fresh [`Factory`]. The four personas get fixed
//! attributes; everything after them is drawn from the seeded generator,
//! so the whole graph (IDs, field values, list orderings) is a pure
//! function of the seed.

use crate::factory::{
    CommentOverrides, ConversationOverrides, Factory, MessageOverrides, NotificationOverrides,
    PostOverrides, SubscriptionOverrides, TransactionOverrides, UserOverrides,
};
use crate::store::Store;
use crate::types::user::RoleProfile;
use crate::types::{
    AnalyticsPeriod, ConversationId, DEMO_EPOCH, NotificationKind, PostVisibility,
    SubscriptionStatus, SubscriptionTier, TransactionKind, TransactionStatus, User, UserId,
    UserRole,
};

/// Milliseconds in one hour, for the scripted message timeline.
const HOUR_MS: u64 = 60 * 60 * 1_000;

use serde::{Deserialize, Serialize};

/// Default seed used when none is configured.
pub const DEFAULT_SEED: u64 = 42;

/// Every demo account logs in with this password; addresses under the
/// demo domain accept anything.
pub const DEMO_PASSWORD: &str = "demo123";

/// Email domain of the guided-walkthrough accounts.
pub const DEMO_EMAIL_DOMAIN: &str = "@cabana.demo";

/// Fixed persona user IDs.
pub const SOPHIA_USER_ID: &str = "user-sophia-creator";
pub const MARCUS_USER_ID: &str = "user-marcus-creator";
pub const EMMA_USER_ID: &str = "user-emma-fan";
pub const ALEX_USER_ID: &str = "user-alex-admin";

/// Fixed conversation IDs for the scripted threads.
pub const EMMA_SOPHIA_CONVERSATION_ID: &str = "conv-emma-sophia";
pub const EMMA_MARCUS_CONVERSATION_ID: &str = "conv-emma-marcus";

/// Auxiliary population beyond the four personas.
const ADDITIONAL_CREATORS: usize = 5;
const ADDITIONAL_FANS: usize = 10;

/// A named, pre-configured demo account for guided walkthroughs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoPersona {
    pub id: String,
    pub name: String,
    pub description: String,
    pub user_id: UserId,
    pub avatar: String,
    pub role: UserRole,
}

/// Login credentials bound to a persona, for the demo panel's
/// one-click persona switcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoCredential {
    pub email: String,
    pub password: String,
    pub persona: DemoPersona,
}

fn persona_avatar(seed: &str) -> String {
    format!("https://api.dicebear.com/7.x/avataaars/svg?seed={seed}")
}

/// The four demo personas, in walkthrough order.
#[must_use]
pub fn demo_personas() -> Vec<DemoPersona> {
    vec![
        DemoPersona {
            id: "persona-creator-sophia".to_string(),
            name: "Sophia (Creator)".to_string(),
            description: "Established luxury lifestyle creator with 2.5K subscribers".to_string(),
            user_id: UserId::from(SOPHIA_USER_ID),
            avatar: persona_avatar("Sophia"),
            role: UserRole::Creator,
        },
        DemoPersona {
            id: "persona-creator-marcus".to_string(),
            name: "Marcus (Creator)".to_string(),
            description: "Rising nightlife photographer and event host".to_string(),
            user_id: UserId::from(MARCUS_USER_ID),
            avatar: persona_avatar("Marcus"),
            role: UserRole::Creator,
        },
        DemoPersona {
            id: "persona-fan-emma".to_string(),
            name: "Emma (Fan)".to_string(),
            description: "Active subscriber following 12 creators".to_string(),
            user_id: UserId::from(EMMA_USER_ID),
            avatar: persona_avatar("Emma"),
            role: UserRole::Fan,
        },
        DemoPersona {
            id: "persona-admin-alex".to_string(),
            name: "Alex (Admin)".to_string(),
            description: "Platform administrator with full access".to_string(),
            user_id: UserId::from(ALEX_USER_ID),
            avatar: persona_avatar("Alex"),
            role: UserRole::Admin,
        },
    ]
}

/// Credentials for each persona.
#[must_use]
pub fn demo_credentials() -> Vec<DemoCredential> {
    demo_personas()
        .into_iter()
        .map(|persona| {
            let handle = match persona.user_id.as_str() {
                SOPHIA_USER_ID => "sophia",
                MARCUS_USER_ID => "marcus",
                EMMA_USER_ID => "emma",
                _ => "alex",
            };
            DemoCredential {
                email: format!("{handle}{DEMO_EMAIL_DOMAIN}"),
                password: DEMO_PASSWORD.to_string(),
                persona,
            }
        })
        .collect()
}

fn seeded_personas(factory: &mut Factory) -> [User; 4] {
    let sophia = factory.create_user(UserOverrides {
        id: Some(UserId::from(SOPHIA_USER_ID)),
        email: Some(format!("sophia{DEMO_EMAIL_DOMAIN}")),
        username: Some("sophia_luxury".to_string()),
        display_name: Some("Sophia Laurent".to_string()),
        avatar: Some(persona_avatar("Sophia")),
        bio: Some(
            "✨ Luxury lifestyle & nightlife curator | VIP event host | Cabana Icon tier creator"
                .to_string(),
        ),
        subscription_tier: Some(SubscriptionTier::Icon),
        is_verified: Some(true),
        profile: Some(RoleProfile::Creator {
            subscriber_count: 2_547,
            total_earnings: 45_320.50,
        }),
        ..UserOverrides::default()
    });

    let marcus = factory.create_user(UserOverrides {
        id: Some(UserId::from(MARCUS_USER_ID)),
        email: Some(format!("marcus{DEMO_EMAIL_DOMAIN}")),
        username: Some("marcus_nights".to_string()),
        display_name: Some("Marcus Chen".to_string()),
        avatar: Some(persona_avatar("Marcus")),
        bio: Some(
            "📸 Nightlife photographer | Event host | Capturing the magic of LA nights"
                .to_string(),
        ),
        subscription_tier: Some(SubscriptionTier::Creator),
        is_verified: Some(true),
        profile: Some(RoleProfile::Creator {
            subscriber_count: 892,
            total_earnings: 12_450.25,
        }),
        ..UserOverrides::default()
    });

    let emma = factory.create_user(UserOverrides {
        id: Some(UserId::from(EMMA_USER_ID)),
        email: Some(format!("emma{DEMO_EMAIL_DOMAIN}")),
        username: Some("emma_vip".to_string()),
        display_name: Some("Emma Rodriguez".to_string()),
        avatar: Some(persona_avatar("Emma")),
        bio: Some("Living my best life ✨ | VIP enthusiast | Cabana member".to_string()),
        subscription_tier: Some(SubscriptionTier::Creator),
        is_verified: Some(false),
        profile: Some(RoleProfile::Fan {
            following_count: 12,
            subscriptions: vec![sophia.id.clone(), marcus.id.clone()],
        }),
        ..UserOverrides::default()
    });

    let alex = factory.create_user(UserOverrides {
        id: Some(UserId::from(ALEX_USER_ID)),
        email: Some(format!("alex{DEMO_EMAIL_DOMAIN}")),
        username: Some("admin_alex".to_string()),
        display_name: Some("Alex Kim".to_string()),
        avatar: Some(persona_avatar("Alex")),
        bio: Some("Cabana Platform Administrator".to_string()),
        subscription_tier: Some(SubscriptionTier::Icon),
        is_verified: Some(true),
        profile: Some(RoleProfile::Admin),
        ..UserOverrides::default()
    });

    [sophia, marcus, emma, alex]
}

/// Wipe the store and rebuild the demo world from `seed`.
pub fn seed_database(store: &mut Store, seed: u64) {
    tracing::info!(seed, "seeding demo database");
    store.reset();
    let mut factory = Factory::new(seed);

    let [sophia, marcus, emma, alex] = seeded_personas(&mut factory);
    for user in [&sophia, &marcus, &emma, &alex] {
        store.insert_user(user.clone());
    }

    let additional_creators = factory.create_users(ADDITIONAL_CREATORS, Some(UserRole::Creator));
    for user in &additional_creators {
        store.insert_user(user.clone());
    }
    let additional_fans = factory.create_users(ADDITIONAL_FANS, Some(UserRole::Fan));
    for user in &additional_fans {
        store.insert_user(user.clone());
    }

    let all_creators: Vec<&User> = std::iter::once(&sophia)
        .chain(std::iter::once(&marcus))
        .chain(additional_creators.iter())
        .collect();

    // -- Posts & comments --------------------------------------------------

    let sophia_posts = factory.create_posts(8, &sophia.id);
    for (idx, mut post) in sophia_posts.into_iter().enumerate() {
        if idx == 0 {
            post.visibility = PostVisibility::IconOnly;
            post.is_pinned = true;
            post.content = "🎉 ICON MEMBERS ONLY: Behind the scenes at last night's exclusive \
                            rooftop event! Thank you all for the incredible support ✨"
                .to_string();
        }
        if idx == 1 {
            post.visibility = PostVisibility::Subscribers;
            post.content = "Subscriber exclusive: My top 5 luxury venues in LA this season! \
                            Which one should I feature next? 💎"
                .to_string();
        }
        let post_id = post.id.clone();
        store.insert_post(post);

        if idx < 3 {
            let commenters = std::iter::once(&emma).chain(additional_fans.iter().take(3));
            for fan in commenters {
                let content = if idx == 0 {
                    "This looks absolutely stunning! 😍"
                } else {
                    "Amazing content as always! 🔥"
                };
                let comment = factory.create_comment(
                    &post_id,
                    &fan.id,
                    CommentOverrides {
                        content: Some(content.to_string()),
                        ..CommentOverrides::default()
                    },
                );
                store.insert_comment(comment);
            }
        }
    }

    let marcus_posts = factory.create_posts(6, &marcus.id);
    for (idx, mut post) in marcus_posts.into_iter().enumerate() {
        if idx == 0 {
            post.visibility = PostVisibility::Subscribers;
            post.is_pinned = true;
            post.content = "📸 New photo series dropping soon! Subscribers get early access to \
                            my latest nightlife collection."
                .to_string();
        }
        let post_id = post.id.clone();
        store.insert_post(post);

        if idx < 2 {
            for fan in [&emma, &additional_fans[0]] {
                let comment =
                    factory.create_comment(&post_id, &fan.id, CommentOverrides::default());
                store.insert_comment(comment);
            }
        }
    }

    for creator in &additional_creators {
        for post in factory.create_posts(3, &creator.id) {
            store.insert_post(post);
        }
    }

    // -- Subscriptions -----------------------------------------------------
    //
    // Emma's relationship to Sophia and Marcus lives on her subscriptions
    // list (set above): the guided demo walks through subscribing her live,
    // which must find no pre-existing active record. The additional fans
    // get real records, round-robin across the creator pool.

    for (idx, fan) in additional_fans.iter().take(5).enumerate() {
        let creator = all_creators[idx % all_creators.len()];
        let subscription = factory.create_subscription(
            &fan.id,
            &creator.id,
            SubscriptionOverrides {
                status: Some(SubscriptionStatus::Active),
                ..SubscriptionOverrides::default()
            },
        );
        store.insert_subscription(subscription);
    }

    // -- Transactions ------------------------------------------------------

    store.insert_transaction(factory.create_transaction(
        &emma.id,
        &sophia.id,
        TransactionOverrides {
            kind: Some(TransactionKind::Subscription),
            amount: Some(29.99),
            status: Some(TransactionStatus::Completed),
            description: Some("Icon tier monthly subscription".to_string()),
            ..TransactionOverrides::default()
        },
    ));
    store.insert_transaction(factory.create_transaction(
        &emma.id,
        &marcus.id,
        TransactionOverrides {
            kind: Some(TransactionKind::Subscription),
            amount: Some(9.99),
            status: Some(TransactionStatus::Completed),
            description: Some("Creator tier monthly subscription".to_string()),
            ..TransactionOverrides::default()
        },
    ));
    store.insert_transaction(factory.create_transaction(
        &emma.id,
        &sophia.id,
        TransactionOverrides {
            kind: Some(TransactionKind::Tip),
            amount: Some(50.00),
            status: Some(TransactionStatus::Completed),
            description: Some("Tip from fan".to_string()),
            ..TransactionOverrides::default()
        },
    ));
    store.insert_transaction(factory.create_transaction(
        &additional_fans[0].id,
        &marcus.id,
        TransactionOverrides {
            kind: Some(TransactionKind::Tip),
            amount: Some(25.00),
            status: Some(TransactionStatus::Completed),
            description: Some("Tip from fan".to_string()),
            ..TransactionOverrides::default()
        },
    ));

    // Randomized payment history for Sophia's earnings page.
    let history_fans: Vec<&User> = std::iter::once(&emma).chain(additional_fans.iter()).collect();
    for i in 0..20 {
        let fan = history_fans[i % history_fans.len()];
        store.insert_transaction(factory.create_transaction(
            &fan.id,
            &sophia.id,
            TransactionOverrides::default(),
        ));
    }

    // -- Conversations & messages ------------------------------------------

    let emma_sophia = factory.create_conversation(
        vec![emma.id.clone(), sophia.id.clone()],
        ConversationOverrides {
            id: Some(ConversationId::from(EMMA_SOPHIA_CONVERSATION_ID)),
            ..ConversationOverrides::default()
        },
    );
    let emma_sophia_id = emma_sophia.id.clone();
    store.insert_conversation(emma_sophia);

    // Scripted messages carry explicit timestamps so the thread reads in
    // script order no matter what the generator draws.
    let scripted = [
        (
            &emma,
            "Hi Sophia! Loved your recent post about the rooftop event 😍",
            true,
            3 * HOUR_MS,
        ),
        (
            &sophia,
            "Thank you so much Emma! ✨ So glad you enjoyed it!",
            true,
            2 * HOUR_MS,
        ),
        (
            &emma,
            "Will you be hosting another event soon? I'd love to attend!",
            false,
            HOUR_MS,
        ),
    ];
    for (sender, content, is_read, age_ms) in scripted {
        let message = factory.create_message(
            &emma_sophia_id,
            &sender.id,
            MessageOverrides {
                content: Some(content.to_string()),
                is_read: Some(is_read),
                created_at: Some(DEMO_EPOCH.minus(age_ms)),
            },
        );
        store.insert_message(message);
    }

    let emma_marcus = factory.create_conversation(
        vec![emma.id.clone(), marcus.id.clone()],
        ConversationOverrides {
            id: Some(ConversationId::from(EMMA_MARCUS_CONVERSATION_ID)),
            ..ConversationOverrides::default()
        },
    );
    let emma_marcus_id = emma_marcus.id.clone();
    store.insert_conversation(emma_marcus);

    let scripted = [
        (&emma, "Your photography is incredible! 📸", true, 24 * HOUR_MS),
        (&marcus, "Thanks! I appreciate the support 🙏", true, 23 * HOUR_MS),
    ];
    for (sender, content, is_read, age_ms) in scripted {
        let message = factory.create_message(
            &emma_marcus_id,
            &sender.id,
            MessageOverrides {
                content: Some(content.to_string()),
                is_read: Some(is_read),
                created_at: Some(DEMO_EPOCH.minus(age_ms)),
            },
        );
        store.insert_message(message);
    }

    // -- Notifications -----------------------------------------------------

    let sophia_notifications = [
        (
            NotificationKind::NewSubscriber,
            "Emma Rodriguez just subscribed to your Icon tier!",
            false,
        ),
        (
            NotificationKind::NewTip,
            "You received a $50 tip from Emma Rodriguez!",
            false,
        ),
        (
            NotificationKind::NewComment,
            "Emma Rodriguez commented on your post",
            true,
        ),
        (
            NotificationKind::NewMessage,
            "You have a new message from Emma Rodriguez",
            false,
        ),
    ];
    for (kind, message, is_read) in sophia_notifications {
        let notification = factory.create_notification(
            &sophia.id,
            NotificationOverrides {
                kind: Some(kind),
                message: Some(message.to_string()),
                is_read: Some(is_read),
                ..NotificationOverrides::default()
            },
        );
        store.insert_notification(notification);
    }
    store.insert_notification(factory.create_notification(
        &emma.id,
        NotificationOverrides {
            kind: Some(NotificationKind::NewMessage),
            message: Some("Sophia Laurent replied to your message".to_string()),
            is_read: Some(true),
            ..NotificationOverrides::default()
        },
    ));

    // -- Analytics ---------------------------------------------------------

    store.set_analytics(factory.create_analytics(&sophia.id, AnalyticsPeriod::Month));
    store.set_analytics(factory.create_analytics(&marcus.id, AnalyticsPeriod::Month));

    let (users, posts, subscriptions, conversations) = store.census();
    tracing::info!(
        users,
        posts,
        subscriptions,
        conversations,
        "demo database seeded"
    );
}
