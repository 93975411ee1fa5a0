//! End-to-end tests at the API envelope level.
//!
//! Each test file covers one scenario family, driving the full
//! delay → injection → validation → store → envelope cycle against
//! freshly seeded demo data.

#![cfg(test)]

mod helpers;

mod test_auth;
mod test_determinism;
mod test_error_injection;
mod test_feed;
mod test_messaging;
mod test_notifications;
mod test_posts;
mod test_seed_scenarios;
mod test_subscriptions;
mod test_tips;
