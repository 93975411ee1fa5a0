// Life of a request:
// 1. Caller invokes a MockApi operation with plain argument values
// 2. Simulated network: awaited random delay, then possibly an injected
//    transient failure, always before any store access
// 3. Handler validates, applies authorization, reads/writes the Store
//    (secondary indexes and denormalized aggregates update in the same
//    step)
// 4. Outcome wrapped in the uniform {success, data?, error?, message?}
//    envelope
//
// System components:
//  - Seeded entity factories (deterministic generation)
//  - In-memory store (primary maps + secondary indexes + aggregates)
//  - Mock API layer (delay/error injection, validation, authorization)
//  - Demo fixture seeder (personas + reproducible world graph)
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod api;
pub mod auth;
pub mod config;
pub mod factory;
pub mod fixtures;
pub mod session;
pub mod store;
pub mod types;

mod e2e_tests;

pub use api::{ApiConfig, MockApi};
pub use store::Store;
