//! Fixed word tables the factories draw generated text from.
//!
//! The tables are data, not behavior: changing an entry changes every
//! seeded fixture, so entries are append-only in practice.

/// First names used for generated accounts.
pub const FIRST_NAMES: [&str; 24] = [
    "Ava", "Liam", "Noah", "Mia", "Lucas", "Zoe", "Ethan", "Chloe", "Mason", "Isla", "Logan",
    "Ruby", "Aiden", "Nora", "Elijah", "Luna", "Carter", "Hazel", "Julian", "Ivy", "Leo", "Stella",
    "Owen", "Violet",
];

/// Last names used for generated accounts.
pub const LAST_NAMES: [&str; 24] = [
    "Nguyen", "Patel", "Garcia", "Kim", "Okafor", "Silva", "Dubois", "Rossi", "Tanaka", "Novak",
    "Haddad", "Jensen", "Costa", "Moreau", "Schmidt", "Ivanov", "Park", "Diallo", "Fischer",
    "Romano", "Sato", "Lindgren", "Vargas", "Keller",
];

/// Email domains for generated accounts (demo personas use `cabana.demo`).
pub const EMAIL_DOMAINS: [&str; 4] = ["example.com", "mailbox.dev", "inbox.test", "postbox.io"];

/// Lorem-style vocabulary for bios, post bodies, comments and messages.
pub const WORDS: [&str; 48] = [
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "tempor",
    "incididunt", "labore", "dolore", "magna", "aliqua", "enim", "minim", "veniam", "quis",
    "nostrud", "exercitation", "ullamco", "laboris", "nisi", "aliquip", "commodo", "consequat",
    "duis", "aute", "irure", "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur",
    "excepteur", "sint", "occaecat", "cupidatat", "proident", "sunt", "culpa", "officia",
    "deserunt", "mollit", "anim",
];
