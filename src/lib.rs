//! Stringvault - content-addressed string store with derived-property
//! analysis and filtered lookup over HTTP
//!
//! Stored strings are immutable records identified by the SHA-256 hash of
//! their value. At creation time the analyzer derives a fixed set of
//! properties (length in code points, palindrome flag, unique-character
//! count, word count, character-frequency map); listings can then be
//! narrowed either by structured query parameters or by a small
//! natural-language query translator.
//!
//! ## Data flow
//!
//! ```text
//! inbound text ──▶ analyzer ──▶ StringRecord ──▶ store (create)
//!                                                  │
//! GET /strings[?filters] ──▶ store (all) ──▶ filter engine ──▶ response
//! GET /strings/natural    ──▶ nlq parser ──┘
//! ```
//!
//! ## Modules
//!
//! - [`analyzer`]: pure string analysis and content hashing
//! - [`filter`]: validated filter sets and the AND-composed filter engine
//! - [`nlq`]: fixed-pattern natural-language query parsing
//! - [`strings`]: record types, durable JSON store, HTTP handlers
//! - [`api`]: the assembled axum application
//! - [`config`]: configuration management
//! - [`error`]: crate-wide error type

pub mod analyzer;
pub mod api;
pub mod config;
pub mod error;
pub mod filter;
pub mod nlq;
pub mod strings;

pub use config::ServiceConfig;
pub use error::{Error, Result};
