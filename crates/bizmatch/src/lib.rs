//! Business viability evaluation for the BizMatch investor marketplace.
//!
//! The [`evaluation`] module talks to an external chat-completion API and
//! normalizes its answer into a rating; [`registry`] keeps the session's
//! business records and investor matches behind an injectable store.

pub mod config;
pub mod error;
pub mod evaluation;
pub mod registry;
pub mod telemetry;
