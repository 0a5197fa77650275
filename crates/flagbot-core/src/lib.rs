//! Core domain + application logic for the flag-reaction translation bot.
//!
//! This crate is intentionally framework-agnostic. Slack and the translation
//! provider live behind ports (traits) implemented in adapter crates.

pub mod config;
pub mod domain;
pub mod errors;
pub mod formatting;
pub mod language;
pub mod logging;
pub mod messaging;
pub mod ports;
pub mod reaction;

pub use errors::{Error, Result};
