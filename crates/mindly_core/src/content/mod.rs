//! Locale-keyed content shown next to journal data.
//!
//! # Responsibility
//! - Resolve device locale tags to bundled locales.
//! - Serve the daily quote and per-emotion activity suggestions.
//!
//! # Invariants
//! - Tables are static; unsupported locales fall back to English.

pub mod activities;
pub mod locale;
pub mod quotes;
