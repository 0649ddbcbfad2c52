//! Calendar grid builder and month arithmetic.
//!
//! # Responsibility
//! - Build month grids (padding + day cells) from the entry list.
//! - Provide month navigation and Gregorian helpers.
//! - Build the seven-day history strip.
//!
//! # Invariants
//! - Grids are rebuilt from scratch on every call; nothing is cached.
//! - Week starts on Sunday.

pub mod grid;
pub mod month;
pub mod strip;
