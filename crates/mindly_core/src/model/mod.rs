//! Domain model for mood journaling.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep persisted shapes compatible with data written by earlier app builds.
//!
//! # Invariants
//! - Emotion catalog is static and never mutated at runtime.
//! - Entries are append-only; deletion is bulk only.

pub mod emotion;
pub mod entry;
