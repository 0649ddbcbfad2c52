//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the key-value slot contract used as device storage.
//! - Map journal data onto named slots, isolating JSON and SQL details from
//!   services.
//!
//! # Invariants
//! - Repository APIs surface storage failures as `RepoError`.
//! - Malformed slot payloads are degraded to empty data, not errors.

pub mod entry_repo;
pub mod kv_store;
