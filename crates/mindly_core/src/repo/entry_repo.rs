//! Entry store adapter over key-value slots.
//!
//! # Responsibility
//! - Load and persist the whole entry list from the `moodEntries` slot.
//! - Load and persist the optional `username` slot.
//!
//! # Invariants
//! - The entry list is read and written wholesale; order is insertion order.
//! - Malformed stored data never fails a read: an unparsable slot yields an
//!   empty list, and undecodable array elements are skipped.
//! - Logs carry counts only, never note text or usernames.

use crate::model::entry::JournalEntry;
use crate::repo::kv_store::{KeyValueStore, RepoResult};
use log::{debug, warn};
use serde_json::Value;

/// Slot holding the JSON array of entries.
pub const ENTRIES_SLOT: &str = "moodEntries";
/// Slot holding the plain-text username.
pub const USERNAME_SLOT: &str = "username";

/// Typed access to journal slots on top of any `KeyValueStore`.
pub struct EntryRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> EntryRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads every stored entry in insertion order.
    ///
    /// Returns an empty list when the slot is missing or malformed.
    pub fn load_entries(&self) -> RepoResult<Vec<JournalEntry>> {
        let Some(raw) = self.store.get(ENTRIES_SLOT)? else {
            return Ok(Vec::new());
        };
        Ok(decode_entries(&raw))
    }

    /// Replaces the stored list with `entries`.
    pub fn save_entries(&self, entries: &[JournalEntry]) -> RepoResult<()> {
        let raw = encode_entries(entries)?;
        self.store.set(ENTRIES_SLOT, &raw)?;
        debug!(
            "event=entries_save module=repo status=ok count={}",
            entries.len()
        );
        Ok(())
    }

    /// Removes the entry slot in one write.
    pub fn clear_entries(&self) -> RepoResult<()> {
        self.store.remove(ENTRIES_SLOT)
    }

    /// Returns the stored username; blank values count as unset.
    pub fn load_username(&self) -> RepoResult<Option<String>> {
        let value = self.store.get(USERNAME_SLOT)?;
        Ok(value.filter(|name| !name.trim().is_empty()))
    }

    pub fn save_username(&self, username: &str) -> RepoResult<()> {
        self.store.set(USERNAME_SLOT, username)
    }

    pub fn remove_username(&self) -> RepoResult<()> {
        self.store.remove(USERNAME_SLOT)
    }
}

/// Serializes entries to the slot payload.
pub fn encode_entries(entries: &[JournalEntry]) -> RepoResult<String> {
    Ok(serde_json::to_string(entries)?)
}

/// Parses a slot payload, tolerating malformed content.
pub fn decode_entries(raw: &str) -> Vec<JournalEntry> {
    let items = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items,
        Ok(_) => {
            warn!("event=entries_load module=repo status=degraded reason=not_array");
            return Vec::new();
        }
        Err(err) => {
            warn!(
                "event=entries_load module=repo status=degraded reason=invalid_json line={} column={}",
                err.line(),
                err.column()
            );
            return Vec::new();
        }
    };

    let total = items.len();
    let entries = items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<JournalEntry>(item).ok())
        .collect::<Vec<_>>();

    let skipped = total - entries.len();
    if skipped > 0 {
        warn!(
            "event=entries_load module=repo status=degraded reason=invalid_items skipped={} kept={}",
            skipped,
            entries.len()
        );
    }
    entries
}
