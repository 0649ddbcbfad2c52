//! Profile use-case service.
//!
//! # Responsibility
//! - Serve chronological history and the seven-day strip.
//! - Manage the username slot (set, read, logout).
//! - Clear all journal data.
//!
//! # Invariants
//! - `clear_all_data` removes entries only; the username survives.
//! - `logout` removes the username only; entries survive.

use crate::calendar::strip::{last_seven_days, DayStripItem};
use crate::model::entry::JournalEntry;
use crate::repo::entry_repo::EntryRepository;
use crate::repo::kv_store::{KeyValueStore, RepoError, RepoResult};
use chrono::{DateTime, TimeZone};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum ProfileServiceError {
    /// Username is empty after trimming.
    InvalidUsername,
    Repo(RepoError),
}

impl Display for ProfileServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidUsername => write!(f, "username must not be empty"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ProfileServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidUsername => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for ProfileServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

pub struct ProfileService<S: KeyValueStore> {
    repo: EntryRepository<S>,
}

impl<S: KeyValueStore> ProfileService<S> {
    pub fn new(store: S) -> Self {
        Self {
            repo: EntryRepository::new(store),
        }
    }

    /// All entries sorted oldest first; equal timestamps keep entry order.
    pub fn history(&self) -> RepoResult<Vec<JournalEntry>> {
        let mut entries = self.repo.load_entries()?;
        entries.sort_by_key(|entry| entry.timestamp);
        Ok(entries)
    }

    /// Seven local days ending today, built from chronological history.
    pub fn seven_day_strip<Tz: TimeZone>(
        &self,
        now: &DateTime<Tz>,
    ) -> RepoResult<Vec<DayStripItem>> {
        let history = self.history()?;
        Ok(last_seven_days(&history, now.date_naive(), &now.timezone()))
    }

    pub fn username(&self) -> RepoResult<Option<String>> {
        self.repo.load_username()
    }

    /// Stores the trimmed username and returns it.
    pub fn set_username(&self, username: &str) -> Result<String, ProfileServiceError> {
        let trimmed = username.trim();
        if trimmed.is_empty() {
            return Err(ProfileServiceError::InvalidUsername);
        }
        self.repo.save_username(trimmed)?;
        Ok(trimmed.to_string())
    }

    pub fn logout(&self) -> RepoResult<()> {
        self.repo.remove_username()?;
        info!("event=logout module=service status=ok");
        Ok(())
    }

    pub fn clear_all_data(&self) -> RepoResult<()> {
        self.repo.clear_entries()?;
        info!("event=clear_data module=service status=ok");
        Ok(())
    }
}
