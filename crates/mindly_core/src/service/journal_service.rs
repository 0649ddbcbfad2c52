//! Journal check-in use-case service.
//!
//! # Responsibility
//! - Record a mood entry from the check-in screen.
//! - Serve per-day entry lists for the journal and home screens.
//!
//! # Invariants
//! - At most `DAILY_ENTRY_LIMIT` entries per local day are written through
//!   this service. Rejected saves write nothing.
//! - Saved entries always reference a catalog emotion.

use crate::model::emotion::EmotionCatalog;
use crate::model::entry::{EntryValidationError, JournalEntry};
use crate::repo::entry_repo::EntryRepository;
use crate::repo::kv_store::{KeyValueStore, RepoError, RepoResult};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Maximum check-ins per local calendar day.
pub const DAILY_ENTRY_LIMIT: usize = 2;

/// Service error for journal use-cases.
#[derive(Debug)]
pub enum JournalServiceError {
    /// Save attempted without choosing an emotion.
    MissingEmotionSelection,
    /// Chosen emotion is not part of the catalog.
    UnknownEmotion(String),
    /// The local day of the save already holds `limit` entries.
    DailyLimitExceeded { date: NaiveDate, limit: usize },
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for JournalServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingEmotionSelection => {
                write!(f, "please select an emotion before saving")
            }
            Self::UnknownEmotion(id) => write!(f, "unknown emotion: `{id}`"),
            Self::DailyLimitExceeded { date, limit } => {
                write!(f, "already checked in {limit} times on {date}")
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for JournalServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for JournalServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<EntryValidationError> for JournalServiceError {
    fn from(value: EntryValidationError) -> Self {
        match value {
            EntryValidationError::MissingEmotion => Self::MissingEmotionSelection,
            EntryValidationError::UnknownEmotion(id) => Self::UnknownEmotion(id),
        }
    }
}

/// A stored check-in plus the room left on its local day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckIn {
    pub entry: JournalEntry,
    pub remaining_today: usize,
}

/// Journal service facade over the entry store.
pub struct JournalService<S: KeyValueStore> {
    repo: EntryRepository<S>,
    catalog: EmotionCatalog,
}

impl<S: KeyValueStore> JournalService<S> {
    /// Creates a service using the built-in emotion catalog.
    pub fn new(store: S) -> Self {
        Self::with_catalog(store, EmotionCatalog::builtin())
    }

    pub fn with_catalog(store: S, catalog: EmotionCatalog) -> Self {
        Self {
            repo: EntryRepository::new(store),
            catalog,
        }
    }

    /// Appends one check-in stamped with `now`.
    ///
    /// `note` is trimmed; a blank note is stored as absent. The daily limit
    /// is evaluated on the local day of `now`, and the returned
    /// `remaining_today` comes from the same list that was written.
    pub fn save_mood<Tz: TimeZone>(
        &self,
        emotion: Option<&str>,
        note: &str,
        now: &DateTime<Tz>,
    ) -> Result<CheckIn, JournalServiceError> {
        let emotion = emotion
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(JournalServiceError::MissingEmotionSelection)?;

        let entry = JournalEntry::new(now.with_timezone(&Utc), emotion, normalize_note(note));
        entry.validate(&self.catalog)?;

        let mut entries = self.repo.load_entries()?;
        let today = now.date_naive();
        let tz = now.timezone();
        let same_day = entries.iter().filter(|e| e.is_on(today, &tz)).count();
        if same_day >= DAILY_ENTRY_LIMIT {
            warn!(
                "event=mood_save module=service status=rejected reason=daily_limit count={}",
                same_day
            );
            return Err(JournalServiceError::DailyLimitExceeded {
                date: today,
                limit: DAILY_ENTRY_LIMIT,
            });
        }

        entries.push(entry.clone());
        self.repo.save_entries(&entries)?;
        info!(
            "event=mood_save module=service status=ok emotion={} has_note={} total={}",
            entry.emotion_id,
            entry.note.is_some(),
            entries.len()
        );
        Ok(CheckIn {
            entry,
            remaining_today: DAILY_ENTRY_LIMIT - (same_day + 1),
        })
    }

    /// Entries whose local date in `tz` equals `date`, in entry order.
    pub fn entries_on<Tz: TimeZone>(
        &self,
        date: NaiveDate,
        tz: &Tz,
    ) -> RepoResult<Vec<JournalEntry>> {
        let mut entries = self.repo.load_entries()?;
        entries.retain(|entry| entry.is_on(date, tz));
        Ok(entries)
    }

    /// Entries on the local day of `now`.
    pub fn today_entries<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> RepoResult<Vec<JournalEntry>> {
        self.entries_on(now.date_naive(), &now.timezone())
    }

    /// How many more check-ins the local day of `now` accepts.
    pub fn remaining_today<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> RepoResult<usize> {
        let used = self.today_entries(now)?.len();
        Ok(DAILY_ENTRY_LIMIT.saturating_sub(used))
    }

    pub fn catalog(&self) -> &EmotionCatalog {
        &self.catalog
    }
}

/// Blank notes become `None`, so the `note` field is omitted on disk.
/// Older app builds wrote `"note": ""` instead; reads still accept that.
fn normalize_note(note: &str) -> Option<String> {
    let trimmed = note.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_note;

    #[test]
    fn blank_notes_are_dropped_and_others_trimmed() {
        assert_eq!(normalize_note("   "), None);
        assert_eq!(normalize_note(" slept well \n"), Some("slept well".to_string()));
    }
}
