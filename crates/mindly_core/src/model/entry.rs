//! Journal entry model.
//!
//! # Responsibility
//! - Define the canonical mood observation persisted in the entry slot.
//! - Own the wire shape (`date`, `emotion`, `note`) shared with data written
//!   by earlier app versions.
//!
//! # Invariants
//! - `timestamp` is stored in UTC with millisecond precision.
//! - Entries are never updated in place; only appended or bulk-cleared.
//! - Write paths must call `JournalEntry::validate()` before persistence.

use crate::model::emotion::EmotionCatalog;
use chrono::{DateTime, NaiveDate, SubsecRound, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation failures for journal entry writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    /// `emotion` is empty or whitespace.
    MissingEmotion,
    /// `emotion` does not reference a catalog definition.
    UnknownEmotion(String),
}

impl Display for EntryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingEmotion => write!(f, "entry emotion must not be empty"),
            Self::UnknownEmotion(id) => write!(f, "entry emotion `{id}` is not in the catalog"),
        }
    }
}

impl Error for EntryValidationError {}

/// One recorded mood observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Serialized as `date` in `YYYY-MM-DDTHH:MM:SS.mmmZ` form.
    #[serde(rename = "date", with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
    /// Serialized as `emotion`. May reference ids unknown to this build.
    #[serde(rename = "emotion")]
    pub emotion_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl JournalEntry {
    /// Creates an entry, truncating `timestamp` to millisecond precision.
    ///
    /// Does not validate `emotion_id`; see `validate`.
    pub fn new(
        timestamp: DateTime<Utc>,
        emotion_id: impl Into<String>,
        note: Option<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.trunc_subsecs(3),
            emotion_id: emotion_id.into(),
            note,
        }
    }

    /// Checks write-time invariants against `catalog`.
    pub fn validate(&self, catalog: &EmotionCatalog) -> Result<(), EntryValidationError> {
        if self.emotion_id.trim().is_empty() {
            return Err(EntryValidationError::MissingEmotion);
        }
        if !catalog.contains(&self.emotion_id) {
            return Err(EntryValidationError::UnknownEmotion(self.emotion_id.clone()));
        }
        Ok(())
    }

    /// Calendar date of this entry in `tz`.
    pub fn local_date<Tz: TimeZone>(&self, tz: &Tz) -> NaiveDate {
        self.timestamp.with_timezone(tz).date_naive()
    }

    /// Whether the entry falls on `date` in `tz`, ignoring time of day.
    pub fn is_on<Tz: TimeZone>(&self, date: NaiveDate, tz: &Tz) -> bool {
        self.local_date(tz) == date
    }
}

/// Serde adapter for `date` fields.
///
/// Writes JavaScript `toISOString` shape; reads any RFC 3339 instant.
pub(crate) mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid ISO-8601 date `{raw}`")))
    }

    pub fn format(value: &DateTime<Utc>) -> String {
        value.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(raw.trim())
            .ok()
            .map(|parsed| parsed.with_timezone(&Utc))
    }
}

#[cfg(test)]
mod tests {
    use super::{iso_millis, EntryValidationError, JournalEntry};
    use crate::model::emotion::EmotionCatalog;
    use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};

    #[test]
    fn new_truncates_to_milliseconds() {
        let ts = Utc
            .with_ymd_and_hms(2024, 4, 10, 9, 0, 0)
            .unwrap()
            .checked_add_signed(chrono::Duration::nanoseconds(1_234_567))
            .unwrap();
        let entry = JournalEntry::new(ts, "happy", None);
        assert_eq!(iso_millis::format(&entry.timestamp), "2024-04-10T09:00:00.001Z");
    }

    #[test]
    fn parse_accepts_offsets_and_plain_seconds() {
        let a = iso_millis::parse("2024-04-10T09:00:00Z").unwrap();
        let b = iso_millis::parse("2024-04-10T11:00:00+02:00").unwrap();
        assert_eq!(a, b);
        assert!(iso_millis::parse("yesterday").is_none());
    }

    #[test]
    fn validate_rejects_blank_and_unknown_emotions() {
        let catalog = EmotionCatalog::builtin();
        let now = Utc.with_ymd_and_hms(2024, 4, 10, 9, 0, 0).unwrap();

        let blank = JournalEntry::new(now, "  ", None);
        assert_eq!(
            blank.validate(&catalog),
            Err(EntryValidationError::MissingEmotion)
        );

        let unknown = JournalEntry::new(now, "bored", None);
        assert_eq!(
            unknown.validate(&catalog),
            Err(EntryValidationError::UnknownEmotion("bored".to_string()))
        );

        assert!(JournalEntry::new(now, "sad", None).validate(&catalog).is_ok());
    }

    #[test]
    fn local_date_follows_time_zone() {
        let entry = JournalEntry::new(
            Utc.with_ymd_and_hms(2024, 4, 10, 23, 30, 0).unwrap(),
            "happy",
            None,
        );
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(
            entry.local_date(&Utc),
            NaiveDate::from_ymd_opt(2024, 4, 10).unwrap()
        );
        assert_eq!(
            entry.local_date(&plus_two),
            NaiveDate::from_ymd_opt(2024, 4, 11).unwrap()
        );
    }
}
