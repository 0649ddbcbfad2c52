//! Seven-day history strip shown on the profile screen.

use crate::model::entry::JournalEntry;
use chrono::{Days, NaiveDate, TimeZone};
use serde::Serialize;

pub const STRIP_DAYS: u64 = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayStripItem {
    pub date: NaiveDate,
    /// `None` renders as the "no data" swatch.
    pub emotion_id: Option<String>,
    pub note: Option<String>,
}

/// Returns the seven local days ending at `today`, oldest first.
///
/// Each day shows the first entry on that date in the order given.
pub fn last_seven_days<Tz: TimeZone>(
    entries: &[JournalEntry],
    today: NaiveDate,
    tz: &Tz,
) -> Vec<DayStripItem> {
    (0..STRIP_DAYS)
        .rev()
        .filter_map(|back| today.checked_sub_days(Days::new(back)))
        .map(|date| {
            let first = entries.iter().find(|entry| entry.is_on(date, tz));
            DayStripItem {
                date,
                emotion_id: first.map(|entry| entry.emotion_id.clone()),
                note: first.and_then(|entry| entry.note.clone()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::last_seven_days;
    use crate::model::entry::JournalEntry;
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn strip_is_oldest_first_and_ends_today() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        let entries = vec![
            JournalEntry::new(
                Utc.with_ymd_and_hms(2024, 2, 29, 8, 0, 0).unwrap(),
                "love",
                Some("leap day".to_string()),
            ),
            JournalEntry::new(Utc.with_ymd_and_hms(2024, 2, 29, 20, 0, 0).unwrap(), "sad", None),
        ];

        let strip = last_seven_days(&entries, today, &Utc);
        assert_eq!(strip.len(), 7);
        assert_eq!(strip[0].date, NaiveDate::from_ymd_opt(2024, 2, 25).unwrap());
        assert_eq!(strip[6].date, today);

        let leap = &strip[4];
        assert_eq!(leap.date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(leap.emotion_id.as_deref(), Some("love"));
        assert_eq!(leap.note.as_deref(), Some("leap day"));
        assert!(strip[6].emotion_id.is_none());
    }
}
