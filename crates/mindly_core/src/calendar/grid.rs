//! Month grid builder.
//!
//! # Invariants
//! - A grid has exactly `first_weekday + days_in_month` cells, padding first,
//!   no trailing padding.
//! - Day cells are in ascending day order.
//! - When several entries share a date, the first one in entry order colors
//!   the cell.

use crate::calendar::month::YearMonth;
use crate::model::entry::JournalEntry;
use chrono::{NaiveDate, TimeZone};
use serde::Serialize;

/// One unit of a rendered month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalendarCell {
    /// Leading blank before day 1.
    Padding,
    Day(DayCell),
}

impl CalendarCell {
    pub fn is_padding(&self) -> bool {
        matches!(self, Self::Padding)
    }

    pub fn as_day(&self) -> Option<&DayCell> {
        match self {
            Self::Day(day) => Some(day),
            Self::Padding => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_today: bool,
    pub is_selected: bool,
    /// Emotion of the first entry on this date, if any.
    pub emotion_id: Option<String>,
}

/// Builds the cells for `month`, resolving entry dates in `tz`.
pub fn build_month<Tz: TimeZone>(
    month: YearMonth,
    entries: &[JournalEntry],
    selected: Option<NaiveDate>,
    today: NaiveDate,
    tz: &Tz,
) -> Vec<CalendarCell> {
    let padding = month.first_weekday() as usize;
    let days = month.days_in_month();

    // Local dates of in-month entries, resolved once; keeps entry order.
    let in_month = entries
        .iter()
        .map(|entry| (entry.local_date(tz), entry.emotion_id.as_str()))
        .filter(|(date, _)| month.contains(*date))
        .collect::<Vec<_>>();

    let mut cells = Vec::with_capacity(padding + days as usize);
    cells.extend(std::iter::repeat(CalendarCell::Padding).take(padding));
    cells.extend(
        month
            .first_day()
            .iter_days()
            .take(days as usize)
            .map(|date| {
                let emotion_id = in_month
                    .iter()
                    .find(|(entry_date, _)| *entry_date == date)
                    .map(|(_, id)| (*id).to_string());
                CalendarCell::Day(DayCell {
                    date,
                    is_today: date == today,
                    is_selected: selected == Some(date),
                    emotion_id,
                })
            }),
    );
    cells
}

#[cfg(test)]
mod tests {
    use super::{build_month, CalendarCell};
    use crate::calendar::month::YearMonth;
    use crate::model::entry::JournalEntry;
    use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn april_2024_has_one_padding_cell_and_thirty_days() {
        let month = YearMonth::new(2024, 4).unwrap();
        let cells = build_month(month, &[], None, date(2024, 4, 15), &Utc);

        assert_eq!(cells.len(), 31);
        assert!(cells[0].is_padding());
        let first = cells[1].as_day().unwrap();
        assert_eq!(first.date, date(2024, 4, 1));
        assert_eq!(cells[30].as_day().unwrap().date, date(2024, 4, 30));
    }

    #[test]
    fn today_and_selection_ignore_time_of_day() {
        let month = YearMonth::new(2024, 4).unwrap();
        let cells = build_month(
            month,
            &[],
            Some(date(2024, 4, 3)),
            date(2024, 4, 15),
            &Utc,
        );
        let days: Vec<_> = cells.iter().filter_map(CalendarCell::as_day).collect();
        assert!(days[2].is_selected);
        assert!(days[14].is_today);
        assert_eq!(days.iter().filter(|d| d.is_selected).count(), 1);
        assert_eq!(days.iter().filter(|d| d.is_today).count(), 1);
    }

    #[test]
    fn first_entry_of_a_day_wins() {
        let entries = vec![
            JournalEntry::new(Utc.with_ymd_and_hms(2024, 4, 10, 18, 0, 0).unwrap(), "sad", None),
            JournalEntry::new(Utc.with_ymd_and_hms(2024, 4, 10, 9, 0, 0).unwrap(), "happy", None),
            JournalEntry::new(Utc.with_ymd_and_hms(2024, 5, 10, 9, 0, 0).unwrap(), "love", None),
        ];
        let month = YearMonth::new(2024, 4).unwrap();
        let cells = build_month(month, &entries, None, date(2024, 1, 1), &Utc);
        let tenth = cells[10].as_day().unwrap();
        assert_eq!(tenth.date, date(2024, 4, 10));
        assert_eq!(tenth.emotion_id.as_deref(), Some("sad"));
        assert!(cells
            .iter()
            .filter_map(CalendarCell::as_day)
            .all(|d| d.emotion_id.as_deref() != Some("love")));
    }

    #[test]
    fn entry_dates_use_local_time_zone() {
        let tz = FixedOffset::west_opt(5 * 3600).unwrap();
        let entries = vec![JournalEntry::new(
            Utc.with_ymd_and_hms(2024, 5, 1, 2, 0, 0).unwrap(),
            "tired",
            None,
        )];
        let month = YearMonth::new(2024, 4).unwrap();
        let cells = build_month(month, &entries, None, date(2024, 1, 1), &tz);
        let last = cells.last().and_then(CalendarCell::as_day).unwrap();
        assert_eq!(last.date, date(2024, 4, 30));
        assert_eq!(last.emotion_id.as_deref(), Some("tired"));
    }

    #[test]
    fn leap_february_grid_size() {
        // 2024-02-01 is a Thursday.
        let cells = build_month(YearMonth::new(2024, 2).unwrap(), &[], None, date(2024, 1, 1), &Utc);
        assert_eq!(cells.len(), 4 + 29);
    }
}
