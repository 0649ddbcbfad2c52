//! Closed time windows used to scope aggregation.
//!
//! # Responsibility
//! - Turn local calendar periods (day, week, month) into UTC instant ranges.
//!
//! # Invariants
//! - Windows are closed: both `start` and `end` are inclusive.
//! - Every boundary is derived from immutable inputs; computing a week's end
//!   never depends on a previously mutated start.
//! - Window constructors are total for any valid date and time zone.

use crate::calendar::month::YearMonth;
use chrono::{DateTime, Datelike, Days, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};

/// Wall-clock probing step used when local midnight falls in a DST gap.
const GAP_PROBE_STEP_MINUTES: i64 = 30;
const GAP_PROBE_MAX_STEPS: i64 = 8;

/// Closed interval `[start, end]` of UTC instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Window covering every representable instant.
    pub fn all_time() -> Self {
        Self {
            start: DateTime::<Utc>::MIN_UTC,
            end: DateTime::<Utc>::MAX_UTC,
        }
    }

    /// Local days `first..=last` in `tz`.
    pub fn dates<Tz: TimeZone>(first: NaiveDate, last: NaiveDate, tz: &Tz) -> Self {
        Self {
            start: start_of_day(first, tz),
            end: end_of_day(last, tz),
        }
    }

    /// One local calendar day.
    pub fn day<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Self {
        Self::dates(date, date, tz)
    }

    /// Day 1 00:00:00.000 through the last day 23:59:59.999, local time.
    pub fn month<Tz: TimeZone>(month: YearMonth, tz: &Tz) -> Self {
        Self::dates(month.first_day(), month.last_day(), tz)
    }

    /// Sunday 00:00:00.000 through Saturday 23:59:59.999 of the week
    /// containing `now`, in `now`'s time zone.
    pub fn week_containing<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        let tz = now.timezone();
        let sunday = week_start(now.date_naive());
        let saturday = sunday.checked_add_days(Days::new(6)).unwrap_or(NaiveDate::MAX);
        Self::dates(sunday, saturday, &tz)
    }

    /// Today's local day in `now`'s time zone.
    pub fn today<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        Self::day(now.date_naive(), &now.timezone())
    }

    pub fn contains(&self, instant: &DateTime<Utc>) -> bool {
        *instant >= self.start && *instant <= self.end
    }
}

/// Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_sunday());
    date.checked_sub_days(Days::new(offset))
        .unwrap_or(NaiveDate::MIN)
}

/// First instant of `date` in `tz`.
///
/// Ambiguous midnights resolve to the earlier instant. Midnights skipped by
/// a DST jump resolve to the first valid wall-clock time after the gap.
pub fn start_of_day<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);
    match tz.from_local_datetime(&midnight) {
        LocalResult::Single(instant) => instant.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => (1..=GAP_PROBE_MAX_STEPS)
            .find_map(|step| {
                let probe = midnight + Duration::minutes(step * GAP_PROBE_STEP_MINUTES);
                tz.from_local_datetime(&probe).earliest()
            })
            .map(|instant| instant.with_timezone(&Utc))
            .unwrap_or_else(|| midnight.and_utc()),
    }
}

/// Last millisecond of `date` in `tz`.
pub fn end_of_day<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> DateTime<Utc> {
    match date.succ_opt() {
        Some(next) => start_of_day(next, tz) - Duration::milliseconds(1),
        None => DateTime::<Utc>::MAX_UTC,
    }
}
