//! Calendar month value type and Gregorian helpers.

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// A (year, month) pair with `month` in `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Returns `None` when `month` is outside `1..=12` or the year is not
    /// representable.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        // Constructors guarantee day 1 exists.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> NaiveDate {
        self.first_day()
            .with_day(self.days_in_month())
            .unwrap_or_else(|| self.first_day())
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// Weekday of day 1, with 0 = Sunday .. 6 = Saturday.
    pub fn first_weekday(&self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Moves by `delta` months, rolling the year over as needed.
    ///
    /// Saturates at the range chrono can represent.
    pub fn shift(&self, delta: i32) -> Self {
        let first = self.first_day();
        let months = Months::new(delta.unsigned_abs());
        let shifted = if delta >= 0 {
            first.checked_add_months(months)
        } else {
            first.checked_sub_months(months)
        };
        shifted.map_or(*self, Self::from_date)
    }

    pub fn next(&self) -> Self {
        self.shift(1)
    }

    pub fn previous(&self) -> Self {
        self.shift(-1)
    }
}

impl Display for YearMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Proleptic Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` of `year`; 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::{days_in_month, is_leap_year, YearMonth};

    #[test]
    fn leap_years_follow_gregorian_rule() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn shift_rolls_over_year_boundaries() {
        let december = YearMonth::new(2023, 12).unwrap();
        assert_eq!(december.next(), YearMonth::new(2024, 1).unwrap());
        assert_eq!(december.next().previous(), december);
        assert_eq!(
            YearMonth::new(2024, 1).unwrap().previous(),
            YearMonth::new(2023, 12).unwrap()
        );
        assert_eq!(december.shift(-25), YearMonth::new(2021, 11).unwrap());
    }

    #[test]
    fn first_weekday_counts_from_sunday() {
        // 2024-04-01 is a Monday, 2024-09-01 a Sunday.
        assert_eq!(YearMonth::new(2024, 4).unwrap().first_weekday(), 1);
        assert_eq!(YearMonth::new(2024, 9).unwrap().first_weekday(), 0);
    }

    #[test]
    fn new_rejects_out_of_range_month() {
        assert!(YearMonth::new(2024, 0).is_none());
        assert!(YearMonth::new(2024, 13).is_none());
    }
}
