//! Insights use-case service.
//!
//! # Responsibility
//! - Build monthly, weekly, and all-time summaries from stored entries.
//! - Build the journal screen's month view (grid plus monthly stats).
//!
//! # Invariants
//! - Every call re-reads the entry slot; results are immutable snapshots.

use crate::calendar::grid::{build_month, CalendarCell};
use crate::calendar::month::YearMonth;
use crate::model::emotion::EmotionCatalog;
use crate::model::entry::JournalEntry;
use crate::repo::entry_repo::EntryRepository;
use crate::repo::kv_store::{KeyValueStore, RepoResult};
use crate::stats::aggregate::{compute_stats, AggregateStat};
use crate::stats::trend::{classify_trend, Trend, TrendScope};
use crate::stats::window::TimeWindow;
use chrono::{DateTime, NaiveDate, TimeZone};

/// Stats and trend for one window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodSummary {
    pub window: TimeWindow,
    pub stats: Vec<AggregateStat>,
    /// Number of entries inside `window`.
    pub total: u32,
    pub trend: Trend,
    pub trend_label_key: &'static str,
}

impl PeriodSummary {
    fn from_entries(
        entries: &[JournalEntry],
        window: TimeWindow,
        scope: TrendScope,
        catalog: &EmotionCatalog,
    ) -> Self {
        let stats = compute_stats(entries, &window, catalog);
        let total: u32 = stats.iter().map(|stat| stat.count).sum();
        let trend = classify_trend(&stats);
        Self {
            window,
            stats,
            total,
            trend,
            trend_label_key: trend.label_key(scope),
        }
    }

    pub fn has_data(&self) -> bool {
        !self.stats.is_empty()
    }
}

/// Month grid with the stats shown under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMonthView {
    pub month: YearMonth,
    /// 0 = Sunday .. 6 = Saturday.
    pub first_weekday: u32,
    pub cells: Vec<CalendarCell>,
    pub stats: Vec<AggregateStat>,
}

pub struct InsightsService<S: KeyValueStore> {
    repo: EntryRepository<S>,
    catalog: EmotionCatalog,
}

impl<S: KeyValueStore> InsightsService<S> {
    pub fn new(store: S) -> Self {
        Self::with_catalog(store, EmotionCatalog::builtin())
    }

    pub fn with_catalog(store: S, catalog: EmotionCatalog) -> Self {
        Self {
            repo: EntryRepository::new(store),
            catalog,
        }
    }

    /// Stats for one local calendar month.
    pub fn monthly_stats<Tz: TimeZone>(
        &self,
        month: YearMonth,
        tz: &Tz,
    ) -> RepoResult<Vec<AggregateStat>> {
        let entries = self.repo.load_entries()?;
        Ok(compute_stats(
            &entries,
            &TimeWindow::month(month, tz),
            &self.catalog,
        ))
    }

    /// Summary of the Sunday-to-Saturday week containing `now`.
    pub fn weekly_summary<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> RepoResult<PeriodSummary> {
        let entries = self.repo.load_entries()?;
        Ok(PeriodSummary::from_entries(
            &entries,
            TimeWindow::week_containing(now),
            TrendScope::Week,
            &self.catalog,
        ))
    }

    /// Summary over every stored entry.
    pub fn overall_summary(&self) -> RepoResult<PeriodSummary> {
        let entries = self.repo.load_entries()?;
        Ok(PeriodSummary::from_entries(
            &entries,
            TimeWindow::all_time(),
            TrendScope::Overall,
            &self.catalog,
        ))
    }

    /// Grid and monthly stats for `month`, marking today from `now`.
    pub fn calendar_month<Tz: TimeZone>(
        &self,
        month: YearMonth,
        selected: Option<NaiveDate>,
        now: &DateTime<Tz>,
    ) -> RepoResult<CalendarMonthView> {
        let entries = self.repo.load_entries()?;
        let tz = now.timezone();
        let cells = build_month(month, &entries, selected, now.date_naive(), &tz);
        let stats = compute_stats(&entries, &TimeWindow::month(month, &tz), &self.catalog);
        Ok(CalendarMonthView {
            month,
            first_weekday: month.first_weekday(),
            cells,
            stats,
        })
    }
}
