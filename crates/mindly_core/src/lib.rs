//! Core domain logic for Mindly, a mood journal.
//! This crate is the single source of truth for journaling rules: the daily
//! check-in limit, aggregation, calendar layout, and stored data shape.

pub mod calendar;
pub mod content;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod stats;

pub use calendar::grid::{build_month, CalendarCell, DayCell};
pub use calendar::month::YearMonth;
pub use calendar::strip::{last_seven_days, DayStripItem};
pub use content::locale::{normalize_locale, Locale};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::emotion::{EmotionCatalog, EmotionDefinition, EmotionDisplay};
pub use model::entry::{EntryValidationError, JournalEntry};
pub use repo::entry_repo::EntryRepository;
pub use repo::kv_store::{KeyValueStore, RepoError, RepoResult, SqliteKeyValueStore};
pub use service::insights_service::{CalendarMonthView, InsightsService, PeriodSummary};
pub use service::journal_service::{
    CheckIn, JournalService, JournalServiceError, DAILY_ENTRY_LIMIT,
};
pub use service::profile_service::{ProfileService, ProfileServiceError};
pub use stats::aggregate::{compute_stats, AggregateStat};
pub use stats::trend::{classify_trend, Trend, TrendScope};
pub use stats::window::TimeWindow;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
