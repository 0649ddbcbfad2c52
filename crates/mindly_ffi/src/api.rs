//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose screen-level journal functions to Dart via FRB.
//! - Resolve "now" and the local time zone on behalf of the shell.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Failures are reported through `ok=false` envelopes, never thrown.
//! - Each DB-backed call opens the configured database, runs one use case,
//!   and drops the connection.

use chrono::{Datelike, Local, NaiveDate};
use mindly_core::content::activities::suggest_activity;
use mindly_core::content::quotes::daily_quote as daily_quote_inner;
use mindly_core::db::open_db;
use mindly_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    AggregateStat, CalendarCell, DayStripItem, EmotionCatalog, InsightsService, JournalEntry,
    JournalService, JournalServiceError, Locale, PeriodSummary, ProfileService,
    SqliteKeyValueStore, Trend, YearMonth,
};
use log::{error, warn};
use std::path::PathBuf;
use std::sync::OnceLock;

const DB_FILE_NAME: &str = "mindly.sqlite3";
const DB_PATH_ENV: &str = "MINDLY_DB_PATH";
static DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Pins the database file used by every later call.
///
/// Must run before the first DB-backed call to take effect. Calling again
/// with the same path is a no-op.
///
/// # FFI contract
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn configure_db_path(db_path: String) -> String {
    let trimmed = db_path.trim();
    if trimmed.is_empty() {
        return "db_path cannot be empty".to_string();
    }
    let requested = PathBuf::from(trimmed);
    let active = DB_PATH.get_or_init(|| requested.clone());
    if *active == requested {
        String::new()
    } else {
        format!(
            "database already configured at `{}`; refusing to switch to `{}`",
            active.display(),
            requested.display()
        )
    }
}

/// Palette entry shown on the check-in screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmotionItem {
    pub id: String,
    pub label_key: String,
    pub emoji: String,
    pub color: String,
}

/// One stored check-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodEntryItem {
    /// UTC instant in epoch milliseconds.
    pub timestamp_ms: i64,
    /// Local calendar date, `YYYY-MM-DD`.
    pub local_date: String,
    pub emotion: String,
    pub note: Option<String>,
    pub label_key: String,
    pub emoji: String,
    pub color: String,
}

/// Result of a check-in attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodSaveResponse {
    pub ok: bool,
    /// Stable machine code on failure:
    /// `missing_emotion|unknown_emotion|daily_limit|storage`.
    pub error_code: Option<String>,
    pub message: String,
    pub entry: Option<MoodEntryItem>,
    /// Check-ins still allowed today after this call.
    pub remaining_today: u32,
}

/// Entry list envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodEntriesResponse {
    pub ok: bool,
    pub message: String,
    pub items: Vec<MoodEntryItem>,
}

/// Aggregated count for one emotion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmotionStatItem {
    pub emotion: String,
    pub count: u32,
    pub percentage: u32,
    pub label_key: String,
    pub emoji: String,
    pub color: String,
    pub known: bool,
}

/// One grid cell; `day == None` is leading padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarCellItem {
    pub day: Option<u32>,
    pub is_today: bool,
    pub is_selected: bool,
    pub emotion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthCalendarResponse {
    pub ok: bool,
    pub message: String,
    pub year: i32,
    pub month: u32,
    /// 0 = Sunday .. 6 = Saturday.
    pub first_weekday: u32,
    pub cells: Vec<CalendarCellItem>,
    pub stats: Vec<EmotionStatItem>,
}

/// Weekly or all-time summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryResponse {
    pub ok: bool,
    pub message: String,
    /// `None` for the all-time summary.
    pub start_ms: Option<i64>,
    pub end_ms: Option<i64>,
    pub total: u32,
    pub stats: Vec<EmotionStatItem>,
    /// `positive|negative|mixed|no_data`.
    pub trend: String,
    pub trend_label_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripDayItem {
    /// `YYYY-MM-DD`.
    pub date: String,
    /// 0 = Sunday .. 6 = Saturday.
    pub weekday: u32,
    pub emotion: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripResponse {
    pub ok: bool,
    pub message: String,
    pub items: Vec<StripDayItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsernameResponse {
    pub ok: bool,
    pub message: String,
    pub username: Option<String>,
}

/// Generic action envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub ok: bool,
    pub message: String,
}

impl ActionResponse {
    fn from_result(result: Result<(), String>, success: &str) -> Self {
        match result {
            Ok(()) => Self {
                ok: true,
                message: success.to_string(),
            },
            Err(message) => Self { ok: false, message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteItem {
    pub text: String,
    pub author: String,
}

/// Returns the built-in emotion palette in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn emotion_catalog() -> Vec<EmotionItem> {
    EmotionCatalog::builtin()
        .definitions()
        .iter()
        .map(|definition| EmotionItem {
            id: definition.id.to_string(),
            label_key: definition.label_key.to_string(),
            emoji: definition.emoji.to_string(),
            color: definition.color.to_string(),
        })
        .collect()
}

/// Records a check-in stamped with the current local time.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - At most two check-ins per local day; further calls return `daily_limit`.
#[flutter_rust_bridge::frb(sync)]
pub fn mood_save(emotion: Option<String>, note: String) -> MoodSaveResponse {
    let now = Local::now();
    let outcome = with_store(|store| {
        let service = JournalService::new(store);
        Ok(service
            .save_mood(emotion.as_deref(), &note, &now)
            .map_err(|err| {
                let remaining = service.remaining_today(&now).unwrap_or_else(|count_err| {
                    warn!(
                        "event=mood_save module=ffi status=degraded reason=remaining_unavailable error={}",
                        count_err
                    );
                    0
                });
                (err, remaining)
            }))
    });

    match outcome {
        Ok(Ok(check_in)) => MoodSaveResponse {
            ok: true,
            error_code: None,
            message: "Mood saved.".to_string(),
            entry: Some(to_entry_item(&check_in.entry)),
            remaining_today: check_in.remaining_today as u32,
        },
        Ok(Err((err, remaining))) => MoodSaveResponse {
            ok: false,
            error_code: Some(journal_error_code(&err).to_string()),
            message: format!("mood_save failed: {err}"),
            entry: None,
            remaining_today: remaining as u32,
        },
        Err(message) => MoodSaveResponse {
            ok: false,
            error_code: Some("storage".to_string()),
            message: format!("mood_save failed: {message}"),
            entry: None,
            remaining_today: 0,
        },
    }
}

/// Lists check-ins on one local date, in entry order.
#[flutter_rust_bridge::frb(sync)]
pub fn mood_entries_on(year: i32, month: u32, day: u32) -> MoodEntriesResponse {
    let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
        return entries_failure(format!("mood_entries_on failed: invalid date {year}-{month}-{day}"));
    };
    let result = with_store(|store| {
        JournalService::new(store)
            .entries_on(date, &Local)
            .map_err(|err| err.to_string())
    });
    match result {
        Ok(entries) => entries_success(&entries),
        Err(message) => entries_failure(format!("mood_entries_on failed: {message}")),
    }
}

/// Builds the journal month grid plus monthly stats.
///
/// `selected_day` outside the month is ignored.
#[flutter_rust_bridge::frb(sync)]
pub fn month_calendar(year: i32, month: u32, selected_day: Option<u32>) -> MonthCalendarResponse {
    let Some(year_month) = YearMonth::new(year, month) else {
        return MonthCalendarResponse {
            ok: false,
            message: format!("month_calendar failed: invalid month {year}-{month}"),
            year,
            month,
            first_weekday: 0,
            cells: Vec::new(),
            stats: Vec::new(),
        };
    };
    let selected = selected_day.and_then(|day| NaiveDate::from_ymd_opt(year, month, day));
    let now = Local::now();
    let result = with_store(|store| {
        InsightsService::new(store)
            .calendar_month(year_month, selected, &now)
            .map_err(|err| err.to_string())
    });

    match result {
        Ok(view) => MonthCalendarResponse {
            ok: true,
            message: String::new(),
            year,
            month,
            first_weekday: view.first_weekday,
            cells: view.cells.iter().map(to_cell_item).collect(),
            stats: view.stats.iter().map(to_stat_item).collect(),
        },
        Err(message) => MonthCalendarResponse {
            ok: false,
            message: format!("month_calendar failed: {message}"),
            year,
            month,
            first_weekday: year_month.first_weekday(),
            cells: Vec::new(),
            stats: Vec::new(),
        },
    }
}

/// Summary of the current Sunday-to-Saturday week.
#[flutter_rust_bridge::frb(sync)]
pub fn weekly_summary() -> SummaryResponse {
    let now = Local::now();
    let result = with_store(|store| {
        InsightsService::new(store)
            .weekly_summary(&now)
            .map_err(|err| err.to_string())
    });
    to_summary_response(result, true, "weekly_summary")
}

/// Summary over every stored check-in.
#[flutter_rust_bridge::frb(sync)]
pub fn overall_summary() -> SummaryResponse {
    let result = with_store(|store| {
        InsightsService::new(store)
            .overall_summary()
            .map_err(|err| err.to_string())
    });
    to_summary_response(result, false, "overall_summary")
}

/// Every check-in, oldest first.
#[flutter_rust_bridge::frb(sync)]
pub fn history() -> MoodEntriesResponse {
    let result = with_store(|store| {
        ProfileService::new(store)
            .history()
            .map_err(|err| err.to_string())
    });
    match result {
        Ok(entries) => entries_success(&entries),
        Err(message) => entries_failure(format!("history failed: {message}")),
    }
}

/// The last seven local days, oldest first, ending today.
#[flutter_rust_bridge::frb(sync)]
pub fn seven_day_strip() -> StripResponse {
    let now = Local::now();
    let result = with_store(|store| {
        ProfileService::new(store)
            .seven_day_strip(&now)
            .map_err(|err| err.to_string())
    });
    match result {
        Ok(items) => StripResponse {
            ok: true,
            message: String::new(),
            items: items.iter().map(to_strip_item).collect(),
        },
        Err(message) => StripResponse {
            ok: false,
            message: format!("seven_day_strip failed: {message}"),
            items: Vec::new(),
        },
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn username_get() -> UsernameResponse {
    let result = with_store(|store| {
        ProfileService::new(store)
            .username()
            .map_err(|err| err.to_string())
    });
    to_username_response(result, "username_get")
}

/// Stores the trimmed username; blank names are rejected.
#[flutter_rust_bridge::frb(sync)]
pub fn username_set(username: String) -> UsernameResponse {
    let result = with_store(|store| {
        ProfileService::new(store)
            .set_username(&username)
            .map(Some)
            .map_err(|err| err.to_string())
    });
    to_username_response(result, "username_set")
}

/// Forgets the username; check-ins are kept.
#[flutter_rust_bridge::frb(sync)]
pub fn logout() -> ActionResponse {
    let result = with_store(|store| {
        ProfileService::new(store)
            .logout()
            .map_err(|err| err.to_string())
    });
    ActionResponse::from_result(
        result.map_err(|message| format!("logout failed: {message}")),
        "Logged out.",
    )
}

/// Deletes every check-in; the username is kept.
#[flutter_rust_bridge::frb(sync)]
pub fn clear_all_data() -> ActionResponse {
    let result = with_store(|store| {
        ProfileService::new(store)
            .clear_all_data()
            .map_err(|err| err.to_string())
    });
    ActionResponse::from_result(
        result.map_err(|message| format!("clear_all_data failed: {message}")),
        "All entries deleted.",
    )
}

/// Quote of the day for `locale` (`en`, `vi-VN`, ...).
#[flutter_rust_bridge::frb(sync)]
pub fn daily_quote(locale: String) -> Option<QuoteItem> {
    daily_quote_inner(Locale::resolve(&locale), Local::now().date_naive()).map(|quote| QuoteItem {
        text: quote.text.to_string(),
        author: quote.author.to_string(),
    })
}

/// Random activity suggestion for `emotion`; `None` for unknown emotions.
#[flutter_rust_bridge::frb(sync)]
pub fn activity_suggestion(locale: String, emotion: String) -> Option<String> {
    suggest_activity(
        Locale::resolve(&locale),
        emotion.trim(),
        &mut rand::thread_rng(),
    )
    .map(str::to_string)
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(DB_PATH_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(DB_FILE_NAME)
        })
        .clone()
}

fn with_store<T>(
    f: impl FnOnce(&SqliteKeyValueStore<'_>) -> Result<T, String>,
) -> Result<T, String> {
    let db_path = resolve_db_path();
    let conn = open_db(&db_path).map_err(|err| {
        error!("event=ffi_store module=ffi status=error error_code=db_open_failed");
        format!("DB open failed: {err}")
    })?;
    let store = SqliteKeyValueStore::try_new(&conn).map_err(|err| {
        error!("event=ffi_store module=ffi status=error error_code=store_init_failed");
        format!("store init failed: {err}")
    })?;
    f(&store)
}

fn journal_error_code(err: &JournalServiceError) -> &'static str {
    match err {
        JournalServiceError::MissingEmotionSelection => "missing_emotion",
        JournalServiceError::UnknownEmotion(_) => "unknown_emotion",
        JournalServiceError::DailyLimitExceeded { .. } => "daily_limit",
        JournalServiceError::Repo(_) => "storage",
    }
}

fn to_entry_item(entry: &JournalEntry) -> MoodEntryItem {
    let display = EmotionCatalog::builtin().display(&entry.emotion_id);
    MoodEntryItem {
        timestamp_ms: entry.timestamp.timestamp_millis(),
        local_date: entry.local_date(&Local).to_string(),
        emotion: entry.emotion_id.clone(),
        note: entry.note.clone(),
        label_key: display.label_key.to_string(),
        emoji: display.emoji.to_string(),
        color: display.color.to_string(),
    }
}

fn entries_success(entries: &[JournalEntry]) -> MoodEntriesResponse {
    MoodEntriesResponse {
        ok: true,
        message: String::new(),
        items: entries.iter().map(to_entry_item).collect(),
    }
}

fn entries_failure(message: String) -> MoodEntriesResponse {
    MoodEntriesResponse {
        ok: false,
        message,
        items: Vec::new(),
    }
}

fn to_stat_item(stat: &AggregateStat) -> EmotionStatItem {
    EmotionStatItem {
        emotion: stat.emotion_id.clone(),
        count: stat.count,
        percentage: u32::from(stat.percentage),
        label_key: stat.label_key.to_string(),
        emoji: stat.emoji.to_string(),
        color: stat.color.to_string(),
        known: stat.known,
    }
}

fn to_cell_item(cell: &CalendarCell) -> CalendarCellItem {
    match cell {
        CalendarCell::Padding => CalendarCellItem {
            day: None,
            is_today: false,
            is_selected: false,
            emotion: None,
        },
        CalendarCell::Day(day) => CalendarCellItem {
            day: Some(day.date.day()),
            is_today: day.is_today,
            is_selected: day.is_selected,
            emotion: day.emotion_id.clone(),
        },
    }
}

fn to_strip_item(item: &DayStripItem) -> StripDayItem {
    StripDayItem {
        date: item.date.to_string(),
        weekday: item.date.weekday().num_days_from_sunday(),
        emotion: item.emotion_id.clone(),
        note: item.note.clone(),
    }
}

fn to_summary_response(
    result: Result<PeriodSummary, String>,
    bounded: bool,
    operation: &str,
) -> SummaryResponse {
    match result {
        Ok(summary) => SummaryResponse {
            ok: true,
            message: String::new(),
            start_ms: bounded.then(|| summary.window.start.timestamp_millis()),
            end_ms: bounded.then(|| summary.window.end.timestamp_millis()),
            total: summary.total,
            stats: summary.stats.iter().map(to_stat_item).collect(),
            trend: trend_label(summary.trend).to_string(),
            trend_label_key: summary.trend_label_key.to_string(),
        },
        Err(message) => SummaryResponse {
            ok: false,
            message: format!("{operation} failed: {message}"),
            start_ms: None,
            end_ms: None,
            total: 0,
            stats: Vec::new(),
            trend: trend_label(Trend::NoData).to_string(),
            trend_label_key: String::new(),
        },
    }
}

fn trend_label(trend: Trend) -> &'static str {
    match trend {
        Trend::Positive => "positive",
        Trend::Negative => "negative",
        Trend::Mixed => "mixed",
        Trend::NoData => "no_data",
    }
}

fn to_username_response(result: Result<Option<String>, String>, operation: &str) -> UsernameResponse {
    match result {
        Ok(username) => UsernameResponse {
            ok: true,
            message: String::new(),
            username,
        },
        Err(message) => UsernameResponse {
            ok: false,
            message: format!("{operation} failed: {message}"),
            username: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{
        activity_suggestion, clear_all_data, configure_db_path, core_version, daily_quote,
        emotion_catalog, history, init_logging, logout, month_calendar, mood_entries_on,
        mood_save, overall_summary, ping, seven_day_strip, username_get, username_set,
        weekly_summary,
    };
    use chrono::{Datelike, Local, NaiveDate};
    use std::sync::Once;
    use std::time::{SystemTime, UNIX_EPOCH};

    static TEST_DB: Once = Once::new();

    // All DB-backed tests share one file per test process.
    fn use_test_db() {
        TEST_DB.call_once(|| {
            let nanos = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("time went backwards")
                .as_nanos();
            let path = std::env::temp_dir().join(format!("mindly-ffi-test-{nanos}.sqlite3"));
            let error = configure_db_path(path.to_string_lossy().into_owned());
            assert!(error.is_empty(), "{error}");
        });
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn configure_db_path_rejects_blank_and_switching() {
        use_test_db();
        assert!(!configure_db_path("  ".to_string()).is_empty());
        assert!(!configure_db_path("/definitely/another.sqlite3".to_string()).is_empty());
    }

    #[test]
    fn emotion_catalog_lists_palette_in_order() {
        let catalog = emotion_catalog();
        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog[0].id, "happy");
        assert!(catalog.iter().all(|item| item.color.starts_with('#')));
    }

    #[test]
    fn check_in_flow_enforces_daily_limit_and_feeds_views() {
        use_test_db();

        let missing = mood_save(None, "note".to_string());
        assert!(!missing.ok);
        assert_eq!(missing.error_code.as_deref(), Some("missing_emotion"));

        let first = mood_save(Some("happy".to_string()), " first ".to_string());
        assert!(first.ok, "{}", first.message);
        let first_entry = first.entry.clone().expect("saved entry");
        assert_eq!(first_entry.note.as_deref(), Some("first"));
        let day = NaiveDate::parse_from_str(&first_entry.local_date, "%Y-%m-%d")
            .expect("local date");

        let second = mood_save(Some("sad".to_string()), String::new());
        let third = mood_save(Some("angry".to_string()), String::new());
        assert!(second.ok, "{}", second.message);

        // The rest pins one local day; a run crossing midnight stops here.
        if !same_local_day(day) {
            return;
        }
        assert_eq!(first.remaining_today, 1);
        assert_eq!(second.remaining_today, 0);
        assert!(!third.ok);
        assert_eq!(third.error_code.as_deref(), Some("daily_limit"));
        assert_eq!(third.remaining_today, 0);

        let on_day = mood_entries_on(day.year(), day.month(), day.day());
        assert!(on_day.ok, "{}", on_day.message);
        assert_eq!(on_day.items.len(), 2);
        assert_eq!(on_day.items[0].emotion, "happy");

        let calendar = month_calendar(day.year(), day.month(), Some(day.day()));
        assert!(calendar.ok, "{}", calendar.message);
        let day_cell = calendar
            .cells
            .iter()
            .find(|cell| cell.day == Some(day.day()))
            .expect("day cell");
        assert!(day_cell.is_selected);
        assert_eq!(day_cell.emotion.as_deref(), Some("happy"));

        let overall = overall_summary();
        assert_eq!(overall.total, 2);
        assert_eq!(overall.start_ms, None);
        assert_eq!(history().items.len(), 2);

        let weekly = weekly_summary();
        let strip = seven_day_strip();
        if same_local_day(day) {
            assert!(weekly.ok, "{}", weekly.message);
            assert_eq!(weekly.total, 2);
            assert_eq!(weekly.trend, "mixed");
            assert!(day_cell.is_today);
            assert_eq!(strip.items.len(), 7);
            assert_eq!(strip.items[6].emotion.as_deref(), Some("happy"));
        }

        let conn = rusqlite::Connection::open(super::resolve_db_path()).expect("open db");
        let raw: String = conn
            .query_row(
                "SELECT value FROM kv_slots WHERE key = 'moodEntries';",
                [],
                |row| row.get(0),
            )
            .expect("query entry slot");
        assert!(raw.starts_with("[{\"date\":"));
        assert!(raw.contains("\"emotion\":\"happy\",\"note\":\"first\""));
        drop(conn);

        let username = username_set("  Lan ".to_string());
        assert!(username.ok, "{}", username.message);
        assert_eq!(username_get().username.as_deref(), Some("Lan"));
        assert!(!username_set(" ".to_string()).ok);

        assert!(clear_all_data().ok);
        assert!(history().items.is_empty());
        assert_eq!(username_get().username.as_deref(), Some("Lan"));

        assert!(logout().ok);
        assert_eq!(username_get().username, None);
    }

    fn same_local_day(day: NaiveDate) -> bool {
        Local::now().date_naive() == day
    }

    #[test]
    fn month_calendar_rejects_invalid_month() {
        let response = month_calendar(2024, 13, None);
        assert!(!response.ok);
        assert!(response.cells.is_empty());
    }

    #[test]
    fn content_helpers_fall_back_sensibly() {
        assert!(daily_quote("fr-FR".to_string()).is_some());
        assert!(activity_suggestion("vi-VN".to_string(), "tired".to_string()).is_some());
        assert_eq!(
            activity_suggestion("en".to_string(), "ecstatic".to_string()),
            None
        );
    }
}
