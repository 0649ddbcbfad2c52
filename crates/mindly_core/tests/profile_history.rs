use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use mindly_core::db::open_db_in_memory;
use mindly_core::{
    EntryRepository, JournalEntry, JournalService, ProfileService, ProfileServiceError,
    SqliteKeyValueStore,
};

fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

#[test]
fn history_is_sorted_oldest_first() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::try_new(&conn).unwrap();
    EntryRepository::new(&store)
        .save_entries(&[
            JournalEntry::new(at(2024, 4, 12, 9), "sad", None),
            JournalEntry::new(at(2024, 4, 10, 9), "happy", None),
            JournalEntry::new(at(2024, 4, 11, 9), "tired", None),
        ])
        .unwrap();

    let history = ProfileService::new(&store).history().unwrap();

    let ids = history.iter().map(|e| e.emotion_id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, vec!["happy", "tired", "sad"]);
}

#[test]
fn seven_day_strip_ends_today_and_shows_first_entry_per_day() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::try_new(&conn).unwrap();
    EntryRepository::new(&store)
        .save_entries(&[
            JournalEntry::new(at(2024, 4, 10, 18), "sad", None),
            JournalEntry::new(at(2024, 4, 10, 8), "happy", Some("coffee".to_string())),
            JournalEntry::new(at(2024, 4, 3, 8), "angry", None),
            JournalEntry::new(at(2024, 4, 4, 8), "love", None),
        ])
        .unwrap();

    let strip = ProfileService::new(&store)
        .seven_day_strip(&at(2024, 4, 10, 21))
        .unwrap();

    assert_eq!(strip.len(), 7);
    assert_eq!(strip[0].date, NaiveDate::from_ymd_opt(2024, 4, 4).unwrap());
    assert_eq!(strip[0].emotion_id.as_deref(), Some("love"));
    assert_eq!(strip[6].date, NaiveDate::from_ymd_opt(2024, 4, 10).unwrap());
    // History order puts the 08:00 entry first.
    assert_eq!(strip[6].emotion_id.as_deref(), Some("happy"));
    assert_eq!(strip[6].note.as_deref(), Some("coffee"));
    assert!(strip[1..6].iter().all(|item| item.emotion_id.is_none()));
}

#[test]
fn seven_day_strip_uses_the_callers_time_zone() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::try_new(&conn).unwrap();
    // 2024-04-09 20:00 UTC is 2024-04-10 03:00 in UTC+7.
    EntryRepository::new(&store)
        .save_entries(&[JournalEntry::new(at(2024, 4, 9, 20), "neutral", None)])
        .unwrap();
    let hanoi = FixedOffset::east_opt(7 * 3600).unwrap();
    let now = hanoi.with_ymd_and_hms(2024, 4, 10, 12, 0, 0).unwrap();

    let strip = ProfileService::new(&store).seven_day_strip(&now).unwrap();

    assert_eq!(strip[6].emotion_id.as_deref(), Some("neutral"));
    assert_eq!(strip[5].emotion_id, None);
}

#[test]
fn username_is_trimmed_and_blank_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::try_new(&conn).unwrap();
    let service = ProfileService::new(&store);

    assert_eq!(service.username().unwrap(), None);
    assert_eq!(service.set_username("  Minh  ").unwrap(), "Minh");
    assert_eq!(service.username().unwrap().as_deref(), Some("Minh"));
    assert!(matches!(
        service.set_username("\t "),
        Err(ProfileServiceError::InvalidUsername)
    ));
    assert_eq!(service.username().unwrap().as_deref(), Some("Minh"));
}

#[test]
fn logout_keeps_entries_and_clear_keeps_username() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::try_new(&conn).unwrap();
    let profile = ProfileService::new(&store);
    let journal = JournalService::new(&store);
    profile.set_username("Minh").unwrap();
    journal
        .save_mood(Some("happy"), "", &at(2024, 4, 10, 9))
        .unwrap();

    profile.logout().unwrap();
    assert_eq!(profile.username().unwrap(), None);
    assert_eq!(profile.history().unwrap().len(), 1);

    profile.set_username("Minh").unwrap();
    profile.clear_all_data().unwrap();
    assert!(profile.history().unwrap().is_empty());
    assert_eq!(profile.username().unwrap().as_deref(), Some("Minh"));
}
