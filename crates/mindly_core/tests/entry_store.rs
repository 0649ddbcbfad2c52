use chrono::{TimeZone, Utc};
use mindly_core::db::open_db_in_memory;
use mindly_core::repo::entry_repo::{ENTRIES_SLOT, USERNAME_SLOT};
use mindly_core::{EntryRepository, JournalEntry, KeyValueStore, RepoError, SqliteKeyValueStore};

#[test]
fn missing_slot_loads_as_empty_list() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::try_new(&conn).unwrap();

    assert!(EntryRepository::new(&store).load_entries().unwrap().is_empty());
}

#[test]
fn saved_entries_load_back_in_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::try_new(&conn).unwrap();
    let repo = EntryRepository::new(&store);
    let entries = vec![
        JournalEntry::new(
            Utc.with_ymd_and_hms(2024, 4, 10, 20, 0, 0).unwrap(),
            "sad",
            Some("rain all day".to_string()),
        ),
        JournalEntry::new(Utc.with_ymd_and_hms(2024, 4, 10, 9, 0, 0).unwrap(), "happy", None),
    ];

    repo.save_entries(&entries).unwrap();

    assert_eq!(repo.load_entries().unwrap(), entries);
}

#[test]
fn malformed_slot_loads_as_empty_and_is_overwritten_on_save() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::try_new(&conn).unwrap();
    let repo = EntryRepository::new(&store);

    for raw in ["not json", "{\"date\":1}", "42", "null"] {
        store.set(ENTRIES_SLOT, raw).unwrap();
        assert!(repo.load_entries().unwrap().is_empty(), "payload {raw}");
    }

    let entry = JournalEntry::new(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(), "love", None);
    repo.save_entries(std::slice::from_ref(&entry)).unwrap();
    assert_eq!(repo.load_entries().unwrap(), vec![entry]);
}

#[test]
fn undecodable_elements_are_skipped() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::try_new(&conn).unwrap();
    store
        .set(
            ENTRIES_SLOT,
            r#"[
                {"date":"2024-04-10T09:00:00.000Z","emotion":"happy"},
                {"date":"yesterday","emotion":"sad"},
                {"emotion":"sad"},
                {"date":"2024-04-11T09:00:00.000Z","emotion":"mystery","note":""},
                7
            ]"#,
        )
        .unwrap();

    let entries = EntryRepository::new(&store).load_entries().unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].emotion_id, "happy");
    assert_eq!(entries[1].emotion_id, "mystery");
    assert_eq!(entries[1].note.as_deref(), Some(""));
}

#[test]
fn clear_entries_removes_only_the_entry_slot() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::try_new(&conn).unwrap();
    let repo = EntryRepository::new(&store);
    repo.save_username("An").unwrap();
    repo.save_entries(&[JournalEntry::new(Utc::now(), "neutral", None)])
        .unwrap();

    repo.clear_entries().unwrap();

    assert_eq!(store.get(ENTRIES_SLOT).unwrap(), None);
    assert_eq!(store.get(USERNAME_SLOT).unwrap().as_deref(), Some("An"));
}

#[test]
fn blank_username_reads_as_unset() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::try_new(&conn).unwrap();
    store.set(USERNAME_SLOT, "   ").unwrap();

    assert_eq!(EntryRepository::new(&store).load_username().unwrap(), None);
}

#[test]
fn blank_slot_key_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::try_new(&conn).unwrap();

    assert!(matches!(store.set(" ", "value"), Err(RepoError::InvalidKey(_))));
}
