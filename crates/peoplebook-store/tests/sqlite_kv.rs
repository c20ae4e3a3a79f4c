use peoplebook_core::{ImageBlob, PersonDraft};
use peoplebook_store::migrate::latest_version;
use peoplebook_store::{KeyValueStore, Store, PEOPLE_LIST_KEY};
use tempfile::TempDir;

#[test]
fn migrations_apply_once() {
    let store = Store::open_in_memory().expect("open in memory");
    assert_eq!(store.schema_version().expect("version"), 0);
    store.migrate().expect("migrate");
    store.migrate().expect("migrate again");

    let version: i64 = store
        .connection()
        .query_row("SELECT version FROM peoplebook_schema LIMIT 1;", [], |row| {
            row.get(0)
        })
        .expect("schema version");
    assert_eq!(version, latest_version());
    assert_eq!(store.schema_version().expect("version"), latest_version());
}

#[test]
fn set_replaces_previous_value() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");

    assert!(store.get(PEOPLE_LIST_KEY).expect("get").is_none());
    store.set(PEOPLE_LIST_KEY, "[]").expect("set");
    store.set(PEOPLE_LIST_KEY, "[{\"id\":1}]").expect("set again");
    assert_eq!(
        store.get(PEOPLE_LIST_KEY).expect("get").as_deref(),
        Some("[{\"id\":1}]")
    );

    let rows: i64 = store
        .connection()
        .query_row("SELECT COUNT(*) FROM kv_entries;", [], |row| row.get(0))
        .expect("count");
    assert_eq!(rows, 1);
}

#[test]
fn directory_and_picture_survive_reopen() {
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("peoplebook.sqlite3");

    {
        let store = Store::open(&db_path).expect("open");
        store.migrate().expect("migrate");
        let mut records = store.records();
        records
            .upsert_at(
                1_718_000_000_000,
                PersonDraft {
                    name: "Sita".to_string(),
                    email: "sita@example.com".to_string(),
                    phone_number: "9841000000".to_string(),
                    ..PersonDraft::default()
                },
            )
            .expect("upsert");
        store
            .image()
            .set(&ImageBlob::png(vec![0x89, b'P', b'N', b'G']))
            .expect("set picture");
    }

    let store = Store::open(&db_path).expect("reopen");
    store.migrate().expect("migrate");
    let records = store.records().list();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Sita");
    let picture = store
        .image()
        .state()
        .decode()
        .expect("decode")
        .expect("present");
    assert_eq!(picture.bytes, vec![0x89, b'P', b'N', b'G']);
}

#[test]
fn unmigrated_database_degrades_to_empty_directory() {
    let store = Store::open_in_memory().expect("open in memory");
    let records = store.records();
    assert!(records.is_empty());
    assert!(!store.image().state().is_present());
}

#[cfg(unix)]
#[test]
fn database_file_is_private() {
    use std::os::unix::fs::PermissionsExt;
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("peoplebook.sqlite3");
    let store = Store::open(&db_path).expect("open");
    store.migrate().expect("migrate");
    let mode = std::fs::metadata(&db_path).expect("metadata").permissions().mode();
    assert_eq!(mode & 0o077, 0);
}

#[cfg(unix)]
#[test]
fn wal_sidecar_is_made_private_on_open() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("peoplebook.sqlite3");
    let writer = Store::open(&db_path).expect("open");
    writer.migrate().expect("migrate");
    writer.set(PEOPLE_LIST_KEY, "[]").expect("set");

    let wal_path = temp.path().join("peoplebook.sqlite3-wal");
    assert!(wal_path.exists());
    fs::set_permissions(&wal_path, fs::Permissions::from_mode(0o644)).expect("chmod");

    let _reader = Store::open(&db_path).expect("reopen");
    let mode = fs::metadata(&wal_path).expect("metadata").permissions().mode();
    assert_eq!(mode & 0o077, 0);
}

