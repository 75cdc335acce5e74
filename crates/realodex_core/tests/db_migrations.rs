use realodex_core::db::migrations::latest_version;
use realodex_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "contacts");
    assert_table_exists(&conn, "contact_tags");
}

#[test]
fn opening_same_file_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("realodex.db");

    drop(open_db(&path).unwrap());
    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn), latest_version());
}

#[test]
fn file_with_newer_schema_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");
    Connection::open(&path)
        .unwrap()
        .execute_batch("PRAGMA user_version = 999;")
        .unwrap();

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion { found, supported } => {
            assert_eq!(found, 999);
            assert_eq!(supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unreadable_data_file_names_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.txt");
    std::fs::write(&path, "Amy Bee, 91234567\n".repeat(64)).unwrap();

    let err = open_db(&path).unwrap_err();

    assert!(matches!(&err, DbError::DataFile { path: failed, .. } if failed == &path));
    assert!(err.to_string().contains("contacts.txt"));
}

#[test]
fn deleting_a_contact_row_cascades_to_its_tags() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch(
        "INSERT INTO contacts (position, name) VALUES (0, 'Amy');
         INSERT INTO contact_tags (contact_position, tag) VALUES (0, 'BUYER');
         DELETE FROM contacts;",
    )
    .unwrap();
    let remaining: i64 = conn
        .query_row("SELECT COUNT(*) FROM contact_tags;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(remaining, 0);
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1);",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table `{table_name}` should exist");
}
