use rusqlite::Connection;
use staffing_core::db::migrations::latest_version;
use staffing_core::db::{open_db, open_db_in_memory, DbError};
use staffing_core::SqliteWorkerRepository;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    for table in ["workers", "initiatives", "locations", "worker_initiatives"] {
        assert_table_exists(&conn, table);
    }
}

#[test]
fn contact_lookup_indexes_are_not_unique() {
    let conn = open_db_in_memory().unwrap();

    let unique: i64 = conn
        .query_row(
            "SELECT COUNT(*)
             FROM pragma_index_list('workers')
             WHERE \"unique\" = 1;",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(unique, 0);
}

#[test]
fn foreign_keys_are_enabled_on_open() {
    let conn = open_db_in_memory().unwrap();
    let enabled: i64 = conn
        .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(enabled, 1);
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("staffing.sqlite3");

    let conn_first = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    assert_table_exists(&conn_second, "workers");
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn repository_rejects_unmigrated_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let err = SqliteWorkerRepository::try_new(&conn).err().unwrap();
    match err {
        DbError::UninitializedConnection {
            expected_version,
            actual_version,
        } => {
            assert_eq!(expected_version, latest_version());
            assert_eq!(actual_version, 0);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn repository_rejects_missing_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!(
        "CREATE TABLE workers (id INTEGER PRIMARY KEY, name TEXT);
         PRAGMA user_version = {};",
        latest_version()
    ))
    .unwrap();

    let err = SqliteWorkerRepository::try_new(&conn).err().unwrap();
    assert!(matches!(
        err,
        DbError::MissingRequiredColumn {
            table: "workers",
            column: "phone_number"
        }
    ));
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
