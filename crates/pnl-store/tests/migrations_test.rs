// Integration tests for the embedded schema

use pnl_store::db::Database;
use pnl_store::migrations::{applied_migrations, apply_migrations, SCHEMA_VERSION};
use pnl_store::{StoreConfig, TableName};
use rusqlite::Connection;

fn setup_test_db() -> Connection {
    Connection::open_in_memory().expect("Failed to create in-memory database")
}

fn column_names(conn: &Connection, table: &str) -> Vec<String> {
    let mut stmt = conn
        .prepare(&format!("PRAGMA table_info({})", table))
        .unwrap();
    stmt.query_map([], |row| row.get::<_, String>(1))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

fn index_names(conn: &Connection, table: &str) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'index' AND tbl_name = ?1 AND sql IS NOT NULL")
        .unwrap();
    stmt.query_map([table], |row| row.get::<_, String>(0))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

#[test]
fn schema_matches_catalogue() {
    // Given: A database with the schema applied
    let mut conn = setup_test_db();
    apply_migrations(&mut conn).unwrap();

    // Then: Every declared table has id, its index columns and data
    for table in TableName::ALL {
        let columns = column_names(&conn, table.as_str());
        assert_eq!(columns.first().map(String::as_str), Some("id"), "{}", table);
        assert_eq!(columns.last().map(String::as_str), Some("data"), "{}", table);
        for index in table.indexes() {
            assert!(columns.iter().any(|c| c == index), "{} lacks column {}", table, index);
        }

        // And: One secondary index per declared index column
        let indexes = index_names(&conn, table.as_str());
        assert_eq!(indexes.len(), table.indexes().len(), "{}: {:?}", table, indexes);
    }
}

#[test]
fn test_apply_migrations_is_idempotent() {
    let mut conn = setup_test_db();
    apply_migrations(&mut conn).unwrap();
    apply_migrations(&mut conn).unwrap();

    assert_eq!(applied_migrations(&conn).unwrap(), vec!["001_initial_schema".to_string()]);
}

#[test]
fn test_schema_version_recorded() {
    let mut db = Database::open(&StoreConfig::in_memory()).unwrap();
    assert_eq!(db.schema_version().unwrap(), 0);

    db.apply_schema().unwrap();
    assert_eq!(db.schema_version().unwrap(), SCHEMA_VERSION);
}

#[test]
fn test_edited_migration_is_rejected() {
    // Given: A database whose recorded checksum no longer matches
    let mut conn = setup_test_db();
    apply_migrations(&mut conn).unwrap();
    conn.execute(
        "UPDATE schema_version SET checksum = 'deadbeef' WHERE migration_id = '001_initial_schema'",
        [],
    )
    .unwrap();

    // When/Then: Applying again fails with a constraint violation
    let err = apply_migrations(&mut conn).unwrap_err();
    assert_eq!(err.kind(), pnl_core::errors::ExErrorKind::ConstraintViolation);
    assert!(err.message().contains("Checksum mismatch"));
}
