// Shared helpers for pnl-store integration tests
#![allow(dead_code)]

use pnl_store::{LocalStore, StoreConfig};
use rusqlite::Connection;
use tempfile::TempDir;

/// On-disk store in a fresh temp dir; keep the `TempDir` alive for the test
pub fn disk_store() -> (TempDir, LocalStore) {
    let dir = TempDir::new().expect("Failed to create temp data directory");
    let store = LocalStore::open_default(StoreConfig::on_disk(dir.path()))
        .expect("Failed to open store");
    (dir, store)
}

/// Initialized in-memory store
pub fn seeded_memory_store() -> LocalStore {
    let store = LocalStore::open_default(StoreConfig::in_memory()).expect("Failed to open store");
    assert!(store.initialize().is_ok());
    store
}

/// Drop one table behind the manager's back
pub fn drop_table(store: &LocalStore, table: &str) {
    store
        .with_connection(|conn: &Connection| {
            conn.execute_batch(&format!("DROP TABLE {}", table))
                .expect("Failed to drop table");
            Ok(())
        })
        .unwrap();
}

pub fn category_names(store: &LocalStore) -> Vec<String> {
    store
        .expense_categories()
        .to_vec()
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect()
}
