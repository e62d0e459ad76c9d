//! Database connection management
//!
//! A `Database` is one opened instance of the named store. The lifecycle
//! manager swaps instances; nothing else holds a `Database` directly.

use crate::config::StoreConfig;
use crate::errors::{from_rusqlite, io_error, Result};
use crate::migrations;
use rusqlite::Connection;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// SQLite sidecar suffixes removed together with the main file
const SIDECAR_SUFFIXES: [&str; 3] = ["-wal", "-shm", "-journal"];

/// An opened instance of the named database
pub struct Database {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Database {
    /// Open (creating if needed) the database described by `config`
    ///
    /// Opening does not create any tables; see [`Database::apply_schema`].
    pub fn open(config: &StoreConfig) -> Result<Self> {
        let path = config.database_path();
        let conn = match &path {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent).map_err(|e| io_error("create_data_dir", e))?;
                }
                Connection::open(path).map_err(from_rusqlite)?
            }
            None => Connection::open_in_memory().map_err(from_rusqlite)?,
        };
        configure(&conn, path.is_some())?;
        Ok(Self { conn, path })
    }

    /// Create every declared table at the current schema version
    pub fn apply_schema(&mut self) -> Result<()> {
        migrations::apply_migrations(&mut self.conn)
    }

    /// Value of `PRAGMA user_version`
    pub fn schema_version(&self) -> Result<u32> {
        self.conn
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .map_err(from_rusqlite)
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    pub fn conn_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Close the connection, flushing any pending WAL content
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| from_rusqlite(e))
    }
}

/// Configure a connection for single-writer local use
fn configure(conn: &Connection, on_disk: bool) -> Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(from_rusqlite)?;

    if on_disk {
        // journal_mode returns a row, so it cannot go through execute()
        conn.query_row("PRAGMA journal_mode = WAL", [], |_| Ok(()))
            .map_err(from_rusqlite)?;
    }

    Ok(())
}

/// Delete the named database from persistent storage
///
/// A database that does not exist is already deleted. In-memory stores have
/// nothing to delete.
pub fn destroy(config: &StoreConfig) -> Result<()> {
    let Some(path) = config.database_path() else {
        return Ok(());
    };

    remove_if_exists(&path)?;
    for suffix in SIDECAR_SUFFIXES {
        let mut sidecar = path.clone().into_os_string();
        sidecar.push(suffix);
        remove_if_exists(Path::new(&sidecar))?;
    }
    Ok(())
}

fn remove_if_exists(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(io_error("delete_database", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_file_without_tables() {
        let dir = TempDir::new().unwrap();
        let config = StoreConfig::on_disk(dir.path());

        let db = Database::open(&config).unwrap();
        assert!(db.path().unwrap().exists());

        let tables: i64 = db
            .conn()
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 0);
        assert_eq!(db.schema_version().unwrap(), 0);
    }

    #[test]
    fn test_apply_schema_sets_user_version() {
        let mut db = Database::open(&StoreConfig::in_memory()).unwrap();
        db.apply_schema().unwrap();
        assert_eq!(db.schema_version().unwrap(), migrations::SCHEMA_VERSION);
    }

    #[test]
    fn test_destroy_removes_file_and_sidecars() {
        let dir = TempDir::new().unwrap();
        let config = StoreConfig::on_disk(dir.path());

        let mut db = Database::open(&config).unwrap();
        db.apply_schema().unwrap();
        db.close().unwrap();

        destroy(&config).unwrap();
        let leftovers = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 0);
    }

    #[test]
    fn test_destroy_missing_database_is_ok() {
        let dir = TempDir::new().unwrap();
        assert!(destroy(&StoreConfig::on_disk(dir.path().join("never-created"))).is_ok());
    }
}
