//! Local store lifecycle manager
//!
//! `LocalStore` is the single application-owned handle to the named
//! database. It guarantees the declared tables exist before use, seeds
//! default data once, and offers destructive recreate/reset.
//!
//! The handle holds the current `Database` behind a mutex. Recreate and reset
//! swap the instance inside the mutex, so anyone holding `&LocalStore` (or a
//! `Table` borrowed from it) sees the new instance on their next call.
//!
//! Lifecycle operations hold the mutex for their whole duration. Concurrent
//! `initialize` calls therefore run one after the other, and the second finds
//! a healthy store and does nothing.

use crate::config::StoreConfig;
use crate::db::{self, Database};
use crate::errors::{store_not_open, Result};
use crate::flags::{FileFlagStore, FlagStore, MemoryFlagStore, DB_INITIALIZED, HAS_API_CREDENTIALS};
use crate::repo::{clear_table, count_rows};
use crate::seed;
use crate::tables::TableName;
use pnl_core::errors::{ExError, ExErrorKind, PnlError};
use pnl_core::{log_op_end, log_op_error, log_op_start};
use rusqlite::Connection;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

/// Result of [`LocalStore::initialize`]
///
/// Initialization never fails loudly; callers that care inspect this value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    /// Every table was already usable; nothing was touched
    AlreadyInitialized,
    /// Tables were created or cleared and the defaults seeded
    Seeded { categories: usize },
    /// Seeding failed, the database was recreated and reseeded
    Recovered { reason: String, categories: usize },
    /// Seeding and the recreate fallback both failed
    Failed { reason: String },
}

impl InitOutcome {
    pub fn is_ok(&self) -> bool {
        !matches!(self, InitOutcome::Failed { .. })
    }

    fn label(&self) -> &'static str {
        match self {
            InitOutcome::AlreadyInitialized => "already_initialized",
            InitOutcome::Seeded { .. } => "seeded",
            InitOutcome::Recovered { .. } => "recovered",
            InitOutcome::Failed { .. } => "failed",
        }
    }
}

/// Handle to the named local database
pub struct LocalStore {
    config: StoreConfig,
    current: Mutex<Option<Database>>,
    flags: Box<dyn FlagStore>,
}

impl LocalStore {
    /// Open the store described by `config` with an explicit flag store
    ///
    /// Opening does not create tables; call [`LocalStore::initialize`].
    /// Only an invalid configuration is an error. A database that cannot be
    /// opened (unreadable, not SQLite) leaves the handle unbound, and
    /// `initialize` or `reset_database` replace it.
    pub fn open(config: StoreConfig, flags: Box<dyn FlagStore>) -> Result<Self> {
        config.validate().map_err(ExError::from)?;
        let current = match Database::open(&config) {
            Ok(db) => {
                tracing::debug!(db_name = %config.db_name, path = ?db.path(), "store opened");
                Some(db)
            }
            Err(err) => {
                tracing::warn!(
                    db_name = %config.db_name,
                    error = %err,
                    "database could not be opened, handle left unbound"
                );
                None
            }
        };
        Ok(Self {
            config,
            current: Mutex::new(current),
            flags,
        })
    }

    /// Open with the flag store that matches the configuration: a JSON file
    /// next to the database, or memory for in-memory stores
    pub fn open_default(config: StoreConfig) -> Result<Self> {
        let flags: Box<dyn FlagStore> = if config.in_memory {
            Box::new(MemoryFlagStore::new())
        } else {
            Box::new(FileFlagStore::new(config.flags_path()))
        };
        Self::open(config, flags)
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn flags(&self) -> &dyn FlagStore {
        self.flags.as_ref()
    }

    /// True while an instance is bound to the handle
    pub fn is_open(&self) -> bool {
        self.slot().is_some()
    }

    /// Run `f` against the current connection
    pub fn with_connection<T>(&self, f: impl FnOnce(&Connection) -> Result<T>) -> Result<T> {
        let slot = self.slot();
        let db = slot
            .as_ref()
            .ok_or_else(|| store_not_open(&self.config.db_name))?;
        f(db.conn())
    }

    /// Run `f` against the current connection with mutable access, for
    /// operations that open a transaction
    pub fn with_connection_mut<T>(
        &self,
        f: impl FnOnce(&mut Connection) -> Result<T>,
    ) -> Result<T> {
        let mut slot = self.slot();
        let db = slot
            .as_mut()
            .ok_or_else(|| store_not_open(&self.config.db_name))?;
        f(db.conn_mut())
    }

    /// Health check: every declared table can be counted
    ///
    /// No side effects; an unbound handle is unhealthy.
    pub fn is_initialized(&self) -> bool {
        is_healthy(&self.slot())
    }

    /// Row count of every declared table, in schema order
    pub fn table_counts(&self) -> Result<Vec<(TableName, u64)>> {
        self.with_connection(|conn| {
            TableName::ALL
                .into_iter()
                .map(|table| Ok((table, count_rows(conn, table)?)))
                .collect()
        })
    }

    /// Schema version of the current instance
    pub fn schema_version(&self) -> Result<u32> {
        let slot = self.slot();
        let db = slot
            .as_ref()
            .ok_or_else(|| store_not_open(&self.config.db_name))?;
        db.schema_version()
    }

    /// Make the store usable, seeding defaults if it was not
    ///
    /// Idempotent. Never returns an error: failures are logged, trigger a
    /// recreate, and are reported through the outcome.
    pub fn initialize(&self) -> InitOutcome {
        let start = Instant::now();
        log_op_start!("initialize", db_name = %self.config.db_name);

        let mut slot = self.slot();
        let outcome = self.initialize_locked(&mut slot, true);
        let duration_ms = start.elapsed().as_millis() as u64;

        match &outcome {
            InitOutcome::Failed { reason } => {
                let err = ExError::new(ExErrorKind::Persistence)
                    .with_op("initialize")
                    .with_message(reason.clone());
                log_op_error!("initialize", err, duration_ms = duration_ms, db_name = %self.config.db_name);
            }
            ok => {
                log_op_end!(
                    "initialize",
                    duration_ms = duration_ms,
                    db_name = %self.config.db_name,
                    outcome = ok.label()
                );
            }
        }
        outcome
    }

    /// Delete the database and bind a fresh, empty instance with the schema
    /// applied
    ///
    /// Default data is not reseeded. Returns `false` on failure; the handle
    /// may then be unbound until the next successful initialize.
    pub fn recreate_database(&self) -> bool {
        let start = Instant::now();
        log_op_start!("recreate_database", db_name = %self.config.db_name);

        let mut slot = self.slot();
        let result = self.recreate_locked(&mut slot);
        let duration_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(()) => {
                log_op_end!("recreate_database", duration_ms = duration_ms, db_name = %self.config.db_name);
                true
            }
            Err(err) => {
                log_op_error!("recreate_database", err, duration_ms = duration_ms, db_name = %self.config.db_name);
                false
            }
        }
    }

    /// Delete the database, clear the lifecycle flags, and initialize again
    ///
    /// Default data is reseeded but `db_initialized` stays cleared. Returns
    /// `false` on failure.
    pub fn reset_database(&self) -> bool {
        let start = Instant::now();
        log_op_start!("reset_database", db_name = %self.config.db_name);

        let mut slot = self.slot();
        let result = self.reset_locked(&mut slot);
        let duration_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(()) => {
                log_op_end!("reset_database", duration_ms = duration_ms, db_name = %self.config.db_name);
                true
            }
            Err(err) => {
                log_op_error!("reset_database", err, duration_ms = duration_ms, db_name = %self.config.db_name);
                false
            }
        }
    }

    /// Acquire the handle, recovering from poisoning
    ///
    /// SQLite rolls back any transaction a panicking holder left open, so the
    /// instance behind a poisoned lock is still consistent.
    fn slot(&self) -> MutexGuard<'_, Option<Database>> {
        self.current.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
            tracing::warn!(db_name = %self.config.db_name, "store handle lock was poisoned");
            poisoned.into_inner()
        })
    }

    /// `mark` controls whether a successful seed sets `db_initialized`
    fn initialize_locked(&self, slot: &mut Option<Database>, mark: bool) -> InitOutcome {
        if is_healthy(slot) {
            tracing::debug!(db_name = %self.config.db_name, "store healthy, nothing to do");
            return InitOutcome::AlreadyInitialized;
        }

        tracing::info!(db_name = %self.config.db_name, "initializing store");
        let err = match self.bootstrap(slot, mark) {
            Ok(categories) => return InitOutcome::Seeded { categories },
            Err(err) => err,
        };

        tracing::warn!(
            db_name = %self.config.db_name,
            error = %err,
            "initialization failed, recreating database"
        );
        let reason = err.to_string();
        match self.recreate_locked(slot).and_then(|()| self.bootstrap(slot, mark)) {
            Ok(categories) => InitOutcome::Recovered { reason, categories },
            Err(fallback) => InitOutcome::Failed {
                reason: format!("{}; recovery failed: {}", reason, fallback),
            },
        }
    }

    /// Create the schema, clear every table, seed defaults
    fn bootstrap(&self, slot: &mut Option<Database>, mark: bool) -> Result<usize> {
        if slot.is_none() {
            *slot = Some(Database::open(&self.config)?);
        }
        let db = slot
            .as_mut()
            .ok_or_else(|| store_not_open(&self.config.db_name))?;

        db.apply_schema()?;

        for table in TableName::ALL {
            match clear_table(db.conn(), table) {
                Ok(()) => {}
                Err(err) if err.is_missing_table() => {
                    tracing::debug!(table = table.as_str(), "table missing while clearing");
                }
                Err(err) => return Err(err),
            }
        }
        verify_tables(db.conn())?;

        let categories = seed::seed_default_categories(db.conn_mut())?;
        if mark {
            self.flags.set(DB_INITIALIZED, "true")?;
        }
        Ok(categories)
    }

    fn recreate_locked(&self, slot: &mut Option<Database>) -> Result<()> {
        self.unbind_and_destroy(slot)?;

        let mut db = Database::open(&self.config)?;
        db.apply_schema()?;
        *slot = Some(db);
        Ok(())
    }

    fn reset_locked(&self, slot: &mut Option<Database>) -> Result<()> {
        self.unbind_and_destroy(slot)?;

        self.flags.remove(DB_INITIALIZED)?;
        self.flags.remove(HAS_API_CREDENTIALS)?;

        *slot = Some(Database::open(&self.config)?);

        match self.initialize_locked(slot, false) {
            InitOutcome::Failed { reason } => Err(ExError::new(ExErrorKind::Persistence)
                .with_op("reset_database")
                .with_message(reason)),
            _ => Ok(()),
        }
    }

    fn unbind_and_destroy(&self, slot: &mut Option<Database>) -> Result<()> {
        if let Some(old) = slot.take() {
            if let Err(err) = old.close() {
                tracing::warn!(error = %err, "closing database before delete failed");
            }
        }
        db::destroy(&self.config)
    }
}

fn is_healthy(slot: &Option<Database>) -> bool {
    match slot {
        Some(db) => verify_tables(db.conn()).is_ok(),
        None => false,
    }
}

/// Count every declared table, failing on the first that cannot be read
fn verify_tables(conn: &Connection) -> Result<()> {
    for table in TableName::ALL {
        count_rows(conn, table).map_err(|err| {
            ExError::from(PnlError::TableUnavailable {
                table: table.as_str().to_string(),
                reason: err.message().to_string(),
            })
            .with_source(err)
        })?;
    }
    Ok(())
}
