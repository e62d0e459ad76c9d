//! Error handling for pnl-store
//!
//! Wraps pnl-core `ExError` with store-specific constructors

use pnl_core::errors::{ExError, ExErrorKind, PnlError};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ExError {
    ExError::new(ExErrorKind::ConstraintViolation)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create a database error scoped to one table
pub fn table_error(table: &str, err: rusqlite::Error) -> ExError {
    from_rusqlite(err).with_table(table)
}

/// Create a serialization error for a record payload
pub fn from_serde(table: &str, err: serde_json::Error) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op("record_payload")
        .with_table(table)
        .with_message(err.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create the error returned when the handle has no bound instance
pub fn store_not_open(db_name: &str) -> ExError {
    PnlError::StoreNotOpen {
        db_name: db_name.to_string(),
    }
    .into()
}

/// Create the error returned when a mutex guarding the handle is poisoned
pub fn lock_poisoned(op: &str) -> ExError {
    PnlError::LockPoisoned { op: op.to_string() }.into()
}
