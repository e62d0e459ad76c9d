use thiserror::Error;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable for programmatic handling,
/// tests, and CLI exit reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,
    NotFound,
    ConstraintViolation,

    // Store lifecycle
    /// No database instance is currently bound to the handle
    StoreUnavailable,
    /// A declared table could not be accessed (missing or schema mismatch)
    TableUnavailable,

    // Integration/IO
    Io,
    Serialization,
    Persistence,
    Config,
    Concurrency,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::StoreUnavailable => "ERR_STORE_UNAVAILABLE",
            ExErrorKind::TableUnavailable => "ERR_TABLE_UNAVAILABLE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Concurrency => "ERR_CONCURRENCY",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus optional
/// context (operation, table, record id) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    table: Option<String>,
    record_id: Option<i64>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            table: None,
            record_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add table context
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Add record id context
    pub fn with_record_id(mut self, id: i64) -> Self {
        self.record_id = Some(id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    pub fn record_id(&self) -> Option<i64> {
        self.record_id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }

    /// True when the underlying engine reported a missing table
    pub fn is_missing_table(&self) -> bool {
        self.message.contains("no such table")
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(table) = &self.table {
            write!(f, " (table: {})", table)?;
        }
        if let Some(id) = self.record_id {
            write!(f, " (record_id: {})", id)?;
        }
        if let Some(source) = &self.source {
            write!(f, " caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|s| s as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain error taxonomy for P&L store operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PnlError {
    /// The handle has no bound database instance (between a failed
    /// recreate and the next successful open)
    #[error("Store '{db_name}' is not open")]
    StoreNotOpen { db_name: String },

    /// A record lookup by primary key found nothing
    #[error("Record {id} not found in table {table}")]
    RecordNotFound { table: String, id: i64 },

    /// A query named an index the table does not declare
    #[error("Table {table} has no index named '{index}'")]
    UnknownIndex { table: String, index: String },

    /// A declared table could not be counted or read
    #[error("Table {table} is unavailable: {reason}")]
    TableUnavailable { table: String, reason: String },

    /// A mutex guarding the live handle was poisoned by a panicking holder
    #[error("Store handle lock poisoned during {op}")]
    LockPoisoned { op: String },

    /// Configuration could not be loaded or was inconsistent
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Wrapped structured error from a lower layer
    #[error("{0}")]
    Ex(String),
}

impl From<PnlError> for ExError {
    fn from(err: PnlError) -> Self {
        match err {
            PnlError::StoreNotOpen { db_name } => ExError::new(ExErrorKind::StoreUnavailable)
                .with_op("acquire_connection")
                .with_message(format!("Store '{}' is not open", db_name)),

            PnlError::RecordNotFound { table, id } => ExError::new(ExErrorKind::NotFound)
                .with_table(table)
                .with_record_id(id)
                .with_message("Record not found"),

            PnlError::UnknownIndex { table, index } => ExError::new(ExErrorKind::InvalidInput)
                .with_table(table)
                .with_op("index_query")
                .with_message(format!("Unknown index '{}'", index)),

            PnlError::TableUnavailable { table, reason } => {
                ExError::new(ExErrorKind::TableUnavailable)
                    .with_table(table)
                    .with_message(reason)
            }

            PnlError::LockPoisoned { op } => ExError::new(ExErrorKind::Concurrency)
                .with_op(op)
                .with_message("Store handle lock poisoned"),

            PnlError::InvalidConfig { reason } => ExError::new(ExErrorKind::Config)
                .with_op("load_config")
                .with_message(reason),

            PnlError::Ex(message) => ExError::new(ExErrorKind::Internal).with_message(message),
        }
    }
}

impl From<ExError> for PnlError {
    fn from(err: ExError) -> Self {
        PnlError::Ex(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_and_context() {
        let err = ExError::new(ExErrorKind::Persistence)
            .with_op("sqlite")
            .with_table("products")
            .with_message("disk I/O error");
        let rendered = err.to_string();
        assert!(rendered.starts_with("[ERR_PERSISTENCE]"));
        assert!(rendered.contains("sqlite"));
        assert!(rendered.contains("products"));
    }

    #[test]
    fn test_missing_table_detection() {
        let err = ExError::new(ExErrorKind::Persistence).with_message("no such table: orders");
        assert!(err.is_missing_table());

        let other = ExError::new(ExErrorKind::Persistence).with_message("database is locked");
        assert!(!other.is_missing_table());
    }
}
