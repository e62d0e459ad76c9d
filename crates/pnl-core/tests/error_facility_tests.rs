use pnl_core::errors::{ExError, ExErrorKind, PnlError};

#[test]
fn test_record_not_found_verifiable_by_kind() {
    let err = PnlError::RecordNotFound {
        table: "products".to_string(),
        id: 42,
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::NotFound);
    assert_eq!(ex_err.code(), "ERR_NOT_FOUND");
    assert_eq!(ex_err.table(), Some("products"));
    assert_eq!(ex_err.record_id(), Some(42));
}

#[test]
fn test_store_not_open_is_distinct_from_table_unavailable() {
    let not_open: ExError = PnlError::StoreNotOpen {
        db_name: "WooCommercePnLTracker".to_string(),
    }
    .into();
    let table: ExError = PnlError::TableUnavailable {
        table: "orders".to_string(),
        reason: "no such table: orders".to_string(),
    }
    .into();

    assert_eq!(not_open.kind(), ExErrorKind::StoreUnavailable);
    assert_eq!(table.kind(), ExErrorKind::TableUnavailable);
    assert_ne!(not_open.code(), table.code());
    assert!(table.is_missing_table());
}

#[test]
fn test_unknown_index_is_invalid_input() {
    let ex_err: ExError = PnlError::UnknownIndex {
        table: "expenses".to_string(),
        index: "amount".to_string(),
    }
    .into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidInput);
    assert!(ex_err.message().contains("amount"));
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
        (ExErrorKind::ConstraintViolation, "ERR_CONSTRAINT_VIOLATION"),
        (ExErrorKind::StoreUnavailable, "ERR_STORE_UNAVAILABLE"),
        (ExErrorKind::TableUnavailable, "ERR_TABLE_UNAVAILABLE"),
        (ExErrorKind::Persistence, "ERR_PERSISTENCE"),
        (ExErrorKind::Concurrency, "ERR_CONCURRENCY"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_source_chain_is_exposed() {
    let inner = ExError::new(ExErrorKind::Io).with_message("permission denied");
    let outer = ExError::new(ExErrorKind::Persistence)
        .with_op("recreate_database")
        .with_source(inner);

    let source = outer.source_error().unwrap();
    assert_eq!(source.kind(), ExErrorKind::Io);
    assert!(std::error::Error::source(&outer).is_some());
    assert!(outer.to_string().contains("permission denied"));
}

#[test]
fn test_ex_error_round_trips_into_domain_error() {
    let ex_err = ExError::new(ExErrorKind::Serialization).with_message("bad json");
    let domain: PnlError = ex_err.into();
    assert!(domain.to_string().contains("ERR_SERIALIZATION"));
}
