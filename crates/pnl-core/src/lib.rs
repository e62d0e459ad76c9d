//! P&L Tracker Core - domain records, error facility and logging facility
//!
//! This crate provides:
//! - The record types stored by the local store (products, orders,
//!   inventory, overheads, expenses, imports and sync bookkeeping)
//! - The structured error facility (`ExError`, `ExErrorKind`, `PnlError`)
//! - The structured logging facility (`logging_facility`, `log_op_*` macros)

pub mod errors;
pub mod logging_facility;
pub mod model;

// Macros expand to paths through this re-export
pub use pnl_core_types;

pub use errors::{ExError, ExErrorKind, PnlError};
pub use model::{
    ApiCredentials, Expense, ExpenseCategory, ExpenseImport, InventoryItem, LastSync, Order,
    OrderItem, OverheadCost, OverheadKind, Product, ProductVariation, SupplierPriceImport,
    SupplierPriceItem,
};
