//! Leaf types shared by the P&L tracker facilities
//!
//! - **Schema constants**: canonical structured-log field keys and event names
//! - **Sensitive data**: `Sensitive<T>` marker for automatic redaction

pub mod schema;
pub mod sensitive;

pub use sensitive::Sensitive;
