//! Migration framework
//!
//! - Embedded SQL migrations, one per schema version
//! - Checksummed, idempotent application

mod checksums;
mod embedded;
mod runner;

pub use embedded::SCHEMA_VERSION;
pub use runner::{applied_migrations, apply_migrations};
