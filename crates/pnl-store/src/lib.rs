//! P&L Tracker Store - local persistence for the tracker
//!
//! This crate provides:
//! - The lifecycle manager (`LocalStore`): initialize, health check,
//!   recreate and reset of the named database
//! - Embedded schema migrations with checksum validation
//! - Typed table accessors over the twelve declared tables
//! - The persistent flag store and default data seeding

pub mod config;
pub mod db;
pub mod errors;
pub mod flags;
pub mod manager;
pub mod migrations;
pub mod repo;
pub mod seed;
pub mod tables;

pub use config::StoreConfig;
pub use errors::Result;
pub use flags::{FileFlagStore, FlagStore, MemoryFlagStore, DB_INITIALIZED, HAS_API_CREDENTIALS};
pub use manager::{InitOutcome, LocalStore};
pub use repo::{IndexValue, Record, Table};
pub use tables::TableName;
