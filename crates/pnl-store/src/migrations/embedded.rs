//! Embedded SQL migrations
//!
//! Migrations are embedded at compile time using include_str!

/// Schema version reached after every embedded migration has run
pub const SCHEMA_VERSION: u32 = 1;

/// Migration metadata
pub struct Migration {
    pub id: &'static str,
    pub sql: &'static str,
}

/// Get all embedded migrations in order
pub fn get_migrations() -> Vec<Migration> {
    vec![Migration {
        id: "001_initial_schema",
        sql: include_str!("../../migrations/001_initial_schema.sql"),
    }]
}
