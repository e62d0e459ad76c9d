//! Recreate command
//!
//! Usage: pnl-tracker recreate

use super::open_store;
use crate::config::AppConfig;

pub fn execute(app: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(app)?;

    if !store.recreate_database() {
        return Err("recreating the database failed; see log output".into());
    }

    println!("✓ Database recreated (no default data seeded)");
    Ok(())
}
