//! Status command
//!
//! Usage: pnl-tracker status

use super::open_store;
use crate::config::AppConfig;

pub fn execute(app: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(app)?;

    match app.store.database_path() {
        Some(path) => println!("database: {}", path.display()),
        None => println!("database: (in memory)"),
    }

    if !store.is_initialized() {
        println!("initialized: no");
        println!("Run `pnl-tracker init` to create the tables.");
        return Ok(());
    }

    println!("initialized: yes");
    println!("schema version: {}", store.schema_version()?);
    println!();
    for (table, count) in store.table_counts()? {
        println!("{:<24} {:>8}", table.as_str(), count);
    }

    let flags = store.flags().entries()?;
    if !flags.is_empty() {
        println!();
        for (key, value) in flags {
            println!("flag {} = {}", key, value);
        }
    }

    Ok(())
}
