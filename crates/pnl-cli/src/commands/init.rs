//! Initialize command
//!
//! Usage: pnl-tracker init

use super::open_store;
use crate::config::AppConfig;
use pnl_store::InitOutcome;

pub fn execute(app: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(app)?;

    match store.initialize() {
        InitOutcome::AlreadyInitialized => println!("Store already initialized"),
        InitOutcome::Seeded { categories } => {
            println!("✓ Initialized store ({} expense categories seeded)", categories)
        }
        InitOutcome::Recovered { reason, categories } => {
            println!("! Initialization failed: {}", reason);
            println!(
                "✓ Database recreated ({} expense categories seeded)",
                categories
            );
        }
        InitOutcome::Failed { reason } => {
            return Err(format!("initialization failed: {}", reason).into());
        }
    }

    Ok(())
}
