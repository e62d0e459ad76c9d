//! Reset command
//!
//! Usage: pnl-tracker reset --yes

use super::open_store;
use crate::config::AppConfig;
use clap::Args;

#[derive(Debug, Args)]
pub struct ResetArgs {
    /// Confirm deletion of every stored record
    #[arg(long)]
    pub yes: bool,
}

pub fn execute(app: &AppConfig, args: ResetArgs) -> Result<(), Box<dyn std::error::Error>> {
    if !args.yes {
        return Err("reset deletes all local data; pass --yes to confirm".into());
    }

    let store = open_store(app)?;
    if !store.reset_database() {
        return Err("resetting the database failed; see log output".into());
    }

    let categories = store.expense_categories().count()?;
    println!("✓ Database reset ({} expense categories seeded)", categories);
    Ok(())
}
