//! Categories command
//!
//! Usage: pnl-tracker categories

use super::open_store;
use crate::config::AppConfig;

pub fn execute(app: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(app)?;
    if !store.is_initialized() {
        return Err("store is not initialized; run `pnl-tracker init` first".into());
    }

    for category in store.expense_categories().to_vec()? {
        let deductible = match category.is_tax_deductible {
            Some(true) => "deductible",
            _ => "",
        };
        println!(
            "{:<16} {:<8} {:<10} {}",
            category.name,
            category.color.as_deref().unwrap_or("-"),
            deductible,
            category.description.as_deref().unwrap_or("")
        );
    }
    Ok(())
}
