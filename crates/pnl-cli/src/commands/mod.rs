pub mod categories;
pub mod init;
pub mod recreate;
pub mod reset;
pub mod status;

use crate::config::AppConfig;
use pnl_store::LocalStore;

/// Open the configured store with its default flag store
pub fn open_store(app: &AppConfig) -> Result<LocalStore, Box<dyn std::error::Error>> {
    Ok(LocalStore::open_default(app.store.clone())?)
}
