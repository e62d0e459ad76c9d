//! Application settings
//!
//! Layered as: `pnl-tracker.toml` (or `--config`), then `PNL__*` environment
//! variables, then command-line overrides.

use pnl_core::errors::PnlError;
use pnl_core::logging_facility::Profile;
use pnl_store::config::load_settings;
use pnl_store::StoreConfig;
use std::path::{Path, PathBuf};

/// Settings file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "pnl-tracker.toml";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub profile: Profile,
}

impl AppConfig {
    pub fn load(
        file: Option<&Path>,
        data_dir: Option<PathBuf>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let file = file.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        let settings = load_settings(Some(file))?;

        let mut store = StoreConfig::from_settings(&settings)?;
        if let Some(dir) = data_dir {
            store.data_dir = dir;
        }

        let profile = match settings.get_string("logging.profile") {
            Ok(name) => name
                .parse::<Profile>()
                .map_err(|reason| PnlError::InvalidConfig { reason })?,
            Err(::config::ConfigError::NotFound(_)) => Profile::Development,
            Err(e) => {
                return Err(PnlError::InvalidConfig {
                    reason: format!("logging.profile: {}", e),
                }
                .into())
            }
        };

        Ok(Self { store, profile })
    }
}
