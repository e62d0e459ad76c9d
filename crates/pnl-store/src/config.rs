//! Store configuration
//!
//! Loaded from an optional TOML file followed by `PNL__`-prefixed
//! environment variables, e.g. `PNL__STORE__DATA_DIR=/var/lib/pnl`.

use config::{Config, Environment, File};
use pnl_core::errors::PnlError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the database, shared by every build of the tracker
pub const DEFAULT_DB_NAME: &str = "WooCommercePnLTracker";

/// Default location of the data directory, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = ".pnl-tracker";

/// Suffix of the flag store file; the full name is `<db_name>.flags.json`
pub const FLAGS_FILE_SUFFIX: &str = "flags.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_db_name")]
    pub db_name: String,
    /// Keep the database in memory; nothing survives the process
    #[serde(default)]
    pub in_memory: bool,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_db_name() -> String {
    DEFAULT_DB_NAME.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            db_name: default_db_name(),
            in_memory: false,
        }
    }
}

impl StoreConfig {
    /// On-disk store rooted at `data_dir`
    pub fn on_disk(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Ephemeral in-memory store
    pub fn in_memory() -> Self {
        Self {
            in_memory: true,
            ..Self::default()
        }
    }

    /// Path of the SQLite file, or `None` for an in-memory store
    pub fn database_path(&self) -> Option<PathBuf> {
        if self.in_memory {
            None
        } else {
            Some(self.data_dir.join(format!("{}.sqlite", self.db_name)))
        }
    }

    /// Flag file next to the database, keyed by `db_name` so stores sharing a
    /// data directory keep separate flags
    pub fn flags_path(&self) -> PathBuf {
        self.data_dir
            .join(format!("{}.{}", self.db_name, FLAGS_FILE_SUFFIX))
    }

    /// Load the `[store]` section from `file` (optional) and the environment
    pub fn load(file: Option<&Path>) -> Result<Self, PnlError> {
        Self::from_settings(&load_settings(file)?)
    }

    /// Extract and validate the `[store]` section of already-built settings
    ///
    /// A missing section yields the defaults.
    pub fn from_settings(settings: &Config) -> Result<Self, PnlError> {
        let config = match settings.get::<StoreConfig>("store") {
            Ok(config) => config,
            Err(config::ConfigError::NotFound(_)) => StoreConfig::default(),
            Err(e) => {
                return Err(PnlError::InvalidConfig {
                    reason: format!("store section: {}", e),
                })
            }
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PnlError> {
        if self.db_name.trim().is_empty() {
            return Err(PnlError::InvalidConfig {
                reason: "db_name must not be empty".to_string(),
            });
        }
        if self.db_name.contains(['/', '\\']) {
            return Err(PnlError::InvalidConfig {
                reason: format!("db_name '{}' must not contain path separators", self.db_name),
            });
        }
        Ok(())
    }
}

/// Build the layered settings: optional TOML `file`, then `PNL__` environment
/// variables
pub fn load_settings(file: Option<&Path>) -> Result<Config, PnlError> {
    let mut builder = Config::builder();
    if let Some(path) = file {
        builder = builder.add_source(File::from(path).required(false));
    }
    builder
        .add_source(Environment::with_prefix("PNL").separator("__"))
        .build()
        .map_err(|e| PnlError::InvalidConfig {
            reason: e.to_string(),
        })
}
