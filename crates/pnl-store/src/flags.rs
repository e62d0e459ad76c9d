//! Persistent flag store
//!
//! Small out-of-band markers kept outside the database so they survive a
//! database deletion: the lifecycle manager decides whether to clear them.

use crate::errors::{io_error, lock_poisoned, Result};
use pnl_core::errors::{ExError, ExErrorKind};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Set after the first successful initialization seeds default data
pub const DB_INITIALIZED: &str = "db_initialized";

/// Set while storefront API credentials are saved
pub const HAS_API_CREDENTIALS: &str = "has_api_credentials";

/// String-keyed, string-valued persistent flags
pub trait FlagStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a flag; removing an absent flag is not an error
    fn remove(&self, key: &str) -> Result<()>;

    /// All flags in key order
    fn entries(&self) -> Result<Vec<(String, String)>>;

    /// True when the flag is present with value `"true"`
    fn is_set(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.as_deref() == Some("true"))
    }
}

/// Flags kept in process memory
#[derive(Default)]
pub struct MemoryFlagStore {
    flags: Mutex<BTreeMap<String, String>>,
}

impl MemoryFlagStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FlagStore for MemoryFlagStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let flags = self.flags.lock().map_err(|_| lock_poisoned("flag_get"))?;
        Ok(flags.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut flags = self.flags.lock().map_err(|_| lock_poisoned("flag_set"))?;
        flags.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut flags = self.flags.lock().map_err(|_| lock_poisoned("flag_remove"))?;
        flags.remove(key);
        Ok(())
    }

    fn entries(&self) -> Result<Vec<(String, String)>> {
        let flags = self.flags.lock().map_err(|_| lock_poisoned("flag_entries"))?;
        Ok(flags.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
    }
}

/// Flags kept as a JSON object in a single file
///
/// Every write rewrites the whole file through a temp file and rename.
pub struct FileFlagStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileFlagStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        match fs::read(&self.path) {
            Ok(bytes) if bytes.is_empty() => Ok(BTreeMap::new()),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                ExError::new(ExErrorKind::Serialization)
                    .with_op("flag_read")
                    .with_message(format!("{}: {}", self.path.display(), e))
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(io_error("flag_read", e)),
        }
    }

    fn write_all(&self, flags: &BTreeMap<String, String>) -> Result<()> {
        let content = serde_json::to_vec_pretty(flags).map_err(|e| {
            ExError::new(ExErrorKind::Serialization)
                .with_op("flag_write")
                .with_message(e.to_string())
        })?;
        atomic_write(&self.path, &content)
    }
}

impl FlagStore for FileFlagStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.lock().map_err(|_| lock_poisoned("flag_get"))?;
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.lock.lock().map_err(|_| lock_poisoned("flag_set"))?;
        let mut flags = self.read_all()?;
        flags.insert(key.to_string(), value.to_string());
        self.write_all(&flags)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let _guard = self.lock.lock().map_err(|_| lock_poisoned("flag_remove"))?;
        let mut flags = self.read_all()?;
        if flags.remove(key).is_some() {
            self.write_all(&flags)?;
        }
        Ok(())
    }

    fn entries(&self) -> Result<Vec<(String, String)>> {
        let _guard = self.lock.lock().map_err(|_| lock_poisoned("flag_entries"))?;
        Ok(self.read_all()?.into_iter().collect())
    }
}

/// Atomically write bytes to a file using temp file + rename
fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent() {
        fs::create_dir_all(parent).map_err(|e| io_error("create_flags_dir", e))?;
    }

    let temp_path = target_path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| io_error("write_flags_temp", e))?;
    fs::rename(&temp_path, target_path).map_err(|e| io_error("rename_flags_temp", e))?;

    Ok(())
}
