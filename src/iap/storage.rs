//! Durable storage for boolean purchase flags.

use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use fs2::FileExt;
use parking_lot::Mutex;
use thiserror::Error;

/// Errors raised by a `FlagStorage` backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read flag file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write flag file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse flag file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize flags: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Key-value store for boolean flags that outlives the process.
pub trait FlagStorage: Send + Sync {
    /// Returns `None` when no value was ever written under `key`.
    fn load(&self, key: &str) -> Result<Option<bool>, StorageError>;

    fn save(&self, key: &str, value: bool) -> Result<(), StorageError>;
}

/// In-process flag storage. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryFlagStorage {
    flags: Arc<Mutex<HashMap<String, bool>>>,
}

impl MemoryFlagStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one flag, as if written by an earlier run.
    pub fn with_flag(key: &str, value: bool) -> Self {
        let storage = Self::new();
        storage.flags.lock().insert(key.to_string(), value);
        storage
    }

    pub fn get(&self, key: &str) -> Option<bool> {
        self.flags.lock().get(key).copied()
    }
}

impl FlagStorage for MemoryFlagStorage {
    fn load(&self, key: &str) -> Result<Option<bool>, StorageError> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: bool) -> Result<(), StorageError> {
        self.flags.lock().insert(key.to_string(), value);
        Ok(())
    }
}

const FLAGS_TABLE: &str = "flags";

/// Flags kept in the `[flags]` table of a TOML file.
///
/// Other tables in the file are preserved on save; a file that fails to
/// parse is replaced. Writes go to a sibling
/// temp file that is renamed over the existing file while holding an exclusive
/// lock on `<path>.lock`.
#[derive(Debug, Clone)]
pub struct TomlFlagStorage {
    path: PathBuf,
}

impl TomlFlagStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default state file: `<data_dir>/adfree/state.toml`.
    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("adfree").join("state.toml")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<toml::Table, StorageError> {
        if !self.path.exists() {
            return Ok(toml::Table::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| StorageError::Read {
            path: self.path.clone(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| StorageError::Parse {
            path: self.path.clone(),
            source: e,
        })
    }

    fn write_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Write {
            path: self.path.clone(),
            source,
        }
    }

    fn lock_file(&self) -> Result<File, StorageError> {
        let mut lock_path = self.path.clone().into_os_string();
        lock_path.push(".lock");
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(PathBuf::from(lock_path))
            .map_err(|e| self.write_error(e))?;
        file.lock_exclusive().map_err(|e| self.write_error(e))?;
        Ok(file)
    }
}

impl FlagStorage for TomlFlagStorage {
    fn load(&self, key: &str) -> Result<Option<bool>, StorageError> {
        let table = self.read_table()?;
        Ok(table
            .get(FLAGS_TABLE)
            .and_then(|flags| flags.get(key))
            .and_then(toml::Value::as_bool))
    }

    fn save(&self, key: &str, value: bool) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
            }
        }

        // Released when dropped at the end of the write.
        let _lock = self.lock_file()?;

        let mut table = match self.read_table() {
            Ok(table) => table,
            Err(e @ StorageError::Parse { .. }) => {
                tracing::warn!(error = %e, "flag file is corrupt, rewriting it");
                toml::Table::new()
            }
            Err(e) => return Err(e),
        };
        let flags = table
            .entry(FLAGS_TABLE)
            .or_insert(toml::Value::Table(toml::Table::new()));
        if !flags.is_table() {
            *flags = toml::Value::Table(toml::Table::new());
        }
        if let toml::Value::Table(flags) = flags {
            flags.insert(key.to_string(), toml::Value::Boolean(value));
        }

        let content = toml::to_string(&table)?;

        let mut tmp_path = self.path.clone().into_os_string();
        tmp_path.push(".tmp");
        let tmp_path = PathBuf::from(tmp_path);

        // Remove the temp file unless the rename below consumed it.
        let tmp_guard = scopeguard::guard(tmp_path.clone(), |path| {
            let _ = fs::remove_file(path);
        });
        fs::write(&tmp_path, content).map_err(|e| self.write_error(e))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| self.write_error(e))?;
        scopeguard::ScopeGuard::into_inner(tmp_guard);

        Ok(())
    }
}
