//! File-backed key-value store for persisted settings.
//!
//! The whole table is read on `open` and written back on `close`. There is no
//! locking: the store assumes a single writer, and two processes holding the
//! same file open resolve to whichever closes last.

use serde::{Serialize, de::DeserializeOwned};
use std::{
    fs,
    path::{Path, PathBuf},
};
use toml::{Table, Value};
use tracing::debug;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// Existing store, no writes allowed.
    Read,
    /// Existing store, changes written back on close.
    ReadWrite,
    /// Start from an empty table, replacing any existing store on close.
    Create,
}

#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    mode: OpenMode,
    entries: Table,
    dirty: bool,
}

impl SettingsStore {
    /// Whether a store file is present at `path`.
    pub fn exists(path: &Path) -> bool {
        path.is_file()
    }

    pub fn open(path: impl Into<PathBuf>, mode: OpenMode) -> Result<Self> {
        let path = path.into();

        let entries = match mode {
            OpenMode::Create => Table::new(),
            OpenMode::Read | OpenMode::ReadWrite => {
                let contents = fs::read_to_string(&path).map_err(|source| Error::StoreIo {
                    path: path.clone(),
                    source,
                })?;
                contents.parse::<Table>().map_err(|source| Error::StoreParse {
                    path: path.clone(),
                    source,
                })?
            }
        };

        debug!(path = %path.display(), ?mode, keys = entries.len(), "opened settings store");

        Ok(Self {
            path,
            mode,
            entries,
            // A created store is written even if nothing is set.
            dirty: mode == OpenMode::Create,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Deserialize the value under `key`.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let value = self.get(key).ok_or_else(|| Error::InvalidSetting {
            key: key.to_string(),
            reason: "missing from the settings store".to_string(),
        })?;

        value.clone().try_into().map_err(|err: toml::de::Error| Error::InvalidSetting {
            key: key.to_string(),
            reason: err.message().to_string(),
        })
    }

    pub fn set<T: Serialize>(&mut self, key: &str, value: T) -> Result<()> {
        if self.mode == OpenMode::Read {
            return Err(Error::ReadOnlyStore { path: self.path.clone() });
        }

        let value = Value::try_from(value).map_err(|source| Error::StoreSerialize {
            key: key.to_string(),
            source,
        })?;

        self.entries.insert(key.to_string(), value);
        self.dirty = true;
        Ok(())
    }

    /// Write pending changes back to disk and release the store.
    pub fn close(self) -> Result<()> {
        if self.mode == OpenMode::Read || !self.dirty {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::StoreIo {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let contents = toml::to_string_pretty(&self.entries).map_err(|source| {
            Error::StoreSerialize {
                key: "<table>".to_string(),
                source,
            }
        })?;

        fs::write(&self.path, contents).map_err(|source| Error::StoreIo {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), "wrote settings store");
        Ok(())
    }
}
