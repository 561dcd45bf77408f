//! A small persistent key-value store backed by one JSON file.

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, warn};

/// Key under which the theme flag is stored.
pub const STORAGE_KEY_THEME_DARK: &str = "@dark";
/// Environment variable overriding the storage directory.
pub const STORAGE_DIR_ENV: &str = "GLIDE_STORAGE_DIR";

const STORE_FILE_NAME: &str = "storage.json";
const APP_DIR_NAME: &str = "glide";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no data directory available on this platform")]
    NoDataDir,
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed storage file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// String values keyed by string, persisted as a JSON object.
#[derive(Debug, Clone)]
pub struct KeyValueStore {
    path: PathBuf,
}

impl KeyValueStore {
    /// Store file inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(STORE_FILE_NAME),
        }
    }

    /// Store in `$GLIDE_STORAGE_DIR` if set, otherwise in the platform data
    /// directory.
    pub fn open_default() -> Result<Self, StorageError> {
        if let Some(dir) = std::env::var_os(STORAGE_DIR_ENV) {
            return Ok(Self::in_dir(dir));
        }
        let dir = dirs::data_dir().ok_or(StorageError::NoDataDir)?;
        Ok(Self::in_dir(dir.join(APP_DIR_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads `key`. A missing file or key reads as `None`.
    pub fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.load()?;
        entries.insert(key.to_owned(), value.to_owned());
        self.save(&entries)?;
        debug!(key, value, "stored item");
        Ok(())
    }

    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
            debug!(key, "removed item");
        }
        Ok(())
    }

    /// Like [`KeyValueStore::get`], logging failures and reading them as
    /// empty.
    pub fn get_or_warn(&self, key: &str) -> Option<String> {
        self.get(key).unwrap_or_else(|e| {
            warn!("Failed to get {key} from storage: {e}");
            None
        })
    }

    /// Like [`KeyValueStore::set`], logging failures instead of returning
    /// them.
    pub fn set_or_warn(&self, key: &str, value: &str) {
        if let Err(e) = self.set(key, value) {
            warn!("Failed to store {key} in storage: {e}");
        }
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        serde_json::from_str(&text).map_err(|source| StorageError::Json {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let io_err = |source| StorageError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let text = serde_json::to_string_pretty(entries).map_err(|source| StorageError::Json {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, text).map_err(io_err)
    }
}
