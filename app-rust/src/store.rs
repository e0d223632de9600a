//! Key-value persistence of whole JSON documents.
//!
//! Every logical feature owns one fixed key and rewrites the complete value
//! on each change. There are no partial updates and no locking between
//! writers: the last write wins.

use crate::{ScholarError, ScholarResult};
use serde::{de::DeserializeOwned, Serialize};
use std::{
    collections::HashMap,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    sync::{Arc, Mutex, PoisonError},
};

pub const USER_KEY: &str = "scholar_user";
pub const PYQ_HISTORY_KEY: &str = "scholar_pyq_history";
pub const ROUTINES_KEY: &str = "scholar_routines";
pub const REVIEWS_KEY: &str = "scholar_reviews";
pub const TUTOR_CHAT_KEY: &str = "scholar_chat_tutor";
pub const COUNSELLOR_CHAT_KEY: &str = "scholar_chat_counsellor";

/// Raw string storage addressed by fixed keys.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> ScholarResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> ScholarResult<()>;
    fn remove(&self, key: &str) -> ScholarResult<()>;
}

/// Stores each key as `{dir}/{key}.json`.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> ScholarResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(ScholarError::InvalidInput(format!(
                "invalid storage key '{key}'"
            )));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

fn store_error(key: &str, source: io::Error) -> ScholarError {
    ScholarError::Store {
        key: key.to_string(),
        source,
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> ScholarResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => Ok(None),
            Ok(content) => Ok(Some(content)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(store_error(key, error)),
        }
    }

    fn set(&self, key: &str, value: &str) -> ScholarResult<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).map_err(|e| store_error(key, e))?;

        // Unique temp file per write, synced then renamed over the target.
        let mut tmp =
            tempfile::NamedTempFile::new_in(&self.dir).map_err(|e| store_error(key, e))?;
        tmp.write_all(value.as_bytes())
            .map_err(|e| store_error(key, e))?;
        tmp.as_file().sync_all().map_err(|e| store_error(key, e))?;
        tmp.persist(&path).map_err(|e| store_error(key, e.error))?;

        tracing::trace!(key, path = %path.display(), bytes = value.len(), "stored value");
        Ok(())
    }

    fn remove(&self, key: &str) -> ScholarResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(store_error(key, error)),
        }
    }
}

/// Process-local store, used by tests and dry runs.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> ScholarResult<Option<String>> {
        let values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> ScholarResult<()> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> ScholarResult<()> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.remove(key);
        Ok(())
    }
}

/// Typed access on top of a [`KeyValueStore`].
#[derive(Clone)]
pub struct JsonStore {
    inner: Arc<dyn KeyValueStore>,
}

impl JsonStore {
    pub fn new(inner: Arc<dyn KeyValueStore>) -> Self {
        Self { inner }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub fn load<T: DeserializeOwned>(&self, key: &str) -> ScholarResult<Option<T>> {
        let Some(raw) = self.inner.get(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| ScholarError::Corrupt {
                key: key.to_string(),
                source,
            })
    }

    /// Load a collection, treating a missing key as empty.
    pub fn load_list<T: DeserializeOwned>(&self, key: &str) -> ScholarResult<Vec<T>> {
        Ok(self.load(key)?.unwrap_or_default())
    }

    /// Serialize `value` and overwrite whatever the key held.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> ScholarResult<()> {
        let raw = serde_json::to_string(value).map_err(|source| ScholarError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.inner.set(key, &raw)
    }

    pub fn remove(&self, key: &str) -> ScholarResult<()> {
        self.inner.remove(key)
    }

    #[must_use]
    pub fn raw(&self) -> &Arc<dyn KeyValueStore> {
        &self.inner
    }
}
