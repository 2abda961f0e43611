//! JSON document store backing the bot's durable collections.
//!
//! Collections are small JSON values addressed by name. [`FileStore`] keeps
//! one `<collection>.json` file per collection under a data directory;
//! [`MemoryStore`] backs tests. Handlers never touch the store directly,
//! they go through [`crate::catalog::Catalog`].

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use serde_json::Value;
use tracing::debug;

/// Ordered list of residential complex names.
pub const ADDRESSES: &str = "addresses";
/// The shared product listing text.
pub const PRODUCTS: &str = "products";
/// String user ids allowed into the admin panel.
pub const ADMINS: &str = "admins";

/// Errors raised by document store implementations
#[derive(Debug)]
pub enum StorageError {
    /// Underlying filesystem failure
    Io(std::io::Error),
    /// A collection file exists but does not hold valid JSON
    Malformed {
        collection: String,
        source: serde_json::Error,
    },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "storage I/O error: {e}"),
            StorageError::Malformed { collection, source } => {
                write!(f, "collection '{collection}' holds malformed JSON: {source}")
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err)
    }
}

/// Durable mapping from collection names to JSON values.
///
/// `read` returns `None` for a collection that was never written; defaulting
/// is the caller's job. A `write` replaces the stored value wholesale.
pub trait DocumentStore: Send + Sync {
    fn read(&self, collection: &str) -> Result<Option<Value>, StorageError>;
    fn write(&self, collection: &str, value: &Value) -> Result<(), StorageError>;
}

/// File-backed store: one pretty-printed JSON file per collection.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, collection: &str) -> PathBuf {
        self.dir.join(format!("{collection}.json"))
    }
}

impl DocumentStore for FileStore {
    fn read(&self, collection: &str) -> Result<Option<Value>, StorageError> {
        let path = self.path_for(collection);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let value = serde_json::from_slice(&bytes).map_err(|source| StorageError::Malformed {
            collection: collection.to_string(),
            source,
        })?;
        Ok(Some(value))
    }

    fn write(&self, collection: &str, value: &Value) -> Result<(), StorageError> {
        let path = self.path_for(collection);
        // Write a sibling temp file and rename it over the target, so a crash
        // mid-write never leaves a truncated collection behind.
        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)?;
        serde_json::to_writer_pretty(&mut tmp, value)
            .map_err(|e| StorageError::Io(e.into()))?;
        tmp.persist(&path).map_err(|e| StorageError::Io(e.error))?;
        debug!(collection, "collection written");
        Ok(())
    }
}

/// In-memory store used by tests.
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for MemoryStore {
    fn read(&self, collection: &str) -> Result<Option<Value>, StorageError> {
        let collections = self.collections.lock().expect("store mutex poisoned");
        Ok(collections.get(collection).cloned())
    }

    fn write(&self, collection: &str, value: &Value) -> Result<(), StorageError> {
        let mut collections = self.collections.lock().expect("store mutex poisoned");
        collections.insert(collection.to_string(), value.clone());
        Ok(())
    }
}
