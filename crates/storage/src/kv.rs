//! sled-backed record store
//!
//! Values are JSON-encoded. Keys are either plain (`savedColourPair`) or
//! scoped as `scope:name`; names inside a scope can be listed.

use serde::{de::DeserializeOwned, Serialize};
use sled::Db;
use std::path::PathBuf;
use thiserror::Error;

/// Key-value store error types
#[derive(Debug, Error)]
pub enum KvError {
    /// Sled database error
    #[error("Database error: {0}")]
    Database(#[from] sled::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid key
    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

/// Result type for key-value operations
pub type Result<T> = std::result::Result<T, KvError>;

/// Separator between a scope and a name
pub const SCOPE_SEPARATOR: char = ':';

const CACHE_CAPACITY: u64 = 8 * 1024 * 1024;

/// Where and how often the store writes to disk
#[derive(Debug, Clone)]
pub struct KvConfig {
    /// Database directory
    pub path: PathBuf,
    /// Background flush interval in milliseconds, `None` to flush only on demand
    pub flush_every_ms: Option<u64>,
}

impl Default for KvConfig {
    fn default() -> Self {
        Self { path: PathBuf::from("contrast_lab_kv.db"), flush_every_ms: Some(500) }
    }
}

impl KvConfig {
    /// Configuration for a database at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), ..Default::default() }
    }

    /// Set the background flush interval
    pub fn flush_every_ms(mut self, ms: Option<u64>) -> Self {
        self.flush_every_ms = ms;
        self
    }
}

/// Build the stored key for `name` inside `scope`
pub fn scoped_key(scope: &str, name: &str) -> String {
    format!("{scope}{SCOPE_SEPARATOR}{name}")
}

/// JSON record store over a sled database
pub struct KvStore {
    db: Db,
}

impl KvStore {
    /// Open (or create) a store on disk
    pub fn open(config: KvConfig) -> Result<Self> {
        let db = sled::Config::new()
            .path(&config.path)
            .cache_capacity(CACHE_CAPACITY)
            .use_compression(true)
            .flush_every_ms(config.flush_every_ms)
            .open()?;
        tracing::debug!(path = %config.path.display(), records = db.len(), "Opened record store");

        Ok(Self { db })
    }

    /// Open a throwaway store that lives only in memory
    pub fn in_memory() -> Result<Self> {
        Ok(Self { db: sled::Config::new().temporary(true).open()? })
    }

    /// Read and decode the record at `key`
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        self.db
            .get(key)?
            .map(|bytes| serde_json::from_slice(&bytes))
            .transpose()
            .map_err(KvError::from)
    }

    /// Encode and write `value` at `key`, replacing any previous record
    pub fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        self.db.insert(key, serde_json::to_vec(value)?)?;
        tracing::debug!(key, "Stored record");
        Ok(())
    }

    /// Delete the record at `key`, reporting whether one existed
    pub fn delete(&self, key: &str) -> Result<bool> {
        Ok(self.db.remove(key)?.is_some())
    }

    /// Names stored under `scope`, sorted, with the scope prefix stripped
    pub fn names_in_scope(&self, scope: &str) -> Result<Vec<String>> {
        let prefix = scoped_key(scope, "");
        let mut names = Vec::new();

        for entry in self.db.scan_prefix(&prefix) {
            let (key, _) = entry?;
            match std::str::from_utf8(&key) {
                Ok(key) => names.extend(key.strip_prefix(&prefix).map(str::to_string)),
                Err(_) => tracing::warn!(scope, "Skipping non-UTF-8 key"),
            }
        }

        // sled scans in byte order, which is already sorted
        Ok(names)
    }

    /// Write pending changes to disk
    pub fn flush(&self) -> Result<()> {
        self.db.flush()?;
        Ok(())
    }
}
