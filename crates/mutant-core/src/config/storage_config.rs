//! Storage configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DB_FILE, DEFAULT_PURGE_BATCH_SIZE, DEFAULT_READ_POOL_SIZE};

/// Configuration for the SQLite persistence layer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Database path. Relative paths resolve against the project root.
    pub db_path: Option<String>,
    /// Rows deleted per purge batch. Default: 500.
    pub purge_batch_size: Option<usize>,
    /// Read connections in the pool. Default: 4.
    pub read_pool_size: Option<usize>,
}

impl StorageConfig {
    /// Returns the database path resolved against `root`.
    pub fn effective_db_path(&self, root: &Path) -> PathBuf {
        let raw = self.db_path.as_deref().unwrap_or(DEFAULT_DB_FILE);
        let path = Path::new(raw);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            root.join(path)
        }
    }

    /// Returns the effective purge batch size, defaulting to 500.
    pub fn effective_purge_batch_size(&self) -> usize {
        self.purge_batch_size.unwrap_or(DEFAULT_PURGE_BATCH_SIZE)
    }

    /// Returns the effective read pool size, defaulting to 4.
    pub fn effective_read_pool_size(&self) -> usize {
        self.read_pool_size.unwrap_or(DEFAULT_READ_POOL_SIZE)
    }
}
