//! Config store implementations

use crate::domain::ports::ConfigStore;
use anyhow::{Context, Result};
use parking_lot::{Mutex, RwLock};
use serde_json::{Map, Value};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

// ===== In-memory store =====

/// Mapping that lives only for the process lifetime
#[derive(Default)]
pub struct MemoryConfigStore {
    data: RwLock<Map<String, Value>>,
    commits: AtomicUsize,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful commits
    pub fn commit_count(&self) -> usize {
        self.commits.load(Ordering::Relaxed)
    }
}

impl ConfigStore for MemoryConfigStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.data.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: Value) {
        self.data.write().insert(key.to_string(), value);
    }

    fn commit(&self) -> Result<()> {
        self.commits.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

// ===== JSON file store =====

/// Mapping persisted as a single JSON object
///
/// Writes are buffered until [`ConfigStore::commit`], which replaces the file
/// through a uniquely named temporary sibling and a rename.
pub struct JsonFileConfigStore {
    path: PathBuf,
    data: RwLock<Map<String, Value>>,
    /// Held from snapshot to rename so commits land on disk in order
    commit_lock: Mutex<()>,
}

impl JsonFileConfigStore {
    /// Open the store at `path`; a missing file starts an empty mapping
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let data = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            match serde_json::from_str::<Value>(&raw)
                .with_context(|| format!("Invalid JSON in config file {}", path.display()))?
            {
                Value::Object(map) => map,
                _ => anyhow::bail!("Config file {} is not a JSON object", path.display()),
            }
        } else {
            tracing::debug!(path = %path.display(), "Config file not found, starting empty");
            Map::new()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
            commit_lock: Mutex::new(()),
        })
    }
}

impl ConfigStore for JsonFileConfigStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.data.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: Value) {
        self.data.write().insert(key.to_string(), value);
    }

    fn commit(&self) -> Result<()> {
        let _guard = self.commit_lock.lock();
        let serialized = serde_json::to_string_pretty(&*self.data.read())?;

        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;

        let mut tmp = tempfile::NamedTempFile::new_in(parent)
            .with_context(|| format!("Failed to stage {}", self.path.display()))?;
        tmp.write_all(serialized.as_bytes())
            .with_context(|| format!("Failed to write {}", tmp.path().display()))?;
        tmp.persist(&self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;

        tracing::debug!(path = %self.path.display(), "Config committed");
        Ok(())
    }
}
