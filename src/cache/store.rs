use super::entry::Entry;
use crate::canon::Key;
use crate::error::Error;
use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::RwLock;

/// durable half of the cache: one JSON file per key, mirrored in
/// memory. writes go temp file then rename, so a crash never leaves a
/// torn entry, and memory only learns about an entry once the disk
/// write stuck.
pub struct Store {
    dir: PathBuf,
    entries: RwLock<HashMap<Key, Arc<Entry>>>,
}

impl Store {
    /// open a cache directory, creating it if absent, and load every
    /// entry already on disk. unreadable files are skipped with a
    /// warning rather than failing the whole cache.
    pub fn open(dir: &Path) -> Result<Self, Error> {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::Cache(format!("create {}: {}", dir.display(), e)))?;
        let mut entries = HashMap::new();
        let listing = std::fs::read_dir(dir)
            .map_err(|e| Error::Cache(format!("read {}: {}", dir.display(), e)))?;
        for file in listing.flatten() {
            let path = file.path();
            if path.extension().and_then(|x| x.to_str()) != Some("json") {
                continue;
            }
            match Self::read(&path) {
                Ok(entry) => {
                    entries.insert(entry.key().clone(), Arc::new(entry));
                }
                Err(e) => {
                    log::warn!("{:<32}{}", "skipping unreadable entry", e);
                }
            }
        }
        log::info!("{:<32}{}", "opened solution cache", entries.len());
        Ok(Self {
            dir: dir.to_path_buf(),
            entries: RwLock::new(entries),
        })
    }

    fn read(path: &Path) -> Result<Entry, Error> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::Cache(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&raw).map_err(|e| Error::Cache(format!("{}: {}", path.display(), e)))
    }

    pub fn get(&self, key: &Key) -> Option<Arc<Entry>> {
        self.entries.read().expect("lock never poisoned").get(key).cloned()
    }

    pub fn put(&self, entry: &Arc<Entry>) -> Result<(), Error> {
        let path = self.dir.join(format!("{}.json", entry.key()));
        let temp = self.dir.join(format!("{}.tmp", entry.key()));
        let json = serde_json::to_string_pretty(entry.as_ref())
            .map_err(|e| Error::Cache(e.to_string()))?;
        std::fs::write(&temp, json)
            .map_err(|e| Error::Cache(format!("{}: {}", temp.display(), e)))?;
        std::fs::rename(&temp, &path)
            .map_err(|e| Error::Cache(format!("{}: {}", path.display(), e)))?;
        self.entries
            .write()
            .expect("lock never poisoned")
            .insert(entry.key().clone(), entry.clone());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.read().expect("lock never poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
