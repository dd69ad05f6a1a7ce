//! File-backed store adapter
//!
//! Each scope is one JSON object (key -> blob) in the data directory:
//! `durable.json` and `session.json`. Removing `session.json` is the
//! "new tab" of the browser-storage model. Writes hold an exclusive
//! file lock; concurrent processes are last-write-wins.

use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::domain::result::Result;
use crate::ports::storage::{KeyValueStore, StoreScope};

const DURABLE_FILE: &str = "durable.json";
const SESSION_FILE: &str = "session.json";

/// Key-value store persisted as JSON files
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open (or create) a store rooted at the given directory
    pub fn new(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    fn file_for(&self, scope: StoreScope) -> PathBuf {
        match scope {
            StoreScope::Durable => self.dir.join(DURABLE_FILE),
            StoreScope::Session => self.dir.join(SESSION_FILE),
        }
    }

    fn load_map(&self, scope: StoreScope) -> Result<HashMap<String, String>> {
        let path = self.file_for(scope);
        if !path.exists() {
            return Ok(HashMap::new());
        }

        let mut file = OpenOptions::new().read(true).open(&path)?;
        file.lock_shared()?;
        let mut content = String::new();
        let read = file.read_to_string(&mut content);
        file.unlock()?;
        read?;

        // A corrupt scope file degrades to "no data" rather than failing
        Ok(serde_json::from_str(&content).unwrap_or_default())
    }

    fn save_map(&self, scope: StoreScope, map: &HashMap<String, String>) -> Result<()> {
        let path = self.file_for(scope);
        let content = serde_json::to_string_pretty(map)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .open(&path)?;
        file.lock_exclusive()?;
        let write = file
            .set_len(0)
            .and_then(|_| file.write_all(content.as_bytes()))
            .and_then(|_| file.flush());
        file.unlock()?;
        write?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, scope: StoreScope, key: &str) -> Result<Option<String>> {
        Ok(self.load_map(scope)?.get(key).cloned())
    }

    fn put(&self, scope: StoreScope, key: &str, value: &str) -> Result<()> {
        let mut map = self.load_map(scope)?;
        map.insert(key.to_string(), value.to_string());
        self.save_map(scope, &map)
    }

    fn delete(&self, scope: StoreScope, key: &str) -> Result<()> {
        let mut map = self.load_map(scope)?;
        if map.remove(key).is_some() {
            self.save_map(scope, &map)?;
        }
        Ok(())
    }
}
