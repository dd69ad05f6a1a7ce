//! In-memory store adapter
//!
//! Backs both scopes with plain maps. `new_tab` mirrors how browser
//! storage behaves across tabs: durable entries are visible to the new
//! tab, session entries are not. Used by tests and as a throwaway
//! backend.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::result::{Error, Result};
use crate::ports::storage::{KeyValueStore, StoreScope};

/// Key-value store held entirely in memory
#[derive(Default)]
pub struct MemoryStore {
    durable: Mutex<HashMap<String, String>>,
    session: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate opening a new tab: durable entries carry over, session
    /// entries start empty
    pub fn new_tab(&self) -> Result<Self> {
        let durable = self.map(StoreScope::Durable)?.clone();
        Ok(Self {
            durable: Mutex::new(durable),
            session: Mutex::new(HashMap::new()),
        })
    }

    fn map(&self, scope: StoreScope) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        let mutex = match scope {
            StoreScope::Durable => &self.durable,
            StoreScope::Session => &self.session,
        };
        mutex
            .lock()
            .map_err(|e| Error::storage(format!("Lock poisoned: {}", e)))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, scope: StoreScope, key: &str) -> Result<Option<String>> {
        Ok(self.map(scope)?.get(key).cloned())
    }

    fn put(&self, scope: StoreScope, key: &str, value: &str) -> Result<()> {
        self.map(scope)?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, scope: StoreScope, key: &str) -> Result<()> {
        self.map(scope)?.remove(key);
        Ok(())
    }
}
