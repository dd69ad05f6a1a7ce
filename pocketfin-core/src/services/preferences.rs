//! Preference service - cosmetic flags
//!
//! Only the dark-mode flag today, kept under the durable `pf_dark` key
//! as `"1"`/`"0"`.

use std::sync::Arc;

use crate::domain::result::Result;
use crate::ports::storage::{KeyValueStore, StoreScope, DARK_MODE_KEY};

pub struct PreferenceService {
    store: Arc<dyn KeyValueStore>,
}

impl PreferenceService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Whether dark mode is on; absent or malformed reads as off
    pub fn dark_mode(&self) -> Result<bool> {
        Ok(matches!(
            self.store.get(StoreScope::Durable, DARK_MODE_KEY)?.as_deref(),
            Some("1")
        ))
    }

    pub fn set_dark_mode(&self, on: bool) -> Result<()> {
        self.store
            .put(StoreScope::Durable, DARK_MODE_KEY, if on { "1" } else { "0" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryStore;

    #[test]
    fn test_dark_mode_round_trip() {
        let svc = PreferenceService::new(Arc::new(MemoryStore::new()));
        assert!(!svc.dark_mode().unwrap());

        svc.set_dark_mode(true).unwrap();
        assert!(svc.dark_mode().unwrap());

        svc.set_dark_mode(false).unwrap();
        assert!(!svc.dark_mode().unwrap());
    }

    #[test]
    fn test_garbage_flag_reads_as_off() {
        let store = Arc::new(MemoryStore::new());
        store.put(StoreScope::Durable, DARK_MODE_KEY, "yes").unwrap();
        let svc = PreferenceService::new(store);
        assert!(!svc.dark_mode().unwrap());
    }
}
