//! Browser Key-Value Store
//!
//! localStorage when the browser grants it, otherwise a session-only map.

use blog_todo_core::repository::{KeyValueStore, MemoryStore};
use blog_todo_core::StorageError;

pub enum BrowserStore {
    Local(web_sys::Storage),
    Memory(MemoryStore),
}

impl BrowserStore {
    /// Open `window.localStorage`, falling back to memory (private mode, sandboxed iframes)
    pub fn open() -> Self {
        let Some(window) = web_sys::window() else {
            log::warn!("No window; tasks will not survive a reload");
            return Self::Memory(MemoryStore::new());
        };

        match window.local_storage() {
            Ok(Some(storage)) => Self::Local(storage),
            Ok(None) => {
                log::warn!("localStorage unavailable; tasks will not survive a reload");
                Self::Memory(MemoryStore::new())
            }
            Err(e) => {
                log::warn!("localStorage access denied ({:?}); tasks will not survive a reload", e);
                Self::Memory(MemoryStore::new())
            }
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            BrowserStore::Local(storage) => storage.get_item(key).map_err(|e| StorageError::Read {
                key: key.to_string(),
                reason: format!("{:?}", e),
            }),
            BrowserStore::Memory(store) => store.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            BrowserStore::Local(storage) => storage.set_item(key, value).map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            }),
            BrowserStore::Memory(store) => store.set(key, value),
        }
    }
}
