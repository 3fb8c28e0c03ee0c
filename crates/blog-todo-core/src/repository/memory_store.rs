//! In-Memory Key-Value Store
//!
//! Session-only storage. Used when the browser denies localStorage access,
//! and by tests, which can also force reads or writes to fail.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::traits::KeyValueStore;
use crate::error::StorageError;

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
}

/// Cloneable handle; clones share the same entries
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.inner.borrow_mut().entries.insert(key.to_string(), value.to_string());
        store
    }

    /// Raw value, bypassing failure injection
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.borrow().entries.get(key).cloned()
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.inner.borrow_mut().fail_reads = fail;
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.borrow_mut().fail_writes = fail;
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let inner = self.inner.borrow();
        if inner.fail_reads {
            return Err(StorageError::Read {
                key: key.to_string(),
                reason: "reads disabled".to_string(),
            });
        }
        Ok(inner.entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_writes {
            return Err(StorageError::Write {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            });
        }
        inner.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
