//! Task Repository Implementation
//!
//! Stores the whole task sequence as one JSON array under a single key.

use super::traits::{KeyValueStore, TaskRepository};
use crate::domain::Task;
use crate::error::StorageError;

pub struct JsonTaskRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> JsonTaskRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    /// Strict load; `load()` is the forgiving wrapper
    pub fn try_load(&self) -> Result<Vec<Task>, StorageError> {
        match self.store.get(&self.key)? {
            Some(raw) if !raw.trim().is_empty() => Ok(serde_json::from_str(&raw)?),
            _ => Ok(Vec::new()),
        }
    }
}

impl<S: KeyValueStore> TaskRepository for JsonTaskRepository<S> {
    fn load(&self) -> Vec<Task> {
        match self.try_load() {
            Ok(tasks) => tasks,
            Err(e) => {
                log::warn!("Failed to load tasks from '{}', starting empty: {}", self.key, e);
                Vec::new()
            }
        }
    }

    fn save(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(tasks)?;
        self.store.set(&self.key, &raw)
    }
}
