//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for persistence.
//! Implementations can use browser localStorage, in-memory maps, etc.

use crate::domain::Task;
use crate::error::StorageError;

/// String key-value storage (the shape of `window.localStorage`)
///
/// Calls are blocking and single-threaded, so `&self` is enough even for writes.
pub trait KeyValueStore {
    /// Read a value; `Ok(None)` when the key was never written
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite a value
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Whole-list persistence for tasks
pub trait TaskRepository {
    /// Read the persisted sequence. Missing or unreadable data yields an empty list.
    fn load(&self) -> Vec<Task>;

    /// Replace the persisted sequence with `tasks`
    fn save(&self, tasks: &[Task]) -> Result<(), StorageError>;
}
