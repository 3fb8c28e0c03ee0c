//! Repository Layer
//!
//! Storage abstractions and implementations.

mod memory_store;
mod task_repo;
mod traits;

#[cfg(test)]
mod tests;

pub use memory_store::MemoryStore;
pub use task_repo::JsonTaskRepository;
pub use traits::{KeyValueStore, TaskRepository};
