//! Blog & Todo Core
//!
//! Layered architecture:
//! - domain: posts, comments and tasks
//! - repository: key-value storage and task persistence
//! - tasks: the in-memory task list and id generation
//! - posts: feed paging and detail loading
//!
//! Nothing in here touches the browser, so everything runs under `cargo test`.

pub mod config;
pub mod domain;
pub mod error;
pub mod posts;
pub mod repository;
pub mod tasks;

pub use config::AppConfig;
pub use error::{ConfigError, DetailError, FetchError, StorageError};
