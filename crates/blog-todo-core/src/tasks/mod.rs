//! Task Manager
//!
//! In-memory task list kept in sync with a `TaskRepository`.

mod id;
mod list;

pub use id::{ClockIdGenerator, IdGenerator, SequentialIdGenerator};
pub use list::TaskList;
