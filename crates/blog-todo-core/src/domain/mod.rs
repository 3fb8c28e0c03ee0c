//! Domain Layer
//!
//! Wire and storage models for both features.
//! This layer has NO external dependencies (except serde for serialization).

mod comment;
mod post;
mod task;

pub use comment::Comment;
pub use post::{Post, PostId};
pub use task::{is_completed, Task, TaskFilter, TaskId};
