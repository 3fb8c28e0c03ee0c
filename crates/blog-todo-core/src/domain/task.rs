//! Task Entity
//!
//! A todo item with a completion flag, plus the read-side filter over tasks.

use serde::{Deserialize, Serialize};

pub type TaskId = String;

/// A todo item
///
/// `title` is fixed at creation; only `completed` changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
}

impl Task {
    /// Create a new pending task
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            completed: false,
        }
    }

    /// Flip between pending and completed
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Whether the task with `id` exists and is completed
pub fn is_completed(tasks: &[Task], id: &str) -> bool {
    tasks.iter().any(|task| task.id == id && task.completed)
}

/// Which tasks a view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl TaskFilter {
    /// Display order of the filter buttons
    pub const ALL: [TaskFilter; 3] = [TaskFilter::All, TaskFilter::Pending, TaskFilter::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            TaskFilter::All => "All",
            TaskFilter::Pending => "Pending",
            TaskFilter::Completed => "Completed",
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Pending => !task.completed,
            TaskFilter::Completed => task.completed,
        }
    }

    /// Tasks passing the filter, in their original order
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        tasks.iter().filter(|task| self.matches(task)).cloned().collect()
    }
}
